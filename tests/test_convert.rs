//! Tests for dense <-> opaque conversion.

use opaque_bridge::{
    AutogradExcludeGuard, ConversionConfig, DeviceId, ForeignAccess, ForeignDataType, ForeignDesc,
    ForeignFormat, ForeignTensor, OpaqueError, ScalarType, Tensor, TensorDesc, TensorOptions,
    autograd_excluded, dense_to_opaque, foreign_from_opaque, new_with_foreign, opaque_to_dense,
};

fn dense_2x3() -> Tensor {
    Tensor::from_f32(vec![2, 3], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap()
}

/// Blocked conversion pads the foreign buffer but keeps the logical values.
#[test]
fn test_dense_to_opaque_blocked() {
    let t = dense_to_opaque(&dense_2x3(), &ConversionConfig::default().build()).unwrap();
    assert!(t.is_opaque());
    assert_eq!(t.sizes(), &[2, 3]);
    assert_eq!(t.dtype(), ScalarType::Float);
    assert!(!autograd_excluded());

    let _guard = AutogradExcludeGuard::new();
    let live = foreign_from_opaque(&t);
    assert_eq!(live.desc().format(), ForeignFormat::Blocked { block: 8 });
    assert_eq!(live.as_bytes().len(), 2 * 8 * 4);
    assert_eq!(live.to_f32_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

/// Round trip through the opaque representation preserves values.
#[test]
fn test_round_trip() {
    for config in [ConversionConfig::default(), ConversionConfig::plain()] {
        let dense = dense_2x3();
        let back = opaque_to_dense(&dense_to_opaque(&dense, &config).unwrap()).unwrap();
        assert!(!back.is_opaque());
        assert_eq!(back.sizes(), dense.sizes());
        assert_eq!(back.to_f32_vec().unwrap(), dense.to_f32_vec().unwrap());
    }
}

/// Strided inputs are made contiguous before conversion.
#[test]
fn test_dense_to_opaque_from_transposed() {
    let transposed = dense_2x3().transpose(0, 1).unwrap();
    let back = opaque_to_dense(&dense_to_opaque(&transposed, &ConversionConfig::plain()).unwrap())
        .unwrap();
    assert_eq!(back.sizes(), &[3, 2]);
    assert_eq!(back.to_f32_vec().unwrap(), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
}

#[test]
fn test_dense_to_opaque_rejects_non_float() {
    let t = Tensor::zeros(TensorDesc::new(vec![4], ScalarType::Double));
    let err = dense_to_opaque(&t, &ConversionConfig::default()).unwrap_err();
    assert_eq!(err, OpaqueError::NotFloat(ScalarType::Double));
}

#[test]
fn test_opaque_to_dense_rejects_dense() {
    assert_eq!(opaque_to_dense(&dense_2x3()).unwrap_err(), OpaqueError::NotOpaque);
}

/// Non-float opaque tensors keep their runtime dtype.
#[test]
fn test_opaque_to_dense_byte() {
    let foreign = ForeignTensor::from_plain_bytes(vec![2, 2], ForeignDataType::U8, &[1, 2, 3, 4]);
    let t = new_with_foreign(foreign, &TensorOptions::new().dtype(ScalarType::QUInt8));
    let dense = opaque_to_dense(&t).unwrap();
    assert_eq!(dense.dtype(), ScalarType::QUInt8);
    assert_eq!(dense.device(), DeviceId::CPU);
    assert_eq!(dense.read().unwrap(), vec![1, 2, 3, 4]);
}

/// A tensor whose live value was resized in place is refused.
#[test]
fn test_opaque_to_dense_refuses_diverged() {
    let t = dense_to_opaque(&dense_2x3(), &ConversionConfig::plain()).unwrap();
    {
        let _guard = AutogradExcludeGuard::new();
        foreign_from_opaque(&t).reinit(ForeignDesc::new(vec![6], ForeignDataType::F32));
    }
    assert!(matches!(
        opaque_to_dense(&t),
        Err(OpaqueError::ShapeDivergence { .. })
    ));
}

/// A runtime dtype that maps to a different foreign data type is refused
/// rather than reinterpreting the bytes.
#[test]
fn test_opaque_to_dense_rejects_dtype_mismatch() {
    let foreign = ForeignTensor::from_f32(vec![2], &[1.0, 2.0]);
    let t = new_with_foreign(foreign, &TensorOptions::new().dtype(ScalarType::Byte));
    assert_eq!(
        opaque_to_dense(&t).unwrap_err(),
        OpaqueError::DtypeMismatch {
            runtime: ScalarType::Byte,
            foreign: ForeignDataType::F32,
        }
    );
}

/// A runtime dtype with no foreign counterpart is reported as unsupported.
#[test]
fn test_opaque_to_dense_rejects_unmapped_dtype() {
    let foreign = ForeignTensor::from_f32(vec![2], &[1.0, 2.0]);
    let t = new_with_foreign(foreign, &TensorOptions::new().dtype(ScalarType::Int));
    assert_eq!(
        opaque_to_dense(&t).unwrap_err(),
        OpaqueError::UnsupportedDtype(ScalarType::Int)
    );
}

/// A [3, 1] column with size-1 stride quirks converts without a gather copy.
#[test]
fn test_dense_to_opaque_from_transposed_row() {
    let col = Tensor::from_f32(vec![1, 3], &[1.0, 2.0, 3.0])
        .unwrap()
        .transpose(0, 1)
        .unwrap();
    let back = opaque_to_dense(&dense_to_opaque(&col, &ConversionConfig::plain()).unwrap()).unwrap();
    assert_eq!(back.sizes(), &[3, 1]);
    assert_eq!(back.to_f32_vec().unwrap(), vec![1.0, 2.0, 3.0]);
}
