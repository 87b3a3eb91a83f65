use log::debug;

use crate::dispatch::AutogradExcludeGuard;
use crate::foreign::{ForeignAccess, ForeignFormat, reorder};
use crate::tensor::{DeviceId, ScalarType, Tensor, TensorDesc, TensorOptions};
use crate::utils::error::OpaqueError;

use super::{
    ConversionConfig, foreign_read_from_opaque, foreign_view_from_dense, new_with_foreign,
    try_foreign_dtype, validate_dense_view,
};

/// Copies a float CPU dense tensor into a new opaque tensor laid out in the
/// configured foreign format. Strided inputs are made contiguous first.
pub fn dense_to_opaque(tensor: &Tensor, config: &ConversionConfig) -> Result<Tensor, OpaqueError> {
    let dense = tensor.contiguous();
    validate_dense_view(&dense)?;

    let _below_autograd = AutogradExcludeGuard::new();
    let view = foreign_view_from_dense(&dense);
    let foreign = reorder(&view, config.target_format());

    debug!(
        "dense_to_opaque: sizes={:?} format={:?}",
        dense.sizes(),
        config.target_format()
    );

    let options = TensorOptions::new()
        .dtype(ScalarType::Float)
        .device(DeviceId::CPU);
    Ok(new_with_foreign(foreign, &options))
}

/// Copies the live foreign value of an opaque tensor into a new dense CPU
/// tensor with the opaque tensor's dtype. The dtype must map to the live
/// value's foreign data type.
pub fn opaque_to_dense(tensor: &Tensor) -> Result<Tensor, OpaqueError> {
    let opaque = tensor.opaque_impl().ok_or(OpaqueError::NotOpaque)?;
    opaque.check_sizes()?;

    let _below_autograd = AutogradExcludeGuard::new();
    let plain = {
        let live = foreign_read_from_opaque(tensor);
        if try_foreign_dtype(tensor.dtype())? != live.get_data_type() {
            return Err(OpaqueError::DtypeMismatch {
                runtime: tensor.dtype(),
                foreign: live.get_data_type(),
            });
        }
        reorder(&*live, ForeignFormat::Plain)
    };

    debug!(
        "opaque_to_dense: sizes={:?} dtype={}",
        tensor.sizes(),
        tensor.dtype()
    );

    let desc = TensorDesc::new(tensor.sizes().to_vec(), tensor.dtype());
    Tensor::new_cpu(desc, plain.into_bytes())
}
