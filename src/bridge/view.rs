use crate::dispatch::autograd_excluded;
use crate::foreign::{ForeignDataType, ForeignDesc, ForeignView};
use crate::tensor::{Layout, ScalarType, Tensor};
use crate::utils::{error::OpaqueError, expect_msg::ExpectMsg, macros::internal_assert};

/// Checks every precondition of [`foreign_view_from_dense`], reporting the
/// first one that fails.
pub fn validate_dense_view(tensor: &Tensor) -> Result<(), OpaqueError> {
    if !tensor.is_cpu() {
        return Err(OpaqueError::NotCpu(tensor.device()));
    }
    if tensor.layout() != Layout::Strided {
        return Err(OpaqueError::NotStrided(tensor.layout()));
    }
    if !tensor.is_contiguous() {
        return Err(OpaqueError::NotContiguous);
    }
    if tensor.dtype() != ScalarType::Float {
        return Err(OpaqueError::NotFloat(tensor.dtype()));
    }
    if !tensor.is_allocated() {
        return Err(OpaqueError::Unallocated);
    }
    foreign_dims(tensor.sizes()).map(|_| ())
}

fn foreign_dims(sizes: &[i64]) -> Result<Vec<i32>, OpaqueError> {
    sizes
        .iter()
        .map(|&d| i32::try_from(d).map_err(|_| OpaqueError::DimOverflow(d)))
        .collect()
}

/// Plain f32 foreign view aliasing the dense tensor's bytes. No allocation of
/// data and no copy; the view borrows `tensor`.
///
/// Panics with the specific failed precondition: CPU device, strided layout,
/// contiguous strides, float dtype, allocated storage.
pub fn foreign_view_from_dense(tensor: &Tensor) -> ForeignView<'_> {
    validate_dense_view(tensor).expect_msg("foreign_view_from_dense");
    internal_assert!(
        autograd_excluded(),
        "foreign_view_from_dense called with autograd dispatch still active"
    );

    let dims = foreign_dims(tensor.sizes()).expect_msg("foreign_view_from_dense");
    let bytes = tensor
        .cpu_bytes()
        .ok_or(OpaqueError::Unallocated)
        .expect_msg("foreign_view_from_dense");
    ForeignView::new(ForeignDesc::new(dims, ForeignDataType::F32), bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrows_dims_in_range() {
        assert_eq!(foreign_dims(&[2, 3, 0]), Ok(vec![2, 3, 0]));
    }

    #[test]
    fn rejects_dims_past_i32() {
        let too_big = i64::from(i32::MAX) + 1;
        assert_eq!(foreign_dims(&[4, too_big]), Err(OpaqueError::DimOverflow(too_big)));
    }
}
