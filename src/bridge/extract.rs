use std::sync::Arc;

use crate::dispatch::autograd_excluded;
use crate::opaque::{ForeignHandleGuard, ForeignHandlePtr, ForeignReadGuard, ForeignTensorImpl};
use crate::tensor::Tensor;
use crate::utils::{error::OpaqueError, expect_msg::ExpectMsg, macros::internal_assert};

/// Live foreign value inside an opaque tensor. No copy: writes through the
/// guard are seen by every tensor sharing the handle.
///
/// Panics if `tensor` is not foreign-backed, if autograd has not been
/// excluded on this thread, or if another guard on the same foreign value
/// (from this tensor or any copy) is still alive.
pub fn foreign_from_opaque(tensor: &Tensor) -> ForeignHandleGuard<'_> {
    checked_opaque(tensor, "foreign_from_opaque")
        .opaque_handle()
        .try_get_target()
        .expect_msg("foreign_from_opaque")
}

/// Read-only counterpart of [`foreign_from_opaque`]. Any number of these may
/// be held on one foreign value at once, e.g. when an operator receives the
/// same tensor as two arguments.
pub fn foreign_read_from_opaque(tensor: &Tensor) -> ForeignReadGuard<'_> {
    checked_opaque(tensor, "foreign_read_from_opaque")
        .opaque_handle()
        .try_read_target()
        .expect_msg("foreign_read_from_opaque")
}

fn checked_opaque<'a>(tensor: &'a Tensor, op: &str) -> &'a ForeignTensorImpl {
    let opaque = tensor
        .opaque_impl()
        .ok_or(OpaqueError::NotOpaque)
        .expect_msg(op);
    internal_assert!(
        autograd_excluded(),
        "{} called with autograd dispatch still active",
        op
    );
    opaque
}

/// Shared owning handle to the foreign value; may outlive `tensor`.
pub fn opaque_handle(tensor: &Tensor) -> ForeignHandlePtr {
    let opaque = tensor
        .opaque_impl()
        .ok_or(OpaqueError::NotOpaque)
        .expect_msg("opaque_handle");
    Arc::clone(opaque.opaque_handle())
}
