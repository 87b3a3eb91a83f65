use log::debug;

use crate::dispatch::DispatchKey;
use crate::foreign::{ForeignAccess, ForeignTensor};
use crate::opaque::{OpaqueHandle, OpaqueTensorImpl};
use crate::tensor::{Tensor, TensorOptions};

/// Takes ownership of a foreign tensor and returns it as an opaque runtime
/// tensor with the dtype and device from `options`.
pub fn new_with_foreign(foreign: ForeignTensor, options: &TensorOptions) -> Tensor {
    // foreign dims are i32, runtime sizes are i64
    let sizes: Vec<i64> = foreign.get_dims().into_iter().map(i64::from).collect();
    let handle = OpaqueHandle::into_shared(foreign);

    debug!(
        "wrapping foreign tensor: sizes={:?} dtype={} device={}",
        sizes,
        options.get_dtype(),
        options.get_device()
    );

    Tensor::from_opaque(OpaqueTensorImpl::new(
        DispatchKey::OpaqueCpu,
        options.get_dtype(),
        options.get_device(),
        handle,
        sizes,
    ))
}
