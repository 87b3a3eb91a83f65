//! opaque_bridge - bridging between runtime dense tensors and tensors owned by
//! a foreign compute library.
//!
//! Opaque tensors keep their data inside the foreign library and only expose
//! sizes, dtype and device to the runtime. The `bridge` module converts in
//! both directions without copying: foreign-backed tensors hand out their
//! shared live value, dense tensors hand out a borrowed view.

pub mod bridge;
pub mod dispatch;
pub mod foreign;
pub mod opaque;
pub mod tensor;
mod utils;

pub use bridge::{
    ConversionConfig, ForeignRef, dense_to_opaque, foreign_dtype, foreign_from_opaque,
    foreign_from_tensor, foreign_read_from_opaque, foreign_view_from_dense, new_with_foreign,
    opaque_handle, opaque_to_dense, try_foreign_dtype, validate_dense_view,
};
pub use dispatch::{AutogradExcludeGuard, DispatchKey, autograd_excluded};
pub use foreign::{ForeignAccess, ForeignDataType, ForeignDesc, ForeignFormat, ForeignTensor, ForeignView};
pub use opaque::{ForeignHandleGuard, ForeignHandlePtr, ForeignReadGuard, ForeignTensorImpl, OpaqueHandle, OpaqueTensorImpl};
pub use tensor::{DeviceId, Layout, ScalarType, Tensor, TensorDesc, TensorOptions};
pub use utils::error::OpaqueError;
