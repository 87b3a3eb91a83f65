mod handle;
mod opaque_impl;

use std::sync::{Arc, RwLockReadGuard, RwLockWriteGuard};

use crate::foreign::ForeignTensor;

pub use handle::OpaqueHandle;
pub use opaque_impl::OpaqueTensorImpl;

/// Shared owning pointer to a foreign tensor. Valid as long as any holder is.
pub type ForeignHandlePtr = Arc<OpaqueHandle<ForeignTensor>>;

/// Opaque tensor object carrying a foreign tensor.
pub type ForeignTensorImpl = OpaqueTensorImpl<ForeignHandlePtr>;

/// Exclusive access to the live foreign value behind a shared handle.
pub type ForeignHandleGuard<'a> = RwLockWriteGuard<'a, ForeignTensor>;

/// Shared read access to the live foreign value; several may coexist.
pub type ForeignReadGuard<'a> = RwLockReadGuard<'a, ForeignTensor>;
