use crate::dispatch::DispatchKey;
use crate::foreign::ForeignAccess;
use crate::tensor::{DeviceId, ScalarType};
use crate::utils::error::OpaqueError;

use super::ForeignHandlePtr;

/// Runtime tensor implementation whose storage is an opaque handle `H`.
///
/// Sizes are cached at construction; all data access goes through the handle.
/// Cloning shares the handle.
#[derive(Clone, Debug)]
pub struct OpaqueTensorImpl<H: Clone> {
    key: DispatchKey,
    dtype: ScalarType,
    device: DeviceId,
    handle: H,
    sizes: Vec<i64>,
}

impl<H: Clone> OpaqueTensorImpl<H> {
    pub fn new(
        key: DispatchKey,
        dtype: ScalarType,
        device: DeviceId,
        handle: H,
        sizes: Vec<i64>,
    ) -> Self {
        Self {
            key,
            dtype,
            device,
            handle,
            sizes,
        }
    }

    pub fn dispatch_key(&self) -> DispatchKey {
        self.key
    }

    pub fn dtype(&self) -> ScalarType {
        self.dtype
    }

    pub fn device(&self) -> DeviceId {
        self.device
    }

    pub fn sizes(&self) -> &[i64] {
        &self.sizes
    }

    pub fn opaque_handle(&self) -> &H {
        &self.handle
    }
}

impl OpaqueTensorImpl<ForeignHandlePtr> {
    /// Current dims of the held foreign value, widened to `i64`.
    pub fn live_sizes(&self) -> Vec<i64> {
        self.handle
            .read_target()
            .get_dims()
            .into_iter()
            .map(i64::from)
            .collect()
    }

    pub fn check_sizes(&self) -> Result<(), OpaqueError> {
        let live = self.live_sizes();
        if live != self.sizes {
            return Err(OpaqueError::ShapeDivergence {
                cached: self.sizes.clone(),
                live,
            });
        }
        Ok(())
    }

    /// Re-reads the live dims into the cached sizes.
    pub fn sync_sizes(&mut self) {
        self.sizes = self.live_sizes();
    }
}
