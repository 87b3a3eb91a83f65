use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, TryLockError};

use crate::utils::{error::OpaqueError, expect_msg::ExpectMsg};

/// Adapts an arbitrary foreign value to shared, reference-counted ownership
/// without touching the foreign type.
///
/// There is no empty state and no way to take the value back out: it is
/// dropped when the last `Arc` owning this box goes away.
pub struct OpaqueHandle<T> {
    target: RwLock<T>,
}

impl<T> OpaqueHandle<T> {
    pub fn new(target: T) -> Self {
        Self {
            target: RwLock::new(target),
        }
    }

    /// Boxes `target` behind a fresh `Arc` with a strong count of one.
    pub fn into_shared(target: T) -> Arc<Self> {
        Arc::new(Self::new(target))
    }

    /// The one mutable accessor. Every owner sees writes made through it.
    ///
    /// Never blocks: panics if any other guard on this value is alive.
    pub fn get_target(&self) -> RwLockWriteGuard<'_, T> {
        self.try_get_target().expect_msg("OpaqueHandle::get_target")
    }

    /// Shared read access; any number may be held at once, but not while a
    /// `get_target` guard is alive.
    pub fn read_target(&self) -> RwLockReadGuard<'_, T> {
        self.try_read_target().expect_msg("OpaqueHandle::read_target")
    }

    pub fn try_get_target(&self) -> Result<RwLockWriteGuard<'_, T>, OpaqueError> {
        self.target.try_write().map_err(lock_error)
    }

    pub fn try_read_target(&self) -> Result<RwLockReadGuard<'_, T>, OpaqueError> {
        self.target.try_read().map_err(lock_error)
    }
}

fn lock_error<G>(err: TryLockError<G>) -> OpaqueError {
    match err {
        TryLockError::WouldBlock => OpaqueError::AlreadyBorrowed,
        TryLockError::Poisoned(_) => OpaqueError::Poisoned,
    }
}

impl<T> fmt::Debug for OpaqueHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueHandle").finish_non_exhaustive()
    }
}

impl<T: Clone> From<&T> for OpaqueHandle<T> {
    fn from(target: &T) -> Self {
        Self::new(target.clone())
    }
}
