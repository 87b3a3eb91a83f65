use thiserror::Error;

use crate::foreign::ForeignDataType;
use crate::tensor::{DeviceId, Layout, ScalarType};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpaqueError {
    #[error("unsupported data type {0}")]
    UnsupportedDtype(ScalarType),

    #[error("expects opaque tensor input")]
    NotOpaque,

    #[error("expects CPU tensor input, got {0}")]
    NotCpu(DeviceId),

    #[error("expects dense tensor input, got {0:?} layout")]
    NotStrided(Layout),

    #[error("expects contiguous tensor input")]
    NotContiguous,

    #[error("expects float tensor input, got {0}")]
    NotFloat(ScalarType),

    #[error("expects allocated tensor input")]
    Unallocated,

    #[error("dimension {0} does not fit the foreign dimension type")]
    DimOverflow(i64),

    #[error("cached sizes {cached:?} diverged from live foreign dims {live:?}")]
    ShapeDivergence { cached: Vec<i64>, live: Vec<i64> },

    #[error("dtype {runtime} does not match foreign data type {foreign:?}")]
    DtypeMismatch {
        runtime: ScalarType,
        foreign: ForeignDataType,
    },

    #[error("foreign value already borrowed")]
    AlreadyBorrowed,

    #[error("foreign value lock poisoned")]
    Poisoned,

    #[error("data size mismatch: expected {expected} bytes, got {got}")]
    SizeMismatch { expected: usize, got: usize },

    #[error("cannot transpose dims {dim0} and {dim1} of a {ndim}-d tensor")]
    InvalidTranspose {
        dim0: usize,
        dim1: usize,
        ndim: usize,
    },
}
