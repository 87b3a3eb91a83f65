use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceId {
    CPU,
    GPU(usize),
}

impl DeviceId {
    pub fn is_cpu(&self) -> bool {
        matches!(self, DeviceId::CPU)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceId::CPU => write!(f, "cpu"),
            DeviceId::GPU(idx) => write!(f, "gpu:{}", idx),
        }
    }
}

/// Memory layout as seen by the runtime. Opaque tensors expose sizes but no
/// strides; their bytes are only meaningful to the foreign library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    Strided,
    Opaque,
}
