use crate::tensor::Layout;

/// Provenance tag set at construction. Foreign-aware operators branch on it
/// instead of inspecting storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DispatchKey {
    /// Plain strided host memory owned by the runtime.
    CPU,
    /// Storage is a value owned by the foreign library.
    OpaqueCpu,
}

impl DispatchKey {
    pub fn is_opaque(self) -> bool {
        matches!(self, DispatchKey::OpaqueCpu)
    }

    pub fn layout(self) -> Layout {
        match self {
            DispatchKey::CPU => Layout::Strided,
            DispatchKey::OpaqueCpu => Layout::Opaque,
        }
    }
}
