mod cpu;

pub use cpu::CpuTensorStorage;

/// Backing of a dense tensor.
#[derive(Clone)]
pub enum TensorStorage {
    CPU(CpuTensorStorage),
    /// Planning placeholder with no bytes yet; size comes from the desc.
    Unallocated,
}

impl TensorStorage {
    pub fn new_cpu(data: Vec<u8>) -> Self {
        TensorStorage::CPU(CpuTensorStorage::new(data))
    }

    pub fn new_cpu_zeros(size_in_bytes: usize) -> Self {
        TensorStorage::CPU(CpuTensorStorage::with_zeros(size_in_bytes))
    }

    pub fn is_allocated(&self) -> bool {
        !matches!(self, TensorStorage::Unallocated)
    }

    pub fn cpu(&self) -> Option<&CpuTensorStorage> {
        match self {
            TensorStorage::CPU(storage) => Some(storage),
            TensorStorage::Unallocated => None,
        }
    }

    pub fn cpu_mut(&mut self) -> Option<&mut CpuTensorStorage> {
        match self {
            TensorStorage::CPU(storage) => Some(storage),
            TensorStorage::Unallocated => None,
        }
    }

    pub fn location_string(&self) -> String {
        match self {
            TensorStorage::CPU(_) => "CPU Tensor".to_string(),
            TensorStorage::Unallocated => "Unallocated Tensor".to_string(),
        }
    }
}
