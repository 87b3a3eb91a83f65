use std::sync::Arc;

/// Host bytes of a dense tensor. Shallow tensor copies and strided views
/// share one allocation.
#[derive(Clone)]
pub struct CpuTensorStorage {
    data: Arc<[u8]>,
}

impl CpuTensorStorage {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data: data.into() }
    }

    pub fn with_zeros(size_in_bytes: usize) -> Self {
        Self::new(vec![0; size_in_bytes])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn data_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    pub fn len_bytes(&self) -> usize {
        self.data.len()
    }

    /// Overwrites the bytes in place when this is the only owner; otherwise
    /// detaches into a fresh allocation so other holders keep their contents.
    pub fn write(&mut self, data: &[u8]) {
        assert_eq!(data.len(), self.data.len(), "Input data size mismatch");
        match Arc::get_mut(&mut self.data) {
            Some(bytes) => bytes.copy_from_slice(data),
            None => self.data = Arc::from(data),
        }
    }
}
