use rand::Rng;

use super::{ForeignAccess, ForeignDataType, ForeignDesc};

/// A tensor owned by the foreign library: descriptor plus its own buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct ForeignTensor {
    desc: ForeignDesc,
    buffer: Vec<u8>,
}

impl ForeignTensor {
    /// Allocates a zero-filled buffer sized for `desc`, padding included.
    pub fn new(desc: ForeignDesc) -> Self {
        let buffer = vec![0; desc.size_in_bytes()];
        Self { desc, buffer }
    }

    /// Copies plain row-major bytes into a new plain tensor.
    pub fn from_plain_bytes(dims: Vec<i32>, data_type: ForeignDataType, bytes: &[u8]) -> Self {
        let desc = ForeignDesc::new(dims, data_type);
        assert_eq!(
            bytes.len(),
            desc.size_in_bytes(),
            "Input data size mismatch for foreign tensor"
        );
        Self {
            desc,
            buffer: bytes.to_vec(),
        }
    }

    pub fn from_f32(dims: Vec<i32>, data: &[f32]) -> Self {
        Self::from_plain_bytes(dims, ForeignDataType::F32, bytemuck::cast_slice(data))
    }

    /// Plain f32 tensor with elements drawn uniformly from `[low, high)`.
    pub fn uniform<R: Rng>(dims: Vec<i32>, low: f32, high: f32, rng: &mut R) -> Self {
        let desc = ForeignDesc::new(dims, ForeignDataType::F32);
        let data: Vec<f32> = (0..desc.nelems())
            .map(|_| rng.random_range(low..high))
            .collect();
        Self {
            desc,
            buffer: bytemuck::cast_slice(&data).to_vec(),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// Replaces the descriptor and re-allocates when the byte size changes.
    /// Contents are zeroed on re-allocation.
    ///
    /// This changes dims in place; an opaque runtime tensor wrapping this
    /// value keeps its cached sizes until they are re-synced.
    pub fn reinit(&mut self, desc: ForeignDesc) {
        if desc.size_in_bytes() != self.buffer.len() {
            self.buffer = vec![0; desc.size_in_bytes()];
        }
        self.desc = desc;
    }

    /// Writes `value` at logical position `idx` (row-major, padding skipped).
    pub fn set_f32(&mut self, idx: usize, value: f32) {
        assert_eq!(self.desc.data_type(), ForeignDataType::F32);
        let offset = self.physical_offset(idx) * 4;
        self.buffer[offset..offset + 4].copy_from_slice(&value.to_ne_bytes());
    }

    pub fn get_f32(&self, idx: usize) -> f32 {
        assert_eq!(self.desc.data_type(), ForeignDataType::F32);
        let offset = self.physical_offset(idx) * 4;
        bytemuck::pod_read_unaligned(&self.buffer[offset..offset + 4])
    }

    fn physical_offset(&self, idx: usize) -> usize {
        assert!(idx < self.desc.nelems(), "Index {} out of bounds", idx);
        let inner = self.desc.inner_dim();
        (idx / inner) * self.desc.inner_stride() + idx % inner
    }
}

impl ForeignAccess for ForeignTensor {
    fn desc(&self) -> &ForeignDesc {
        &self.desc
    }

    fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}
