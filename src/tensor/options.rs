use super::{DeviceId, ScalarType};

/// Per-construction metadata handed to tensor factories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TensorOptions {
    dtype: ScalarType,
    device: DeviceId,
}

impl TensorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dtype(mut self, dtype: ScalarType) -> Self {
        self.dtype = dtype;
        self
    }

    pub fn device(mut self, device: DeviceId) -> Self {
        self.device = device;
        self
    }

    pub fn get_dtype(&self) -> ScalarType {
        self.dtype
    }

    pub fn get_device(&self) -> DeviceId {
        self.device
    }
}

impl Default for TensorOptions {
    fn default() -> Self {
        Self {
            dtype: ScalarType::Float,
            device: DeviceId::CPU,
        }
    }
}
