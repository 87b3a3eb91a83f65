mod desc;
mod device;
mod options;
mod scalar_type;
pub mod storage;
mod tensor;

pub use desc::TensorDesc;
pub use device::{DeviceId, Layout};
pub use options::TensorOptions;
pub use scalar_type::ScalarType;
pub use tensor::Tensor;
