//! Host-memory surface of the foreign compute library.
//!
//! The bridge only touches dims, the data-type tag, the format descriptor and
//! the raw bytes. Padding of blocked layouts is handled by `reorder` and the
//! element accessors.

mod data_type;
mod desc;
mod reorder;
mod tensor;
mod view;

pub use data_type::ForeignDataType;
pub use desc::{ForeignDesc, ForeignFormat};
pub use reorder::reorder;
pub use tensor::ForeignTensor;
pub use view::ForeignView;

/// Read access shared by owning foreign tensors and borrowed views, so foreign
/// operators can take either.
pub trait ForeignAccess {
    fn desc(&self) -> &ForeignDesc;

    fn as_bytes(&self) -> &[u8];

    fn get_dims(&self) -> Vec<i32> {
        self.desc().get_dims().to_vec()
    }

    fn get_data_type(&self) -> ForeignDataType {
        self.desc().data_type()
    }

    fn data_ptr(&self) -> *const u8 {
        self.as_bytes().as_ptr()
    }

    /// Logical elements in row-major order with padding stripped.
    /// Only valid for `F32` data.
    fn to_f32_vec(&self) -> Vec<f32> {
        assert_eq!(
            self.get_data_type(),
            ForeignDataType::F32,
            "to_f32_vec expects f32 data"
        );
        let plain;
        let bytes = if self.desc().is_plain() {
            self.as_bytes()
        } else {
            plain = reorder(self, ForeignFormat::Plain);
            plain.as_bytes()
        };
        bytes
            .chunks_exact(4)
            .map(bytemuck::pod_read_unaligned::<f32>)
            .collect()
    }
}
