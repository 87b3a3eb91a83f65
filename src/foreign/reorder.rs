use super::{ForeignAccess, ForeignDesc, ForeignFormat, ForeignTensor};

/// Copies `src` into a new tensor with the same dims and data type laid out
/// in `format`. Padding in the destination is zero.
pub fn reorder<S: ForeignAccess + ?Sized>(src: &S, format: ForeignFormat) -> ForeignTensor {
    let src_desc = src.desc();
    let dst_desc = ForeignDesc::with_format(
        src_desc.get_dims().to_vec(),
        src_desc.data_type(),
        format,
    );
    let mut dst = ForeignTensor::new(dst_desc);

    let elem = src_desc.data_type().size_in_bytes();
    let row_bytes = src_desc.inner_dim() * elem;
    let src_stride = src_desc.inner_stride() * elem;
    let dst_stride = dst.desc().inner_stride() * elem;

    let src_bytes = src.as_bytes();
    let dst_bytes = dst.as_bytes_mut();
    for row in 0..src_desc.outer_dim() {
        let s = row * src_stride;
        let d = row * dst_stride;
        dst_bytes[d..d + row_bytes].copy_from_slice(&src_bytes[s..s + row_bytes]);
    }

    dst
}
