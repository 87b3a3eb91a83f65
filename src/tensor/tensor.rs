use std::fmt;

use crate::{
    dispatch::DispatchKey,
    opaque::ForeignTensorImpl,
    tensor::{DeviceId, Layout, ScalarType, TensorDesc, storage::TensorStorage},
    utils::error::OpaqueError,
};

#[derive(Clone)]
struct DenseTensor {
    desc: TensorDesc,
    device: DeviceId,
    strides: Vec<i64>,
    storage: TensorStorage,
}

#[derive(Clone)]
enum TensorImpl {
    Dense(DenseTensor),
    Opaque(ForeignTensorImpl),
}

/// Runtime tensor handle. Backed either by strided dense storage or by an
/// opaque foreign value; metadata queries behave the same for both.
///
/// `clone` is shallow: dense copies share storage, opaque copies share the
/// foreign handle.
#[derive(Clone)]
pub struct Tensor {
    inner: TensorImpl,
}

impl Tensor {
    /// Create a CPU-backed tensor from host bytes laid out row-major.
    pub fn new_cpu(desc: TensorDesc, host_data: Vec<u8>) -> Result<Self, OpaqueError> {
        if host_data.len() != desc.size_in_bytes() {
            return Err(OpaqueError::SizeMismatch {
                expected: desc.size_in_bytes(),
                got: host_data.len(),
            });
        }
        Ok(Self::dense(desc, DeviceId::CPU, TensorStorage::new_cpu(host_data)))
    }

    pub fn from_f32(dims: Vec<i64>, data: &[f32]) -> Result<Self, OpaqueError> {
        let desc = TensorDesc::new(dims, ScalarType::Float);
        Self::new_cpu(desc, bytemuck::cast_slice(data).to_vec())
    }

    pub fn zeros(desc: TensorDesc) -> Self {
        let storage = TensorStorage::new_cpu_zeros(desc.size_in_bytes());
        Self::dense(desc, DeviceId::CPU, storage)
    }

    /// Create an unallocated tensor (placeholder) with no backing storage.
    /// Mostly used for planning, including tensors destined for a GPU.
    pub fn new_unallocated(desc: TensorDesc, device: DeviceId) -> Self {
        Self::dense(desc, device, TensorStorage::Unallocated)
    }

    pub fn from_opaque(opaque: ForeignTensorImpl) -> Self {
        Self {
            inner: TensorImpl::Opaque(opaque),
        }
    }

    fn dense(desc: TensorDesc, device: DeviceId, storage: TensorStorage) -> Self {
        let strides = desc.strides();
        Self {
            inner: TensorImpl::Dense(DenseTensor {
                desc,
                device,
                strides,
                storage,
            }),
        }
    }

    pub fn sizes(&self) -> &[i64] {
        match &self.inner {
            TensorImpl::Dense(t) => t.desc.dims(),
            TensorImpl::Opaque(t) => t.sizes(),
        }
    }

    pub fn dtype(&self) -> ScalarType {
        match &self.inner {
            TensorImpl::Dense(t) => t.desc.data_type(),
            TensorImpl::Opaque(t) => t.dtype(),
        }
    }

    pub fn device(&self) -> DeviceId {
        match &self.inner {
            TensorImpl::Dense(t) => t.device,
            TensorImpl::Opaque(t) => t.device(),
        }
    }

    pub fn dispatch_key(&self) -> DispatchKey {
        match &self.inner {
            TensorImpl::Dense(_) => DispatchKey::CPU,
            TensorImpl::Opaque(t) => t.dispatch_key(),
        }
    }

    pub fn layout(&self) -> Layout {
        self.dispatch_key().layout()
    }

    pub fn is_opaque(&self) -> bool {
        self.dispatch_key().is_opaque()
    }

    pub fn is_cpu(&self) -> bool {
        self.device().is_cpu()
    }

    pub fn ndim(&self) -> usize {
        self.sizes().len()
    }

    pub fn numel(&self) -> usize {
        self.sizes().iter().map(|d| *d as usize).product()
    }

    /// Element strides; opaque tensors have none.
    pub fn strides(&self) -> Option<&[i64]> {
        match &self.inner {
            TensorImpl::Dense(t) => Some(&t.strides),
            TensorImpl::Opaque(_) => None,
        }
    }

    pub fn is_contiguous(&self) -> bool {
        match &self.inner {
            TensorImpl::Dense(t) => {
                TensorDesc::is_contiguous_strides(t.desc.dims(), &t.strides)
            }
            TensorImpl::Opaque(_) => false,
        }
    }

    pub fn is_allocated(&self) -> bool {
        match &self.inner {
            TensorImpl::Dense(t) => t.storage.is_allocated(),
            TensorImpl::Opaque(_) => true,
        }
    }

    /// Raw host bytes of a dense allocated tensor, in storage order.
    pub fn cpu_bytes(&self) -> Option<&[u8]> {
        match &self.inner {
            TensorImpl::Dense(t) => t.storage.cpu().map(|s| s.as_bytes()),
            TensorImpl::Opaque(_) => None,
        }
    }

    pub fn data_ptr(&self) -> Option<*const u8> {
        match &self.inner {
            TensorImpl::Dense(t) => t.storage.cpu().map(|s| s.data_ptr()),
            TensorImpl::Opaque(_) => None,
        }
    }

    pub fn opaque_impl(&self) -> Option<&ForeignTensorImpl> {
        match &self.inner {
            TensorImpl::Dense(_) => None,
            TensorImpl::Opaque(t) => Some(t),
        }
    }

    /// Refreshes the cached sizes of an opaque tensor from its live foreign
    /// value. Returns whether anything changed.
    pub fn sync_opaque_sizes(&mut self) -> Result<bool, OpaqueError> {
        match &mut self.inner {
            TensorImpl::Dense(_) => Err(OpaqueError::NotOpaque),
            TensorImpl::Opaque(t) => {
                let changed = t.check_sizes().is_err();
                t.sync_sizes();
                Ok(changed)
            }
        }
    }

    /// Swaps two dimensions, sharing storage with `self`.
    pub fn transpose(&self, dim0: usize, dim1: usize) -> Result<Self, OpaqueError> {
        let TensorImpl::Dense(t) = &self.inner else {
            return Err(OpaqueError::NotStrided(Layout::Opaque));
        };
        let ndim = t.desc.ndim();
        if dim0 >= ndim || dim1 >= ndim {
            return Err(OpaqueError::InvalidTranspose { dim0, dim1, ndim });
        }

        let mut dims = t.desc.dims().to_vec();
        let mut strides = t.strides.clone();
        dims.swap(dim0, dim1);
        strides.swap(dim0, dim1);

        Ok(Self {
            inner: TensorImpl::Dense(DenseTensor {
                desc: TensorDesc::new(dims, t.desc.data_type()),
                device: t.device,
                strides,
                storage: t.storage.clone(),
            }),
        })
    }

    /// Row-major copy of a strided tensor; shallow clone when already
    /// contiguous or opaque.
    pub fn contiguous(&self) -> Self {
        let TensorImpl::Dense(t) = &self.inner else {
            return self.clone();
        };
        if self.is_contiguous() {
            return self.clone();
        }
        let Some(src) = t.storage.cpu() else {
            return Self::new_unallocated(t.desc.clone(), t.device);
        };

        let elem = t.desc.data_type().size_in_bytes();
        let src_bytes = src.as_bytes();
        let mut out = Vec::with_capacity(t.desc.size_in_bytes());
        for idx in 0..t.desc.num_elements() {
            let coords = TensorDesc::unravel(idx, t.desc.dims());
            let offset = TensorDesc::offset(&coords, &t.strides) * elem;
            out.extend_from_slice(&src_bytes[offset..offset + elem]);
        }

        Self::dense(t.desc.clone(), t.device, TensorStorage::new_cpu(out))
    }

    /// Logical bytes in row-major order.
    pub fn read(&self) -> Result<Vec<u8>, OpaqueError> {
        if self.is_opaque() {
            return Err(OpaqueError::NotStrided(Layout::Opaque));
        }
        self.contiguous()
            .cpu_bytes()
            .map(<[u8]>::to_vec)
            .ok_or(OpaqueError::Unallocated)
    }

    pub fn write(&mut self, data: &[u8]) -> Result<(), OpaqueError> {
        let contiguous = self.is_contiguous();
        let TensorImpl::Dense(t) = &mut self.inner else {
            return Err(OpaqueError::NotStrided(Layout::Opaque));
        };
        if !contiguous {
            return Err(OpaqueError::NotContiguous);
        }
        let storage = t.storage.cpu_mut().ok_or(OpaqueError::Unallocated)?;
        if data.len() != storage.len_bytes() {
            return Err(OpaqueError::SizeMismatch {
                expected: storage.len_bytes(),
                got: data.len(),
            });
        }
        storage.write(data);
        Ok(())
    }

    pub fn to_f32_vec(&self) -> Result<Vec<f32>, OpaqueError> {
        if self.dtype() != ScalarType::Float {
            return Err(OpaqueError::NotFloat(self.dtype()));
        }
        Ok(self
            .read()?
            .chunks_exact(4)
            .map(bytemuck::pod_read_unaligned::<f32>)
            .collect())
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = match &self.inner {
            TensorImpl::Dense(t) => t.storage.location_string(),
            TensorImpl::Opaque(_) => "Opaque Tensor".to_string(),
        };
        f.debug_struct("Tensor")
            .field("sizes", &self.sizes())
            .field("dtype", &self.dtype())
            .field("device", &self.device())
            .field("location", &location)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tensor {
        Tensor::from_f32(vec![2, 3], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap()
    }

    #[test]
    fn dense_metadata() {
        let t = sample();
        assert_eq!(t.sizes(), &[2, 3]);
        assert_eq!(t.dtype(), ScalarType::Float);
        assert_eq!(t.device(), DeviceId::CPU);
        assert_eq!(t.layout(), Layout::Strided);
        assert_eq!(t.dispatch_key(), DispatchKey::CPU);
        assert_eq!(t.strides(), Some(&[3i64, 1][..]));
        assert!(t.is_contiguous());
        assert_eq!(t.numel(), 6);
    }

    #[test]
    fn new_cpu_rejects_wrong_length() {
        let desc = TensorDesc::new(vec![2, 2], ScalarType::Float);
        let err = Tensor::new_cpu(desc, vec![0; 3]).unwrap_err();
        assert_eq!(err, OpaqueError::SizeMismatch { expected: 16, got: 3 });
    }

    #[test]
    fn transpose_shares_storage_and_breaks_contiguity() {
        let t = sample();
        let tt = t.transpose(0, 1).unwrap();
        assert_eq!(tt.sizes(), &[3, 2]);
        assert_eq!(tt.strides(), Some(&[1i64, 3][..]));
        assert!(!tt.is_contiguous());
        assert_eq!(tt.data_ptr(), t.data_ptr());
    }

    #[test]
    fn transposing_a_size_one_dim_stays_contiguous() {
        let row = Tensor::from_f32(vec![1, 3], &[1.0, 2.0, 3.0]).unwrap();
        let col = row.transpose(0, 1).unwrap();
        assert_eq!(col.sizes(), &[3, 1]);
        assert_eq!(col.strides(), Some(&[1i64, 3][..]));
        assert!(col.is_contiguous());
        assert_eq!(col.contiguous().data_ptr(), row.data_ptr());
        assert_eq!(col.to_f32_vec().unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn contiguous_gathers_in_logical_order() {
        let tt = sample().transpose(0, 1).unwrap();
        let c = tt.contiguous();
        assert!(c.is_contiguous());
        assert_ne!(c.data_ptr(), tt.data_ptr());
        assert_eq!(c.to_f32_vec().unwrap(), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn transpose_out_of_range() {
        let err = sample().transpose(0, 2).unwrap_err();
        assert_eq!(
            err,
            OpaqueError::InvalidTranspose {
                dim0: 0,
                dim1: 2,
                ndim: 2
            }
        );
    }

    #[test]
    fn write_detaches_shared_storage() {
        let original = sample();
        let mut copy = original.clone();
        let ones: Vec<f32> = vec![1.0; 6];
        copy.write(bytemuck::cast_slice(&ones)).unwrap();

        assert_eq!(copy.to_f32_vec().unwrap(), ones);
        assert_eq!(
            original.to_f32_vec().unwrap(),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
    }

    #[test]
    fn unallocated_has_no_bytes() {
        let desc = TensorDesc::new(vec![4], ScalarType::Float);
        let t = Tensor::new_unallocated(desc, DeviceId::GPU(1));
        assert!(!t.is_allocated());
        assert_eq!(t.data_ptr(), None);
        assert_eq!(t.read().unwrap_err(), OpaqueError::Unallocated);
        assert_eq!(t.device(), DeviceId::GPU(1));
    }
}
