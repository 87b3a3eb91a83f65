use super::ScalarType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TensorDesc {
    dims: Vec<i64>,
    data_type: ScalarType,
}

impl TensorDesc {
    pub fn new(dims: Vec<i64>, data_type: ScalarType) -> Self {
        assert!(
            dims.iter().all(|&d| d >= 0),
            "Tensor dimensions cannot be negative: {:?}",
            dims
        );
        Self { dims, data_type }
    }

    pub fn data_type(&self) -> ScalarType {
        self.data_type
    }

    pub fn num_elements(&self) -> usize {
        self.dims.iter().map(|d| *d as usize).product()
    }

    // Size in bytes for the tensor given its ScalarType
    pub fn size_in_bytes(&self) -> usize {
        self.num_elements() * self.data_type.size_in_bytes()
    }

    pub fn dims(&self) -> &[i64] {
        &self.dims
    }

    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    // Row-major strides, in elements
    pub fn strides(&self) -> Vec<i64> {
        Self::compute_strides(&self.dims)
    }

    /// Whether `strides` address `dims` in row-major order. Size-1 dims can
    /// carry any stride, and empty tensors are always contiguous.
    pub fn is_contiguous_strides(dims: &[i64], strides: &[i64]) -> bool {
        if dims.contains(&0) {
            return true;
        }
        let mut expected = 1;
        for (&d, &s) in dims.iter().zip(strides.iter()).rev() {
            if d == 1 {
                continue;
            }
            if s != expected {
                return false;
            }
            expected *= d;
        }
        true
    }

    pub fn compute_strides(dims: &[i64]) -> Vec<i64> {
        let mut s = vec![1; dims.len()];
        for i in (0..dims.len().saturating_sub(1)).rev() {
            s[i] = s[i + 1] * dims[i + 1].max(1);
        }
        s
    }

    pub fn unravel(idx: usize, dims: &[i64]) -> Vec<usize> {
        let mut rem = idx;
        let strides = Self::compute_strides(dims);
        strides
            .iter()
            .map(|&s| {
                let s = s as usize;
                let c = rem / s;
                rem %= s;
                c
            })
            .collect()
    }

    pub fn offset(idxs: &[usize], strides: &[i64]) -> usize {
        idxs.iter().zip(strides.iter()).map(|(i, s)| i * *s as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_strides() {
        assert_eq!(TensorDesc::compute_strides(&[2, 3, 4]), vec![12, 4, 1]);
        assert_eq!(TensorDesc::compute_strides(&[5]), vec![1]);
        assert!(TensorDesc::compute_strides(&[]).is_empty());
    }

    #[test]
    fn size_one_dims_ignore_stride() {
        assert!(TensorDesc::is_contiguous_strides(&[3, 1], &[1, 3]));
        assert!(TensorDesc::is_contiguous_strides(&[1, 4], &[99, 1]));
        assert!(!TensorDesc::is_contiguous_strides(&[3, 2], &[1, 3]));
        assert!(TensorDesc::is_contiguous_strides(&[2, 0], &[7, 7]));
    }

    #[test]
    fn unravel_then_offset_is_identity_for_contiguous() {
        let dims = [2, 3, 4];
        let strides = TensorDesc::compute_strides(&dims);
        for idx in 0..24 {
            let coords = TensorDesc::unravel(idx, &dims);
            assert_eq!(TensorDesc::offset(&coords, &strides), idx);
        }
    }

    #[test]
    fn size_in_bytes_uses_element_width() {
        let desc = TensorDesc::new(vec![2, 3], ScalarType::BFloat16);
        assert_eq!(desc.num_elements(), 6);
        assert_eq!(desc.size_in_bytes(), 12);
    }
}
