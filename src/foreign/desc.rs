use super::ForeignDataType;

/// Physical arrangement of a foreign tensor's bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ForeignFormat {
    /// Dense row-major, identical to a contiguous runtime tensor.
    Plain,
    /// Row-major with the innermost dimension padded up to a multiple of
    /// `block` elements. Padding is zero-filled.
    Blocked { block: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForeignDesc {
    dims: Vec<i32>,
    data_type: ForeignDataType,
    format: ForeignFormat,
}

impl ForeignDesc {
    pub fn new(dims: Vec<i32>, data_type: ForeignDataType) -> Self {
        Self::with_format(dims, data_type, ForeignFormat::Plain)
    }

    pub fn with_format(dims: Vec<i32>, data_type: ForeignDataType, format: ForeignFormat) -> Self {
        assert!(
            dims.iter().all(|&d| d >= 0),
            "Foreign dimensions cannot be negative: {:?}",
            dims
        );
        if let ForeignFormat::Blocked { block } = format {
            assert!(block > 0, "Block size must be positive");
        }
        Self {
            dims,
            data_type,
            format,
        }
    }

    pub fn get_dims(&self) -> &[i32] {
        &self.dims
    }

    pub fn data_type(&self) -> ForeignDataType {
        self.data_type
    }

    pub fn format(&self) -> ForeignFormat {
        self.format
    }

    pub fn is_plain(&self) -> bool {
        self.format == ForeignFormat::Plain
    }

    pub fn nelems(&self) -> usize {
        self.dims.iter().map(|&d| d as usize).product()
    }

    /// Logical length of the innermost dimension (1 for scalars).
    pub fn inner_dim(&self) -> usize {
        self.dims.last().map_or(1, |&d| d as usize)
    }

    /// Number of innermost rows.
    pub fn outer_dim(&self) -> usize {
        match self.dims.split_last() {
            Some((_, outer)) => outer.iter().map(|&d| d as usize).product(),
            None => 1,
        }
    }

    /// Elements between consecutive innermost rows in memory.
    pub fn inner_stride(&self) -> usize {
        let inner = self.inner_dim();
        match self.format {
            ForeignFormat::Plain => inner,
            ForeignFormat::Blocked { block } => inner.div_ceil(block) * block,
        }
    }

    pub fn size_in_bytes(&self) -> usize {
        self.outer_dim() * self.inner_stride() * self.data_type.size_in_bytes()
    }
}
