use crate::foreign::ForeignFormat;

/// Controls the foreign format produced by `dense_to_opaque`.
#[derive(Clone, Debug)]
pub struct ConversionConfig {
    pub blocked: bool,
    pub block_size: usize,
}

impl ConversionConfig {
    pub fn build(self) -> Self {
        assert!(
            self.block_size > 0,
            "Block size must be positive, got {}",
            self.block_size
        );
        self
    }

    pub fn plain() -> Self {
        Self {
            blocked: false,
            ..Self::default()
        }
    }

    pub fn target_format(&self) -> ForeignFormat {
        if self.blocked {
            ForeignFormat::Blocked {
                block: self.block_size,
            }
        } else {
            ForeignFormat::Plain
        }
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            blocked: true,
            block_size: 8,
        }
    }
}
