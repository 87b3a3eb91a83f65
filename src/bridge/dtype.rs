use crate::foreign::ForeignDataType;
use crate::tensor::ScalarType;
use crate::utils::{error::OpaqueError, expect_msg::ExpectMsg};

pub fn try_foreign_dtype(scalar_type: ScalarType) -> Result<ForeignDataType, OpaqueError> {
    match scalar_type {
        ScalarType::Float => Ok(ForeignDataType::F32),
        ScalarType::QInt32 => Ok(ForeignDataType::S32),
        ScalarType::QInt8 => Ok(ForeignDataType::S8),
        ScalarType::QUInt8 | ScalarType::Byte => Ok(ForeignDataType::U8),
        ScalarType::BFloat16 => Ok(ForeignDataType::Bf16),
        other => Err(OpaqueError::UnsupportedDtype(other)),
    }
}

/// Maps a runtime scalar type to the foreign library's data type.
///
/// Panics on any type outside the mapping; there is no fallback.
pub fn foreign_dtype(scalar_type: ScalarType) -> ForeignDataType {
    try_foreign_dtype(scalar_type).expect_msg("foreign_dtype")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_table() {
        assert_eq!(foreign_dtype(ScalarType::Float), ForeignDataType::F32);
        assert_eq!(foreign_dtype(ScalarType::QInt32), ForeignDataType::S32);
        assert_eq!(foreign_dtype(ScalarType::QInt8), ForeignDataType::S8);
        assert_eq!(foreign_dtype(ScalarType::Byte), ForeignDataType::U8);
        assert_eq!(foreign_dtype(ScalarType::QUInt8), ForeignDataType::U8);
        assert_eq!(foreign_dtype(ScalarType::BFloat16), ForeignDataType::Bf16);
    }

    #[test]
    fn byte_and_quint8_share_foreign_type() {
        assert_eq!(
            foreign_dtype(ScalarType::Byte),
            foreign_dtype(ScalarType::QUInt8)
        );
    }

    #[test]
    fn everything_else_is_rejected() {
        let supported = [
            ScalarType::Float,
            ScalarType::QInt32,
            ScalarType::QInt8,
            ScalarType::QUInt8,
            ScalarType::Byte,
            ScalarType::BFloat16,
        ];
        for t in ScalarType::ALL {
            let result = try_foreign_dtype(t);
            if supported.contains(&t) {
                assert!(result.is_ok(), "{} should map", t);
            } else {
                assert_eq!(result, Err(OpaqueError::UnsupportedDtype(t)));
            }
        }
    }

    #[test]
    #[should_panic(expected = "foreign_dtype: unsupported data type Double")]
    fn unsupported_is_fatal() {
        foreign_dtype(ScalarType::Double);
    }
}
