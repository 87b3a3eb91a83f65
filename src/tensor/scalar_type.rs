use std::fmt;

/// Element types the runtime can describe. Only a subset has a foreign
/// counterpart; see `bridge::dtype`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Byte,
    Char,
    Short,
    Int,
    Long,
    Half,
    Float,
    Double,
    Bool,
    BFloat16,
    QInt8,
    QUInt8,
    QInt32,
}

impl ScalarType {
    pub const ALL: [ScalarType; 13] = [
        ScalarType::Byte,
        ScalarType::Char,
        ScalarType::Short,
        ScalarType::Int,
        ScalarType::Long,
        ScalarType::Half,
        ScalarType::Float,
        ScalarType::Double,
        ScalarType::Bool,
        ScalarType::BFloat16,
        ScalarType::QInt8,
        ScalarType::QUInt8,
        ScalarType::QInt32,
    ];

    pub fn size_in_bytes(self) -> usize {
        match self {
            ScalarType::Byte
            | ScalarType::Char
            | ScalarType::Bool
            | ScalarType::QInt8
            | ScalarType::QUInt8 => 1,
            ScalarType::Short | ScalarType::Half | ScalarType::BFloat16 => 2,
            ScalarType::Int | ScalarType::Float | ScalarType::QInt32 => 4,
            ScalarType::Long | ScalarType::Double => 8,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
