/// The foreign library's fixed element type catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ForeignDataType {
    F32,
    S32,
    S8,
    U8,
    Bf16,
}

impl ForeignDataType {
    pub fn size_in_bytes(self) -> usize {
        match self {
            ForeignDataType::F32 | ForeignDataType::S32 => 4,
            ForeignDataType::Bf16 => 2,
            ForeignDataType::S8 | ForeignDataType::U8 => 1,
        }
    }
}
