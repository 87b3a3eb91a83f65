use super::{ForeignAccess, ForeignDesc};

/// Plain foreign descriptor over bytes someone else owns. Holds no ownership
/// share; the borrow keeps the source alive and unmodified.
#[derive(Clone, Debug)]
pub struct ForeignView<'a> {
    desc: ForeignDesc,
    data: &'a [u8],
}

impl<'a> ForeignView<'a> {
    pub fn new(desc: ForeignDesc, data: &'a [u8]) -> Self {
        assert_eq!(
            data.len(),
            desc.size_in_bytes(),
            "View data does not cover its descriptor"
        );
        Self { desc, data }
    }
}

impl ForeignAccess for ForeignView<'_> {
    fn desc(&self) -> &ForeignDesc {
        &self.desc
    }

    fn as_bytes(&self) -> &[u8] {
        self.data
    }
}
