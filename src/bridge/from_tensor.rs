use log::trace;

use crate::foreign::{ForeignAccess, ForeignDesc, ForeignView};
use crate::opaque::ForeignReadGuard;
use crate::tensor::Tensor;

use super::{foreign_read_from_opaque, foreign_view_from_dense};

/// A working foreign tensor obtained from a runtime tensor.
///
/// Both variants read the same way through [`ForeignAccess`], but their
/// lifetimes differ: `Shared` reads the live value behind a reference-counted
/// handle, `Borrowed` aliases dense memory and owns nothing. Neither grants
/// write access, so several may be held on one tensor at once.
#[derive(Debug)]
pub enum ForeignRef<'a> {
    Shared(ForeignReadGuard<'a>),
    Borrowed(ForeignView<'a>),
}

impl ForeignRef<'_> {
    pub fn is_borrowed(&self) -> bool {
        matches!(self, ForeignRef::Borrowed(_))
    }
}

impl ForeignAccess for ForeignRef<'_> {
    fn desc(&self) -> &ForeignDesc {
        match self {
            ForeignRef::Shared(guard) => guard.desc(),
            ForeignRef::Borrowed(view) => view.desc(),
        }
    }

    fn as_bytes(&self) -> &[u8] {
        match self {
            ForeignRef::Shared(guard) => guard.as_bytes(),
            ForeignRef::Borrowed(view) => view.as_bytes(),
        }
    }
}

/// Foreign tensor for `tensor` regardless of provenance: the shared live value
/// when it is foreign-backed, otherwise a borrowed view over its dense bytes.
///
/// Panics under the same conditions as the function it delegates to.
pub fn foreign_from_tensor(tensor: &Tensor) -> ForeignRef<'_> {
    if tensor.is_opaque() {
        trace!("foreign_from_tensor: sharing opaque handle");
        ForeignRef::Shared(foreign_read_from_opaque(tensor))
    } else {
        trace!("foreign_from_tensor: viewing dense storage");
        ForeignRef::Borrowed(foreign_view_from_dense(tensor))
    }
}
