mod autograd;
mod key;

pub use autograd::{AutogradExcludeGuard, autograd_excluded};
pub use key::DispatchKey;
