pub mod error;
pub mod expect_msg;
pub(crate) mod macros;
