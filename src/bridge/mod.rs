//! Conversion surface between runtime tensors and foreign tensors.
//!
//! Foreign-accelerated operators call [`foreign_from_tensor`] to get a
//! working foreign tensor whatever the input's provenance, and
//! [`new_with_foreign`] to hand a foreign result back to the runtime.

mod config;
mod construct;
mod convert;
mod dtype;
mod extract;
mod from_tensor;
mod view;

pub use config::ConversionConfig;
pub use construct::new_with_foreign;
pub use convert::{dense_to_opaque, opaque_to_dense};
pub use dtype::{foreign_dtype, try_foreign_dtype};
pub use extract::{foreign_from_opaque, foreign_read_from_opaque, opaque_handle};
pub use from_tensor::{ForeignRef, foreign_from_tensor};
pub use view::{foreign_view_from_dense, validate_dense_view};
