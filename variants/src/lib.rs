//! Variant props for the workshop button and the lookup tables that turn
//! them into utility class strings.

pub mod classes;
pub mod error;
pub mod types;

pub use classes::{cx, resolve, BASE_CLASSES};
pub use error::VariantError;
pub use types::{ButtonVariants, Impact, Shape, Size};
