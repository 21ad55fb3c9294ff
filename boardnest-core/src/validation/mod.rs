//! Cut-list and layout validation.

mod validate;

pub use validate::{validate_layout, validate_rows, ValidationResult};
