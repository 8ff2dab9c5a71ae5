//! Pre-pack validation module.

mod validate;

pub use validate::{unpackable_reason, validate_products, ValidationResult};
