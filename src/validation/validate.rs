//! Validation of the product backlog before packing.

use crate::config::CageDimensions;
use crate::model::Product;
use crate::packing::is_sorted_by_volume;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }
}

/// Explain why a product can never be packed into a cage, if it can't.
///
/// Row filling only accepts a product whose right edge stays strictly
/// inside the cage, so a product as wide as the cage is rejected too.
pub fn unpackable_reason(product: &Product, cage: &CageDimensions) -> Option<String> {
    if product.length() == 0 || product.width() == 0 || product.height() == 0 {
        return Some(format!(
            "dimensions {}x{}x{} must all be positive",
            product.width(),
            product.height(),
            product.length()
        ));
    }

    if product.width() >= cage.width {
        return Some(format!(
            "width {} does not fit inside cage width {}",
            product.width(),
            cage.width
        ));
    }

    if product.height() > cage.height {
        return Some(format!(
            "height {} exceeds cage height {}",
            product.height(),
            cage.height
        ));
    }

    if product.length() > cage.length {
        return Some(format!(
            "length {} exceeds cage length {}",
            product.length(),
            cage.length
        ));
    }

    None
}

/// Validate a product backlog against the cage geometry.
pub fn validate_products(products: &[Product], cage: &CageDimensions) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if products.is_empty() {
        result.add_warning("No products to pack");
        return result;
    }

    if !is_sorted_by_volume(products) {
        result.add_warning("Products are not sorted by descending volume");
    }

    for product in products {
        if let Some(reason) = unpackable_reason(product, cage) {
            result.add_error(format!("Product {}: {}", product.id(), reason));
        }
    }

    result
}
