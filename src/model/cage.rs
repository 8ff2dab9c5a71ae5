//! Cage definition: a fixed-size container that products are packed into.

use crate::config::CageDimensions;
use crate::packing::{pack_layers, Cursor};

use super::Product;

/// A cage holding the products placed into it.
#[derive(Debug, Clone)]
pub struct Cage {
    id: usize,
    dimensions: CageDimensions,
    cursor: Cursor,
    placed_products: Vec<Product>,
}

impl Cage {
    /// Create an empty cage with the given sequence id.
    pub fn new(id: usize, dimensions: CageDimensions) -> Self {
        Self {
            id,
            dimensions,
            cursor: Cursor::origin(),
            placed_products: Vec::new(),
        }
    }

    /// Sequence id of the cage (0-based, in creation order).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Cursor position after the last packing pass.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Products placed in this cage, in placement order.
    pub fn placed_products(&self) -> &[Product] {
        &self.placed_products
    }

    /// Check if nothing has been placed in this cage.
    pub fn is_empty(&self) -> bool {
        self.placed_products.is_empty()
    }

    /// Pack as many of `products` as fit, layer by layer.
    ///
    /// `products` should already be sorted by descending volume. Returns the
    /// products that did not fit, in their original relative order.
    pub fn pack(&mut self, products: Vec<Product>) -> Vec<Product> {
        let (cursor, unplaced) = pack_layers(
            &self.dimensions,
            self.cursor,
            products,
            &mut self.placed_products,
        );
        self.cursor = cursor;
        unplaced
    }

    /// Total volume of the cage.
    pub fn total_volume(&self) -> u64 {
        self.dimensions.volume()
    }

    /// Volume filled by products.
    pub fn volume_used(&self) -> u64 {
        self.placed_products.iter().map(Product::volume).sum()
    }

    /// Percentage of the cage volume used.
    ///
    /// Rows advance by the tallest and longest products still waiting, not by
    /// the ones just placed, so placed products can overlap and this can go
    /// above 100.
    pub fn percentage_used(&self) -> f64 {
        let total = self.total_volume();
        if total == 0 {
            return 0.0;
        }
        self.volume_used() as f64 / total as f64 * 100.0
    }
}
