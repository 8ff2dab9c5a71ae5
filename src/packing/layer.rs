//! Row and layer placement within a single cage.
//!
//! Products are laid side by side along x to form a row. When a row is full
//! the cursor moves along z by the longest leftover product and up y by the
//! tallest one, and filling starts again from x = 0. Rows and layers that
//! have been left behind are never revisited.

use serde::{Deserialize, Serialize};

use crate::config::CageDimensions;
use crate::model::{Location, Product};

/// Next free placement offset inside a cage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Cursor {
    /// Cursor at the cage origin.
    pub fn origin() -> Self {
        Self::default()
    }

    /// Location a product placed at this cursor would get.
    pub fn location(&self) -> Location {
        Location::new(self.x, self.y, self.z)
    }
}

/// Fill one row at the cursor's (y, z).
///
/// The row starts at x = 0. A product is placed when its right edge stays
/// strictly inside the cage width; otherwise it is kept for later and the
/// scan carries on with the next product. Returns the cursor at the end of
/// the row and the products that were not placed.
pub fn fill_row(
    dimensions: &CageDimensions,
    cursor: Cursor,
    products: Vec<Product>,
    placed: &mut Vec<Product>,
) -> (Cursor, Vec<Product>) {
    let mut cursor = Cursor { x: 0, ..cursor };
    let mut unplaced = Vec::new();

    for mut product in products {
        // Strict: a product ending exactly on the cage wall is rejected.
        if u64::from(cursor.x) + u64::from(product.width()) < u64::from(dimensions.width) {
            product.place(cursor.location());
            cursor.x += product.width();
            placed.push(product);
        } else {
            unplaced.push(product);
        }
    }

    (cursor, unplaced)
}

/// Move the cursor to the start of the next row.
///
/// z advances by the longest unplaced product, wrapping to 0 when it would
/// reach the cage length. y advances by the tallest unplaced product.
/// Returns `None` when there is no vertical room left, or when `unplaced`
/// is empty.
pub fn advance(
    dimensions: &CageDimensions,
    cursor: Cursor,
    unplaced: &[Product],
) -> Option<Cursor> {
    let max_length = unplaced.iter().map(Product::length).max()?;
    let max_height = unplaced.iter().map(Product::height).max()?;

    let new_z = u64::from(cursor.z) + u64::from(max_length);
    let new_y = u64::from(cursor.y) + u64::from(max_height);

    let z = if new_z < u64::from(dimensions.length) {
        new_z as u32
    } else {
        0
    };

    // Zero-height leftovers would never leave this layer.
    if new_y > u64::from(cursor.y) && new_y < u64::from(dimensions.height) {
        Some(Cursor {
            x: cursor.x,
            y: new_y as u32,
            z,
        })
    } else {
        None
    }
}

/// Pack rows until everything is placed or the cage runs out of height.
///
/// Placed products are appended to `placed` in placement order. Returns the
/// final cursor and the products that did not fit.
pub fn pack_layers(
    dimensions: &CageDimensions,
    cursor: Cursor,
    products: Vec<Product>,
    placed: &mut Vec<Product>,
) -> (Cursor, Vec<Product>) {
    let mut cursor = cursor;
    let mut unplaced = products;

    loop {
        let (row_end, remaining) = fill_row(dimensions, cursor, unplaced, placed);
        cursor = row_end;
        unplaced = remaining;

        if unplaced.is_empty() {
            break;
        }

        match advance(dimensions, cursor, &unplaced) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    (cursor, unplaced)
}
