//! Cage packing: row/layer placement, ordering and the multi-cage driver.

mod driver;
mod layer;
mod order;

pub use driver::pack_products;
pub use layer::{advance, fill_row, pack_layers, Cursor};
pub use order::{is_sorted_by_volume, sort_by_volume};
