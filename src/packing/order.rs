//! First-fit-decreasing ordering of the product backlog.

use std::cmp::Reverse;

use crate::model::Product;

/// Sort products by descending volume.
///
/// The sort is stable: products with the same volume keep their input order.
pub fn sort_by_volume(products: &mut [Product]) {
    products.sort_by_key(|p| Reverse(p.volume()));
}

/// Check whether products are in descending volume order.
pub fn is_sorted_by_volume(products: &[Product]) -> bool {
    products
        .windows(2)
        .all(|pair| pair[0].volume() >= pair[1].volume())
}
