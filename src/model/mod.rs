//! Data model types for cage packing.

mod cage;
mod product;

pub use cage::Cage;
pub use product::{Location, Product};
