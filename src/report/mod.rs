//! Packing report output module.

mod json;
mod log;

pub use json::{CageReport, PackingReport, PlacementReport};
pub use log::{cage_detail_lines, summary_lines};
