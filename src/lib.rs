//! cage-packer - Pack products into standard sized cages.
//!
//! Products are loaded from a CSV file, sorted by descending volume and
//! placed row by row, layer by layer into fixed-size cages using a greedy
//! first-fit-decreasing heuristic. A new cage is started whenever the
//! current one runs out of room.
//!
//! # Example
//!
//! ```no_run
//! use cage_packer::{pack_file, summary_lines, PackerConfig};
//! use std::path::Path;
//!
//! let outcome = pack_file(Path::new("cage_products.csv"), &PackerConfig::default()).unwrap();
//! for line in summary_lines(&outcome.cages, false) {
//!     println!("{}", line);
//! }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod packing;
pub mod parser;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use config::{CageDimensions, PackerConfig};
pub use error::{ErrorCode, PackError, Result};
pub use model::{Cage, Location, Product};
pub use packing::{pack_products, sort_by_volume, Cursor};
pub use parser::{load_products, parse_products, LoadedProducts};
pub use report::{summary_lines, PackingReport};
pub use validation::{validate_products, ValidationResult};

/// Outcome of packing a products file.
#[derive(Debug)]
pub struct PackOutcome {
    /// Packed cages, in creation order.
    pub cages: Vec<Cage>,
    /// Records skipped while loading.
    pub skipped: Vec<PackError>,
}

/// Load a products CSV file and pack it into cages.
///
/// This is the main high-level function that runs the full pipeline:
/// 1. Load and sort the products
/// 2. Validate them against the cage geometry
/// 3. Pack them into cages
///
/// Skipped records are logged as errors and returned with the cages; loading
/// carries on past them. Every product that can never fit a cage is logged,
/// then the run fails with [`PackError::ValidationFailed`].
pub fn pack_file(path: &std::path::Path, config: &PackerConfig) -> Result<PackOutcome> {
    let loaded = load_products(path)?;

    for skipped in &loaded.skipped {
        tracing::error!("{}", skipped);
    }

    tracing::info!("Loaded {} product(s)", loaded.products.len());

    let validation = validate_products(&loaded.products, &config.cage);

    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }

    for err in &validation.errors {
        tracing::error!("{}", err);
    }

    if !validation.passed {
        return Err(PackError::ValidationFailed {
            errors: validation.errors,
        });
    }

    let cages = pack_products(loaded.products, config)?;

    Ok(PackOutcome {
        cages,
        skipped: loaded.skipped,
    })
}
