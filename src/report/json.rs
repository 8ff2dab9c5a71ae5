//! Serialisable packing report.

use serde::Serialize;

use crate::config::CageDimensions;
use crate::model::{Cage, Location};

/// Where one product ended up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementReport {
    pub product_id: u64,
    pub location: Option<Location>,
    pub width: u32,
    pub height: u32,
    pub length: u32,
}

/// Utilisation and contents of one cage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CageReport {
    pub id: usize,
    pub volume_used: u64,
    pub total_volume: u64,
    pub percentage_used: f64,
    pub placements: Vec<PlacementReport>,
}

impl CageReport {
    fn from_cage(cage: &Cage) -> Self {
        let placements = cage
            .placed_products()
            .iter()
            .map(|p| PlacementReport {
                product_id: p.id(),
                location: p.location(),
                width: p.width(),
                height: p.height(),
                length: p.length(),
            })
            .collect();

        Self {
            id: cage.id(),
            volume_used: cage.volume_used(),
            total_volume: cage.total_volume(),
            percentage_used: cage.percentage_used(),
            placements,
        }
    }
}

/// Result of a packing run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackingReport {
    pub cage_dimensions: CageDimensions,
    pub cage_count: usize,
    pub product_count: usize,
    pub cages: Vec<CageReport>,
}

impl PackingReport {
    /// Build a report from packed cages.
    pub fn new(cages: &[Cage], cage_dimensions: CageDimensions) -> Self {
        let cages: Vec<CageReport> = cages.iter().map(CageReport::from_cage).collect();
        Self {
            cage_dimensions,
            cage_count: cages.len(),
            product_count: cages.iter().map(|c| c.placements.len()).sum(),
            cages,
        }
    }
}
