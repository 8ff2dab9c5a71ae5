//! Configuration constants and settings for the packer.

use serde::{Deserialize, Serialize};

/// Default cage width in mm (x axis).
pub const DEFAULT_CAGE_WIDTH: u32 = 697;

/// Default cage height in mm (y axis).
pub const DEFAULT_CAGE_HEIGHT: u32 = 1603;

/// Default cage length in mm (z axis).
pub const DEFAULT_CAGE_LENGTH: u32 = 846;

/// Default products CSV file name.
pub const DEFAULT_PRODUCTS_FILE: &str = "cage_products.csv";

/// Internal dimensions of a cage in mm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CageDimensions {
    /// X axis bound.
    pub width: u32,
    /// Y axis bound.
    pub height: u32,
    /// Z axis bound.
    pub length: u32,
}

impl Default for CageDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_CAGE_WIDTH,
            height: DEFAULT_CAGE_HEIGHT,
            length: DEFAULT_CAGE_LENGTH,
        }
    }
}

impl CageDimensions {
    /// Create cage dimensions.
    pub fn new(width: u32, height: u32, length: u32) -> Self {
        Self {
            width,
            height,
            length,
        }
    }

    /// Total volume of the cage in mm³.
    pub fn volume(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height) * u64::from(self.length)
    }
}

impl std::fmt::Display for CageDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.length)
    }
}

/// Packer configuration.
#[derive(Debug, Clone, Default)]
pub struct PackerConfig {
    /// Geometry shared by every cage.
    pub cage: CageDimensions,
    /// Upper bound on the number of cages, if any.
    pub max_cages: Option<usize>,
}

impl PackerConfig {
    /// Create a packer configuration for the given cage geometry.
    pub fn new(cage: CageDimensions) -> Self {
        Self {
            cage,
            ..Default::default()
        }
    }

    /// Limit the number of cages the driver may create.
    pub fn with_max_cages(mut self, max_cages: usize) -> Self {
        self.max_cages = Some(max_cages);
        self
    }
}
