//! Product definition representing a single box to be packed into a cage.

use serde::{Deserialize, Serialize};

/// Position of a placed product in its cage's local frame (mm).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Offset along the cage width.
    pub x: u32,
    /// Offset along the cage height.
    pub y: u32,
    /// Offset along the cage length.
    pub z: u32,
}

impl Location {
    /// Create a new location.
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A rectangular product to be packed.
///
/// Dimensions are fixed at construction. The location starts out empty and
/// is assigned once, when a cage places the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: u64,
    length: u32,
    width: u32,
    height: u32,
    location: Option<Location>,
}

impl Product {
    /// Create a new, unplaced product.
    pub fn new(id: u64, length: u32, width: u32, height: u32) -> Self {
        Self {
            id,
            length,
            width,
            height,
            location: None,
        }
    }

    /// Product identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Extent along the cage length (z axis).
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Extent along the cage width (x axis).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Extent along the cage height (y axis).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Volume of the product in mm³.
    pub fn volume(&self) -> u64 {
        u64::from(self.length) * u64::from(self.width) * u64::from(self.height)
    }

    /// Where the product was placed, if it has been.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Check if the product has been placed.
    pub fn is_placed(&self) -> bool {
        self.location.is_some()
    }

    /// Record the placement position.
    pub(crate) fn place(&mut self, location: Location) {
        debug_assert!(self.location.is_none(), "product {} placed twice", self.id);
        self.location = Some(location);
    }
}
