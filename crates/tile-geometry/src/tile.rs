//! Tile dimensions and footprint rules.

use core::fmt;

use crate::error::LayoutError;

/// Edge length of a square tile, and the stride of the sampling grid.
///
/// Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct TileSize(i32);

impl TileSize {
    /// Creates a tile size.
    ///
    /// # Arguments
    /// * `size` - Tile edge length in coordinate units
    ///
    /// # Returns
    /// * `Result<Self, LayoutError>` - The tile size or an error if `size` is zero or negative
    pub fn new(size: i32) -> Result<Self, LayoutError> {
        if size <= 0 {
            return Err(LayoutError::InvalidTileSize("Tile size must be positive"));
        }
        Ok(TileSize(size))
    }

    /// The edge length in coordinate units.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for TileSize {
    type Error = LayoutError;

    fn try_from(size: i32) -> Result<Self, Self::Error> {
        TileSize::new(size)
    }
}

impl From<TileSize> for i32 {
    fn from(tile: TileSize) -> Self {
        tile.0
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How much of a tile's footprint must be inside the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TileFit {
    /// The anchor and all three opposite corners must be inside.
    #[default]
    AllCorners,
    /// Only the anchor must be inside.
    AnchorOnly,
}
