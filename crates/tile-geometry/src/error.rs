//! This module defines the error types used by the `tile-geometry` crate.

#![warn(missing_docs)]

/// Error type for layout operations.
///
/// Geometry edge cases (short outlines, points outside the outline) are not
/// errors; they resolve to `false` or an empty result. This enum only covers
/// arguments that violate a constructor's contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Error for an invalid tile size.
    /// This variant is returned when a tile size is provided that is not positive.
    InvalidTileSize(&'static str),
    /// Error for an invalid outline.
    /// This variant is returned when a strict polygon is built from fewer than three vertices.
    InvalidOutline(&'static str),
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LayoutError::InvalidTileSize(msg) => write!(f, "Invalid tile size: {}", msg),
            LayoutError::InvalidOutline(msg) => write!(f, "Invalid outline: {}", msg),
        }
    }
}

impl core::error::Error for LayoutError {}
