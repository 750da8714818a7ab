//! Integer points on the layout plane.

use core::fmt;

/// Represents a point on the integer layout plane.
///
/// Coordinates are whole units. Predicates widen them before multiplying, so
/// any pair of `i32` points can be compared without overflow.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate (column axis).
    pub x: i32,
    /// The y-coordinate (row axis).
    pub y: i32,
}

impl Point {
    /// Creates a new `Point`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a `Point` from fractional coordinates, flooring both axes.
    ///
    /// Values beyond the `i32` range saturate, and `NaN` maps to zero.
    #[must_use]
    pub fn floored(x: f64, y: f64) -> Self {
        Self {
            x: x.floor() as i32,
            y: y.floor() as i32,
        }
    }

    /// Returns this point shifted by `(dx, dy)`, or `None` if either axis overflows.
    #[must_use]
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point widened to `i64`, for coordinates one step past the `i32` range.
///
/// The ray-casting sentinel sits one unit right of the outline, which does not
/// fit in `i32` when the outline reaches `i32::MAX`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct WidePoint {
    pub(crate) x: i64,
    pub(crate) y: i64,
}

impl WidePoint {
    pub(crate) const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for WidePoint {
    fn from(p: Point) -> Self {
        Self::new(i64::from(p.x), i64::from(p.y))
    }
}
