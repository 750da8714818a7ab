//! Outline types: the closed vertex ring and its axis-aligned bounds.

use core::fmt;

use crate::error::LayoutError;
use crate::point::Point;

/// Smallest axis-aligned rectangle containing a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// Smallest x-coordinate.
    pub min_x: i32,
    /// Smallest y-coordinate.
    pub min_y: i32,
    /// Largest x-coordinate.
    pub max_x: i32,
    /// Largest y-coordinate.
    pub max_y: i32,
}

impl BoundingBox {
    /// Computes the bounds of `points` in a single pass.
    ///
    /// # Arguments
    /// * `points` - The points to enclose
    ///
    /// # Returns
    /// * `Option<BoundingBox>` - The bounds, or `None` if `points` is empty
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = BoundingBox {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in rest {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    /// Returns true if `p` lies within the box, edges included.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Extent along the x axis.
    pub fn width(&self) -> i64 {
        i64::from(self.max_x) - i64::from(self.min_x)
    }

    /// Extent along the y axis.
    pub fn height(&self) -> i64 {
        i64::from(self.max_y) - i64::from(self.min_y)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

/// A closed outline given as an ordered vertex ring.
///
/// Edge `i` joins vertex `i` to vertex `(i + 1) % n`, so the last vertex links
/// back to the first. Simplicity and winding direction are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon, rejecting rings with fewer than three vertices.
    ///
    /// # Arguments
    /// * `vertices` - Outline vertices in ring order; the last joins the first
    ///
    /// # Returns
    /// * `Result<Self, LayoutError>` - The polygon or an error if the ring is too short
    pub fn try_new(vertices: Vec<Point>) -> Result<Self, LayoutError> {
        if vertices.len() < 3 {
            return Err(LayoutError::InvalidOutline(
                "An outline needs at least three vertices",
            ));
        }
        Ok(Polygon { vertices })
    }

    /// The vertices in ring order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the closed ring of edges.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        ring_edges(&self.vertices)
    }

    /// Bounds of the vertex set, `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.vertices)
    }
}

/// Edges of a vertex ring, wrapping from the last vertex to the first.
pub(crate) fn ring_edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}
