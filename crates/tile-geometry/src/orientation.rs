//! Orientation predicates for ordered point triples.
//!
//! All arithmetic is done in `i128`, which holds the product of two
//! coordinate differences with room to spare, even for the widened points
//! ray casting uses internally.

use crate::point::{Point, WidePoint};

/// Rotational sense of an ordered triple `(p, q, r)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// The three points lie on one line.
    Collinear,
    /// `p -> q -> r` turns clockwise (positive determinant).
    Clockwise,
    /// `p -> q -> r` turns counter-clockwise (negative determinant).
    CounterClockwise,
}

impl Orientation {
    fn from_determinant(val: i128) -> Self {
        match val.signum() {
            0 => Orientation::Collinear,
            1 => Orientation::Clockwise,
            _ => Orientation::CounterClockwise,
        }
    }
}

/// Which determinant the kernel uses to classify a triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OrientationRule {
    /// True cross product of `q - p` and `r - q`. See [`orientation`].
    #[default]
    Standard,
    /// Compatibility formula that reuses the second leg's Δy in both terms.
    /// See [`legacy_orientation`].
    Legacy,
}

impl OrientationRule {
    /// Classifies `(p, q, r)` with this rule.
    #[inline]
    pub fn orient(self, p: Point, q: Point, r: Point) -> Orientation {
        self.orient_wide(p.into(), q.into(), r.into())
    }

    #[inline]
    pub(crate) fn orient_wide(self, p: WidePoint, q: WidePoint, r: WidePoint) -> Orientation {
        let val = match self {
            OrientationRule::Standard => standard_determinant(p, q, r),
            OrientationRule::Legacy => legacy_determinant(p, q, r),
        };
        Orientation::from_determinant(val)
    }
}

#[inline]
fn delta(a: i64, b: i64) -> i128 {
    i128::from(b) - i128::from(a)
}

#[inline]
fn standard_determinant(p: WidePoint, q: WidePoint, r: WidePoint) -> i128 {
    delta(p.y, q.y) * delta(q.x, r.x) - delta(p.x, q.x) * delta(q.y, r.y)
}

#[inline]
fn legacy_determinant(p: WidePoint, q: WidePoint, r: WidePoint) -> i128 {
    delta(p.y, q.y) * delta(q.y, r.y) - delta(p.x, q.x) * delta(q.y, r.y)
}

/// Orientation of the ordered triple `(p, q, r)`.
///
/// Evaluates `(q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)`:
/// zero is collinear, positive is clockwise, negative is counter-clockwise.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    OrientationRule::Standard.orient(p, q, r)
}

/// Orientation using the legacy determinant
/// `(q.y - p.y) * (r.y - q.y) - (q.x - p.x) * (r.y - q.y)`.
///
/// This is not a true orientation test. It factors to
/// `(r.y - q.y) * ((q.y - p.y) - (q.x - p.x))`, so any triple whose second leg
/// is horizontal, or whose first leg runs along the `y = x` diagonal, reports
/// `Collinear`. Ray casting built on it rejects most interior points; it is
/// kept only to reproduce layouts generated with it.
#[inline]
pub fn legacy_orientation(p: Point, q: Point, r: Point) -> Orientation {
    OrientationRule::Legacy.orient(p, q, r)
}

/// Given collinear `p`, `q`, `r`, returns true if `q` lies on segment `pr`.
///
/// Only the inclusive bounding box of `p` and `r` is checked; collinearity is
/// the caller's responsibility.
#[inline]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    on_segment_wide(p.into(), q.into(), r.into())
}

#[inline]
pub(crate) fn on_segment_wide(p: WidePoint, q: WidePoint, r: WidePoint) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}
