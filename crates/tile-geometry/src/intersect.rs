//! Segment intersection built on the orientation predicates.

use crate::orientation::{on_segment_wide, Orientation, OrientationRule};
use crate::point::{Point, WidePoint};

/// Returns true if segment `p1q1` and segment `p2q2` share at least one point.
///
/// Uses the standard orientation rule.
pub fn do_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    do_intersect_with(OrientationRule::Standard, p1, q1, p2, q2)
}

/// Segment intersection under an explicit orientation rule.
pub fn do_intersect_with(rule: OrientationRule, p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    segments_intersect(rule, p1.into(), q1.into(), p2.into(), q2.into())
}

pub(crate) fn segments_intersect(
    rule: OrientationRule,
    p1: WidePoint,
    q1: WidePoint,
    p2: WidePoint,
    q2: WidePoint,
) -> bool {
    let o1 = rule.orient_wide(p1, q1, p2);
    let o2 = rule.orient_wide(p1, q1, q2);
    let o3 = rule.orient_wide(p2, q2, p1);
    let o4 = rule.orient_wide(p2, q2, q1);

    // Each segment's endpoints straddle the other's line.
    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear overlaps: an endpoint of one segment lies on the other.
    (o1 == Orientation::Collinear && on_segment_wide(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment_wide(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment_wide(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment_wide(p2, q1, q2))
}
