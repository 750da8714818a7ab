//! Point-in-polygon classification by ray casting, and the tile footprint test
//! built on top of it.

use crate::intersect::segments_intersect;
use crate::orientation::{on_segment_wide, Orientation, OrientationRule};
use crate::point::{Point, WidePoint};
use crate::polygon::ring_edges;
use crate::tile::{TileFit, TileSize};

/// Returns true if `p` lies inside `polygon` or on its boundary.
///
/// Uses the standard orientation rule. See [`is_inside_with`].
pub fn is_inside(polygon: &[Point], p: Point) -> bool {
    is_inside_with(OrientationRule::Standard, polygon, p)
}

/// Ray-casting containment test under an explicit orientation rule.
///
/// A horizontal ray runs from `p` to one unit past the rightmost vertex, and
/// every edge it touches is examined. If `p` lies on a touched edge the answer
/// is `true`, so boundary points count as inside. Otherwise an odd number of
/// crossings means inside.
///
/// Under [`OrientationRule::Standard`] a touched edge counts as a crossing only
/// when exactly one of its endpoints lies strictly above the ray, and edges
/// running along the ray are skipped. A ray through a vertex therefore counts
/// once, not once per adjacent edge.
///
/// Under [`OrientationRule::Legacy`] every touched edge counts, and the first
/// edge collinear with `p` decides the result on its own, whether or not `p`
/// lies on it.
///
/// Rings with fewer than three vertices contain nothing.
pub fn is_inside_with(rule: OrientationRule, polygon: &[Point], p: Point) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let query = WidePoint::from(p);
    let extreme = ray_end(polygon, p);

    let mut count = 0usize;
    for (a, b) in ring_edges(polygon) {
        let (a_wide, b_wide) = (WidePoint::from(a), WidePoint::from(b));
        if !segments_intersect(rule, a_wide, b_wide, query, extreme) {
            continue;
        }
        if rule.orient_wide(a_wide, query, b_wide) == Orientation::Collinear {
            let on_edge = on_segment_wide(a_wide, query, b_wide);
            match rule {
                OrientationRule::Legacy => return on_edge,
                OrientationRule::Standard if on_edge => return true,
                OrientationRule::Standard => continue,
            }
        }
        if rule == OrientationRule::Legacy || crosses_half_open(a, b, p.y) {
            count += 1;
        }
    }

    count % 2 == 1
}

/// True if exactly one endpoint of `ab` lies strictly above the row `y`.
fn crosses_half_open(a: Point, b: Point, y: i32) -> bool {
    (a.y > y) != (b.y > y)
}

/// Far end of the horizontal ray cast from `p`, one unit past the polygon's
/// largest x. Held in `i64` so it exists even when the outline reaches `i32::MAX`.
fn ray_end(polygon: &[Point], p: Point) -> WidePoint {
    let max_x = polygon.iter().map(|v| i64::from(v.x)).max().unwrap_or(i64::from(p.x));
    WidePoint::new(max_x + 1, i64::from(p.y))
}

/// Returns true if the tile anchored at `anchor` fits inside `polygon`.
///
/// Uses the standard orientation rule. See [`is_square_inside_with`].
pub fn is_square_inside(polygon: &[Point], anchor: Point, tile: TileSize, fit: TileFit) -> bool {
    is_square_inside_with(OrientationRule::Standard, polygon, anchor, tile, fit)
}

/// Tile footprint test under an explicit orientation rule.
///
/// With [`TileFit::AllCorners`] the anchor and the three corners offset by the
/// tile size along x, y and both must be inside. A corner that overflows the
/// coordinate range is treated as outside. With [`TileFit::AnchorOnly`] only the
/// anchor is tested.
pub fn is_square_inside_with(
    rule: OrientationRule,
    polygon: &[Point],
    anchor: Point,
    tile: TileSize,
    fit: TileFit,
) -> bool {
    match fit {
        TileFit::AnchorOnly => is_inside_with(rule, polygon, anchor),
        TileFit::AllCorners => {
            let t = tile.get();
            [(0, 0), (t, 0), (0, t), (t, t)].into_iter().all(|(dx, dy)| {
                anchor
                    .checked_offset(dx, dy)
                    .is_some_and(|corner| is_inside_with(rule, polygon, corner))
            })
        }
    }
}
