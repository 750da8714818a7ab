//! Grid sampling of tile anchors inside an outline.

use crate::containment::is_square_inside_with;
use crate::error::LayoutError;
use crate::observer::{NoopObserver, SampleObserver, SampleSummary};
use crate::orientation::OrientationRule;
use crate::point::Point;
use crate::polygon::BoundingBox;
use crate::tile::{TileFit, TileSize};

/// Enumerates the tile anchors whose footprint fits inside an outline.
///
/// The sampler holds no state between runs. Each call scans the outline once
/// for its bounds, then walks the grid anchored at `(min_x, min_y)` with a
/// stride of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSampler {
    tile: TileSize,
    fit: TileFit,
    rule: OrientationRule,
}

impl GridSampler {
    /// Creates a sampler with the default fit and orientation rule.
    pub fn new(tile: TileSize) -> Self {
        GridSampler {
            tile,
            fit: TileFit::default(),
            rule: OrientationRule::default(),
        }
    }

    /// Sets how much of each tile must be inside the outline.
    #[must_use]
    pub fn with_fit(mut self, fit: TileFit) -> Self {
        self.fit = fit;
        self
    }

    /// Sets the orientation rule used by the containment tests.
    #[must_use]
    pub fn with_orientation_rule(mut self, rule: OrientationRule) -> Self {
        self.rule = rule;
        self
    }

    /// Tile edge length and grid stride.
    pub fn tile_size(&self) -> TileSize {
        self.tile
    }

    /// Footprint test applied to each candidate.
    pub fn fit(&self) -> TileFit {
        self.fit
    }

    /// Orientation rule applied to each candidate.
    pub fn orientation_rule(&self) -> OrientationRule {
        self.rule
    }

    /// All grid candidates for `outline`, in row-major ascending order.
    ///
    /// Rows run from `min_y` while `row < max_y`, and columns from `min_x`
    /// while `col < max_x`. Outlines with fewer than three vertices have no
    /// candidates.
    pub fn candidates(&self, outline: &[Point]) -> Candidates {
        match sample_bounds(outline) {
            Some(bounds) => Candidates::new(&bounds, self.tile),
            None => Candidates::empty(),
        }
    }

    /// Returns true if the tile anchored at `anchor` is accepted for `outline`.
    pub fn accepts(&self, outline: &[Point], anchor: Point) -> bool {
        is_square_inside_with(self.rule, outline, anchor, self.tile, self.fit)
    }

    /// Accepted anchors for `outline`, in row-major ascending order.
    pub fn generate_points(&self, outline: &[Point]) -> Vec<Point> {
        self.generate_points_observed(outline, &mut NoopObserver)
    }

    /// Same as [`GridSampler::generate_points`], reporting progress to `observer`.
    pub fn generate_points_observed<O>(&self, outline: &[Point], observer: &mut O) -> Vec<Point>
    where
        O: SampleObserver + ?Sized,
    {
        let mut summary = SampleSummary::default();
        let Some(bounds) = sample_bounds(outline) else {
            observer.on_finished(&summary);
            return Vec::new();
        };
        observer.on_bounds(&bounds);

        let mut accepted = Vec::new();
        for candidate in Candidates::new(&bounds, self.tile) {
            let fits = self.accepts(outline, candidate);
            observer.on_candidate(candidate, fits);
            summary.visited += 1;
            if fits {
                accepted.push(candidate);
            }
        }

        summary.accepted = accepted.len();
        observer.on_finished(&summary);
        accepted
    }
}

/// Accepted anchors for `outline` with the default fit and orientation rule.
///
/// # Arguments
/// * `outline` - Closed vertex ring; fewer than three vertices yields no anchors
/// * `tile_size` - Tile edge length and grid stride
///
/// # Returns
/// * `Result<Vec<Point>, LayoutError>` - The anchors, or an error if `tile_size` is not positive
pub fn generate_points(outline: &[Point], tile_size: i32) -> Result<Vec<Point>, LayoutError> {
    let tile = TileSize::new(tile_size)?;
    Ok(GridSampler::new(tile).generate_points(outline))
}

fn sample_bounds(outline: &[Point]) -> Option<BoundingBox> {
    if outline.len() < 3 {
        return None;
    }
    BoundingBox::from_points(outline)
}

/// Row-major iterator over the grid candidates inside a bounding box.
///
/// Stepping is done in `i64`; every yielded coordinate is below the box's
/// maximum and therefore fits in `i32`.
#[derive(Debug, Clone)]
pub struct Candidates {
    min_x: i64,
    max_x: i64,
    max_y: i64,
    step: i64,
    col: i64,
    row: i64,
}

impl Candidates {
    fn new(bounds: &BoundingBox, tile: TileSize) -> Self {
        Candidates {
            min_x: i64::from(bounds.min_x),
            max_x: i64::from(bounds.max_x),
            max_y: i64::from(bounds.max_y),
            step: i64::from(tile.get()),
            col: i64::from(bounds.min_x),
            row: i64::from(bounds.min_y),
        }
    }

    fn empty() -> Self {
        Candidates {
            min_x: 0,
            max_x: 0,
            max_y: 0,
            step: 1,
            col: 0,
            row: 0,
        }
    }

    fn steps(span: i64, step: i64) -> usize {
        if span <= 0 {
            0
        } else {
            usize::try_from((span + step - 1) / step).unwrap_or(usize::MAX)
        }
    }
}

impl Iterator for Candidates {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.row >= self.max_y || self.min_x >= self.max_x {
            return None;
        }
        // col < max_x and row < max_y, both of which came from i32 values.
        let point = Point::new(self.col as i32, self.row as i32);
        self.col += self.step;
        if self.col >= self.max_x {
            self.col = self.min_x;
            self.row += self.step;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.row >= self.max_y || self.min_x >= self.max_x {
            return (0, Some(0));
        }
        let per_row = Self::steps(self.max_x - self.min_x, self.step);
        let rows_after = Self::steps(self.max_y - self.row, self.step).saturating_sub(1);
        let this_row = Self::steps(self.max_x - self.col, self.step);
        let total = rows_after.saturating_mul(per_row).saturating_add(this_row);
        (total, Some(total))
    }
}

impl ExactSizeIterator for Candidates {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn pt(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    fn square() -> Vec<Point> {
        pts(&[(0, 0), (100, 0), (100, 100), (0, 100)])
    }

    fn sampler(tile: i32) -> GridSampler {
        GridSampler::new(TileSize::new(tile).unwrap())
    }

    #[derive(Default)]
    struct Recorder {
        bounds: Option<BoundingBox>,
        seen: Vec<(Point, bool)>,
        summary: Option<SampleSummary>,
    }

    impl SampleObserver for Recorder {
        fn on_bounds(&mut self, bounds: &BoundingBox) {
            self.bounds = Some(*bounds);
        }

        fn on_candidate(&mut self, candidate: Point, accepted: bool) {
            self.seen.push((candidate, accepted));
        }

        fn on_finished(&mut self, summary: &SampleSummary) {
            self.summary = Some(*summary);
        }
    }

    #[test]
    fn test_square_outline_all_corners() {
        let anchors = generate_points(&square(), 40).unwrap();
        assert_eq!(anchors, pts(&[(0, 0), (40, 0), (0, 40), (40, 40)]));
    }

    #[test]
    fn test_square_outline_anchor_only() {
        let anchors = sampler(40).with_fit(TileFit::AnchorOnly).generate_points(&square());
        assert_eq!(
            anchors,
            pts(&[(0, 0), (40, 0), (80, 0), (0, 40), (40, 40), (80, 40), (0, 80), (40, 80), (80, 80)])
        );
    }

    #[test]
    fn test_square_outline_legacy_rule() {
        let legacy = sampler(40).with_orientation_rule(OrientationRule::Legacy);
        assert!(legacy.generate_points(&square()).is_empty());
        assert_eq!(
            legacy.with_fit(TileFit::AnchorOnly).generate_points(&square()),
            pts(&[(0, 0), (40, 0), (80, 0)])
        );
    }

    #[test]
    fn test_degenerate_outline_is_empty() {
        assert!(generate_points(&pts(&[(0, 0), (100, 0)]), 10).unwrap().is_empty());
        assert!(generate_points(&[], 10).unwrap().is_empty());
        // Three collinear vertices enclose nothing.
        assert!(generate_points(&pts(&[(0, 0), (10, 0), (20, 0)]), 5).unwrap().is_empty());
    }

    #[test]
    fn test_tile_larger_than_triangle() {
        let tri = pts(&[(0, 0), (30, 0), (0, 30)]);
        assert!(generate_points(&tri, 40).unwrap().is_empty());
        assert_eq!(generate_points(&tri, 10).unwrap(), pts(&[(0, 0), (10, 0), (0, 10)]));
    }

    #[test]
    fn test_concave_outlines() {
        let l_shape = pts(&[(0, 0), (120, 0), (120, 40), (40, 40), (40, 120), (0, 120)]);
        assert_eq!(
            generate_points(&l_shape, 40).unwrap(),
            pts(&[(0, 0), (40, 0), (80, 0), (0, 40), (0, 80)])
        );

        // Corner sampling cannot see the notch when all four corners sit on its rim.
        let u_shape = pts(&[(0, 0), (90, 0), (90, 90), (60, 90), (60, 30), (30, 30), (30, 90), (0, 90)]);
        let anchors = generate_points(&u_shape, 30).unwrap();
        assert_eq!(anchors.len(), 9);
        assert!(anchors.contains(&pt(30, 30)));
    }

    #[test]
    fn test_negative_coordinates() {
        let centered = pts(&[(-50, -50), (50, -50), (50, 50), (-50, 50)]);
        assert_eq!(
            generate_points(&centered, 50).unwrap(),
            pts(&[(-50, -50), (0, -50), (-50, 0), (0, 0)])
        );
    }

    #[test]
    fn test_invalid_tile_size() {
        assert!(matches!(generate_points(&square(), 0), Err(LayoutError::InvalidTileSize(_))));
        assert!(matches!(generate_points(&square(), -40), Err(LayoutError::InvalidTileSize(_))));
    }

    #[test]
    fn test_candidates_row_major_exclusive_upper_bound() {
        let grid: Vec<_> = sampler(40).candidates(&square()).collect();
        assert_eq!(
            grid,
            pts(&[(0, 0), (40, 0), (80, 0), (0, 40), (40, 40), (80, 40), (0, 80), (40, 80), (80, 80)])
        );
        let grid: Vec<_> = sampler(50).candidates(&square()).collect();
        assert_eq!(grid, pts(&[(0, 0), (50, 0), (0, 50), (50, 50)]));
        assert_eq!(sampler(40).candidates(&pts(&[(0, 0), (5, 5)])).count(), 0);
    }

    #[test]
    fn test_candidates_size_hint() {
        let mut grid = sampler(40).candidates(&square());
        assert_eq!(grid.len(), 9);
        grid.next();
        grid.next();
        grid.next();
        assert_eq!(grid.len(), 6);
        grid.next();
        assert_eq!(grid.len(), 5);
        assert_eq!(grid.count(), 5);
    }

    #[test]
    fn test_candidates_near_coordinate_limit() {
        let far = pts(&[(i32::MAX - 100, 0), (i32::MAX, 0), (i32::MAX, 100), (i32::MAX - 100, 100)]);
        let grid: Vec<_> = sampler(60).candidates(&far).collect();
        assert_eq!(
            grid,
            pts(&[(i32::MAX - 100, 0), (i32::MAX - 40, 0), (i32::MAX - 100, 60), (i32::MAX - 40, 60)])
        );
    }

    #[test]
    fn test_outline_touching_coordinate_limit_yields_tiles() {
        let far = pts(&[(i32::MAX - 100, 0), (i32::MAX, 0), (i32::MAX, 100), (i32::MAX - 100, 100)]);
        assert_eq!(
            generate_points(&far, 50).unwrap(),
            pts(&[(i32::MAX - 100, 0), (i32::MAX - 50, 0), (i32::MAX - 100, 50), (i32::MAX - 50, 50)])
        );
    }

    #[test]
    fn test_observer_sees_every_candidate() {
        let mut recorder = Recorder::default();
        let anchors = sampler(40).generate_points_observed(&square(), &mut recorder);

        assert_eq!(recorder.bounds, BoundingBox::from_points(&square()));
        assert_eq!(recorder.seen.len(), 9);
        let accepted: Vec<_> = recorder.seen.iter().filter(|(_, ok)| *ok).map(|(p, _)| *p).collect();
        assert_eq!(accepted, anchors);
        assert_eq!(recorder.summary, Some(SampleSummary { visited: 9, accepted: 4 }));
    }

    #[test]
    fn test_observer_on_degenerate_outline() {
        let mut recorder = Recorder::default();
        let anchors = sampler(10).generate_points_observed(&pts(&[(0, 0), (1, 1)]), &mut recorder);
        assert!(anchors.is_empty());
        assert!(recorder.bounds.is_none());
        assert_eq!(recorder.summary, Some(SampleSummary::default()));
    }

    #[test]
    fn test_tracing_observer_does_not_change_result() {
        let s = sampler(20);
        let mut observer = crate::observer::TracingObserver;
        assert_eq!(s.generate_points_observed(&square(), &mut observer), s.generate_points(&square()));
    }

    #[test]
    fn test_determinism_and_bounds_on_random_outlines() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..60 {
            let n = rng.random_range(3..9);
            let outline: Vec<Point> = (0..n)
                .map(|_| pt(rng.random_range(-200..200), rng.random_range(-200..200)))
                .collect();
            let s = sampler(rng.random_range(5..60));

            let first = s.generate_points(&outline);
            let second = s.generate_points(&outline);
            assert_eq!(first, second);

            let bounds = BoundingBox::from_points(&outline).unwrap();
            assert!(first.iter().all(|p| bounds.contains(*p)));
            assert!(first.windows(2).all(|w| (w[0].y, w[0].x) < (w[1].y, w[1].x)));
        }
    }

    #[test]
    fn test_accessors() {
        let s = sampler(25)
            .with_fit(TileFit::AnchorOnly)
            .with_orientation_rule(OrientationRule::Legacy);
        assert_eq!(s.tile_size().get(), 25);
        assert_eq!(s.fit(), TileFit::AnchorOnly);
        assert_eq!(s.orientation_rule(), OrientationRule::Legacy);
    }
}
