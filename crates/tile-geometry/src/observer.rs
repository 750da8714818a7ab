//! Progress hooks for the grid sampler.
//!
//! The sampler reports what it does through [`SampleObserver`]. Nothing is
//! reported unless the caller passes an observer; [`TracingObserver`] forwards
//! the events to `tracing`.

use tracing::{debug, trace};

use crate::point::Point;
use crate::polygon::BoundingBox;

/// Totals for one sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleSummary {
    /// Number of grid candidates tested.
    pub visited: usize,
    /// Number of candidates whose tile fit inside the outline.
    pub accepted: usize,
}

/// Receives sampling events. Every method defaults to doing nothing.
pub trait SampleObserver {
    /// Called once with the outline's bounds, before any candidate is tested.
    fn on_bounds(&mut self, _bounds: &BoundingBox) {}

    /// Called for every grid candidate, in scan order.
    fn on_candidate(&mut self, _candidate: Point, _accepted: bool) {}

    /// Called once when the scan is complete.
    fn on_finished(&mut self, _summary: &SampleSummary) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SampleObserver for NoopObserver {}

/// Observer that emits `tracing` events.
///
/// Bounds and the final summary go out at `DEBUG`, each candidate at `TRACE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SampleObserver for TracingObserver {
    fn on_bounds(&mut self, bounds: &BoundingBox) {
        debug!(
            min_x = bounds.min_x,
            min_y = bounds.min_y,
            max_x = bounds.max_x,
            max_y = bounds.max_y,
            "Outline bounds computed"
        );
    }

    fn on_candidate(&mut self, candidate: Point, accepted: bool) {
        trace!(x = candidate.x, y = candidate.y, accepted, "Tested grid candidate");
    }

    fn on_finished(&mut self, summary: &SampleSummary) {
        debug!(
            visited = summary.visited,
            accepted = summary.accepted,
            "Grid sampling finished"
        );
    }
}

impl<O: SampleObserver + ?Sized> SampleObserver for &mut O {
    fn on_bounds(&mut self, bounds: &BoundingBox) {
        (**self).on_bounds(bounds);
    }

    fn on_candidate(&mut self, candidate: Point, accepted: bool) {
        (**self).on_candidate(candidate, accepted);
    }

    fn on_finished(&mut self, summary: &SampleSummary) {
        (**self).on_finished(summary);
    }
}
