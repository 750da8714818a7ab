#![warn(missing_docs)]
#![doc = "Integer polygon geometry for tile layout."]
#![doc = ""]
#![doc = "This crate provides orientation and segment-intersection predicates, ray-casting"]
#![doc = "point-in-polygon tests, and a grid sampler that lists every tile anchor whose"]
#![doc = "footprint fits inside a closed outline."]

pub mod containment;
pub mod error;
pub mod intersect;
pub mod observer;
pub mod orientation;
pub mod point;
pub mod polygon;
pub mod sampler;
pub mod tile;

pub use containment::{is_inside, is_inside_with, is_square_inside, is_square_inside_with};
pub use error::LayoutError;
pub use intersect::{do_intersect, do_intersect_with};
pub use observer::{NoopObserver, SampleObserver, SampleSummary, TracingObserver};
pub use orientation::{legacy_orientation, on_segment, orientation, Orientation, OrientationRule};
pub use point::Point;
pub use polygon::{BoundingBox, Polygon};
pub use sampler::{generate_points, Candidates, GridSampler};
pub use tile::{TileFit, TileSize};
