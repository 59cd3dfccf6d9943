pub mod point_set;
pub mod segment;
pub mod spline;

pub use point_set::{PointSet, Proximity, DEFAULT_REMOVE_TOLERANCE};
pub use segment::BoundarySegment;
pub use spline::InterpolatingSpline2D;
