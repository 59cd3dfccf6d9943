//! Boundary fitting and depth-offset regions of interest.
//!
//! A user clicks boundary points on an image; the crate fits a smooth curve
//! through them, estimates the boundary's dominant direction, and derives a
//! second boundary a fixed physical depth away. Front-ends feed point edits
//! into a [`RoiSession`] and draw the plain geometry it returns.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod roi;
pub mod tessellation;

pub use error::{Result, RoiError};
pub use geometry::{BoundarySegment, PointSet, Proximity};
pub use math::Point2;
pub use operations::{NormalEstimate, OffsetBoundary, OffsetStyle, UnitNormal};
pub use roi::{BoundaryEditor, RenderFrame, RenderSink, Roi, RoiParams, RoiSession, RoiState};
pub use tessellation::{FittedCurve, TessellationParams};
