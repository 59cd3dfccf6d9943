pub mod offset;
pub mod query;

pub use offset::{BoundaryOffset2D, OffsetBoundary, OffsetStyle};
pub use query::{BoundaryNormal, NormalEstimate, UnitNormal};
