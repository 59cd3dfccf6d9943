mod boundary_offset_2d;

pub use boundary_offset_2d::{BoundaryOffset2D, OffsetBoundary, OffsetStyle};
