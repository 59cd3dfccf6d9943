mod boundary_normal;

pub use boundary_normal::{BoundaryNormal, NormalEstimate, UnitNormal};
