use crate::math::Point2;
use crate::operations::NormalEstimate;
use crate::tessellation::FittedCurve;

use super::{Roi, RoiParams};

/// Editing interface shared by every front-end.
///
/// Desktop, HTTP and notebook shells drive a boundary through this trait
/// and never touch the geometry directly.
pub trait BoundaryEditor {
    /// Appends a boundary point.
    fn add_point(&mut self, p: Point2);

    /// Removes points within Manhattan distance `tolerance` of `p`.
    /// Returns how many were removed.
    fn remove_near(&mut self, p: Point2, tolerance: f64) -> usize;

    /// Fits the current points. `None` with fewer than 2 points.
    fn fit_curve(&self) -> Option<FittedCurve>;

    /// Estimates the boundary normal. `None` with fewer than 2 points.
    fn compute_normal(&self) -> Option<NormalEstimate>;

    /// Builds the ROI from the current points. With fewer than 2 points
    /// nothing changes and `None` is returned.
    fn build_offset(&mut self, params: RoiParams) -> Option<&Roi>;

    /// Drops the ROI, keeping the points.
    fn reset(&mut self);

    /// Drops the ROI and the points.
    fn clear(&mut self);
}
