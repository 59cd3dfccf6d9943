use tracing::warn;

use crate::error::{OperationError, Result};
use crate::geometry::InterpolatingSpline2D;
use crate::math::Point2;

use super::{FittedCurve, Polyline, TessellationParams};

/// Fits an interpolating spline through boundary points and samples it.
#[derive(Debug)]
pub struct TessellateBoundary<'a> {
    points: &'a [Point2],
    params: TessellationParams,
}

impl<'a> TessellateBoundary<'a> {
    /// Creates a new `TessellateBoundary` operation.
    #[must_use]
    pub fn new(points: &'a [Point2], params: TessellationParams) -> Self {
        Self { points, params }
    }

    /// Executes the tessellation.
    ///
    /// A spline that cannot be fitted (coincident consecutive points,
    /// singular system, non-finite coordinates) is logged and replaced by the
    /// input points as a [`FittedCurve::Fallback`].
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if fewer than 2 points are given.
    pub fn execute(&self) -> Result<FittedCurve> {
        if self.points.len() < 2 {
            return Err(OperationError::InvalidInput(
                "at least 2 points are required to fit a boundary".to_owned(),
            )
            .into());
        }

        let sample_count = self.params.sample_count.max(2);
        match InterpolatingSpline2D::fit(self.points) {
            Ok(spline) => Ok(FittedCurve::Fitted(Polyline::new(spline.sample(sample_count)))),
            Err(err) => {
                warn!(error = %err, points = self.points.len(), "spline fit failed, using raw polyline");
                Ok(FittedCurve::Fallback(Polyline::new(self.points.to_vec())))
            }
        }
    }
}
