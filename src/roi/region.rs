use tracing::debug;

use crate::error::Result;
use crate::geometry::BoundarySegment;
use crate::math::Point2;
use crate::operations::{BoundaryNormal, BoundaryOffset2D, NormalEstimate, OffsetBoundary};
use crate::tessellation::{FittedCurve, TessellateBoundary, TessellationParams};

use super::RoiParams;

/// A constructed region of interest: the primary boundary it was built
/// from, the estimated normal, and the far boundary with its connectors.
///
/// An `Roi` is a snapshot. Editing the session's points afterwards does not
/// change it; see [`Roi::is_built_from`].
#[derive(Debug, Clone, PartialEq)]
pub struct Roi {
    primary: Vec<Point2>,
    params: RoiParams,
    normal: NormalEstimate,
    offset: OffsetBoundary,
    offset_curve: Option<FittedCurve>,
}

impl Roi {
    /// Builds an ROI from boundary points.
    ///
    /// For the parallel-curve style the shifted boundary is also fitted and
    /// sampled with `tessellation`, the same way the primary boundary is.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if fewer than 2 points are given.
    pub fn build(
        points: &[Point2],
        params: RoiParams,
        tessellation: TessellationParams,
    ) -> Result<Self> {
        let normal = BoundaryNormal::new(points).execute()?;
        let offset = BoundaryOffset2D::new(
            points,
            normal.normal,
            params.depth_pixels(),
            params.style(),
        )
        .execute()?;

        let offset_curve = match offset.offset_points() {
            Some(shifted) => Some(TessellateBoundary::new(shifted, tessellation).execute()?),
            None => None,
        };

        debug!(
            style = ?params.style(),
            depth_pixels = params.depth_pixels(),
            slope = normal.slope,
            normal_x = normal.normal.x,
            normal_y = normal.normal.y,
            points = points.len(),
            "built ROI"
        );

        Ok(Self {
            primary: points.to_vec(),
            params,
            normal,
            offset,
            offset_curve,
        })
    }

    /// Returns the primary boundary points the ROI was built from.
    #[must_use]
    pub fn primary(&self) -> &[Point2] {
        &self.primary
    }

    /// Returns the parameters the ROI was built with.
    #[must_use]
    pub fn params(&self) -> RoiParams {
        self.params
    }

    /// Returns the slope and unit normal used for the offset.
    #[must_use]
    pub fn normal(&self) -> NormalEstimate {
        self.normal
    }

    /// Returns the far boundary and connectors.
    #[must_use]
    pub fn offset(&self) -> &OffsetBoundary {
        &self.offset
    }

    /// Returns the straight segments of the ROI outline.
    #[must_use]
    pub fn segments(&self) -> &[BoundarySegment] {
        self.offset.segments()
    }

    /// Returns the shifted boundary points (parallel-curve style only).
    /// Always the same length as [`Roi::primary`].
    #[must_use]
    pub fn offset_points(&self) -> Option<&[Point2]> {
        self.offset.offset_points()
    }

    /// Returns the sampled far boundary (parallel-curve style only).
    #[must_use]
    pub fn offset_curve(&self) -> Option<&FittedCurve> {
        self.offset_curve.as_ref()
    }

    /// Returns `true` if this ROI was built from exactly `points`.
    #[must_use]
    pub fn is_built_from(&self, points: &[Point2]) -> bool {
        self.primary == points
    }
}
