use nalgebra::Unit;
use tracing::warn;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::regression_2d::least_squares_slope;
use crate::math::{Point2, Vector2, TOLERANCE};

/// A unit-length 2D vector.
pub type UnitNormal = Unit<Vector2>;

/// Dominant direction of a boundary and the normal derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalEstimate {
    /// Least-squares slope of `y` on `x` (0 when the regression is undefined).
    pub slope: f64,
    /// `(-slope, 1)` normalized.
    pub normal: UnitNormal,
}

impl NormalEstimate {
    /// Builds the estimate for a given slope.
    ///
    /// The normal is `(-slope, 1) / sqrt(slope^2 + 1)`. It always has a
    /// positive y-component: its sign does not follow the trend of the
    /// points, so callers choose the side by the sign of the offset depth.
    ///
    /// # Errors
    ///
    /// - `GeometryError::NonFinite` if `slope` is NaN or infinite
    /// - `GeometryError::ZeroVector` if the candidate normal has no length
    pub fn from_slope(slope: f64) -> Result<Self> {
        if !slope.is_finite() {
            return Err(GeometryError::NonFinite.into());
        }
        // hypot keeps the candidate near unit length for huge slopes.
        let len = slope.hypot(1.0);
        let normal = Unit::try_new(Vector2::new(-slope / len, 1.0 / len), TOLERANCE)
            .ok_or(GeometryError::ZeroVector)?;
        Ok(Self { slope, normal })
    }
}

/// Estimates the best-fit line through boundary points and returns its
/// unit normal.
#[derive(Debug)]
pub struct BoundaryNormal<'a> {
    points: &'a [Point2],
}

impl<'a> BoundaryNormal<'a> {
    /// Creates a new `BoundaryNormal` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query.
    ///
    /// Regression of `y` on `x` is undefined for a vertical point cloud. In
    /// that case the slope is taken as 0 (the minimum-norm least-squares
    /// solution), which yields the normal `(0, 1)`: parallel to the points
    /// rather than perpendicular to them. This is logged, not corrected.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if fewer than 2 points are given.
    pub fn execute(&self) -> Result<NormalEstimate> {
        if self.points.len() < 2 {
            return Err(OperationError::InvalidInput(
                "at least 2 points are required to estimate a direction".to_owned(),
            )
            .into());
        }

        let slope = match least_squares_slope(self.points) {
            Ok(slope) => slope,
            Err(err) => {
                warn!(error = %err, "boundary regression undefined, using slope 0");
                0.0
            }
        };
        NormalEstimate::from_slope(slope)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RoiError;
    use approx::assert_relative_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn horizontal_boundary_normal_points_down_screen() {
        let input = pts(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
        let est = BoundaryNormal::new(&input).execute().unwrap();
        assert_relative_eq!(est.slope, 0.0, epsilon = 1e-12);
        assert_relative_eq!(est.normal.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(est.normal.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn diagonal_boundary() {
        let input = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        let est = BoundaryNormal::new(&input).execute().unwrap();
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(est.slope, 1.0, epsilon = 1e-12);
        assert_relative_eq!(est.normal.x, -h, epsilon = 1e-12);
        assert_relative_eq!(est.normal.y, h, epsilon = 1e-12);
    }

    #[test]
    fn normal_is_perpendicular_to_fitted_direction() {
        let input = pts(&[(0.0, 1.0), (2.0, 2.1), (4.0, 2.9), (6.0, 4.2)]);
        let est = BoundaryNormal::new(&input).execute().unwrap();
        let dir = Vector2::new(1.0, est.slope);
        assert_relative_eq!(est.normal.dot(&dir), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn sign_does_not_follow_point_order() {
        let forward = pts(&[(0.0, 0.0), (5.0, 2.0), (10.0, 4.0)]);
        let backward: Vec<Point2> = forward.iter().rev().copied().collect();
        let a = BoundaryNormal::new(&forward).execute().unwrap();
        let b = BoundaryNormal::new(&backward).execute().unwrap();
        assert_relative_eq!(a.normal.x, b.normal.x, epsilon = 1e-12);
        assert_relative_eq!(a.normal.y, b.normal.y, epsilon = 1e-12);
    }

    #[test]
    fn vertical_boundary_is_unit_and_finite() {
        let input = pts(&[(5.0, 0.0), (5.0, 10.0), (5.0, 20.0)]);
        let est = BoundaryNormal::new(&input).execute().unwrap();
        assert!(est.normal.x.is_finite() && est.normal.y.is_finite());
        assert_relative_eq!(est.normal.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(est.normal.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn steep_slopes_stay_unit_length() {
        for slope in [1e-9, 3.0, -250.0, 1e8, -1e200, 1e300] {
            let est = NormalEstimate::from_slope(slope).unwrap();
            assert_relative_eq!(est.normal.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn non_finite_slope_is_rejected() {
        for slope in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = NormalEstimate::from_slope(slope).unwrap_err();
            assert!(matches!(err, RoiError::Geometry(GeometryError::NonFinite)));
        }
    }

    #[test]
    fn steep_cloud_far_from_origin_turns_the_normal() {
        let input = pts(&[(100_000.0, 0.0), (100_000.001, 5.0)]);
        let est = BoundaryNormal::new(&input).execute().unwrap();
        assert_relative_eq!(est.normal.x, -1.0, epsilon = 1e-6);
        assert!(est.normal.y > 0.0 && est.normal.y < 1e-3);
    }

    #[test]
    fn one_point_is_invalid_input() {
        let input = pts(&[(1.0, 2.0)]);
        let err = BoundaryNormal::new(&input).execute().unwrap_err();
        assert!(matches!(err, RoiError::Operation(OperationError::InvalidInput(_))));
    }
}
