mod tessellate_curve;

pub use tessellate_curve::TessellateBoundary;

use crate::math::Point2;

/// Sample count used when a boundary is drawn as a smooth curve.
pub const DEFAULT_SAMPLE_COUNT: usize = 500;

/// Parameters controlling boundary sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TessellationParams {
    /// Number of equally spaced parameter values evaluated along the spline.
    /// Counts below 2 are raised to 2 so both end points are always sampled.
    pub sample_count: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Creates a polyline from ordered points.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }
}

/// Result of sampling a boundary.
///
/// Fitting failures are not errors: they degrade to the raw input polyline,
/// and the variant tells the caller which quality it got.
#[derive(Debug, Clone, PartialEq)]
pub enum FittedCurve {
    /// Dense samples of the interpolating spline.
    Fitted(Polyline),
    /// The input points unchanged, because no valid spline exists.
    Fallback(Polyline),
}

impl FittedCurve {
    /// Returns the polyline regardless of quality.
    #[must_use]
    pub fn polyline(&self) -> &Polyline {
        match self {
            Self::Fitted(p) | Self::Fallback(p) => p,
        }
    }

    /// Returns the vertices regardless of quality.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.polyline().points
    }

    /// Returns `true` if the spline could not be fitted.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}
