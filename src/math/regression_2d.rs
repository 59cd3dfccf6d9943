use crate::error::{GeometryError, Result};

use super::Point2;

/// Ordinary least-squares slope of `y` on `x` over all `points` (x is the
/// independent variable).
///
/// Sums are taken over centered coordinates, so large image offsets do not
/// swamp the variance terms.
///
/// # Errors
///
/// - `GeometryError::Degenerate` if fewer than 2 points are given or the
///   x-coordinates have no spread (vertical point cloud)
/// - `GeometryError::NonFinite` if any coordinate or the slope is not finite
pub fn least_squares_slope(points: &[Point2]) -> Result<f64> {
    if points.len() < 2 {
        return Err(GeometryError::Degenerate(
            "at least 2 points are required for a regression".to_owned(),
        )
        .into());
    }
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(GeometryError::NonFinite.into());
    }

    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut max_abs_x: f64 = 0.0;
    for p in points {
        let dx = p.x - mean_x;
        sxx += dx * dx;
        sxy += dx * (p.y - mean_y);
        max_abs_x = max_abs_x.max(p.x.abs());
    }

    // Each centered x carries rounding error of about eps * |x|; spread
    // below the accumulated noise counts as zero.
    let noise = (n * f64::EPSILON * max_abs_x).powi(2);
    if sxx <= noise {
        return Err(GeometryError::Degenerate("x-coordinates have no spread".to_owned()).into());
    }

    let slope = sxy / sxx;
    if !slope.is_finite() {
        return Err(GeometryError::NonFinite.into());
    }
    Ok(slope)
}
