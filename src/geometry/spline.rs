use nalgebra::DMatrix;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Interpolating parametric spline through an ordered 2D point sequence.
///
/// The curve passes through every input point. Parameters are the
/// cumulative chord lengths normalized to `[0, 1]`, so the first point sits
/// at `t = 0` and the last at `t = 1`.
///
/// Piece degree depends on the point count:
/// - 2 points: the straight chord
/// - 3 points: the single interpolating parabola
/// - 4+ points: a C2 cubic with not-a-knot end conditions (third derivative
///   continuous across the first and last interior knots)
#[derive(Debug, Clone)]
pub struct InterpolatingSpline2D {
    knots: Vec<f64>,
    points: Vec<Point2>,
    /// Second derivative with respect to `t` at each knot.
    second_derivs: Vec<Vector2>,
}

impl InterpolatingSpline2D {
    /// Fits the spline through `points`.
    ///
    /// # Errors
    ///
    /// - `GeometryError::Degenerate` if fewer than 2 points are given, two
    ///   consecutive points coincide, or the linear system is singular
    /// - `GeometryError::NonFinite` if a coordinate or solved value is not finite
    pub fn fit(points: &[Point2]) -> Result<Self> {
        let m = points.len();
        if m < 2 {
            return Err(GeometryError::Degenerate(
                "at least 2 points are required for a spline".to_owned(),
            )
            .into());
        }
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(GeometryError::NonFinite.into());
        }

        let knots = chord_length_knots(points)?;
        let second_derivs = if m == 2 {
            vec![Vector2::zeros(); 2]
        } else {
            solve_second_derivatives(points, &knots)?
        };

        Ok(Self {
            knots,
            points: points.to_vec(),
            second_derivs,
        })
    }

    /// Returns the knot parameters (one per input point, `0` to `1`).
    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Evaluates the spline at `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point2 {
        let t = t.clamp(0.0, 1.0);
        let last_piece = self.knots.len() - 2;
        let i = self
            .knots
            .partition_point(|&k| k <= t)
            .saturating_sub(1)
            .min(last_piece);

        let h = self.knots[i + 1] - self.knots[i];
        let a = (self.knots[i + 1] - t) / h;
        let b = (t - self.knots[i]) / h;

        let linear = self.points[i].coords * a + self.points[i + 1].coords * b;
        let bend = (self.second_derivs[i] * (a * a * a - a)
            + self.second_derivs[i + 1] * (b * b * b - b))
            * (h * h / 6.0);
        Point2::from(linear + bend)
    }

    /// Evaluates the spline at `count` equally spaced parameters from 0 to 1
    /// inclusive.
    #[must_use]
    pub fn sample(&self, count: usize) -> Vec<Point2> {
        match count {
            0 => Vec::new(),
            1 => vec![self.evaluate(0.0)],
            _ => {
                #[allow(clippy::cast_precision_loss)]
                let denom = (count - 1) as f64;
                (0..count)
                    .map(|j| {
                        #[allow(clippy::cast_precision_loss)]
                        let t = j as f64 / denom;
                        self.evaluate(t)
                    })
                    .collect()
            }
        }
    }
}

/// Cumulative chord lengths normalized to `[0, 1]`.
fn chord_length_knots(points: &[Point2]) -> Result<Vec<f64>> {
    let mut knots = Vec::with_capacity(points.len());
    knots.push(0.0);
    let mut total = 0.0;
    for w in points.windows(2) {
        let chord = (w[1] - w[0]).norm();
        if chord <= TOLERANCE {
            return Err(GeometryError::Degenerate(
                "consecutive points coincide".to_owned(),
            )
            .into());
        }
        total += chord;
        knots.push(total);
    }
    for k in &mut knots {
        *k /= total;
    }
    // Pin the end exactly so sampling at t = 1 lands on the last point.
    if let Some(last) = knots.last_mut() {
        *last = 1.0;
    }
    Ok(knots)
}

/// Solves for the second derivatives at each knot (x and y together).
fn solve_second_derivatives(points: &[Point2], knots: &[f64]) -> Result<Vec<Vector2>> {
    let m = points.len();
    let h: Vec<f64> = knots.windows(2).map(|w| w[1] - w[0]).collect();

    let mut a = DMatrix::<f64>::zeros(m, m);
    let mut rhs = DMatrix::<f64>::zeros(m, 2);

    // Continuity of the second derivative at interior knots.
    for i in 1..m - 1 {
        a[(i, i - 1)] = h[i - 1];
        a[(i, i)] = 2.0 * (h[i - 1] + h[i]);
        a[(i, i + 1)] = h[i];
        let slope_next = (points[i + 1] - points[i]) / h[i];
        let slope_prev = (points[i] - points[i - 1]) / h[i - 1];
        let r = (slope_next - slope_prev) * 6.0;
        rhs[(i, 0)] = r.x;
        rhs[(i, 1)] = r.y;
    }

    if m == 3 {
        // Constant second derivative: one parabola through all three points.
        a[(0, 0)] = 1.0;
        a[(0, 1)] = -1.0;
        a[(2, 1)] = -1.0;
        a[(2, 2)] = 1.0;
    } else {
        // Not-a-knot: third derivative continuous at knots 1 and m-2.
        a[(0, 0)] = h[1];
        a[(0, 1)] = -(h[0] + h[1]);
        a[(0, 2)] = h[0];
        let (p, q) = (h[m - 3], h[m - 2]);
        a[(m - 1, m - 3)] = q;
        a[(m - 1, m - 2)] = -(p + q);
        a[(m - 1, m - 1)] = p;
    }

    let solution = a
        .lu()
        .solve(&rhs)
        .ok_or_else(|| GeometryError::Degenerate("singular spline system".to_owned()))?;

    let derivs: Vec<Vector2> = (0..m)
        .map(|i| Vector2::new(solution[(i, 0)], solution[(i, 1)]))
        .collect();
    if derivs.iter().any(|d| !d.x.is_finite() || !d.y.is_finite()) {
        return Err(GeometryError::NonFinite.into());
    }
    Ok(derivs)
}
