use crate::math::distance_2d::{chebyshev_dist, manhattan_dist};
use crate::math::Point2;

/// Radius used when a click asks to remove nearby boundary points.
pub const DEFAULT_REMOVE_TOLERANCE: f64 = 10.0;

/// Distance metric used by proximity-based removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Proximity {
    /// `|dx| + |dy| <= tolerance` (diamond around the click).
    #[default]
    Manhattan,
    /// `|dx| <= tolerance && |dy| <= tolerance` (square around the click).
    Box,
}

impl Proximity {
    /// Distance from `a` to `b` under this metric.
    #[must_use]
    pub fn distance(self, a: &Point2, b: &Point2) -> f64 {
        match self {
            Self::Manhattan => manhattan_dist(a, b),
            Self::Box => chebyshev_dist(a, b),
        }
    }
}

/// Ordered, user-placed boundary points.
///
/// Insertion order defines the curve parameterization order. Duplicates
/// are allowed and nothing is ever reordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point2>,
}

impl PointSet {
    /// Creates an empty point set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a point set holding `points` in the given order.
    #[must_use]
    pub fn from_points(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Appends `p` unconditionally.
    pub fn add(&mut self, p: Point2) {
        self.points.push(p);
    }

    /// Removes every point within Manhattan distance `tolerance` of `p`
    /// (the boundary itself included). Returns the number of points removed.
    pub fn remove_near(&mut self, p: Point2, tolerance: f64) -> usize {
        self.remove_within(p, tolerance, Proximity::Manhattan)
    }

    /// Removes every point whose `metric` distance to `p` is `<= tolerance`.
    /// Returns the number of points removed.
    pub fn remove_within(&mut self, p: Point2, tolerance: f64, metric: Proximity) -> usize {
        let before = self.points.len();
        // Keep-predicate rather than drop-predicate: NaN distances are dropped.
        self.points.retain(|q| metric.distance(q, &p) > tolerance);
        before - self.points.len()
    }

    /// Removes all points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Returns the points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no points are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` once enough points exist to fit a curve or build an ROI.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        self.points.len() >= 2
    }
}
