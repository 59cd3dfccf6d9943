use super::Point2;

/// Returns the Manhattan (L1) distance between `a` and `b`.
#[must_use]
pub fn manhattan_dist(a: &Point2, b: &Point2) -> f64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Returns the Chebyshev (L-infinity) distance between `a` and `b`.
///
/// A point lies inside the axis-aligned box of half-size `r` around `b`
/// exactly when this distance is `<= r`.
#[must_use]
pub fn chebyshev_dist(a: &Point2, b: &Point2) -> f64 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_diagonal() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(6.0, 6.0);
        assert!((manhattan_dist(&a, &b) - 12.0).abs() < 1e-12);
    }

    #[test]
    fn chebyshev_takes_larger_axis() {
        let a = Point2::new(1.0, -3.0);
        let b = Point2::new(-1.0, 4.0);
        assert!((chebyshev_dist(&a, &b) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn distances_are_symmetric() {
        let a = Point2::new(2.5, 7.0);
        let b = Point2::new(-4.0, 1.5);
        assert!((manhattan_dist(&a, &b) - manhattan_dist(&b, &a)).abs() < 1e-12);
        assert!((chebyshev_dist(&a, &b) - chebyshev_dist(&b, &a)).abs() < 1e-12);
    }
}
