use crate::math::Point2;

/// A straight connector between two points of an ROI outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySegment {
    pub start: Point2,
    pub end: Point2,
}

impl BoundarySegment {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }
}
