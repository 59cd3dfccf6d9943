use crate::error::{OperationError, Result};
use crate::geometry::BoundarySegment;
use crate::math::Point2;
use crate::operations::query::UnitNormal;

/// How the far boundary of an ROI is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetStyle {
    /// Only the end points are shifted; the far edge is one straight segment.
    #[default]
    Linear,
    /// Every point is shifted; the far edge follows the boundary shape.
    ParallelCurve,
}

/// The far boundary of an ROI together with its connectors.
#[derive(Debug, Clone, PartialEq)]
pub enum OffsetBoundary {
    /// Open path `first -> shifted first -> shifted last -> last`.
    Linear { segments: [BoundarySegment; 3] },
    /// Every primary point shifted, plus the two end connectors
    /// `first -> shifted first` and `last -> shifted last`.
    ParallelCurve {
        offset: Vec<Point2>,
        connectors: [BoundarySegment; 2],
    },
}

impl OffsetBoundary {
    /// Returns the construction style.
    #[must_use]
    pub fn style(&self) -> OffsetStyle {
        match self {
            Self::Linear { .. } => OffsetStyle::Linear,
            Self::ParallelCurve { .. } => OffsetStyle::ParallelCurve,
        }
    }

    /// Returns the straight segments to draw (the full path for the linear
    /// style, the end connectors for the parallel-curve style).
    #[must_use]
    pub fn segments(&self) -> &[BoundarySegment] {
        match self {
            Self::Linear { segments } => &segments[..],
            Self::ParallelCurve { connectors, .. } => &connectors[..],
        }
    }

    /// Returns the shifted copy of the primary boundary, if this style has one.
    #[must_use]
    pub fn offset_points(&self) -> Option<&[Point2]> {
        match self {
            Self::Linear { .. } => None,
            Self::ParallelCurve { offset, .. } => Some(offset.as_slice()),
        }
    }
}

/// Shifts a boundary along a fixed normal by a signed pixel depth.
///
/// # Sign Convention
///
/// Every point moves by `normal * depth_pixels`. A negative depth moves the
/// far boundary to the other side of the primary one.
#[derive(Debug)]
pub struct BoundaryOffset2D<'a> {
    points: &'a [Point2],
    normal: UnitNormal,
    depth_pixels: f64,
    style: OffsetStyle,
}

impl<'a> BoundaryOffset2D<'a> {
    /// Creates a new boundary offset operation.
    #[must_use]
    pub fn new(
        points: &'a [Point2],
        normal: UnitNormal,
        depth_pixels: f64,
        style: OffsetStyle,
    ) -> Self {
        Self {
            points,
            normal,
            depth_pixels,
            style,
        }
    }

    /// Executes the offset.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if fewer than 2 points are provided
    /// - `OperationError::InvalidInput` if the depth is not finite
    pub fn execute(&self) -> Result<OffsetBoundary> {
        let (first, last) = match self.points {
            [first, .., last] => (*first, *last),
            _ => {
                return Err(OperationError::InvalidInput(
                    "at least 2 points are required for a boundary offset".to_owned(),
                )
                .into())
            }
        };
        if !self.depth_pixels.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "offset depth must be finite, got {}",
                self.depth_pixels
            ))
            .into());
        }

        let shift = self.normal.into_inner() * self.depth_pixels;
        let shifted_first = first + shift;
        let shifted_last = last + shift;

        Ok(match self.style {
            OffsetStyle::Linear => OffsetBoundary::Linear {
                segments: [
                    BoundarySegment::new(first, shifted_first),
                    BoundarySegment::new(shifted_first, shifted_last),
                    BoundarySegment::new(shifted_last, last),
                ],
            },
            OffsetStyle::ParallelCurve => OffsetBoundary::ParallelCurve {
                offset: self.points.iter().map(|p| p + shift).collect(),
                connectors: [
                    BoundarySegment::new(first, shifted_first),
                    BoundarySegment::new(last, shifted_last),
                ],
            },
        })
    }
}
