use crate::geometry::BoundarySegment;
use crate::math::Point2;
use crate::tessellation::FittedCurve;

/// Which boundary a polyline belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolylineKind {
    /// The fitted curve through the user's points.
    Primary,
    /// The fitted far boundary of a parallel-curve ROI.
    Offset,
}

/// Receiver for drawing primitives.
///
/// Implemented by whatever draws or serializes the session: a canvas layer,
/// an image painter, a JSON responder.
pub trait RenderSink {
    /// A user-placed boundary point.
    fn point(&mut self, p: Point2);

    /// A dense polyline.
    fn polyline(&mut self, points: &[Point2], kind: PolylineKind);

    /// A straight ROI segment.
    fn segment(&mut self, segment: &BoundarySegment);
}

/// Everything a session currently displays, as plain geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    /// Primary boundary points in insertion order.
    pub points: Vec<Point2>,
    /// Fitted curve through `points`, if there are at least 2.
    pub curve: Option<FittedCurve>,
    /// Straight ROI segments (empty without an ROI).
    pub segments: Vec<BoundarySegment>,
    /// Fitted far boundary of a parallel-curve ROI.
    pub offset_curve: Option<FittedCurve>,
}

impl RenderFrame {
    /// Emits the frame to `sink`: points, then curves, then segments.
    pub fn draw<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        for p in &self.points {
            sink.point(*p);
        }
        if let Some(curve) = &self.curve {
            sink.polyline(curve.points(), PolylineKind::Primary);
        }
        if let Some(curve) = &self.offset_curve {
            sink.polyline(curve.points(), PolylineKind::Offset);
        }
        for seg in &self.segments {
            sink.segment(seg);
        }
    }
}
