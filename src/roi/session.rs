use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::{PointSet, Proximity};
use crate::math::Point2;
use crate::operations::{BoundaryNormal, NormalEstimate, OffsetStyle};
use crate::tessellation::{FittedCurve, TessellateBoundary, TessellationParams};

use super::{BoundaryEditor, RenderFrame, RenderSink, Roi, RoiParams};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoiState {
    /// No points and no ROI.
    Empty,
    /// Points placed, no ROI.
    Drafting,
    /// An ROI has been constructed.
    Bounded,
}

/// Boundary editing state for one image and one client.
///
/// Holds the user's points, the last accepted ROI parameters and the ROI
/// built from them. Every client owns its own session; nothing is shared.
#[derive(Debug, Clone, Default)]
pub struct RoiSession {
    points: PointSet,
    params: RoiParams,
    tessellation: TessellationParams,
    roi: Option<Roi>,
}

impl RoiSession {
    /// Creates an empty session with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session with the given ROI and sampling parameters.
    #[must_use]
    pub fn with_params(params: RoiParams, tessellation: TessellationParams) -> Self {
        Self {
            params,
            tessellation,
            ..Self::default()
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> RoiState {
        if self.roi.is_some() {
            RoiState::Bounded
        } else if self.points.is_empty() {
            RoiState::Empty
        } else {
            RoiState::Drafting
        }
    }

    /// Returns the primary boundary points.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        self.points.points()
    }

    /// Returns the stored ROI parameters.
    #[must_use]
    pub fn params(&self) -> RoiParams {
        self.params
    }

    /// Returns the sampling parameters.
    #[must_use]
    pub fn tessellation(&self) -> TessellationParams {
        self.tessellation
    }

    /// Returns the current ROI, if one has been built.
    #[must_use]
    pub fn roi(&self) -> Option<&Roi> {
        self.roi.as_ref()
    }

    /// Returns `true` if an ROI exists but the points have changed since it
    /// was built.
    #[must_use]
    pub fn is_roi_stale(&self) -> bool {
        self.roi
            .as_ref()
            .is_some_and(|roi| !roi.is_built_from(self.points.points()))
    }

    /// Removes points whose `metric` distance to `p` is `<= tolerance`.
    pub fn remove_within(&mut self, p: Point2, tolerance: f64, metric: Proximity) -> usize {
        let removed = self.points.remove_within(p, tolerance, metric);
        if removed > 0 {
            debug!(removed, remaining = self.points.len(), "removed boundary points");
        }
        removed
    }

    /// Stores new scale and depth from user-entered text, keeping the
    /// current style.
    ///
    /// # Errors
    ///
    /// Returns a `ParameterError` if either value is invalid. The stored
    /// parameters and the ROI are left unchanged.
    pub fn update_params(&mut self, pixel_per_um: &str, depth_um: &str) -> Result<RoiParams> {
        let params = RoiParams::parse(pixel_per_um, depth_um, self.params.style())
            .inspect_err(|err| warn!(error = %err, "rejected ROI parameters"))?;
        self.params = params;
        Ok(params)
    }

    /// Sets the offset style used by later ROI constructions.
    pub fn set_style(&mut self, style: OffsetStyle) {
        self.params = self.params.with_style(style);
    }

    /// Builds the ROI from the current points and the stored parameters.
    ///
    /// With fewer than 2 points nothing changes and `None` is returned.
    pub fn create_roi(&mut self) -> Option<&Roi> {
        self.build_offset(self.params)
    }

    /// Builds the ROI from the current points with explicit parameters.
    /// The stored parameters are not changed.
    ///
    /// With fewer than 2 points nothing changes and `None` is returned.
    pub fn create_roi_with(&mut self, params: RoiParams) -> Option<&Roi> {
        self.build_offset(params)
    }

    /// Parses scale and depth, stores them, and builds the ROI.
    ///
    /// With fewer than 2 points this returns `Ok(None)` before looking at
    /// the text.
    ///
    /// # Errors
    ///
    /// Returns a `ParameterError` if either value is invalid. The stored
    /// parameters and any existing ROI are left unchanged.
    pub fn create_roi_from_input(
        &mut self,
        pixel_per_um: &str,
        depth_um: &str,
        style: OffsetStyle,
    ) -> Result<Option<&Roi>> {
        if !self.points.is_boundary() {
            return Ok(None);
        }
        let params = RoiParams::parse(pixel_per_um, depth_um, style)
            .inspect_err(|err| warn!(error = %err, "rejected ROI parameters"))?;
        self.params = params;
        Ok(self.build_offset(params))
    }

    /// Drops the ROI, keeping the points.
    pub fn reset_roi(&mut self) {
        self.roi = None;
    }

    /// Drops the ROI and every point.
    pub fn clear_area(&mut self) {
        self.points.clear();
        self.roi = None;
    }

    /// Same as [`RoiSession::clear_area`].
    pub fn delete_boundary(&mut self) {
        self.clear_area();
    }

    /// Same as [`RoiSession::clear_area`].
    pub fn reset_points(&mut self) {
        self.clear_area();
    }

    /// Returns everything the session currently displays.
    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            points: self.points.points().to_vec(),
            curve: self.fit_curve(),
            segments: self
                .roi
                .as_ref()
                .map(|roi| roi.segments().to_vec())
                .unwrap_or_default(),
            offset_curve: self.roi.as_ref().and_then(|roi| roi.offset_curve().cloned()),
        }
    }

    /// Draws the current frame to `sink`.
    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        self.frame().draw(sink);
    }
}

impl BoundaryEditor for RoiSession {
    fn add_point(&mut self, p: Point2) {
        self.points.add(p);
    }

    fn remove_near(&mut self, p: Point2, tolerance: f64) -> usize {
        self.remove_within(p, tolerance, Proximity::Manhattan)
    }

    fn fit_curve(&self) -> Option<FittedCurve> {
        TessellateBoundary::new(self.points.points(), self.tessellation)
            .execute()
            .ok()
    }

    fn compute_normal(&self) -> Option<NormalEstimate> {
        BoundaryNormal::new(self.points.points()).execute().ok()
    }

    fn build_offset(&mut self, params: RoiParams) -> Option<&Roi> {
        if !self.points.is_boundary() {
            debug!(points = self.points.len(), "not enough points for an ROI");
            return None;
        }
        match Roi::build(self.points.points(), params, self.tessellation) {
            Ok(roi) => {
                self.roi = Some(roi);
                self.roi.as_ref()
            }
            Err(err) => {
                warn!(error = %err, "ROI construction failed");
                None
            }
        }
    }

    fn reset(&mut self) {
        self.reset_roi();
    }

    fn clear(&mut self) {
        self.clear_area();
    }
}
