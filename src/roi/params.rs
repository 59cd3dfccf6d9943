use crate::error::{ParameterError, Result};
use crate::operations::OffsetStyle;

/// Default image scale in pixels per micrometre.
pub const DEFAULT_PIXEL_PER_UM: f64 = 1.0;

/// Default offset depth in micrometres.
pub const DEFAULT_DEPTH_UM: f64 = 10.0;

/// Validated scale, depth and style for ROI construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiParams {
    pixel_per_um: f64,
    depth_um: f64,
    style: OffsetStyle,
}

impl Default for RoiParams {
    fn default() -> Self {
        Self {
            pixel_per_um: DEFAULT_PIXEL_PER_UM,
            depth_um: DEFAULT_DEPTH_UM,
            style: OffsetStyle::default(),
        }
    }
}

impl RoiParams {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::NotPositive` if either value, or the depth
    /// in pixels they multiply to, is not a positive finite number.
    pub fn new(pixel_per_um: f64, depth_um: f64, style: OffsetStyle) -> Result<Self> {
        let pixel_per_um = positive("pixel_per_um", pixel_per_um)?;
        let depth_um = positive("depth_um", depth_um)?;
        positive("depth_pixels", depth_um * pixel_per_um)?;
        Ok(Self {
            pixel_per_um,
            depth_um,
            style,
        })
    }

    /// Parses parameters from user-entered text (surrounding whitespace ignored).
    ///
    /// # Errors
    ///
    /// - `ParameterError::Unparseable` if a value is not a number
    /// - `ParameterError::NotPositive` if a value is not a positive finite number
    pub fn parse(pixel_per_um: &str, depth_um: &str, style: OffsetStyle) -> Result<Self> {
        let pixel_per_um = number("pixel_per_um", pixel_per_um)?;
        let depth_um = number("depth_um", depth_um)?;
        Self::new(pixel_per_um, depth_um, style)
    }

    /// Returns a copy with a different offset style.
    #[must_use]
    pub fn with_style(self, style: OffsetStyle) -> Self {
        Self { style, ..self }
    }

    /// Returns the image scale in pixels per micrometre.
    #[must_use]
    pub fn pixel_per_um(&self) -> f64 {
        self.pixel_per_um
    }

    /// Returns the offset depth in micrometres.
    #[must_use]
    pub fn depth_um(&self) -> f64 {
        self.depth_um
    }

    /// Returns the offset style.
    #[must_use]
    pub fn style(&self) -> OffsetStyle {
        self.style
    }

    /// Returns the offset depth in pixels.
    #[must_use]
    pub fn depth_pixels(&self) -> f64 {
        self.depth_um * self.pixel_per_um
    }
}

fn number(parameter: &'static str, text: &str) -> Result<f64> {
    text.trim().parse::<f64>().map_err(|_| {
        ParameterError::Unparseable {
            parameter,
            value: text.to_owned(),
        }
        .into()
    })
}

fn positive(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ParameterError::NotPositive { parameter, value }.into())
    }
}
