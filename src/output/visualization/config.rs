//! Shared plot configuration

use plotters::prelude::*;

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for customizing slice plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels (the slice plane axes)
/// - `ramp_low`, `ramp_high`: Endpoints of the linear magnitude color ramp
/// - `background`: Background color
/// - `show_quiver`: Whether to overlay unit-vector arrows
/// - `quiver_stride`: Draw an arrow every `stride` cells on each axis
/// - `quiver_color`: Arrow color
///
/// # Example
///
/// ```rust
/// use biot_rs::output::PlotConfig;
///
/// let config = PlotConfig::default()
///     .titled("Current loop cross-section")
///     .quiver_every(2);
/// assert_eq!(config.quiver_stride, 2);
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Magnetic field slice")
    pub title: String,

    /// X-axis label of the slice plane (default: "y (m)")
    pub xlabel: String,

    /// Y-axis label of the slice plane (default: "z (m)")
    pub ylabel: String,

    /// Color ramp endpoint for |B| = 0 (default: WHITE)
    pub ramp_low: RGBColor,

    /// Color ramp endpoint for the maximum |B| in the slice (default: dark red)
    pub ramp_high: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Overlay unit-vector arrows (default: true)
    pub show_quiver: bool,

    /// Draw an arrow every `stride` cells on each axis (default: 1)
    pub quiver_stride: usize,

    /// Arrow color (default: BLACK)
    pub quiver_color: RGBColor,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Magnetic field slice".to_string(),
            xlabel: "y (m)".to_string(),
            ylabel: "z (m)".to_string(),
            ramp_low: WHITE,
            ramp_high: RGBColor(139, 0, 0),
            background: WHITE,
            show_quiver: true,
            quiver_stride: 1,
            quiver_color: BLACK,
        }
    }
}

impl PlotConfig {
    /// Builder pattern: set the title
    pub fn titled(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Builder pattern: set the quiver stride
    pub fn quiver_every(mut self, stride: usize) -> Self {
        self.quiver_stride = stride.max(1);
        self
    }

    /// Builder pattern: disable the quiver overlay
    pub fn heatmap_only(mut self) -> Self {
        self.show_quiver = false;
        self
    }

    /// Color for a normalized magnitude `t ∈ [0, 1]`
    ///
    /// Linear interpolation between `ramp_low` and `ramp_high`; values
    /// outside [0, 1] are clamped.
    pub fn magnitude_color(&self, t: f64) -> RGBColor {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| -> u8 {
            (a as f64 + (b as f64 - a as f64) * t).round() as u8
        };
        RGBColor(
            lerp(self.ramp_low.0, self.ramp_high.0),
            lerp(self.ramp_low.1, self.ramp_high.1),
            lerp(self.ramp_low.2, self.ramp_high.2),
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
