//! Core application state types and constants.
//!
//! This module contains the display toggles, the visual constants shared by
//! the render passes and the notification types used by the host window.

use strum::{AsRefStr, EnumIter};

// ============================================================================
// Constants
// ============================================================================

/// Initial window size in logical pixels
pub const WINDOW_SIZE: [f32; 2] = [1000.0, 600.0];

/// Window title
pub const WINDOW_TITLE: &str = "lobeplot - function graph";

/// Extensions offered in the open dialog
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "dat"];

/// Dash lengths for the curve, alternating on/off, in pixels
pub const CURVE_DASH_PATTERN: &[f32] = &[3.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 2.0, 1.0];

/// Stroke widths
pub const CURVE_STROKE_WIDTH: f32 = 2.0;
pub const AXIS_STROKE_WIDTH: f32 = 2.0;
pub const MARKER_STROKE_WIDTH: f32 = 1.0;

/// Length of each of the eight marker rays
pub const MARKER_RAY_LENGTH: f64 = 11.0;

/// Arrowhead length along the axis and width across it
pub const ARROW_LENGTH: f64 = 20.0;
pub const ARROW_WIDTH: f64 = 10.0;

/// Gap between an arrow tip and its axis label
pub const AXIS_LABEL_GAP: f64 = 10.0;

/// Font sizes
pub const AXIS_FONT_SIZE: f32 = 36.0;
pub const AREA_FONT_SIZE: f32 = 13.0;

/// Colours (RGB)
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 255];
pub const AXIS_COLOR: [u8; 3] = [0, 0, 0];
pub const CURVE_COLOR: [u8; 3] = [255, 0, 0];
pub const ORDERED_MARKER_COLOR: [u8; 3] = [0, 0, 255];
pub const UNORDERED_MARKER_COLOR: [u8; 3] = [255, 0, 0];
pub const REGION_FILL_COLOR: [u8; 3] = [0, 0, 0];
pub const AREA_LABEL_COLOR: [u8; 3] = [255, 0, 0];

// ============================================================================
// Display Options
// ============================================================================

/// Which render passes are enabled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_axis: bool,
    pub show_markers: bool,
    pub show_regions: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_axis: true,
            show_markers: true,
            show_regions: true,
        }
    }
}

impl DisplayOptions {
    /// Whether `pass` should be drawn. The curve is always drawn.
    pub fn is_enabled(&self, pass: RenderPass) -> bool {
        match pass {
            RenderPass::Axis => self.show_axis,
            RenderPass::Curve => true,
            RenderPass::Markers => self.show_markers,
            RenderPass::Regions => self.show_regions,
        }
    }
}

/// The render passes, declared back to front
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
pub enum RenderPass {
    #[strum(serialize = "Show axes")]
    Axis,
    Curve,
    #[strum(serialize = "Show point markers")]
    Markers,
    #[strum(serialize = "Show enclosed areas")]
    Regions,
}

impl RenderPass {
    /// True for passes the user can switch off
    pub fn is_optional(&self) -> bool {
        !matches!(self, RenderPass::Curve)
    }
}

// ============================================================================
// Notifications
// ============================================================================

/// Type of toast notification (determines color)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastType {
    /// Informational message (blue)
    #[default]
    Info,
    /// Success message (green)
    Success,
}

impl ToastType {
    /// Get the background color for this toast type
    pub fn color(&self) -> [u8; 3] {
        match self {
            ToastType::Info => [71, 108, 155],    // Blue
            ToastType::Success => [113, 120, 78], // Olive green
        }
    }

    /// Get the text color for this toast type
    pub fn text_color(&self) -> [u8; 3] {
        [255, 255, 255]
    }
}
