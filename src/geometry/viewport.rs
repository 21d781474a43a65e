//! Viewport fitting and data-to-pixel mapping.
//!
//! The viewport uses a single scale for both axes so the plot is never
//! distorted. Whichever axis has slack gets padded symmetrically so the data
//! ends up centred on the surface.

use super::types::{Bounds, Sample};
use crate::error::{PlotError, Result};

/// Span substituted for a zero-width or zero-height data extent
pub const MIN_SPAN: f64 = 1.0;

/// Current mapping parameters from data space to pixel space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    /// Pixels per data unit (same for both axes)
    pub scale: f64,
}

/// A span is drawable when it is positive and finite
fn is_usable_span(span: f64) -> bool {
    span > 0.0 && span.is_finite()
}

impl Viewport {
    /// Fit `bounds` into a `width` x `height` pixel surface.
    ///
    /// Fails with [`PlotError::DegenerateGeometry`] when the extent along
    /// either axis is zero or overflows `f64`, before or after padding.
    /// Returns `Ok(None)` for an empty surface.
    pub fn try_fit(bounds: Bounds, width: f64, height: f64) -> Result<Option<Self>> {
        if !is_usable_span(bounds.width()) {
            return Err(PlotError::DegenerateGeometry { axis: 'x' });
        }
        if !is_usable_span(bounds.height()) {
            return Err(PlotError::DegenerateGeometry { axis: 'y' });
        }
        if !(width > 0.0 && height > 0.0) {
            return Ok(None);
        }

        let scale_x = width / bounds.width();
        let scale_y = height / bounds.height();
        let scale = scale_x.min(scale_y);
        if !scale.is_finite() {
            // Both spans are too small to divide by
            return Err(PlotError::DegenerateGeometry { axis: 'x' });
        }

        let mut viewport = Self {
            min_x: bounds.min_x,
            max_x: bounds.max_x,
            min_y: bounds.min_y,
            max_y: bounds.max_y,
            scale,
        };

        // Width-bound: spare vertical room
        if scale_x <= scale_y {
            let y_pad = (height / scale - bounds.height()) / 2.0;
            viewport.max_y += y_pad;
            viewport.min_y -= y_pad;
        }
        // Height-bound: spare horizontal room
        if scale_y <= scale_x {
            let x_pad = (width / scale - bounds.width()) / 2.0;
            viewport.max_x += x_pad;
            viewport.min_x -= x_pad;
        }

        if !is_usable_span(viewport.max_x - viewport.min_x) {
            return Err(PlotError::DegenerateGeometry { axis: 'x' });
        }
        if !is_usable_span(viewport.max_y - viewport.min_y) {
            return Err(PlotError::DegenerateGeometry { axis: 'y' });
        }

        Ok(Some(viewport))
    }

    /// Fit `bounds` into the surface, widening a collapsed axis to [`MIN_SPAN`].
    ///
    /// Returns `None` when the surface has no area or when the extent is too
    /// large to map to pixels.
    pub fn fit(bounds: Bounds, width: f64, height: f64) -> Option<Self> {
        match Self::try_fit(bounds, width, height) {
            Ok(viewport) => viewport,
            Err(e) => {
                tracing::debug!("{}; using a span of {}", e, MIN_SPAN);
                Self::try_fit(bounds.with_min_span(MIN_SPAN), width, height)
                    .inspect_err(|e| tracing::debug!("Nothing drawn: {}", e))
                    .ok()
                    .flatten()
            }
        }
    }

    /// Map a data-space point to pixel space (y grows downwards)
    #[inline]
    pub fn to_pixel(&self, x: f64, y: f64) -> Pixel {
        Pixel {
            x: (x - self.min_x) * self.scale,
            y: (self.max_y - y) * self.scale,
        }
    }

    /// Map a sample to pixel space
    #[inline]
    pub fn sample_to_pixel(&self, sample: Sample) -> Pixel {
        self.to_pixel(sample.x, sample.y)
    }

    /// Pixel row of the data line y = 0
    #[inline]
    pub fn baseline_y(&self) -> f64 {
        self.max_y * self.scale
    }

    #[inline]
    pub fn contains_x(&self, x: f64) -> bool {
        self.min_x <= x && x <= self.max_x
    }

    #[inline]
    pub fn contains_y(&self, y: f64) -> bool {
        self.min_y <= y && y <= self.max_y
    }
}

/// A point on the drawing surface, in pixels from the top-left corner
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point moved by (dx, dy)
    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
