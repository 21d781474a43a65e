//! Backend-neutral rendering of a dataset into draw commands.
//!
//! A render produces a [`Frame`]: one [`Layer`] per enabled pass, in
//! back-to-front order (axis, curve, markers, regions). Each pass is a free
//! function of the dataset and the viewport; nothing is cached between calls.
//!
//! - `axis` - coordinate axes with arrowheads and labels
//! - `curve` - dashed polyline through the original samples
//! - `markers` - eight-ray star per sample, coloured by category
//! - `regions` - filled lobes between the curve and y = 0 with area labels

pub mod axis;
pub mod curve;
pub mod markers;
pub mod regions;

use strum::IntoEnumIterator;

use crate::dataset::Dataset;
use crate::geometry::{Pixel, Viewport};
use crate::state::{DisplayOptions, RenderPass};

/// RGB colour
pub type Rgb = [u8; 3];

/// Line style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Rgb,
}

impl Stroke {
    pub const fn new(width: f32, color: Rgb) -> Self {
        Self { width, color }
    }
}

/// Font request for a text command
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    /// Point size
    pub size: f32,
}

/// Text measurement supplied by the drawing backend
pub trait TextMetrics {
    /// Width and height in pixels of `text` laid out on one line
    fn measure(&self, text: &str, font: FontSpec) -> (f64, f64);
}

/// One drawing primitive in pixel space
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Open polyline, optionally dashed with alternating on/off lengths
    Polyline {
        points: Vec<Pixel>,
        stroke: Stroke,
        dash: Option<&'static [f32]>,
    },
    /// Independent straight segments
    Segments {
        segments: Vec<[Pixel; 2]>,
        stroke: Stroke,
    },
    /// Filled convex polygon
    Polygon { points: Vec<Pixel>, fill: Rgb },
    /// Area between `curve` and the horizontal line `baseline`.
    ///
    /// Every curve point lies on the same side of the baseline, so each
    /// segment together with its projection onto the baseline is convex.
    Region {
        curve: Vec<Pixel>,
        baseline: f64,
        fill: Rgb,
    },
    /// Text whose top-left corner is at `pos`
    Text {
        pos: Pixel,
        text: String,
        font: FontSpec,
        color: Rgb,
    },
}

/// Draw commands produced by one pass
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub pass: RenderPass,
    pub commands: Vec<DrawCommand>,
}

/// Everything to paint for one surface size, back to front
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub layers: Vec<Layer>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// The layer for `pass`, if it was drawn
    pub fn layer(&self, pass: RenderPass) -> Option<&Layer> {
        self.layers.iter().find(|l| l.pass == pass)
    }

    /// All commands in paint order
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.layers.iter().flat_map(|l| l.commands.iter())
    }
}

/// Render `dataset` onto a `width` x `height` surface
pub fn render_frame(
    dataset: &Dataset,
    options: DisplayOptions,
    width: f64,
    height: f64,
    metrics: &dyn TextMetrics,
) -> Frame {
    let Some(viewport) = Viewport::fit(dataset.bounds(), width, height) else {
        return Frame::default();
    };

    let layers = RenderPass::iter()
        .filter(|pass| options.is_enabled(*pass))
        .map(|pass| Layer {
            pass,
            commands: match pass {
                RenderPass::Axis => axis::paint_axis(&viewport, metrics),
                RenderPass::Curve => curve::paint_curve(dataset, &viewport),
                RenderPass::Markers => markers::paint_markers(dataset, &viewport),
                RenderPass::Regions => regions::paint_regions(dataset, &viewport, metrics),
            },
        })
        .collect();

    Frame { layers }
}
