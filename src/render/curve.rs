//! The function graph itself.

use super::{DrawCommand, Stroke};
use crate::dataset::Dataset;
use crate::geometry::Viewport;
use crate::state::{CURVE_COLOR, CURVE_DASH_PATTERN, CURVE_STROKE_WIDTH};

/// One dashed polyline through the original samples (not the expanded ones)
pub fn paint_curve(dataset: &Dataset, viewport: &Viewport) -> Vec<DrawCommand> {
    let points = dataset
        .samples()
        .iter()
        .map(|s| viewport.sample_to_pixel(*s))
        .collect();

    vec![DrawCommand::Polyline {
        points,
        stroke: Stroke::new(CURVE_STROKE_WIDTH, CURVE_COLOR),
        dash: Some(CURVE_DASH_PATTERN),
    }]
}
