//! Shaded lobes between the curve and y = 0, each labelled with its area.

use super::{DrawCommand, FontSpec, TextMetrics};
use crate::dataset::Dataset;
use crate::geometry::{Lobe, Viewport};
use crate::state::{AREA_FONT_SIZE, AREA_LABEL_COLOR, REGION_FILL_COLOR};

const AREA_FONT: FontSpec = FontSpec { size: AREA_FONT_SIZE };

/// Text shown on a lobe
pub fn area_label(area: f64) -> String {
    format!("s = {:.2}", area)
}

/// One fill and one label per lobe, in curve order
pub fn paint_regions(
    dataset: &Dataset,
    viewport: &Viewport,
    metrics: &dyn TextMetrics,
) -> Vec<DrawCommand> {
    let baseline = viewport.baseline_y();

    dataset
        .lobes()
        .iter()
        .flat_map(|lobe| {
            [
                paint_fill(lobe, viewport, baseline),
                paint_label(lobe, viewport, metrics),
            ]
        })
        .collect()
}

fn paint_fill(lobe: &Lobe, viewport: &Viewport, baseline: f64) -> DrawCommand {
    DrawCommand::Region {
        curve: lobe
            .points
            .iter()
            .map(|p| viewport.sample_to_pixel(*p))
            .collect(),
        baseline,
        fill: REGION_FILL_COLOR,
    }
}

/// Label centred on the lobe's anchor point
fn paint_label(lobe: &Lobe, viewport: &Viewport, metrics: &dyn TextMetrics) -> DrawCommand {
    let text = area_label(lobe.area);
    let (width, height) = metrics.measure(&text, AREA_FONT);
    let anchor = viewport.sample_to_pixel(lobe.label_anchor());

    DrawCommand::Text {
        pos: anchor.offset(-width / 2.0, -height / 2.0),
        text,
        font: AREA_FONT,
        color: AREA_LABEL_COLOR,
    }
}
