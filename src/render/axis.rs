//! Coordinate axes with arrowheads and single-letter labels.

use super::{DrawCommand, FontSpec, Stroke, TextMetrics};
use crate::geometry::Viewport;
use crate::state::{
    ARROW_LENGTH, ARROW_WIDTH, AXIS_COLOR, AXIS_FONT_SIZE, AXIS_LABEL_GAP, AXIS_STROKE_WIDTH,
};

const AXIS_FONT: FontSpec = FontSpec { size: AXIS_FONT_SIZE };

/// Draw each axis whose zero line falls inside the viewport
pub fn paint_axis(viewport: &Viewport, metrics: &dyn TextMetrics) -> Vec<DrawCommand> {
    let stroke = Stroke::new(AXIS_STROKE_WIDTH, AXIS_COLOR);
    let half_width = ARROW_WIDTH / 2.0;
    let mut commands = Vec::new();

    if viewport.contains_x(0.0) {
        let tip = viewport.to_pixel(0.0, viewport.max_y);
        let foot = viewport.to_pixel(0.0, viewport.min_y);

        commands.push(DrawCommand::Segments {
            segments: vec![[tip, foot]],
            stroke,
        });
        commands.push(DrawCommand::Polygon {
            points: vec![
                tip,
                tip.offset(half_width, ARROW_LENGTH),
                tip.offset(-half_width, ARROW_LENGTH),
            ],
            fill: AXIS_COLOR,
        });
        // To the right of the tip, top edge level with it
        commands.push(DrawCommand::Text {
            pos: tip.offset(AXIS_LABEL_GAP, 0.0),
            text: "y".to_string(),
            font: AXIS_FONT,
            color: AXIS_COLOR,
        });
    }

    if viewport.contains_y(0.0) {
        let start = viewport.to_pixel(viewport.min_x, 0.0);
        let tip = viewport.to_pixel(viewport.max_x, 0.0);

        commands.push(DrawCommand::Segments {
            segments: vec![[start, tip]],
            stroke,
        });
        commands.push(DrawCommand::Polygon {
            points: vec![
                tip,
                tip.offset(-ARROW_LENGTH, -half_width),
                tip.offset(-ARROW_LENGTH, half_width),
            ],
            fill: AXIS_COLOR,
        });
        // Left of the tip and above the axis, clear of the arrowhead
        let (label_width, label_height) = metrics.measure("x", AXIS_FONT);
        commands.push(DrawCommand::Text {
            pos: tip.offset(
                -(label_width + AXIS_LABEL_GAP),
                -(label_height + AXIS_LABEL_GAP),
            ),
            text: "x".to_string(),
            font: AXIS_FONT,
            color: AXIS_COLOR,
        });
    }

    commands
}
