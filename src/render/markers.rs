//! Point markers: an eight-ray star on every sample.

use super::{DrawCommand, Stroke};
use crate::dataset::Dataset;
use crate::geometry::{Pixel, PointCategory, Viewport};
use crate::state::{
    MARKER_RAY_LENGTH, MARKER_STROKE_WIDTH, ORDERED_MARKER_COLOR, UNORDERED_MARKER_COLOR,
};

/// Unit directions of the cardinal and diagonal rays
const RAY_DIRECTIONS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (-1.0, -1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (1.0, 1.0),
];

pub fn marker_color(category: PointCategory) -> [u8; 3] {
    match category {
        PointCategory::Ordered => ORDERED_MARKER_COLOR,
        PointCategory::Unordered => UNORDERED_MARKER_COLOR,
    }
}

/// Rays of the star centred on `center`
pub fn star_rays(center: Pixel) -> Vec<[Pixel; 2]> {
    RAY_DIRECTIONS
        .iter()
        .map(|(dx, dy)| {
            [
                center,
                center.offset(dx * MARKER_RAY_LENGTH, dy * MARKER_RAY_LENGTH),
            ]
        })
        .collect()
}

pub fn paint_markers(dataset: &Dataset, viewport: &Viewport) -> Vec<DrawCommand> {
    dataset
        .samples()
        .iter()
        .zip(dataset.categories())
        .map(|(sample, category)| DrawCommand::Segments {
            segments: star_rays(viewport.sample_to_pixel(*sample)),
            stroke: Stroke::new(MARKER_STROKE_WIDTH, marker_color(*category)),
        })
        .collect()
}
