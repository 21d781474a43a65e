//! Trapezoidal area of each segment of an expanded curve.

use super::types::Sample;

/// Area of every consecutive pair, `(|y1| + |y2|) * (x2 - x1) / 2`.
///
/// Magnitudes are used on both ends, so lobes below the axis contribute
/// positive area just like lobes above it. Run this on the output of
/// [`expand_zero_crossings`](super::expand_zero_crossings): after expansion
/// no segment has endpoints of opposite sign.
pub fn segment_areas(points: &[Sample]) -> Vec<f64> {
    points
        .windows(2)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            if a.y * b.y < 0.0 {
                tracing::warn!(
                    "Segment ({}, {}) -> ({}, {}) spans a sign change; area is overstated",
                    a.x,
                    a.y,
                    b.x,
                    b.y
                );
            }
            (b.y.abs() + a.y.abs()) * (b.x - a.x) / 2.0
        })
        .collect()
}
