//! Splitting an expanded curve into zero-bounded lobes.

use super::types::Sample;

/// One stretch of the curve between two gaps (points on y = 0, or the end)
#[derive(Clone, Debug, PartialEq)]
pub struct Lobe {
    /// Curve points from the opening gap to the closing gap, inclusive
    pub points: Vec<Sample>,
    /// Sum of the segment areas spanned by this lobe
    pub area: f64,
    /// The y value of largest magnitude in the lobe
    pub peak: f64,
}

impl Lobe {
    /// x of the first point
    pub fn start_x(&self) -> f64 {
        self.points.first().map(|p| p.x).unwrap_or_default()
    }

    /// x of the last point
    pub fn end_x(&self) -> f64 {
        self.points.last().map(|p| p.x).unwrap_or_default()
    }

    /// Data-space anchor for the area label: half way along, half way up
    pub fn label_anchor(&self) -> Sample {
        Sample::new((self.start_x() + self.end_x()) / 2.0, self.peak / 2.0)
    }
}

/// Walk `points` and close a lobe at every point with y == 0 and at the last
/// point. `areas` must hold one value per segment of `points`.
///
/// The next lobe starts at the point that closed the previous one, so
/// neighbouring lobes share their gap point.
pub fn split_regions(points: &[Sample], areas: &[f64]) -> Vec<Lobe> {
    debug_assert_eq!(areas.len(), points.len().saturating_sub(1));

    if points.len() < 2 {
        return Vec::new();
    }

    let last = points.len() - 1;
    let mut lobes = Vec::new();
    let mut start = 0;
    let mut area = 0.0;

    for i in 1..points.len() {
        area += areas.get(i - 1).copied().unwrap_or_default();

        if points[i].y == 0.0 || i == last {
            let span = &points[start..=i];
            let peak = span
                .iter()
                .map(|p| p.y)
                .fold(0.0_f64, |acc, y| if y.abs() > acc.abs() { y } else { acc });

            lobes.push(Lobe {
                points: span.to_vec(),
                area,
                peak,
            });

            start = i;
            area = 0.0;
        }
    }

    lobes
}
