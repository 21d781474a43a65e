//! Zero-crossing expansion of a sample sequence.

use super::types::Sample;

/// Insert a synthetic `(x*, 0)` point between every consecutive pair of
/// samples whose y values have strictly opposite signs.
///
/// `x*` is the linear interpolation of the root between the two samples.
/// Pairs with identical x (a vertical step) have no defined crossing and are
/// left alone. The output always contains every input sample, in order.
pub fn expand_zero_crossings(samples: &[Sample]) -> Vec<Sample> {
    let Some(last) = samples.last() else {
        return Vec::new();
    };

    let mut expanded = Vec::with_capacity(samples.len() * 2);

    for pair in samples.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        expanded.push(a);

        if let Some(x) = crossing_x(a, b) {
            expanded.push(Sample::new(x, 0.0));
        }
    }

    expanded.push(*last);
    expanded
}

/// x where the segment a-b crosses y = 0, if it strictly does
fn crossing_x(a: Sample, b: Sample) -> Option<f64> {
    if a.y * b.y >= 0.0 || a.x == b.x {
        return None;
    }
    Some(a.x - a.y * (b.x - a.x) / (b.y - a.y))
}
