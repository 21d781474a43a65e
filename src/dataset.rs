//! A loaded dataset and the sequences derived from it at load time.

use crate::error::{PlotError, Result};
use crate::geometry::{
    expand_zero_crossings, segment_areas, split_regions, Bounds, Lobe, PointCategory, Sample,
};

/// Samples plus everything the renderer needs that does not depend on the
/// surface size. Immutable once built; a new load replaces it wholesale.
#[derive(Clone, Debug)]
pub struct Dataset {
    samples: Vec<Sample>,
    categories: Vec<PointCategory>,
    expanded: Vec<Sample>,
    areas: Vec<f64>,
    lobes: Vec<Lobe>,
    bounds: Bounds,
}

impl Dataset {
    /// Validate `samples` and `categories` and precompute the derived sequences.
    ///
    /// Fails without side effects if the input is empty, if the two sequences
    /// differ in length, or if any coordinate is not finite.
    pub fn new(samples: Vec<Sample>, categories: Vec<PointCategory>) -> Result<Self> {
        if samples.is_empty() {
            return Err(PlotError::EmptyDataset);
        }

        if categories.len() != samples.len() {
            return Err(PlotError::malformed(
                samples.len().min(categories.len()) + 1,
                format!(
                    "{} category flags for {} samples",
                    categories.len(),
                    samples.len()
                ),
            ));
        }

        if let Some(idx) = samples.iter().position(|s| !s.is_finite()) {
            return Err(PlotError::malformed(idx + 1, "coordinate is not a finite number"));
        }

        let expanded = expand_zero_crossings(&samples);
        let areas = segment_areas(&expanded);
        let lobes = split_regions(&expanded, &areas);
        let bounds = Bounds::from_samples(&samples).ok_or(PlotError::EmptyDataset)?;

        Ok(Self {
            samples,
            categories,
            expanded,
            areas,
            lobes,
            bounds,
        })
    }

    /// Original samples in file order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// One marker category per sample
    pub fn categories(&self) -> &[PointCategory] {
        &self.categories
    }

    /// Samples with synthetic zero-crossing points inserted
    pub fn expanded(&self) -> &[Sample] {
        &self.expanded
    }

    /// One trapezoid area per segment of [`Self::expanded`]
    pub fn areas(&self) -> &[f64] {
        &self.areas
    }

    /// Zero-bounded lobes of the expanded curve
    pub fn lobes(&self) -> &[Lobe] {
        &self.lobes
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sum of all segment areas
    pub fn total_area(&self) -> f64 {
        self.areas.iter().sum()
    }
}
