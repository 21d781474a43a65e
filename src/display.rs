//! The plot display: owns the current dataset and display toggles.
//!
//! All mutation goes through [`PlotDisplay::load_dataset`] and the setters.
//! Each of them flags a repaint; the host polls
//! [`PlotDisplay::take_repaint_request`] and redraws the whole frame.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::geometry::{PointCategory, Sample};
use crate::render::{render_frame, Frame, TextMetrics};
use crate::state::{DisplayOptions, RenderPass};

#[derive(Debug, Default)]
pub struct PlotDisplay {
    dataset: Option<Dataset>,
    options: DisplayOptions,
    repaint_requested: bool,
}

impl PlotDisplay {
    pub fn new(options: DisplayOptions) -> Self {
        Self {
            dataset: None,
            options,
            repaint_requested: false,
        }
    }

    /// Replace the current dataset.
    ///
    /// The new data is validated and preprocessed before anything is swapped,
    /// so on error the previous dataset remains active.
    pub fn load_dataset<C>(&mut self, samples: Vec<Sample>, categories: Vec<C>) -> Result<()>
    where
        C: Into<PointCategory>,
    {
        let categories = categories.into_iter().map(Into::into).collect();
        let dataset = Dataset::new(samples, categories)?;

        tracing::info!(
            "Loaded {} samples ({} after zero-crossing expansion, {} regions)",
            dataset.len(),
            dataset.expanded().len(),
            dataset.lobes().len()
        );

        self.dataset = Some(dataset);
        self.repaint_requested = true;
        Ok(())
    }

    /// Drop the current dataset
    pub fn clear(&mut self) {
        self.dataset = None;
        self.repaint_requested = true;
    }

    pub fn set_show_axis(&mut self, show: bool) {
        self.options.show_axis = show;
        self.repaint_requested = true;
    }

    pub fn set_show_markers(&mut self, show: bool) {
        self.options.show_markers = show;
        self.repaint_requested = true;
    }

    pub fn set_show_regions(&mut self, show: bool) {
        self.options.show_regions = show;
        self.repaint_requested = true;
    }

    /// Switch an optional pass on or off. The curve cannot be hidden.
    pub fn set_pass_enabled(&mut self, pass: RenderPass, show: bool) {
        match pass {
            RenderPass::Axis => self.set_show_axis(show),
            RenderPass::Markers => self.set_show_markers(show),
            RenderPass::Regions => self.set_show_regions(show),
            RenderPass::Curve => {}
        }
    }

    pub fn options(&self) -> DisplayOptions {
        self.options
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn has_data(&self) -> bool {
        self.dataset.is_some()
    }

    /// Returns true once after any change that needs a full repaint
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    /// Draw commands for a `width` x `height` surface. Empty without data.
    pub fn render(&self, width: f64, height: f64, metrics: &dyn TextMetrics) -> Frame {
        match &self.dataset {
            Some(dataset) => render_frame(dataset, self.options, width, height, metrics),
            None => Frame::default(),
        }
    }
}
