//! Data-space geometry for function plots.
//!
//! Everything in here is pure and independent of the GUI:
//!
//! - [`types`] - samples, bounding boxes and point categories
//! - [`viewport`] - aspect-preserving fit of the data into a drawing surface
//!   and the data-to-pixel mapping
//! - [`crossings`] - insertion of synthetic points where the curve crosses y = 0
//! - [`area`] - trapezoidal area of every segment of the expanded curve
//! - [`regions`] - splitting the expanded curve into zero-bounded lobes

pub mod area;
pub mod crossings;
pub mod regions;
pub mod types;
pub mod viewport;

pub use area::segment_areas;
pub use crossings::expand_zero_crossings;
pub use regions::{split_regions, Lobe};
pub use types::{Bounds, PointCategory, Sample};
pub use viewport::{Pixel, Viewport};
