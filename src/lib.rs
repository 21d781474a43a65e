//! lobeplot - A desktop function plotter written in Rust
//!
//! This library reads `x y` sample files and renders them as a function
//! graph with axes, point markers and shaded zero-bounded regions labelled
//! with their area.
//!
//! ## Module Structure
//!
//! - [`geometry`] - Viewport fitting, pixel mapping, zero-crossing expansion,
//!   segment areas and region splitting
//! - [`dataset`] - A loaded dataset and its load-time derived sequences
//! - [`display`] - The plot core: dataset ownership, toggles and rendering
//! - [`render`] - Backend-neutral draw commands for the four render passes
//! - [`parsers`] - Sample file parsing
//! - [`error`] - Error types
//! - [`state`] - Display options and visual constants
//! - [`app`] - Main application state and eframe::App implementation
//! - [`ui`] - User interface components
//!   - `menu` - Menu bar (File, Graph)
//!   - `canvas` - egui painter backend for render frames
//!   - `toast` - Toast notification system
//!   - `error_dialog` - Modal load error notification

pub mod app;
pub mod dataset;
pub mod display;
pub mod error;
pub mod geometry;
pub mod parsers;
pub mod render;
pub mod state;
pub mod ui;
