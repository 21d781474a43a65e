//! UI rendering modules for the lobeplot window.
//!
//! - `menu` - Menu bar (File, Graph)
//! - `canvas` - Painting a render [`Frame`](crate::render::Frame) with egui
//! - `toast` - Toast notification system
//! - `error_dialog` - Modal notification for failed loads

pub mod canvas;
pub mod error_dialog;
pub mod menu;
pub mod toast;
