//! Tests for the display entry points
//!
//! Tests cover:
//! - All-or-nothing dataset loading
//! - Toggle setters and repaint requests
//! - Rendering with and without data

use crate::common::{samples, FixedMetrics};
use lobeplot::display::PlotDisplay;
use lobeplot::error::PlotError;
use lobeplot::geometry::{PointCategory, Sample};
use lobeplot::state::{DisplayOptions, RenderPass};
use strum::IntoEnumIterator;

fn loaded_display() -> PlotDisplay {
    let mut display = PlotDisplay::default();
    display
        .load_dataset(
            samples(&[(-1.0, 1.0), (0.0, -1.0), (1.0, 1.0)]),
            vec![true, false, true],
        )
        .unwrap();
    display
}

// ============================================
// Loading Tests
// ============================================

#[test]
fn test_load_precomputes_sequences() {
    let display = loaded_display();
    let data = display.dataset().unwrap();

    assert_eq!(data.len(), 3);
    assert_eq!(data.expanded().len(), 5);
    assert_eq!(data.areas().len(), 4);
    assert_eq!(data.lobes().len(), 3);
    assert_eq!(
        data.categories(),
        &[
            PointCategory::Ordered,
            PointCategory::Unordered,
            PointCategory::Ordered
        ]
    );
}

#[test]
fn test_flag_count_mismatch_is_rejected() {
    let mut display = loaded_display();

    let err = display
        .load_dataset(samples(&[(0.0, 5.0), (1.0, 6.0)]), vec![true])
        .unwrap_err();

    assert!(matches!(err, PlotError::MalformedLine { line: 2, .. }));
    // Previous dataset still active and intact
    let data = display.dataset().unwrap();
    assert_eq!(data.samples()[0], Sample::new(-1.0, 1.0));
    assert_eq!(data.len(), 3);
}

#[test]
fn test_empty_load_is_rejected() {
    let mut display = PlotDisplay::default();

    let err = display
        .load_dataset(Vec::new(), Vec::<bool>::new())
        .unwrap_err();

    assert!(matches!(err, PlotError::EmptyDataset));
    assert!(!display.has_data());
    assert!(display.render(800.0, 600.0, &FixedMetrics).is_empty());
}

#[test]
fn test_non_finite_sample_is_rejected() {
    let mut display = loaded_display();

    let err = display
        .load_dataset(
            samples(&[(0.0, 1.0), (1.0, f64::NAN)]),
            vec![PointCategory::Ordered; 2],
        )
        .unwrap_err();

    assert!(matches!(err, PlotError::MalformedLine { line: 2, .. }));
    assert_eq!(display.dataset().unwrap().len(), 3);
}

#[test]
fn test_loaded_dataset_is_not_empty() {
    let display = loaded_display();
    let data = display.dataset().unwrap();
    assert!(!data.is_empty());
    assert_eq!(data.len(), data.samples().len());
}

#[test]
fn test_new_load_replaces_old() {
    let mut display = loaded_display();
    display
        .load_dataset(samples(&[(5.0, 5.0), (6.0, 7.0)]), vec![false, false])
        .unwrap();

    let data = display.dataset().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data.lobes().len(), 1);
}

#[test]
fn test_clear_drops_dataset() {
    let mut display = loaded_display();
    display.clear();

    assert!(!display.has_data());
    assert!(display.render(800.0, 600.0, &FixedMetrics).is_empty());
}

// ============================================
// Toggle Tests
// ============================================

#[test]
fn test_defaults_show_everything() {
    assert_eq!(PlotDisplay::default().options(), DisplayOptions::default());
    let options = DisplayOptions::default();
    assert!(options.show_axis && options.show_markers && options.show_regions);
}

#[test]
fn test_toggle_removes_only_that_layer() {
    let mut display = loaded_display();
    let before = display.render(600.0, 400.0, &FixedMetrics);

    display.set_show_markers(false);
    let after = display.render(600.0, 400.0, &FixedMetrics);

    assert!(before.layer(RenderPass::Markers).is_some());
    assert!(after.layer(RenderPass::Markers).is_none());
    for pass in [RenderPass::Axis, RenderPass::Curve, RenderPass::Regions] {
        assert_eq!(before.layer(pass), after.layer(pass));
    }
}

#[test]
fn test_each_setter_controls_its_pass() {
    let mut display = loaded_display();
    display.set_show_axis(false);
    display.set_show_regions(false);

    let frame = display.render(600.0, 400.0, &FixedMetrics);
    assert!(frame.layer(RenderPass::Axis).is_none());
    assert!(frame.layer(RenderPass::Regions).is_none());
    assert!(frame.layer(RenderPass::Markers).is_some());

    display.set_pass_enabled(RenderPass::Axis, true);
    assert!(display.options().show_axis);
}

#[test]
fn test_toggle_labels_cover_optional_passes() {
    let labels: Vec<String> = RenderPass::iter()
        .filter(RenderPass::is_optional)
        .map(|pass| pass.as_ref().to_string())
        .collect();

    assert_eq!(
        labels,
        vec!["Show axes", "Show point markers", "Show enclosed areas"]
    );
    assert!(!RenderPass::Curve.is_optional());
}

#[test]
fn test_curve_cannot_be_hidden() {
    let mut display = loaded_display();
    display.set_pass_enabled(RenderPass::Curve, false);

    let frame = display.render(600.0, 400.0, &FixedMetrics);
    assert!(frame.layer(RenderPass::Curve).is_some());
}

#[test]
fn test_repaint_requested_once_per_change() {
    let mut display = PlotDisplay::new(DisplayOptions::default());
    assert!(!display.take_repaint_request());

    display.set_show_axis(false);
    assert!(display.take_repaint_request());
    assert!(!display.take_repaint_request());

    display
        .load_dataset(samples(&[(0.0, 1.0)]), vec![true])
        .unwrap();
    assert!(display.take_repaint_request());
}

#[test]
fn test_failed_load_requests_no_repaint() {
    let mut display = loaded_display();
    display.take_repaint_request();

    let _ = display.load_dataset(Vec::new(), Vec::<bool>::new());
    assert!(!display.take_repaint_request());
}
