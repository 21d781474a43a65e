//! Tests for viewport fitting and the data-to-pixel mapping
//!
//! Tests cover:
//! - Aspect-fit scale on both width- and height-bound surfaces
//! - Centring of the padded axis
//! - Monotonic mapping
//! - Degenerate extents

use crate::common::{assert_close, samples, FixedMetrics};
use lobeplot::display::PlotDisplay;
use lobeplot::parsers::XyText;
use lobeplot::error::PlotError;
use lobeplot::geometry::{Bounds, Viewport};

// ============================================
// Scale Tests
// ============================================

#[test]
fn test_scale_fits_both_axes_with_equality_on_one() {
    let data = samples(&[(-3.0, -1.0), (0.0, 2.0), (5.0, 0.5)]);
    let bounds = Bounds::from_samples(&data).unwrap();

    for (w, h) in [(1000.0, 600.0), (300.0, 900.0), (500.0, 500.0), (37.0, 11.0)] {
        let vp = Viewport::fit(bounds, w, h).unwrap();

        let used_w = vp.scale * bounds.width();
        let used_h = vp.scale * bounds.height();
        assert!(used_w <= w + 1e-9, "width overflow at {}x{}", w, h);
        assert!(used_h <= h + 1e-9, "height overflow at {}x{}", w, h);
        assert!(
            (used_w - w).abs() < 1e-9 || (used_h - h).abs() < 1e-9,
            "neither axis is tight at {}x{}",
            w,
            h
        );
    }
}

#[test]
fn test_padded_viewport_fills_surface() {
    let bounds = Bounds::from_samples(&samples(&[(0.0, 0.0), (4.0, 1.0)])).unwrap();
    let vp = Viewport::fit(bounds, 400.0, 300.0).unwrap();

    assert_close((vp.max_x - vp.min_x) * vp.scale, 400.0);
    assert_close((vp.max_y - vp.min_y) * vp.scale, 300.0);
}

#[test]
fn test_data_is_centred_on_padded_axis() {
    // Width-bound: 4 units over 400 px gives scale 100, 3 units of height
    let bounds = Bounds::from_samples(&samples(&[(0.0, 0.0), (4.0, 1.0)])).unwrap();
    let vp = Viewport::fit(bounds, 400.0, 300.0).unwrap();

    assert_close(vp.scale, 100.0);
    assert_close(vp.min_y, -1.0);
    assert_close(vp.max_y, 2.0);

    let top = vp.to_pixel(0.0, 1.0);
    let bottom = vp.to_pixel(0.0, 0.0);
    assert_close(top.y, 100.0);
    assert_close(bottom.y, 200.0);
}

// ============================================
// Mapping Tests
// ============================================

#[test]
fn test_mapping_is_monotonic() {
    let bounds = Bounds::from_samples(&samples(&[(-2.0, -5.0), (7.0, 3.0)])).unwrap();
    let vp = Viewport::fit(bounds, 640.0, 480.0).unwrap();

    let xs = [-2.0, -1.5, 0.0, 0.1, 3.0, 7.0];
    for pair in xs.windows(2) {
        assert!(vp.to_pixel(pair[1], 0.0).x > vp.to_pixel(pair[0], 0.0).x);
    }

    let ys = [-5.0, -4.9, 0.0, 1.0, 3.0];
    for pair in ys.windows(2) {
        assert!(vp.to_pixel(0.0, pair[1]).y < vp.to_pixel(0.0, pair[0]).y);
    }
}

#[test]
fn test_mapping_origin_is_top_left() {
    let bounds = Bounds::from_samples(&samples(&[(0.0, 0.0), (2.0, 2.0)])).unwrap();
    let vp = Viewport::fit(bounds, 200.0, 200.0).unwrap();

    let p = vp.to_pixel(vp.min_x, vp.max_y);
    assert_close(p.x, 0.0);
    assert_close(p.y, 0.0);

    let q = vp.to_pixel(vp.max_x, vp.min_y);
    assert_close(q.x, 200.0);
    assert_close(q.y, 200.0);
}

// ============================================
// Degenerate Geometry Tests
// ============================================

#[test]
fn test_flat_line_reports_degenerate_y() {
    let bounds = Bounds::from_samples(&samples(&[(0.0, 2.0), (5.0, 2.0)])).unwrap();

    let err = Viewport::try_fit(bounds, 100.0, 100.0).unwrap_err();
    assert!(matches!(err, PlotError::DegenerateGeometry { axis: 'y' }));
}

#[test]
fn test_flat_line_still_fits() {
    let bounds = Bounds::from_samples(&samples(&[(0.0, 2.0), (5.0, 2.0)])).unwrap();
    let vp = Viewport::fit(bounds, 500.0, 500.0).unwrap();

    assert!(vp.scale.is_finite() && vp.scale > 0.0);
    assert_close(vp.scale, 100.0);
    assert!(vp.contains_y(2.0));
}

#[test]
fn test_zero_surface_yields_nothing() {
    let bounds = Bounds::from_samples(&samples(&[(0.0, 0.0), (1.0, 1.0)])).unwrap();
    assert!(Viewport::fit(bounds, 0.0, 0.0).is_none());
    assert!(Viewport::fit(bounds, 100.0, -5.0).is_none());
}

#[test]
fn test_overflowing_span_draws_nothing() {
    // Both values are finite but their difference is not
    let parsed = XyText.parse("-1e308 0\n1e308 1\n").unwrap();
    let bounds = Bounds::from_samples(&parsed.samples).unwrap();

    let err = Viewport::try_fit(bounds, 800.0, 600.0).unwrap_err();
    assert!(matches!(err, PlotError::DegenerateGeometry { axis: 'x' }));
    assert!(Viewport::fit(bounds, 800.0, 600.0).is_none());

    let mut display = PlotDisplay::default();
    display
        .load_dataset(parsed.samples, parsed.categories)
        .unwrap();
    assert!(display.render(800.0, 600.0, &FixedMetrics).is_empty());
}

#[test]
fn test_large_finite_span_maps_to_finite_pixels() {
    let bounds = Bounds::from_samples(&samples(&[(-1e300, 0.0), (1e300, 1.0)])).unwrap();
    let vp = Viewport::fit(bounds, 800.0, 600.0).unwrap();

    assert!(vp.scale > 0.0);
    let p = vp.to_pixel(1e300, 1.0);
    assert!(p.x.is_finite() && p.y.is_finite());
}
