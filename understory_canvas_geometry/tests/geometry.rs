// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-type checks for `understory_canvas_geometry`.

use kurbo::{Point, Rect, Size, Vec2};
use understory_canvas_geometry::{
    AffineState, Axis, BoundingLimits, Flip, ViewportGeometry, normalize_rect,
};

#[test]
fn state_agrees_with_kurbo_affine() {
    let state = AffineState::new(2.0, -0.5, 30.0, 12.0);
    let affine = state.to_affine();
    for pt in [
        Point::new(0.0, 0.0),
        Point::new(10.0, -4.0),
        Point::new(-7.5, 100.0),
    ] {
        let ours = state.content_to_view(pt);
        let theirs = affine * pt;
        assert!((ours - theirs).hypot() < 1e-12);
        let back = state.view_to_content(ours);
        assert!((back - pt).hypot() < 1e-12);
    }
}

#[test]
fn flipped_scale_still_yields_positive_rects() {
    let state = AffineState::new(-1.0, 1.0, 800.0, 0.0);
    let view = state.content_to_view_rect(Rect::new(0.0, 0.0, 100.0, 50.0));
    assert_eq!(view, Rect::new(700.0, 0.0, 800.0, 50.0));
    assert_eq!(
        state.view_to_content_rect(view),
        Rect::new(0.0, 0.0, 100.0, 50.0)
    );
}

#[test]
fn every_quadrant_normalizes_to_the_same_rect() {
    // One 40x30 rect, anchored from each of its four corners.
    let expected = Rect::new(10.0, 20.0, 50.0, 50.0);
    let anchors = [
        (Flip::Positive, Flip::Positive, 10.0, 20.0),
        (Flip::Negative, Flip::Positive, 50.0, 20.0),
        (Flip::Negative, Flip::Negative, 50.0, 50.0),
        (Flip::Positive, Flip::Negative, 10.0, 50.0),
    ];
    for (fx, fy, left, top) in anchors {
        assert_eq!(normalize_rect(fx, fy, left, top, 40.0, 30.0), expected);
    }
}

#[test]
fn limits_feed_axis_queries() {
    let limits = BoundingLimits::from_rects([
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Rect::new(-50.0, 300.0, 20.0, 400.0),
    ])
    .unwrap();
    assert_eq!(limits.leading(Axis::Horizontal), -50.0);
    assert_eq!(limits.trailing(Axis::Horizontal), 100.0);
    assert_eq!(limits.leading(Axis::Vertical), 0.0);
    assert_eq!(limits.trailing(Axis::Vertical), 400.0);
    assert_eq!(limits.to_rect(), Rect::new(-50.0, 0.0, 100.0, 400.0));
}

#[test]
fn geometry_reports_scroll_room_per_axis() {
    let mut geo = ViewportGeometry::collapsed(Size::new(800.0, 600.0));
    assert!(geo.is_collapsed(Axis::Horizontal));
    assert_eq!(geo.max_offset(Axis::Horizontal), 0.0);

    Axis::Horizontal.set_length(&mut geo.extent, 1000.0);
    Axis::Horizontal.set_component(&mut geo.offset, 200.0);
    assert!(!geo.is_collapsed(Axis::Horizontal));
    assert!(geo.is_collapsed(Axis::Vertical));
    assert_eq!(geo.max_offset(Axis::Horizontal), 200.0);
    assert_eq!(geo.offset, Vec2::new(200.0, 0.0));
}
