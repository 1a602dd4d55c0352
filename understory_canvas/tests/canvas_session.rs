// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end sessions for the `understory_canvas` crate.
//!
//! A tiny item host keeps drawn rectangles in a `Vec`; each test drives the
//! canvas with pointer and wheel events the way a window would.

use kurbo::{Point, Rect, Size};
use understory_canvas::geometry::{Axis, BoundingLimits};
use understory_canvas::{Canvas, CanvasTool, ItemHost, ScrollHost};

#[derive(Debug, Default)]
struct Board {
    items: Vec<Rect>,
    remeasures: usize,
}

impl ItemHost for Board {
    fn bounding_limits(&self) -> Option<BoundingLimits> {
        BoundingLimits::from_rects(self.items.iter().copied())
    }

    fn is_virtualization_enabled(&self) -> bool {
        true
    }

    fn request_remeasure(&mut self) {
        self.remeasures += 1;
    }
}

#[derive(Debug, Default)]
struct Scrollbars {
    invalidations: usize,
}

impl ScrollHost for Scrollbars {
    fn invalidate_scroll_info(&mut self) {
        self.invalidations += 1;
    }
}

fn board() -> Canvas<Board, Scrollbars> {
    let mut canvas = Canvas::new(Board::default());
    canvas.viewport_mut().attach_scroll_host(Scrollbars::default());
    canvas.viewport_mut().on_resize(Size::new(800.0, 600.0));
    canvas.set_tool(CanvasTool::Draw);
    canvas
}

fn draw(canvas: &mut Canvas<Board, Scrollbars>, from: Point, to: Point) -> Rect {
    canvas.pointer_down(from);
    canvas.pointer_move(to);
    canvas.pointer_move(to);
    let item = canvas.pointer_up().unwrap();
    canvas.host_mut().items.push(item.rect());
    canvas.viewport_mut().refresh();
    item.rect()
}

#[test]
fn drawing_inside_viewport_keeps_axes_collapsed() {
    let mut canvas = board();
    let rect = draw(&mut canvas, Point::new(50.0, 50.0), Point::new(10.0, 10.0));
    assert_eq!(rect, Rect::new(10.0, 10.0, 50.0, 50.0));

    let geo = canvas.viewport().geometry();
    assert!(geo.is_collapsed(Axis::Horizontal));
    assert!(geo.is_collapsed(Axis::Vertical));
}

#[test]
fn drawing_past_the_corner_extends_both_axes() {
    let mut canvas = board();
    draw(&mut canvas, Point::new(10.0, 10.0), Point::new(50.0, 50.0));
    draw(&mut canvas, Point::new(900.0, 700.0), Point::new(700.0, 500.0));

    let vp = canvas.viewport();
    assert_eq!(vp.extent_width(), 900.0);
    assert_eq!(vp.extent_height(), 700.0);
    assert!(vp.horizontal_offset() <= vp.extent_width() - vp.viewport_width());
    assert!(vp.vertical_offset() <= vp.extent_height() - vp.viewport_height());
}

#[test]
fn dragging_past_the_corner_extends_before_release() {
    let mut canvas = board();
    draw(&mut canvas, Point::new(0.0, 0.0), Point::new(100.0, 100.0));

    canvas.pointer_down(Point::new(700.0, 500.0));
    canvas.pointer_move(Point::new(900.0, 700.0));
    assert!(canvas.is_drawing());
    assert_eq!(canvas.viewport().extent_width(), 900.0);
    assert_eq!(canvas.viewport().extent_height(), 700.0);

    // Pulling back inside shrinks the extent again mid-drag.
    canvas.pointer_move(Point::new(750.0, 550.0));
    assert_eq!(canvas.viewport().extent_width(), 800.0);
    assert_eq!(canvas.viewport().extent_height(), 600.0);

    canvas.pointer_move(Point::new(900.0, 700.0));
    let item = canvas.pointer_up().unwrap();
    assert!(canvas.viewport().drawing_limits().is_none());
    canvas.host_mut().items.push(item.rect());
    canvas.viewport_mut().refresh();
    assert_eq!(canvas.viewport().extent_width(), 900.0);
    assert_eq!(canvas.viewport().extent_height(), 700.0);
}

#[test]
fn panning_to_reveal_and_back() {
    let mut canvas = board();
    draw(&mut canvas, Point::new(0.0, 0.0), Point::new(100.0, 100.0));

    canvas.set_tool(CanvasTool::Pan);
    canvas.pointer_down(Point::new(400.0, 300.0));
    canvas.pointer_move(Point::new(200.0, 300.0));
    canvas.pointer_up();
    assert_eq!(canvas.viewport().horizontal_offset(), 200.0);
    assert_eq!(canvas.viewport().extent_width(), 1000.0);
    assert!(canvas.host().remeasures > 0);

    canvas.pointer_down(Point::new(200.0, 300.0));
    canvas.pointer_move(Point::new(400.0, 300.0));
    canvas.pointer_up();
    assert_eq!(canvas.viewport().horizontal_offset(), 0.0);
    assert_eq!(canvas.viewport().extent_width(), 800.0);
}

#[test]
fn zoomed_drawing_lands_in_content_space() {
    let mut canvas = board();
    let pivot = Point::new(400.0, 300.0);
    canvas.wheel(pivot, 120.0, true);
    assert!(canvas.viewport().is_zooming());

    // Scroll steps are ignored while the zoom modifier is held.
    let before = canvas.viewport().transform();
    canvas.viewport_mut().line_down();
    assert_eq!(canvas.viewport().transform(), before);

    let rect = draw(&mut canvas, Point::new(400.0, 300.0), Point::new(510.0, 410.0));
    // The pivot maps back to itself, and 110 view units are 100 content units.
    assert!((rect.x0 - 400.0).abs() < 1e-9);
    assert!((rect.width() - 100.0).abs() < 1e-9);

    canvas.wheel(pivot, -120.0, true);
    assert!(canvas.viewport().transform().approx_eq(
        &understory_canvas::geometry::AffineState::IDENTITY,
        1e-9
    ));
}

#[test]
fn scroll_host_is_notified_by_every_mutation() {
    let mut canvas = board();
    let count = |c: &Canvas<Board, Scrollbars>| c.viewport().scroll_host().unwrap().invalidations;

    let start = count(&canvas);
    canvas.viewport_mut().set_vertical_offset(5.0);
    canvas.viewport_mut().set_horizontal_offset(5.0);
    canvas.viewport_mut().pan(Axis::Vertical, 3.0, false);
    canvas.wheel(Point::new(1.0, 1.0), 1.0, true);
    canvas.wheel(Point::new(1.0, 1.0), -1.0, false);
    assert_eq!(count(&canvas), start + 5);
}
