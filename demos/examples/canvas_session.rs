// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless canvas session.
//!
//! Draws a few rectangles, pans and zooms, and prints the scroll‑info a
//! scrollbar would read after each step. Set `RUST_LOG=debug` (or `trace`)
//! to watch the viewport's own logging.
//!
//! An optional JSON file overrides the viewport configuration:
//!
//! ```json
//! { "step": 25.0, "zoom_factor": 1.25 }
//! ```
//!
//! Run:
//! - `cargo run -p understory_demos --example canvas_session`
//! - `cargo run -p understory_demos --example canvas_session -- viewport.json`

use std::error::Error;
use std::fs;

use kurbo::{Point, Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_canvas::{Canvas, CanvasTool};
use understory_canvas_viewport::ViewportConfig;
use understory_demos::{Board, Scrollbars};

fn load_config() -> Result<ViewportConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)?;
            let config: ViewportConfig = serde_json::from_str(&text)?;
            tracing::info!(%path, ?config, "loaded viewport config");
            Ok(config)
        }
        None => Ok(ViewportConfig::default()),
    }
}

fn report(label: &str, canvas: &Canvas<Board, Scrollbars>) {
    let vp = canvas.viewport();
    println!(
        "{label:<24} extent={:>7.1}x{:<7.1} offset=({:>6.1}, {:>6.1}) scale={:.3}",
        vp.extent_width(),
        vp.extent_height(),
        vp.horizontal_offset(),
        vp.vertical_offset(),
        vp.transform().scale_x,
    );
}

fn draw(canvas: &mut Canvas<Board, Scrollbars>, from: Point, to: Point) {
    canvas.set_tool(CanvasTool::Draw);
    canvas.pointer_down(from);
    canvas.pointer_move(to);
    if let Some(item) = canvas.pointer_up() {
        canvas.host_mut().items.push(item.rect());
        canvas.viewport_mut().refresh();
    }
}

fn drag(canvas: &mut Canvas<Board, Scrollbars>, from: Point, to: Point) {
    canvas.set_tool(CanvasTool::Pan);
    canvas.pointer_down(from);
    canvas.pointer_move(to);
    canvas.pointer_up();
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut canvas = Canvas::with_config(Board::default(), load_config()?);
    canvas.viewport_mut().attach_scroll_host(Scrollbars::default());
    canvas.viewport_mut().on_resize(Size::new(800.0, 600.0));
    report("resized", &canvas);

    draw(&mut canvas, Point::new(50.0, 50.0), Point::new(10.0, 10.0));
    report("drawn inside", &canvas);

    draw(&mut canvas, Point::new(700.0, 500.0), Point::new(900.0, 700.0));
    report("drawn past corner", &canvas);

    drag(&mut canvas, Point::new(400.0, 300.0), Point::new(200.0, 300.0));
    report("panned left", &canvas);

    canvas.wheel(Point::new(400.0, 300.0), 120.0, true);
    report("zoomed in", &canvas);

    canvas.wheel(Point::new(400.0, 300.0), -120.0, true);
    report("zoomed out", &canvas);

    canvas.wheel(Point::new(400.0, 300.0), -120.0, false);
    report("wheel down", &canvas);

    let info = canvas.viewport().debug_info();
    println!("{info:#?}");

    if let Err(err) = canvas.viewport_mut().make_visible(Rect::new(0.0, 0.0, 1.0, 1.0)) {
        tracing::warn!(%err, "make_visible");
    }

    let notified = canvas
        .viewport()
        .scroll_host()
        .map_or(0, |s| s.invalidations);
    println!("scroll host notified {notified} times");
    Ok(())
}
