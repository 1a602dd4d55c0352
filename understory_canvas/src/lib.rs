// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Canvas: pointer and wheel routing for an infinite canvas.
//!
//! [`Canvas`] combines a [`ViewportController`] and a
//! [`RectangleDrawGesture`] over one [`ItemHost`]. Pointer positions arrive in
//! viewport coordinates and are converted into content coordinates through
//! the viewport's transform before they reach the draw gesture. When a drawn
//! item is finalized the host is asked to re‑measure and re‑arrange and the
//! viewport re‑derives its scroll‑info.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_canvas::{Canvas, CanvasTool};
//! use understory_canvas::geometry::BoundingLimits;
//! use understory_canvas::viewport::{ItemHost, ScrollHost};
//!
//! #[derive(Default)]
//! struct Items(Vec<Rect>);
//!
//! impl ItemHost for Items {
//!     fn bounding_limits(&self) -> Option<BoundingLimits> {
//!         BoundingLimits::from_rects(self.0.iter().copied())
//!     }
//! }
//!
//! struct Scrollbars;
//!
//! impl ScrollHost for Scrollbars {
//!     fn invalidate_scroll_info(&mut self) {}
//! }
//!
//! let mut canvas = Canvas::new(Items::default());
//! canvas.viewport_mut().attach_scroll_host(Scrollbars);
//! canvas.viewport_mut().on_resize(Size::new(800.0, 600.0));
//!
//! canvas.set_tool(CanvasTool::Draw);
//! canvas.pointer_down(Point::new(50.0, 50.0));
//! canvas.pointer_move(Point::new(10.0, 10.0));
//! let item = canvas.pointer_up().unwrap();
//! assert_eq!(item.rect(), Rect::new(10.0, 10.0, 50.0, 50.0));
//!
//! canvas.host_mut().0.push(item.rect());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod canvas;

pub use canvas::{Canvas, CanvasTool};

pub use understory_canvas_geometry as geometry;
pub use understory_canvas_viewport as viewport;
pub use understory_draw_gesture as draw;

pub use understory_canvas_viewport::{ItemHost, ScrollHost, ViewportController};
pub use understory_draw_gesture::{DrawnItem, RectangleDrawGesture};
