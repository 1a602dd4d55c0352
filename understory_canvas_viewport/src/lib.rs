// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Canvas Viewport: scroll‑info for infinite, zoomable canvases.
//!
//! An infinite canvas has no natural scroll range. This crate derives one:
//! [`ViewportController`] owns the canvas pan/zoom [`AffineState`] and, from
//! the union extremes of the realized items, computes a scrollbar‑compatible
//! extent, viewport and offset on each axis. When all content is visible an
//! axis is *collapsed* (offset zero, extent equal to the viewport); when
//! content spills past an edge the extent grows just enough to reach it.
//! Scrolling past real content is impossible.
//!
//! The controller does not own any items, layout pass or scrollbars. Callers
//! provide two small capabilities:
//! - [`ItemHost`]: bounding limits of realized items, whether virtualization
//!   is enabled, and re‑measure/re‑arrange requests.
//! - [`ScrollHost`]: a notification sink for scroll‑info changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_canvas_geometry::{Axis, BoundingLimits};
//! use understory_canvas_viewport::{ItemHost, ScrollHost, ViewportController};
//!
//! struct Items(BoundingLimits);
//!
//! impl ItemHost for Items {
//!     fn bounding_limits(&self) -> Option<BoundingLimits> {
//!         Some(self.0)
//!     }
//! }
//!
//! struct Scrollbars;
//!
//! impl ScrollHost for Scrollbars {
//!     fn invalidate_scroll_info(&mut self) {}
//! }
//!
//! // One 100x100 item at the origin.
//! let items = Items(BoundingLimits::new(0.0, 100.0, 0.0, 100.0));
//! let mut viewport = ViewportController::new(items);
//! viewport.attach_scroll_host(Scrollbars);
//! viewport.on_resize(Size::new(800.0, 600.0));
//!
//! // Drag the content 200px to the left: the item is now off-screen, so the
//! // horizontal axis extends to reach it.
//! viewport.pan(Axis::Horizontal, -200.0, false);
//! assert_eq!(viewport.horizontal_offset(), 200.0);
//! assert_eq!(viewport.extent_width(), 1000.0);
//!
//! // Drag it back: everything fits again.
//! viewport.pan(Axis::Horizontal, 200.0, false);
//! assert_eq!(viewport.horizontal_offset(), 0.0);
//! assert_eq!(viewport.extent_width(), 800.0);
//! ```
//!
//! ## Design notes
//!
//! - All operations are synchronous and take `&mut self`; there is no
//!   interior mutability and no locking.
//! - Without an attached [`ScrollHost`] every mutation is a no‑op. Hosts
//!   routinely call in during startup and teardown.
//! - [`ViewportController::set_offset`] treats a request of exactly `0.0` as a
//!   reset. [`ViewportController::reset_offset`] is the explicit form.
//!
//! This crate is `no_std`.
//!
//! [`AffineState`]: understory_canvas_geometry::AffineState

#![no_std]

mod config;
mod controller;
mod error;
mod host;
mod pan;
mod zoom;

pub use config::{DEFAULT_STEP, ViewportConfig};
pub use controller::{ScrollDirection, ViewportController, ViewportDebugInfo};
pub use error::ViewportError;
pub use host::{ItemHost, ScrollHost};
pub use pan::PanGesture;
pub use zoom::ZoomGesture;
