// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Canvas Geometry: small value types shared by canvas controllers.
//!
//! This crate is the leaf of the Understory canvas stack. It has no behavior
//! of its own beyond arithmetic:
//! - [`AffineState`]: a composed scale+translate transform mapping canvas
//!   content coordinates into viewport coordinates.
//! - [`Axis`]: addresses one axis of a 2D quantity so per‑axis logic can be
//!   written once.
//! - [`Flip`] and [`normalize`]: the sign used to represent dragging in the
//!   negative direction, and the single function that turns a flipped anchor
//!   into a true top‑left corner.
//! - [`BoundingLimits`]: the union extremes of all realized items.
//! - [`ViewportGeometry`]: the scrollbar‑compatible extent/viewport/offset
//!   triple.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_canvas_geometry::{AffineState, Flip, normalize};
//!
//! // Content is zoomed 2x and shifted 10px to the right.
//! let state = AffineState::new(2.0, 2.0, 10.0, 0.0);
//! let view = state.content_to_view(Point::new(5.0, 5.0));
//! assert_eq!(view, Point::new(20.0, 10.0));
//! assert_eq!(state.view_to_content(view), Point::new(5.0, 5.0));
//!
//! // An item anchored at (50, 50) that was dragged up and to the left.
//! let (left, top) = normalize(Flip::Negative, Flip::Negative, 50.0, 50.0, 40.0, 40.0);
//! assert_eq!((left, top), (10.0, 10.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod affine;
mod axis;
mod flip;
mod limits;

pub use affine::AffineState;
pub use axis::Axis;
pub use flip::{Flip, normalize, normalize_rect};
pub use limits::{BoundingLimits, ViewportGeometry};
