// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Draw Gesture: drag out a rectangle in any direction.
//!
//! A user creates a new canvas item by pressing the pointer, dragging, and
//! releasing. The drag may go in any of four directions. While the gesture is
//! in progress the item keeps its anchor (the pointer‑down position) and a
//! per‑axis [`Flip`] records which quadrant the pointer has moved into; the
//! width and height are always absolute. When the gesture ends the flip is
//! resolved, exactly once, into a canonical top‑left anchored rectangle.
//!
//! ## Usage
//!
//! 1) Call [`RectangleDrawGesture::begin`] on pointer down (content coordinates).
//! 2) Call [`RectangleDrawGesture::update`] on every pointer move. Redundant
//!    moves to the same position are harmless.
//! 3) Call [`RectangleDrawGesture::end`] on pointer up and hand the returned
//!    [`DrawnItem`] to your item collection.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_draw_gesture::RectangleDrawGesture;
//!
//! let mut draw = RectangleDrawGesture::new();
//! draw.begin(Point::new(50.0, 50.0));
//! draw.update(Point::new(10.0, 10.0));
//!
//! let item = draw.end().unwrap();
//! assert!(item.is_finalized());
//! assert_eq!(item.rect(), Rect::new(10.0, 10.0, 50.0, 50.0));
//! assert!(!draw.is_drawing());
//! ```
//!
//! This crate is `no_std`.
//!
//! [`Flip`]: understory_canvas_geometry::Flip

#![no_std]

mod gesture;
mod item;

pub use gesture::RectangleDrawGesture;
pub use item::DrawnItem;
