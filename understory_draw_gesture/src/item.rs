// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use understory_canvas_geometry::{Flip, normalize, normalize_rect};

/// A rectangle created by a draw gesture.
///
/// While not finalized, `(left, top)` is the fixed anchor and the flips encode
/// which quadrant the pointer has moved into. Once finalized both flips are
/// [`Flip::Positive`] and `(left, top)` is the true top‑left corner.
///
/// Width and height are never negative.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawnItem {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    flip_x: Flip,
    flip_y: Flip,
    finalized: bool,
}

impl DrawnItem {
    pub(crate) fn at_anchor(anchor: Point) -> Self {
        Self {
            left: anchor.x,
            top: anchor.y,
            width: 0.0,
            height: 0.0,
            flip_x: Flip::Positive,
            flip_y: Flip::Positive,
            finalized: false,
        }
    }

    /// Recomputes flips and size from the anchor to `pos`.
    ///
    /// Depends only on the anchor and `pos`, so repeating it is a no‑op.
    pub(crate) fn stretch_to(&mut self, pos: Point) {
        let dx = pos.x - self.left;
        let dy = pos.y - self.top;
        self.flip_x = Flip::from_delta(dx);
        self.flip_y = Flip::from_delta(dy);
        self.width = dx.abs();
        self.height = dy.abs();
    }

    pub(crate) fn grow(&mut self, width_delta: f64, height_delta: f64) {
        self.width = (self.width + width_delta).max(0.0);
        self.height = (self.height + height_delta).max(0.0);
    }

    /// Moves the anchor to the true top‑left corner and clears the flips.
    pub(crate) fn finalize(&mut self) {
        let Point { x: left, y: top } = self.origin();
        self.left = left;
        self.top = top;
        self.flip_x = Flip::Positive;
        self.flip_y = Flip::Positive;
        self.finalized = true;
    }

    /// The stored left coordinate: the anchor while drawing, the true left edge once finalized.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// The stored top coordinate: the anchor while drawing, the true top edge once finalized.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Absolute width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Absolute height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Horizontal flip.
    #[must_use]
    pub fn flip_x(&self) -> Flip {
        self.flip_x
    }

    /// Vertical flip.
    #[must_use]
    pub fn flip_y(&self) -> Flip {
        self.flip_y
    }

    /// Returns `true` once the owning gesture has ended.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// The visible top‑left corner, with any flip applied.
    #[must_use]
    pub fn origin(&self) -> Point {
        let (x, y) = normalize(
            self.flip_x,
            self.flip_y,
            self.left,
            self.top,
            self.width,
            self.height,
        );
        Point::new(x, y)
    }

    /// The visible rectangle, with any flip applied.
    #[must_use]
    pub fn rect(&self) -> Rect {
        normalize_rect(
            self.flip_x,
            self.flip_y,
            self.left,
            self.top,
            self.width,
            self.height,
        )
    }

    /// Returns `true` for a zero‑area item, e.g. a click without a drag.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}
