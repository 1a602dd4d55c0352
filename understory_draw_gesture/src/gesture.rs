// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use understory_canvas_geometry::BoundingLimits;

use crate::item::DrawnItem;

/// Turns a pointer down/move/up sequence into a canonical item rectangle.
///
/// The gesture owns the in‑progress [`DrawnItem`] until [`end`](Self::end)
/// hands it to the caller. All positions are in canvas content coordinates.
///
/// Calls made without an active gesture are no‑ops: they happen routinely
/// while a host is starting up or tearing down.
#[derive(Clone, Debug, Default)]
pub struct RectangleDrawGesture {
    current: Option<DrawnItem>,
}

impl RectangleDrawGesture {
    /// Creates an idle gesture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts drawing a new item anchored at `anchor`.
    ///
    /// An unfinished item from a previous gesture is dropped.
    pub fn begin(&mut self, anchor: Point) -> &DrawnItem {
        if self.current.is_some() {
            tracing::debug!("draw gesture restarted; dropping unfinished item");
        }
        self.current.insert(DrawnItem::at_anchor(anchor))
    }

    /// Stretches the in‑progress item from its anchor to `pos`.
    ///
    /// Returns the updated item, or `None` when not drawing.
    pub fn update(&mut self, pos: Point) -> Option<&DrawnItem> {
        let Some(item) = self.current.as_mut() else {
            tracing::trace!("draw update without an active gesture");
            return None;
        };
        item.stretch_to(pos);
        Some(item)
    }

    /// Grows the in‑progress item by the given amounts.
    ///
    /// Used by hosts that auto‑scroll the canvas while a draw is in progress.
    /// Sizes saturate at zero.
    pub fn grow(&mut self, width_delta: f64, height_delta: f64) {
        if let Some(item) = self.current.as_mut() {
            item.grow(width_delta, height_delta);
        }
    }

    /// Ends the gesture, normalizing the item into a top‑left anchored rectangle.
    ///
    /// Returns `None` when [`begin`](Self::begin) was never called.
    pub fn end(&mut self) -> Option<DrawnItem> {
        let Some(mut item) = self.current.take() else {
            tracing::trace!("draw end without an active gesture");
            return None;
        };
        item.finalize();
        tracing::debug!(
            left = item.left(),
            top = item.top(),
            width = item.width(),
            height = item.height(),
            "drawn item finalized"
        );
        Some(item)
    }

    /// Abandons the gesture and returns the partial, un‑normalized item.
    pub fn cancel(&mut self) -> Option<DrawnItem> {
        self.current.take()
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    /// The in‑progress item, if any.
    #[must_use]
    pub fn current(&self) -> Option<&DrawnItem> {
        self.current.as_ref()
    }

    /// Visible left edge of the in‑progress item.
    #[must_use]
    pub fn current_left(&self) -> Option<f64> {
        self.current.map(|item| item.rect().x0)
    }

    /// Visible top edge of the in‑progress item.
    #[must_use]
    pub fn current_top(&self) -> Option<f64> {
        self.current.map(|item| item.rect().y0)
    }

    /// Visible right edge of the in‑progress item.
    #[must_use]
    pub fn current_right(&self) -> Option<f64> {
        self.current.map(|item| item.rect().x1)
    }

    /// Visible bottom edge of the in‑progress item.
    #[must_use]
    pub fn current_bottom(&self) -> Option<f64> {
        self.current.map(|item| item.rect().y1)
    }

    /// Reports whether the item's leading edge has reached the left or top limit.
    ///
    /// Only flipped axes can grow past the anchor toward the leading limits, so
    /// only those are checked. Touching a limit counts. Hosts use this to
    /// decide whether to extend the canvas while drawing.
    #[must_use]
    pub fn is_out_of_bounds_left_or_top(&self, limits: &BoundingLimits) -> bool {
        let Some(item) = self.current.as_ref() else {
            return false;
        };
        let origin = item.origin();
        (item.flip_x().is_flipped() && origin.x <= limits.left)
            || (item.flip_y().is_flipped() && origin.y <= limits.top)
    }
}
