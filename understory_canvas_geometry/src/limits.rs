// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

use crate::axis::Axis;

/// Union extremes of all realized canvas items, in content coordinates.
///
/// Supplied by the item host; controllers treat it as read‑only input that
/// may be up to one layout pass stale.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingLimits {
    /// Smallest Y of any item.
    pub top: f64,
    /// Largest Y of any item.
    pub bottom: f64,
    /// Smallest X of any item.
    pub left: f64,
    /// Largest X of any item.
    pub right: f64,
}

impl BoundingLimits {
    /// Creates limits from the four edges.
    #[must_use]
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Limits covering exactly `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.y0, rect.y1, rect.x0, rect.x1)
    }

    /// Folds item rectangles into their union limits.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_rects<I>(rects: I) -> Option<Self>
    where
        I: IntoIterator<Item = Rect>,
    {
        rects
            .into_iter()
            .map(Self::from_rect)
            .reduce(|acc, next| acc.union(&next))
    }

    /// Smallest limits containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(
            self.top.min(other.top),
            self.bottom.max(other.bottom),
            self.left.min(other.left),
            self.right.max(other.right),
        )
    }

    /// The leading (smaller) limit along `axis`: `left` or `top`.
    #[must_use]
    pub fn leading(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// The trailing (larger) limit along `axis`: `right` or `bottom`.
    #[must_use]
    pub fn trailing(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// Returns the limits as a rectangle.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

/// Scrollbar‑compatible view of a canvas.
///
/// - `extent` is the logical scrollable area.
/// - `viewport` is the visible area.
/// - `offset` is the scroll position, `0 <= offset <= extent - viewport` on
///   each axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewportGeometry {
    /// Total scrollable size.
    pub extent: Size,
    /// Visible size.
    pub viewport: Size,
    /// Current scroll position.
    pub offset: Vec2,
}

impl ViewportGeometry {
    /// Collapsed geometry for a viewport: extent equals viewport, offset zero.
    #[must_use]
    pub fn collapsed(viewport: Size) -> Self {
        Self {
            extent: viewport,
            viewport,
            offset: Vec2::ZERO,
        }
    }

    /// Largest offset the extent allows along `axis`.
    #[must_use]
    pub fn max_offset(&self, axis: Axis) -> f64 {
        (axis.length(self.extent) - axis.length(self.viewport)).max(0.0)
    }

    /// Returns `true` when `axis` has no scrollable overflow.
    #[must_use]
    pub fn is_collapsed(&self, axis: Axis) -> bool {
        axis.component(self.offset) == 0.0 && axis.length(self.extent) == axis.length(self.viewport)
    }
}
