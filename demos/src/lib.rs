// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared hosts for the canvas demos.

use kurbo::Rect;
use understory_canvas::geometry::BoundingLimits;
use understory_canvas::{ItemHost, ScrollHost};

/// Item host that keeps every drawn rectangle in a `Vec`.
#[derive(Debug, Default)]
pub struct Board {
    /// Finalized item rectangles in content coordinates.
    pub items: Vec<Rect>,
}

impl ItemHost for Board {
    fn bounding_limits(&self) -> Option<BoundingLimits> {
        BoundingLimits::from_rects(self.items.iter().copied())
    }

    fn request_rearrange(&mut self) {
        tracing::debug!(items = self.items.len(), "board rearrange requested");
    }
}

/// Scroll host that only counts invalidations.
#[derive(Debug, Default)]
pub struct Scrollbars {
    /// Number of `invalidate_scroll_info` calls received.
    pub invalidations: usize,
}

impl ScrollHost for Scrollbars {
    fn invalidate_scroll_info(&mut self) {
        self.invalidations += 1;
    }
}
