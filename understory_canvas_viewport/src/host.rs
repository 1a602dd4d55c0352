// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities the controller consumes from its embedder.

use understory_canvas_geometry::BoundingLimits;

/// The item host: whatever owns and lays out the canvas items.
///
/// The controller never sees the items themselves, only their union extremes
/// and a way to ask the layout pass to run again.
pub trait ItemHost {
    /// Union extremes of all realized items, in content coordinates.
    ///
    /// `None` means there is nothing to scroll to.
    fn bounding_limits(&self) -> Option<BoundingLimits>;

    /// Whether only the items intersecting the viewport are realized.
    ///
    /// When `true`, panning and zooming ask for a re‑measure so the realized
    /// set can follow the viewport.
    fn is_virtualization_enabled(&self) -> bool {
        false
    }

    /// Asks the layout pass to measure items again.
    fn request_remeasure(&mut self) {}

    /// Asks the layout pass to arrange items again.
    fn request_rearrange(&mut self) {}
}

/// The scroll host: whatever draws scrollbars for the canvas.
pub trait ScrollHost {
    /// Notifies the host that extent, viewport or offset may have changed.
    fn invalidate_scroll_info(&mut self);
}

impl<T: ItemHost + ?Sized> ItemHost for &mut T {
    fn bounding_limits(&self) -> Option<BoundingLimits> {
        (**self).bounding_limits()
    }

    fn is_virtualization_enabled(&self) -> bool {
        (**self).is_virtualization_enabled()
    }

    fn request_remeasure(&mut self) {
        (**self).request_remeasure();
    }

    fn request_rearrange(&mut self) {
        (**self).request_rearrange();
    }
}

impl<T: ScrollHost + ?Sized> ScrollHost for &mut T {
    fn invalidate_scroll_info(&mut self) {
        (**self).invalidate_scroll_info();
    }
}
