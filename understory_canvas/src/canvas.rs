// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use understory_canvas_geometry::BoundingLimits;
use understory_canvas_viewport::{ItemHost, ScrollHost, ViewportConfig, ViewportController};
use understory_draw_gesture::{DrawnItem, RectangleDrawGesture};

/// What the primary pointer button does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CanvasTool {
    /// Dragging pans the canvas.
    #[default]
    Pan,
    /// Dragging draws a new rectangular item.
    Draw,
}

/// Pointer and wheel routing for one canvas.
#[derive(Debug)]
pub struct Canvas<H, S> {
    viewport: ViewportController<H, S>,
    draw: RectangleDrawGesture,
    tool: CanvasTool,
}

impl<H: ItemHost, S: ScrollHost> Canvas<H, S> {
    /// Creates a canvas with the default viewport configuration.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_config(host, ViewportConfig::default())
    }

    /// Creates a canvas with the given viewport configuration.
    #[must_use]
    pub fn with_config(host: H, config: ViewportConfig) -> Self {
        Self {
            viewport: ViewportController::with_config(host, config),
            draw: RectangleDrawGesture::new(),
            tool: CanvasTool::default(),
        }
    }

    /// The viewport controller.
    #[must_use]
    pub fn viewport(&self) -> &ViewportController<H, S> {
        &self.viewport
    }

    /// The viewport controller, mutably.
    pub fn viewport_mut(&mut self) -> &mut ViewportController<H, S> {
        &mut self.viewport
    }

    /// The item host.
    #[must_use]
    pub fn host(&self) -> &H {
        self.viewport.host()
    }

    /// The item host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        self.viewport.host_mut()
    }

    /// The draw gesture.
    #[must_use]
    pub fn draw_gesture(&self) -> &RectangleDrawGesture {
        &self.draw
    }

    /// The active tool.
    #[must_use]
    pub fn tool(&self) -> CanvasTool {
        self.tool
    }

    /// Switches tools. An unfinished draw is cancelled and handed back.
    pub fn set_tool(&mut self, tool: CanvasTool) -> Option<DrawnItem> {
        if self.tool != tool {
            tracing::debug!(from = ?self.tool, to = ?tool, "canvas tool changed");
        }
        self.tool = tool;
        self.viewport.end_pan();
        let cancelled = self.draw.cancel();
        if cancelled.is_some() {
            self.viewport.set_drawing_limits(None);
            self.viewport.refresh();
        }
        cancelled
    }

    /// Starts drawing at `view_pt`.
    pub fn begin_draw(&mut self, view_pt: Point) -> DrawnItem {
        let content = self.viewport.view_to_content(view_pt);
        let item = *self.draw.begin(content);
        self.sync_drawing_limits();
        item
    }

    /// Stretches the in‑progress item to `view_pt`.
    ///
    /// The viewport measures against [`drawing_limits`](Self::drawing_limits)
    /// until the draw ends, so dragging past an edge extends the canvas.
    pub fn update_draw(&mut self, view_pt: Point) -> Option<DrawnItem> {
        let content = self.viewport.view_to_content(view_pt);
        let item = *self.draw.update(content)?;
        self.sync_drawing_limits();
        Some(item)
    }

    /// Grows the in‑progress item by content‑space amounts, e.g. while the
    /// host auto‑scrolls during a draw. No‑op when not drawing.
    pub fn grow_draw(&mut self, width_delta: f64, height_delta: f64) -> Option<DrawnItem> {
        if !self.draw.is_drawing() {
            return None;
        }
        self.draw.grow(width_delta, height_delta);
        self.sync_drawing_limits();
        self.draw.current().copied()
    }

    /// Finalizes the in‑progress item.
    ///
    /// The host is asked to re‑measure and re‑arrange, and the viewport
    /// re‑derives its scroll‑info. Adding the item to the collection is the
    /// caller's job.
    pub fn end_draw(&mut self) -> Option<DrawnItem> {
        let item = self.draw.end()?;
        tracing::trace!(rect = ?item.rect(), "relayout after draw");
        self.viewport.set_drawing_limits(None);
        let host = self.viewport.host_mut();
        host.request_remeasure();
        host.request_rearrange();
        self.viewport.refresh();
        Some(item)
    }

    /// Returns `true` while an item is being drawn.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.draw.is_drawing()
    }

    /// Host limits extended by the in‑progress item, if any.
    #[must_use]
    pub fn drawing_limits(&self) -> Option<BoundingLimits> {
        let host = self.viewport.host().bounding_limits();
        let drawn = self
            .draw
            .current()
            .map(|item| BoundingLimits::from_rect(item.rect()));
        match (host, drawn) {
            (Some(a), Some(b)) => Some(a.union(&b)),
            (a, b) => a.or(b),
        }
    }

    /// Whether the in‑progress item has reached the host's left or top limit.
    #[must_use]
    pub fn is_draw_out_of_bounds(&self) -> bool {
        self.viewport
            .host()
            .bounding_limits()
            .is_some_and(|limits| self.draw.is_out_of_bounds_left_or_top(&limits))
    }

    fn sync_drawing_limits(&mut self) {
        let limits = self.drawing_limits();
        self.viewport.set_drawing_limits(limits);
        self.viewport.refresh();
    }

    /// Primary button pressed at `view_pt`.
    pub fn pointer_down(&mut self, view_pt: Point) {
        match self.tool {
            CanvasTool::Draw => {
                self.begin_draw(view_pt);
            }
            CanvasTool::Pan => self.viewport.begin_pan(view_pt),
        }
    }

    /// Pointer moved to `view_pt`.
    pub fn pointer_move(&mut self, view_pt: Point) {
        match self.tool {
            CanvasTool::Draw => {
                self.update_draw(view_pt);
            }
            CanvasTool::Pan => self.viewport.update_pan(view_pt),
        }
    }

    /// Primary button released. Returns the finalized item when drawing.
    pub fn pointer_up(&mut self) -> Option<DrawnItem> {
        match self.tool {
            CanvasTool::Draw => self.end_draw(),
            CanvasTool::Pan => {
                self.viewport.end_pan();
                None
            }
        }
    }

    /// Mouse wheel at `pivot`.
    ///
    /// With the zoom modifier held this zooms about `pivot`; otherwise it
    /// scrolls one wheel step up (positive delta) or down (negative delta).
    pub fn wheel(&mut self, pivot: Point, delta: f64, zoom_modifier: bool) {
        self.viewport.set_zooming(zoom_modifier);
        if zoom_modifier {
            self.viewport.zoom(pivot, delta);
        } else if delta > 0.0 {
            self.viewport.mouse_wheel_up();
        } else if delta < 0.0 {
            self.viewport.mouse_wheel_down();
        }
    }
}
