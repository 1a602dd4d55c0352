// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};
use understory_canvas_geometry::{AffineState, Axis, BoundingLimits, ViewportGeometry};

use crate::config::ViewportConfig;
use crate::error::ViewportError;
use crate::host::{ItemHost, ScrollHost};
use crate::pan::PanGesture;
use crate::zoom::ZoomGesture;

/// Direction of a line, page or mouse‑wheel scroll step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Toward smaller Y.
    Up,
    /// Toward larger Y.
    Down,
    /// Toward smaller X.
    Left,
    /// Toward larger X.
    Right,
}

impl ScrollDirection {
    /// The axis this direction scrolls along.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// `true` for [`Down`](Self::Down) and [`Right`](Self::Right).
    #[must_use]
    pub fn is_forward(self) -> bool {
        matches!(self, Self::Down | Self::Right)
    }
}

/// How far content spills past the visible window on one axis, in viewport units.
#[derive(Clone, Copy, Debug, Default)]
struct Overflow {
    /// Content before the visible start.
    leading: f64,
    /// Content after the visible end.
    trailing: f64,
}

impl Overflow {
    fn any(&self) -> bool {
        self.leading > 0.0 || self.trailing > 0.0
    }
}

/// Viewport controller for an infinite canvas.
///
/// Owns the canvas [`AffineState`] and derives scrollbar‑compatible
/// [`ViewportGeometry`] from it and from the item host's
/// [`BoundingLimits`]. Each axis is either *collapsed* (offset zero, extent
/// equal to the viewport) or *extended* (content spills past the viewport and
/// the extent grows to reach the farthest content edge).
///
/// Until a [`ScrollHost`] is attached every mutating operation is a no‑op.
/// Every mutation notifies the scroll host before returning.
#[derive(Debug)]
pub struct ViewportController<H, S> {
    host: H,
    scroll_host: Option<S>,
    config: ViewportConfig,
    zoom: ZoomGesture,
    pan: PanGesture,
    transform: AffineState,
    geometry: ViewportGeometry,
    drawing_limits: Option<BoundingLimits>,
    initial_extent: Size,
    zooming: bool,
    can_scroll_horizontally: bool,
    can_scroll_vertically: bool,
}

impl<H: ItemHost, S: ScrollHost> ViewportController<H, S> {
    /// Creates a controller with the default configuration.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::with_config(host, ViewportConfig::default())
    }

    /// Creates a controller with the given configuration.
    #[must_use]
    pub fn with_config(host: H, config: ViewportConfig) -> Self {
        Self {
            host,
            scroll_host: None,
            config,
            zoom: ZoomGesture::from_config(&config),
            pan: PanGesture::default(),
            transform: AffineState::IDENTITY,
            geometry: ViewportGeometry::default(),
            drawing_limits: None,
            initial_extent: Size::ZERO,
            zooming: false,
            can_scroll_horizontally: true,
            can_scroll_vertically: true,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Replaces the configuration. Takes effect from the next operation.
    pub fn set_config(&mut self, config: ViewportConfig) {
        self.config = config;
        self.zoom = ZoomGesture::from_config(&config);
    }

    /// Returns the item host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the item host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Attaches the scroll host, enabling all scroll operations.
    pub fn attach_scroll_host(&mut self, scroll_host: S) {
        self.scroll_host = Some(scroll_host);
    }

    /// Detaches and returns the scroll host.
    pub fn detach_scroll_host(&mut self) -> Option<S> {
        self.scroll_host.take()
    }

    /// Returns the scroll host, if attached.
    #[must_use]
    pub fn scroll_host(&self) -> Option<&S> {
        self.scroll_host.as_ref()
    }

    /// Returns `true` once a scroll host is attached.
    #[must_use]
    pub fn has_scroll_host(&self) -> bool {
        self.scroll_host.is_some()
    }

    /// The current content→viewport transform.
    #[must_use]
    pub fn transform(&self) -> AffineState {
        self.transform
    }

    /// Converts a content‑space point into viewport coordinates.
    #[must_use]
    pub fn content_to_view(&self, pt: Point) -> Point {
        self.transform.content_to_view(pt)
    }

    /// Converts a viewport‑space point into content coordinates.
    #[must_use]
    pub fn view_to_content(&self, pt: Point) -> Point {
        self.transform.view_to_content(pt)
    }

    /// The content‑space rectangle currently visible through the viewport.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        self.transform
            .view_to_content_rect(self.geometry.viewport.to_rect())
    }

    /// Snapshot of extent, viewport and offset.
    #[must_use]
    pub fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    /// Total scrollable width.
    #[must_use]
    pub fn extent_width(&self) -> f64 {
        self.geometry.extent.width
    }

    /// Total scrollable height.
    #[must_use]
    pub fn extent_height(&self) -> f64 {
        self.geometry.extent.height
    }

    /// Visible width.
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.geometry.viewport.width
    }

    /// Visible height.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.geometry.viewport.height
    }

    /// Horizontal scroll position.
    #[must_use]
    pub fn horizontal_offset(&self) -> f64 {
        self.geometry.offset.x
    }

    /// Vertical scroll position.
    #[must_use]
    pub fn vertical_offset(&self) -> f64 {
        self.geometry.offset.y
    }

    /// Whether the scroll host may scroll horizontally.
    #[must_use]
    pub fn can_scroll_horizontally(&self) -> bool {
        self.can_scroll_horizontally
    }

    /// Whether the scroll host may scroll vertically.
    #[must_use]
    pub fn can_scroll_vertically(&self) -> bool {
        self.can_scroll_vertically
    }

    /// Set by the scroll host.
    pub fn set_can_scroll_horizontally(&mut self, value: bool) {
        self.can_scroll_horizontally = value;
    }

    /// Set by the scroll host.
    pub fn set_can_scroll_vertically(&mut self, value: bool) {
        self.can_scroll_vertically = value;
    }

    /// Overrides the host's limits while an item is being drawn.
    ///
    /// Pass the host limits grown by the in‑progress item so the extent
    /// follows a drag past the viewport edge, and `None` once the draw ends.
    /// Takes effect from the next operation; call [`refresh`](Self::refresh)
    /// to apply it immediately.
    pub fn set_drawing_limits(&mut self, limits: Option<BoundingLimits>) {
        self.drawing_limits = limits;
    }

    /// The limits set by [`set_drawing_limits`](Self::set_drawing_limits).
    #[must_use]
    pub fn drawing_limits(&self) -> Option<BoundingLimits> {
        self.drawing_limits
    }

    /// Limits the scroll passes measure against: the drawing limits while
    /// drawing, the host's otherwise.
    #[must_use]
    pub fn content_limits(&self) -> Option<BoundingLimits> {
        self.drawing_limits.or_else(|| self.host.bounding_limits())
    }

    /// Marks whether a zoom interaction (e.g. a held modifier) is in progress.
    ///
    /// Directional scroll steps are ignored while zooming.
    pub fn set_zooming(&mut self, zooming: bool) {
        self.zooming = zooming;
    }

    /// Returns `true` while a zoom interaction is in progress.
    #[must_use]
    pub fn is_zooming(&self) -> bool {
        self.zooming
    }

    /// Reacts to a new viewport size.
    ///
    /// Resets extent and viewport to `size`, then re‑derives offset and extent
    /// on each axis from the current content limits. Unchanged sizes are a
    /// no‑op.
    pub fn on_resize(&mut self, size: Size) {
        if !self.ensure_scroll_host("on_resize") {
            return;
        }
        let size = Size::new(size.width.max(0.0), size.height.max(0.0));
        if self.geometry.viewport == size {
            return;
        }
        tracing::debug!(width = size.width, height = size.height, "viewport resized");
        self.geometry.viewport = size;
        self.geometry.extent = size;
        self.initial_extent = size;
        for axis in Axis::ALL {
            self.adjust_scroll(axis);
        }
        self.notify();
    }

    /// Re‑derives offset and extent on both axes, e.g. after item bounds changed.
    pub fn refresh(&mut self) {
        if !self.ensure_scroll_host("refresh") {
            return;
        }
        for axis in Axis::ALL {
            self.adjust_scroll(axis);
        }
        self.notify();
    }

    /// Pans the content by `delta` viewport units along `axis`.
    ///
    /// Positive deltas move content toward larger coordinates (the content
    /// follows the pointer). `reverse` negates `delta`.
    pub fn pan(&mut self, axis: Axis, delta: f64, reverse: bool) {
        if !self.ensure_scroll_host("pan") {
            return;
        }
        self.pan_axis(axis, delta, reverse);
        self.notify();
    }

    /// Zooms about `pivot` (viewport coordinates) by one wheel event.
    ///
    /// Positive `wheel_delta` zooms in, negative zooms out.
    pub fn zoom(&mut self, pivot: Point, wheel_delta: f64) {
        if !self.ensure_scroll_host("zoom") {
            return;
        }
        if !self
            .zoom
            .zoom_to_position(&mut self.transform, pivot, wheel_delta)
        {
            return;
        }
        tracing::trace!(
            scale_x = self.transform.scale_x,
            scale_y = self.transform.scale_y,
            "zoomed"
        );
        for axis in Axis::ALL {
            self.adjust_scroll(axis);
        }
        self.notify();
        if self.host.is_virtualization_enabled() {
            self.host.request_remeasure();
        }
    }

    /// Starts a pointer pan at `pos` (viewport coordinates).
    pub fn begin_pan(&mut self, pos: Point) {
        self.pan.start(pos);
    }

    /// Pans by the pointer movement since the previous pan position.
    pub fn update_pan(&mut self, pos: Point) {
        if !self.ensure_scroll_host("update_pan") {
            return;
        }
        let Some(delta) = self.pan.update(pos) else {
            return;
        };
        if delta.x != 0.0 {
            self.pan_axis(Axis::Horizontal, delta.x, false);
        }
        if delta.y != 0.0 {
            self.pan_axis(Axis::Vertical, delta.y, false);
        }
        self.notify();
    }

    /// Ends the pointer pan.
    pub fn end_pan(&mut self) {
        self.pan.end();
    }

    /// Returns `true` while a pointer pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_panning()
    }

    /// Sets the horizontal offset; see [`set_offset`](Self::set_offset).
    pub fn set_horizontal_offset(&mut self, offset: f64) {
        self.set_offset(Axis::Horizontal, offset);
    }

    /// Sets the vertical offset; see [`set_offset`](Self::set_offset).
    pub fn set_vertical_offset(&mut self, offset: f64) {
        self.set_offset(Axis::Vertical, offset);
    }

    /// Requests an offset change along `axis`.
    ///
    /// The result is clamped to the content:
    /// 1. `requested == 0` resets the axis (offset zero, extent = viewport)
    ///    before the rules below are applied.
    /// 2. Content before the visible start: offset realigns exactly with the
    ///    content's leading edge.
    /// 3. Otherwise, content after the visible end: offset advances by
    ///    `requested`, never past the content's trailing edge.
    /// 4. Otherwise the axis is reset.
    ///
    /// A genuine scroll to position zero is indistinguishable from a reset;
    /// use [`reset_offset`](Self::reset_offset) when a reset is meant.
    pub fn set_offset(&mut self, axis: Axis, requested: f64) {
        if !self.ensure_scroll_host("set_offset") {
            return;
        }
        self.apply_offset(axis, requested);
        self.update_extent(axis);
        self.notify();
    }

    /// Collapses `axis`: offset zero and extent equal to the viewport.
    pub fn reset_offset(&mut self, axis: Axis) {
        if !self.ensure_scroll_host("reset_offset") {
            return;
        }
        self.collapse(axis);
        self.notify();
    }

    /// Scrolls one fixed step in `direction`.
    ///
    /// Ignored while [zooming](Self::is_zooming).
    pub fn scroll_step(&mut self, direction: ScrollDirection) {
        if self.zooming {
            tracing::trace!(?direction, "scroll step ignored while zooming");
            return;
        }
        // Scrolling forward moves the content backward.
        self.pan(direction.axis(), self.config.step, direction.is_forward());
    }

    /// One line up.
    pub fn line_up(&mut self) {
        self.scroll_step(ScrollDirection::Up);
    }

    /// One line down.
    pub fn line_down(&mut self) {
        self.scroll_step(ScrollDirection::Down);
    }

    /// One line left.
    pub fn line_left(&mut self) {
        self.scroll_step(ScrollDirection::Left);
    }

    /// One line right.
    pub fn line_right(&mut self) {
        self.scroll_step(ScrollDirection::Right);
    }

    /// One page up.
    pub fn page_up(&mut self) {
        self.scroll_step(ScrollDirection::Up);
    }

    /// One page down.
    pub fn page_down(&mut self) {
        self.scroll_step(ScrollDirection::Down);
    }

    /// One page left.
    pub fn page_left(&mut self) {
        self.scroll_step(ScrollDirection::Left);
    }

    /// One page right.
    pub fn page_right(&mut self) {
        self.scroll_step(ScrollDirection::Right);
    }

    /// One mouse‑wheel notch up.
    pub fn mouse_wheel_up(&mut self) {
        self.scroll_step(ScrollDirection::Up);
    }

    /// One mouse‑wheel notch down.
    pub fn mouse_wheel_down(&mut self) {
        self.scroll_step(ScrollDirection::Down);
    }

    /// One mouse‑wheel notch left.
    pub fn mouse_wheel_left(&mut self) {
        self.scroll_step(ScrollDirection::Left);
    }

    /// One mouse‑wheel notch right.
    pub fn mouse_wheel_right(&mut self) {
        self.scroll_step(ScrollDirection::Right);
    }

    /// Scrolling a region into view is not supported.
    ///
    /// # Errors
    ///
    /// Always returns [`ViewportError::Unsupported`].
    pub fn make_visible(&mut self, _region: Rect) -> Result<Rect, ViewportError> {
        Err(ViewportError::Unsupported {
            operation: "make_visible",
        })
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            transform: self.transform,
            geometry: self.geometry,
            limits: self.content_limits(),
            visible_content_rect: self.visible_content_rect(),
            zooming: self.zooming,
            panning: self.pan.is_panning(),
            has_scroll_host: self.scroll_host.is_some(),
        }
    }

    fn ensure_scroll_host(&self, operation: &'static str) -> bool {
        if self.scroll_host.is_none() {
            tracing::trace!(operation, "no scroll host attached; ignoring");
            return false;
        }
        true
    }

    fn notify(&mut self) {
        if let Some(scroll_host) = self.scroll_host.as_mut() {
            scroll_host.invalidate_scroll_info();
        }
    }

    fn pan_axis(&mut self, axis: Axis, delta: f64, reverse: bool) {
        if self.host.is_virtualization_enabled() {
            self.host.request_remeasure();
        }
        let applied = if reverse { -delta } else { delta };
        self.transform.translate_by(axis, applied);

        let was_collapsed = self.geometry.is_collapsed(axis);
        if self.overflow(axis).any() {
            self.apply_offset(axis, -applied);
            self.update_extent(axis);
        } else {
            self.apply_offset(axis, 0.0);
        }
        let collapsed = self.geometry.is_collapsed(axis);
        if was_collapsed != collapsed {
            tracing::debug!(?axis, collapsed, "scroll axis changed state");
        }
    }

    /// Re‑derives `axis` from the transform, limits and viewport alone.
    ///
    /// The offset is the leading overflow, so repeated passes over the same
    /// state always land on the same geometry.
    fn adjust_scroll(&mut self, axis: Axis) {
        let overflow = self.overflow(axis);
        if !overflow.any() {
            self.collapse(axis);
            return;
        }
        axis.set_component(&mut self.geometry.offset, overflow.leading);
        self.update_extent(axis);
    }

    fn apply_offset(&mut self, axis: Axis, requested: f64) {
        if requested == 0.0 {
            self.collapse(axis);
        }
        let overflow = self.overflow(axis);
        if overflow.leading > 0.0 {
            axis.set_component(&mut self.geometry.offset, overflow.leading);
        } else if overflow.trailing > 0.0 {
            let current = axis.component(self.geometry.offset);
            let offset = (current + requested).min(overflow.trailing).max(0.0);
            axis.set_component(&mut self.geometry.offset, offset);
        } else {
            self.collapse(axis);
        }
        debug_assert!(
            axis.component(self.geometry.offset) >= 0.0,
            "scroll offsets are never negative"
        );
    }

    fn update_extent(&mut self, axis: Axis) {
        let overflow = self.overflow(axis);
        if overflow.any() {
            let extent = axis.length(self.initial_extent) + overflow.leading + overflow.trailing;
            axis.set_length(&mut self.geometry.extent, extent);
        }
    }

    fn collapse(&mut self, axis: Axis) {
        axis.set_component(&mut self.geometry.offset, 0.0);
        let viewport = axis.length(self.geometry.viewport);
        axis.set_length(&mut self.geometry.extent, viewport);
    }

    fn overflow(&self, axis: Axis) -> Overflow {
        let Some(limits) = self.content_limits() else {
            return Overflow::default();
        };
        if !self.transform.is_valid() {
            return Overflow::default();
        }
        let scale = self.transform.scale(axis).abs();
        let a = self.transform.view_to_content_coord(axis, 0.0);
        let b = self
            .transform
            .view_to_content_coord(axis, axis.length(self.geometry.viewport));
        let (visible_start, visible_end) = (a.min(b), a.max(b));
        Overflow {
            leading: ((visible_start - limits.leading(axis)) * scale).max(0.0),
            trailing: ((limits.trailing(axis) - visible_end) * scale).max(0.0),
        }
    }
}

/// Debug snapshot of a [`ViewportController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Current content→viewport transform.
    pub transform: AffineState,
    /// Current extent, viewport and offset.
    pub geometry: ViewportGeometry,
    /// Content limits the scroll passes measure against.
    pub limits: Option<BoundingLimits>,
    /// Content‑space rectangle visible through the viewport.
    pub visible_content_rect: Rect,
    /// Whether a zoom interaction is in progress.
    pub zooming: bool,
    /// Whether a pointer pan is in progress.
    pub panning: bool,
    /// Whether a scroll host is attached.
    pub has_scroll_host: bool,
}
