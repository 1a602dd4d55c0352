// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::axis::Axis;

/// Composed scale+translate transform for a pannable, zoomable canvas.
///
/// Maps canvas content coordinates into viewport coordinates:
///
/// ```text
/// view = content * scale + translate
/// ```
///
/// Scale components are never zero. A negative scale encodes a flip on that
/// axis; controllers that zoom keep the sign and only change the magnitude.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineState {
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Horizontal translation in viewport units.
    pub translate_x: f64,
    /// Vertical translation in viewport units.
    pub translate_y: f64,
}

impl Default for AffineState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineState {
    /// Unit scale, no translation.
    pub const IDENTITY: Self = Self::new(1.0, 1.0, 0.0, 0.0);

    /// Creates a state from its four components.
    #[must_use]
    pub const fn new(scale_x: f64, scale_y: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            translate_x,
            translate_y,
        }
    }

    /// Creates a uniformly scaled state with the given translation.
    #[must_use]
    pub fn uniform(scale: f64, translate: Vec2) -> Self {
        Self::new(scale, scale, translate.x, translate.y)
    }

    /// Returns the scale component along `axis`.
    #[must_use]
    pub fn scale(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.scale_x,
            Axis::Vertical => self.scale_y,
        }
    }

    /// Returns the translate component along `axis`.
    #[must_use]
    pub fn translate(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.translate_x,
            Axis::Vertical => self.translate_y,
        }
    }

    /// Returns the translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Adds `delta` to the translate component along `axis`.
    pub fn translate_by(&mut self, axis: Axis, delta: f64) {
        match axis {
            Axis::Horizontal => self.translate_x += delta,
            Axis::Vertical => self.translate_y += delta,
        }
    }

    /// Returns `true` when every component is finite and neither scale is zero.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.scale_x.is_finite()
            && self.scale_y.is_finite()
            && self.translate_x.is_finite()
            && self.translate_y.is_finite()
            && self.scale_x != 0.0
            && self.scale_y != 0.0
    }

    /// Converts a content‑space point into viewport coordinates.
    #[must_use]
    pub fn content_to_view(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale_x + self.translate_x,
            pt.y * self.scale_y + self.translate_y,
        )
    }

    /// Converts a viewport‑space point into content coordinates.
    #[must_use]
    pub fn view_to_content(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.translate_x) / self.scale_x,
            (pt.y - self.translate_y) / self.scale_y,
        )
    }

    /// Converts a single viewport coordinate on `axis` into content space.
    #[must_use]
    pub fn view_to_content_coord(&self, axis: Axis, v: f64) -> f64 {
        (v - self.translate(axis)) / self.scale(axis)
    }

    /// Converts a content‑space rectangle into viewport coordinates.
    ///
    /// The result is normalized so flipped axes still produce a positive size.
    #[must_use]
    pub fn content_to_view_rect(&self, rect: Rect) -> Rect {
        let p0 = self.content_to_view(rect.origin());
        let p1 = self.content_to_view(Point::new(rect.x1, rect.y1));
        Rect::from_points(p0, p1)
    }

    /// Converts a viewport‑space rectangle into content coordinates.
    #[must_use]
    pub fn view_to_content_rect(&self, rect: Rect) -> Rect {
        let p0 = self.view_to_content(rect.origin());
        let p1 = self.view_to_content(Point::new(rect.x1, rect.y1));
        Rect::from_points(p0, p1)
    }

    /// Returns the equivalent Kurbo transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::new([
            self.scale_x,
            0.0,
            0.0,
            self.scale_y,
            self.translate_x,
            self.translate_y,
        ])
    }

    /// Returns `true` when all components are within `tolerance` of `other`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.scale_x - other.scale_x).abs() <= tolerance
            && (self.scale_y - other.scale_y).abs() <= tolerance
            && (self.translate_x - other.translate_x).abs() <= tolerance
            && (self.translate_y - other.translate_y).abs() <= tolerance
    }
}

impl From<AffineState> for Affine {
    fn from(state: AffineState) -> Self {
        state.to_affine()
    }
}
