// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use understory_canvas_geometry::{AffineState, Axis};

use crate::config::ViewportConfig;

/// Wheel‑driven zoom about a pivot point.
///
/// Each event multiplies the scale magnitude by a fixed factor (zoom in) or
/// its reciprocal (zoom out), clamped into the configured range. The
/// translation is adjusted so the content under the pivot stays under it.
/// A flipped (negative) scale keeps its sign.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomGesture {
    factor: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Default for ZoomGesture {
    fn default() -> Self {
        Self::from_config(&ViewportConfig::default())
    }
}

impl ZoomGesture {
    /// Creates a zoom gesture from the zoom fields of `config`.
    ///
    /// Limits are reordered when inverted and kept strictly positive.
    #[must_use]
    pub fn from_config(config: &ViewportConfig) -> Self {
        let (lo, hi) = if config.min_zoom <= config.max_zoom {
            (config.min_zoom, config.max_zoom)
        } else {
            (config.max_zoom, config.min_zoom)
        };
        let min_zoom = lo.max(f64::MIN_POSITIVE);
        Self {
            factor: config.zoom_factor,
            min_zoom,
            max_zoom: hi.max(min_zoom),
        }
    }

    /// Per‑event zoom‑in multiplier.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Scale multiplier for a wheel delta, or `None` when nothing should happen.
    #[must_use]
    pub fn factor_for_delta(&self, wheel_delta: f64) -> Option<f64> {
        if !(self.factor.is_finite() && self.factor > 0.0) || self.factor == 1.0 {
            return None;
        }
        if wheel_delta > 0.0 {
            Some(self.factor)
        } else if wheel_delta < 0.0 {
            Some(1.0 / self.factor)
        } else {
            None
        }
    }

    /// Zooms `state` so that `pivot` (viewport coordinates) stays fixed.
    ///
    /// Returns `true` if the state changed.
    pub fn zoom_to_position(&self, state: &mut AffineState, pivot: Point, wheel_delta: f64) -> bool {
        let Some(factor) = self.factor_for_delta(wheel_delta) else {
            return false;
        };
        let mut changed = false;
        for axis in Axis::ALL {
            let scale = state.scale(axis);
            let magnitude = (scale.abs() * factor).clamp(self.min_zoom, self.max_zoom);
            let new_scale = if scale < 0.0 { -magnitude } else { magnitude };
            if new_scale == scale {
                continue;
            }
            // Keep the content point under the pivot fixed:
            // (p - t) / s == (p - t') / s'
            let p = axis.coord(pivot);
            let t = state.translate(axis);
            let new_translate = p - (p - t) * (new_scale / scale);
            match axis {
                Axis::Horizontal => {
                    state.scale_x = new_scale;
                    state.translate_x = new_translate;
                }
                Axis::Vertical => {
                    state.scale_y = new_scale;
                    state.translate_y = new_translate;
                }
            }
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use understory_canvas_geometry::AffineState;

    use super::ZoomGesture;
    use crate::ViewportConfig;

    #[test]
    fn pivot_stays_fixed() {
        let zoom = ZoomGesture::default();
        let mut state = AffineState::new(1.0, 1.0, 15.0, -30.0);
        let pivot = Point::new(400.0, 300.0);
        let before = state.view_to_content(pivot);

        assert!(zoom.zoom_to_position(&mut state, pivot, 120.0));
        let after = state.view_to_content(pivot);
        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
        assert!((state.scale_x - 1.1).abs() < 1e-12);
    }

    #[test]
    fn zero_delta_is_noop() {
        let zoom = ZoomGesture::default();
        let mut state = AffineState::IDENTITY;
        assert!(!zoom.zoom_to_position(&mut state, Point::ZERO, 0.0));
        assert_eq!(state, AffineState::IDENTITY);
    }

    #[test]
    fn clamps_to_limits() {
        let config = ViewportConfig::default()
            .with_zoom_factor(2.0)
            .with_zoom_limits(0.5, 3.0);
        let zoom = ZoomGesture::from_config(&config);
        let mut state = AffineState::IDENTITY;
        for _ in 0..5 {
            zoom.zoom_to_position(&mut state, Point::ZERO, 1.0);
        }
        assert_eq!(state.scale_x, 3.0);
        // Already at the limit: no further change.
        assert!(!zoom.zoom_to_position(&mut state, Point::ZERO, 1.0));
    }

    #[test]
    fn flipped_scale_keeps_sign() {
        let zoom = ZoomGesture::default();
        let mut state = AffineState::new(-1.0, 1.0, 0.0, 0.0);
        zoom.zoom_to_position(&mut state, Point::new(10.0, 10.0), 1.0);
        assert!(state.scale_x < 0.0);
        assert!((state.scale_x + 1.1).abs() < 1e-12);
    }

    #[test]
    fn inverted_limits_are_reordered() {
        let config = ViewportConfig {
            min_zoom: 4.0,
            max_zoom: 0.25,
            ..ViewportConfig::default()
        };
        let zoom = ZoomGesture::from_config(&config);
        let mut state = AffineState::IDENTITY;
        assert!(zoom.zoom_to_position(&mut state, Point::ZERO, -1.0));
        assert!(state.scale_x >= 0.25);
    }
}
