// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Step used by the line, page and mouse‑wheel scroll operations.
pub const DEFAULT_STEP: f64 = 10.0;

/// Tunables for a [`ViewportController`](crate::ViewportController).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportConfig {
    /// Distance, in viewport units, moved by one line/page/wheel step.
    pub step: f64,
    /// Scale multiplier applied per zoom‑in event; zoom‑out divides by it.
    pub zoom_factor: f64,
    /// Smallest allowed scale magnitude.
    pub min_zoom: f64,
    /// Largest allowed scale magnitude.
    pub max_zoom: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            zoom_factor: 1.1,
            min_zoom: 0.1,
            max_zoom: 10.0,
        }
    }
}

impl ViewportConfig {
    /// Sets the scroll step.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the per‑event zoom multiplier.
    #[must_use]
    pub fn with_zoom_factor(mut self, factor: f64) -> Self {
        self.zoom_factor = factor;
        self
    }

    /// Sets the zoom limits.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`.
    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }
}
