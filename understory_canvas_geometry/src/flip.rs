// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Sign on one axis of a transform.
///
/// While a rectangle is being dragged out, its anchor stays where the pointer
/// went down and the flip records whether the pointer has moved into the
/// negative direction on that axis. [`normalize`] resolves the flip into real
/// geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Flip {
    /// `+1`: extends in the positive direction from the anchor.
    #[default]
    Positive,
    /// `-1`: extends in the negative direction from the anchor.
    Negative,
}

impl Flip {
    /// Chooses a flip from a signed delta.
    ///
    /// Zero (and NaN) is treated as [`Flip::Positive`].
    #[must_use]
    pub fn from_delta(delta: f64) -> Self {
        if delta < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// Returns `1.0` or `-1.0`.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }

    /// Returns `true` for [`Flip::Negative`].
    #[must_use]
    pub fn is_flipped(self) -> bool {
        self == Self::Negative
    }
}

/// Resolves a flipped anchor into the true top‑left corner.
///
/// `(left, top)` is the anchor and `width`/`height` are absolute sizes. Each
/// flipped axis shifts the anchor back by the size on that axis:
///
/// | `flip_x` | `flip_y` | result |
/// |---|---|---|
/// | `+1` | `+1` | `(left, top)` |
/// | `-1` | `+1` | `(left - width, top)` |
/// | `-1` | `-1` | `(left - width, top - height)` |
/// | `+1` | `-1` | `(left, top - height)` |
///
/// Bounds checks, finalization and edge getters all go through this function
/// so they can never disagree.
#[must_use]
pub fn normalize(
    flip_x: Flip,
    flip_y: Flip,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    match (flip_x, flip_y) {
        (Flip::Positive, Flip::Positive) => (left, top),
        (Flip::Negative, Flip::Positive) => (left - width, top),
        (Flip::Negative, Flip::Negative) => (left - width, top - height),
        (Flip::Positive, Flip::Negative) => (left, top - height),
    }
}

/// Like [`normalize`], but returns the whole normalized rectangle.
#[must_use]
pub fn normalize_rect(
    flip_x: Flip,
    flip_y: Flip,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> Rect {
    let (x0, y0) = normalize(flip_x, flip_y, left, top, width, height);
    Rect::new(x0, y0, x0 + width, y0 + height)
}
