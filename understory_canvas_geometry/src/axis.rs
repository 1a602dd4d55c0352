// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// One axis of a 2D quantity.
///
/// Scroll and extent logic is identical for both axes, so controllers write
/// it once against an `Axis` and read/write components through these helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The X axis (left to right).
    Horizontal,
    /// The Y axis (top to bottom).
    Vertical,
}

impl Axis {
    /// Both axes, vertical first.
    pub const ALL: [Self; 2] = [Self::Vertical, Self::Horizontal];

    /// Returns the other axis.
    #[must_use]
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Returns the coordinate of `pt` along this axis.
    #[must_use]
    pub fn coord(self, pt: Point) -> f64 {
        match self {
            Self::Horizontal => pt.x,
            Self::Vertical => pt.y,
        }
    }

    /// Returns the component of `v` along this axis.
    #[must_use]
    pub fn component(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Returns the length of `size` along this axis.
    #[must_use]
    pub fn length(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Sets the component of `v` along this axis.
    pub fn set_component(self, v: &mut Vec2, value: f64) {
        match self {
            Self::Horizontal => v.x = value,
            Self::Vertical => v.y = value,
        }
    }

    /// Sets the length of `size` along this axis.
    pub fn set_length(self, size: &mut Size, value: f64) {
        match self {
            Self::Horizontal => size.width = value,
            Self::Vertical => size.height = value,
        }
    }
}
