// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Tracks a pointer‑driven pan: turns positions into per‑event deltas.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanGesture {
    last_pos: Option<Point>,
}

impl PanGesture {
    /// Starts tracking from `pos`.
    pub fn start(&mut self, pos: Point) {
        self.last_pos = Some(pos);
    }

    /// Records `pos` and returns the movement since the previous position.
    ///
    /// Returns `None` when no pan is in progress.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last_pos?;
        self.last_pos = Some(pos);
        Some(pos - last)
    }

    /// Stops tracking.
    pub fn end(&mut self) {
        self.last_pos = None;
    }

    /// Returns `true` while a pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.last_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::PanGesture;

    #[test]
    fn update_without_start_is_none() {
        let mut pan = PanGesture::default();
        assert_eq!(pan.update(Point::new(3.0, 4.0)), None);
        assert!(!pan.is_panning());
    }

    #[test]
    fn deltas_are_incremental() {
        let mut pan = PanGesture::default();
        pan.start(Point::new(0.0, 0.0));
        assert_eq!(pan.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(pan.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        pan.end();
        assert!(!pan.is_panning());
    }
}
