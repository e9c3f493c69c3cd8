//! Ordered boundary markers over the pixel range.
//!
//! Markers are the draggable cut points that partition the score axis. The
//! positions are kept strictly compatible with `b[i] <= b[i+1]` at all
//! times: a candidate move is accepted only while it stays strictly between
//! its immediate neighbors (or the domain floor/ceiling at the ends), so
//! markers can never collapse onto or cross each other.
//!
//! Positions live in pixel space; convert to score space with
//! [`Markers::scores`].

use crate::scale::Scale;

/// Hit-test window to the left of a marker, in pixels.
const HIT_BEFORE: f64 = 4.0;
/// Hit-test window to the right of a marker, in pixels. Wider than the left
/// side to match the directional drag affordance.
const HIT_AFTER: f64 = 6.0;

/// Ordered set of boundary markers with at most one active (dragged) index.
#[derive(Debug, Clone)]
pub struct Markers {
    positions: Vec<f64>,
    width: f64,
    active: Option<usize>,
}

fn even_positions(count: usize, width: f64) -> Vec<f64> {
    let count = count.max(2);
    let span = (count - 1) as f64;
    (0..count).map(|i| width * i as f64 / span).collect()
}

impl Markers {
    /// Create `count` markers (minimum 2) evenly spaced over `[0, width]`,
    /// endpoints included.
    pub fn new(count: usize, width: f64) -> Self {
        Self {
            positions: even_positions(count, width),
            width,
            active: None,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Replace all positions. Trusted initialization path: the caller
    /// guarantees ascending order, no check is performed here.
    pub fn seed(&mut self, positions: Vec<f64>) {
        self.positions = positions;
        self.active = None;
    }

    /// Hit-test a pixel position against every marker. Returns the first
    /// index (ascending) whose window `[pos - 4, pos + 6]` contains the
    /// pixel, or `None`.
    pub fn hit_test(&self, pixel: f64) -> Option<usize> {
        self.positions
            .iter()
            .position(|pos| pos - HIT_BEFORE <= pixel && pixel <= pos + HIT_AFTER)
    }

    /// Capture the marker under `pixel`, if any. Only one marker may be
    /// active at a time; an already-active marker stays captured.
    pub fn begin_drag(&mut self, pixel: f64) -> Option<usize> {
        if self.active.is_none() {
            self.active = self.hit_test(pixel);
        }
        self.active
    }

    /// Move marker `index` to `candidate` if it stays strictly between its
    /// neighbors: the `(index - 1)` marker or the domain floor 0 on the
    /// left, the `(index + 1)` marker or the width on the right. Returns
    /// `false` and leaves all state unchanged on violation.
    pub fn try_move(&mut self, index: usize, candidate: f64) -> bool {
        if index >= self.positions.len() {
            return false;
        }
        let left = if index == 0 {
            0.0
        } else {
            self.positions[index - 1]
        };
        let right = if index + 1 == self.positions.len() {
            self.width
        } else {
            self.positions[index + 1]
        };
        if left < candidate && candidate < right {
            self.positions[index] = candidate;
            true
        } else {
            false
        }
    }

    /// Release the active marker. Idempotent.
    pub fn end_drag(&mut self) {
        self.active = None;
    }

    /// Reposition all markers proportionally for a new pixel width. A
    /// degenerate prior width reseeds evenly instead.
    pub fn rescale(&mut self, new_width: f64) {
        if self.width > 0.0 && new_width > 0.0 {
            let ratio = new_width / self.width;
            for pos in &mut self.positions {
                *pos *= ratio;
            }
            self.width = new_width;
        } else {
            self.width = new_width.max(0.0);
            self.positions = even_positions(self.positions.len(), self.width);
        }
    }

    /// Boundary values in score space, ascending.
    pub fn scores(&self, scale: &Scale) -> Vec<f64> {
        self.positions.iter().map(|p| scale.to_score(*p)).collect()
    }
}

#[cfg(test)]
#[path = "markers_test.rs"]
mod tests;
