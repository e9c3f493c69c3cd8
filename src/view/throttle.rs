//! Coalescing rate limiter for repartition work.
//!
//! Dragging emits boundary changes on every accepted pointer move; the full
//! O(n) reclassification runs at most once per interval. Requests arriving
//! inside the interval collapse into a single trailing run. Time is passed
//! in by the caller so tests never sleep.

use std::time::{Duration, Instant};

/// Interval between downstream repartitions during a drag.
pub const REPARTITION_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub struct Throttle {
    interval: Duration,
    last_fire: Option<Instant>,
    pending: bool,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fire: None,
            pending: false,
        }
    }

    /// Record that work is wanted. Repeated requests coalesce.
    pub fn request(&mut self) {
        self.pending = true;
    }

    pub fn pending(&self) -> bool {
        self.pending
    }

    /// Returns `true` when pending work may run now. The first request
    /// fires immediately; later ones wait out the interval.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.pending {
            return false;
        }
        let due = match self.last_fire {
            None => true,
            Some(last) => now.duration_since(last) >= self.interval,
        };
        if due {
            self.pending = false;
            self.last_fire = Some(now);
        }
        due
    }
}

#[cfg(test)]
#[path = "throttle_test.rs"]
mod tests;
