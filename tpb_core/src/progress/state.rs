use std::time::{Duration, Instant};

use serde::Serialize;

use super::clock::{Clock, MonotonicClock};

/// Elapsed time, average rate and projected remaining time, all taken at
/// the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub elapsed_secs: f64,
    pub rate: f64,
    /// `None` while no progress rate is known.
    pub remaining_secs: Option<f64>,
}

/// Current/done amounts plus the timer that rate and ETA are measured
/// against.
///
/// `add_progress` keeps `current` within `0..=done`. `set_done` does not
/// touch `current`, so it may sit above `done` until the next update.
#[derive(Debug)]
pub struct ProgressState<C: Clock = MonotonicClock> {
    current: f64,
    done: f64,
    start: Instant,
    clock: C,
}

impl ProgressState<MonotonicClock> {
    pub fn new(done: f64) -> Self {
        Self::with_clock(done, MonotonicClock)
    }
}

impl<C: Clock> ProgressState<C> {
    pub fn with_clock(done: f64, clock: C) -> Self {
        let start = clock.now();
        Self {
            current: 0.0,
            done,
            start,
            clock,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn done(&self) -> f64 {
        self.done
    }

    pub fn set_done(&mut self, done: f64) {
        if self.current > done {
            log::warn!(
                "done lowered to {} below current progress {}; clamped on next update",
                done,
                self.current
            );
        }
        self.done = done;
    }

    /// Add `delta` (may be negative) and clamp to `0..=done`.
    ///
    /// Returns `true` when `current == done` afterwards. A non-finite delta
    /// is ignored.
    pub fn add_progress(&mut self, delta: f64) -> bool {
        let delta = if delta.is_finite() {
            delta
        } else {
            log::warn!("ignoring non-finite progress delta {}", delta);
            0.0
        };
        let was_complete = self.is_complete();
        self.current = (self.current + delta).min(self.done).max(0.0);

        let complete = self.is_complete();
        if complete && !was_complete {
            log::debug!("progress complete at {}", self.done);
        }
        complete
    }

    /// Zero `current` and restart the timer. `done` is kept.
    pub fn reset(&mut self) {
        self.current = 0.0;
        self.start = self.clock.now();
    }

    pub fn is_complete(&self) -> bool {
        self.current == self.done
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.start)
    }

    pub fn rate(&self) -> f64 {
        self.rate_at(self.elapsed().as_secs_f64())
    }

    pub fn remaining_time(&self) -> Option<f64> {
        self.remaining_at(self.rate())
    }

    /// Read the clock once and derive everything from that reading.
    pub fn measure(&self) -> Measurement {
        let elapsed_secs = self.elapsed().as_secs_f64();
        let rate = self.rate_at(elapsed_secs);
        Measurement {
            elapsed_secs,
            rate,
            remaining_secs: self.remaining_at(rate),
        }
    }

    // Zero elapsed, or a rate too large to represent, counts as unknown.
    fn rate_at(&self, elapsed_secs: f64) -> f64 {
        if elapsed_secs == 0.0 {
            return 0.0;
        }
        let rate = self.current / elapsed_secs;
        if rate.is_finite() {
            rate
        } else {
            0.0
        }
    }

    // With no rate the ETA is unknown, except that a zero target is
    // already reached.
    fn remaining_at(&self, rate: f64) -> Option<f64> {
        if rate == 0.0 {
            if self.done == 0.0 {
                Some(0.0)
            } else {
                None
            }
        } else {
            Some((self.done - self.current) / rate)
        }
    }
}
