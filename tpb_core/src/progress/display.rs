use std::fmt;
use std::time::Duration;

use crate::units::{UnitTable, DEFAULT_ROUND_DIGITS};

use super::bar::ProgressBarWidget;
use super::clock::{Clock, MonotonicClock};
use super::format::{format_rate, format_remaining};
use super::observer::DisplayObserver;
use super::region::{Align, TextRegion};
use super::snapshot::DisplaySnapshot;
use super::state::ProgressState;

const DEFAULT_DONE: f64 = 100.0;
const DEFAULT_LABEL: &str = "Progress";
const DEFAULT_LABEL_WIDTH: usize = 15;

/// A labelled progress bar with rate and remaining-time readouts.
///
/// Layout, as the host is expected to arrange it:
///
/// ```text
/// <label, fixed width> [ bar with overlay text            ]
///                      <rate (left)>   <remaining (right)>
/// ```
///
/// `add_progress` and `reset` recompute the rate and remaining-time text
/// and notify every registered [`DisplayObserver`]. Stacked displays with
/// the same label width line up.
pub struct TimedProgressDisplay<C: Clock = MonotonicClock> {
    label: TextRegion,
    bar: ProgressBarWidget<C>,
    rate: TextRegion,
    remaining: TextRegion,
    observers: Vec<Box<dyn DisplayObserver>>,
}

impl TimedProgressDisplay<MonotonicClock> {
    pub fn builder(units: UnitTable) -> TimedProgressDisplayBuilder<MonotonicClock> {
        TimedProgressDisplayBuilder::new(units)
    }

    /// A display with default label and digits.
    pub fn new(done: f64, units: UnitTable) -> Self {
        Self::builder(units).with_done(done).build()
    }
}

impl<C: Clock> TimedProgressDisplay<C> {
    /// Register a redraw hook. Does not fire until the next update.
    pub fn add_observer(&mut self, observer: Box<dyn DisplayObserver>) {
        self.observers.push(observer);
    }

    /// Add `delta` (may be negative) to the current amount, clamped to
    /// `0..=done`, and refresh the rate and remaining-time text.
    ///
    /// Returns `true` when the bar is full.
    pub fn add_progress(&mut self, delta: f64) -> bool {
        let complete = self.bar.state_mut().add_progress(delta);
        self.republish();

        let snapshot = self.snapshot();
        for observer in &self.observers {
            if complete {
                observer.on_complete(&snapshot);
            } else {
                observer.on_update(&snapshot);
            }
        }
        complete
    }

    /// Zero the current amount and restart the timer.
    pub fn reset(&mut self) {
        self.bar.state_mut().reset();
        log::debug!("reset '{}' (done = {})", self.label.text(), self.done());
        self.republish();

        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer.on_reset(&snapshot);
        }
    }

    /// Change the completion target. The current amount is left alone and
    /// nothing is republished until the next update.
    pub fn set_done(&mut self, done: f64) {
        self.bar.state_mut().set_done(done);
    }

    pub fn current(&self) -> f64 {
        self.bar.state().current()
    }

    pub fn done(&self) -> f64 {
        self.bar.state().done()
    }

    pub fn elapsed(&self) -> Duration {
        self.bar.state().elapsed()
    }

    pub fn rate(&self) -> f64 {
        self.bar.state().rate()
    }

    pub fn remaining_time(&self) -> Option<f64> {
        self.bar.state().remaining_time()
    }

    /// Rate as of now, e.g. `"1.50 MB/s"`.
    pub fn rate_text(&self) -> String {
        format_rate(self.rate(), self.bar.units(), self.bar.round_digits())
    }

    /// Remaining time as of now, e.g. `"0:02:10"`; empty when unknown.
    pub fn remaining_time_text(&self) -> String {
        format_remaining(self.remaining_time())
    }

    pub fn fill_ratio(&self) -> f64 {
        self.bar.fill_ratio()
    }

    pub fn overlay_text(&self) -> String {
        self.bar.overlay_text()
    }

    pub fn bar(&self) -> &ProgressBarWidget<C> {
        &self.bar
    }

    pub fn label_region(&self) -> &TextRegion {
        &self.label
    }

    /// Rate text as of the last update.
    pub fn rate_region(&self) -> &TextRegion {
        &self.rate
    }

    /// Remaining-time text as of the last update.
    pub fn remaining_region(&self) -> &TextRegion {
        &self.remaining
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        let state = self.bar.state();
        DisplaySnapshot {
            label: self.label.render(0),
            current: state.current(),
            done: state.done(),
            fill_ratio: self.bar.fill_ratio(),
            percent: self.bar.percent(),
            overlay: self.bar.overlay_text(),
            rate_text: self.rate.text().to_string(),
            remaining_text: self.remaining.text().to_string(),
            elapsed_secs: state.elapsed().as_secs_f64(),
            complete: state.is_complete(),
        }
    }

    fn republish(&mut self) {
        let m = self.bar.state().measure();
        let rate = format_rate(m.rate, self.bar.units(), self.bar.round_digits());
        let remaining = format_remaining(m.remaining_secs);
        log::trace!(
            "'{}': {} of {}, rate '{}', remaining '{}'",
            self.label.text(),
            self.current(),
            self.done(),
            rate,
            remaining
        );
        self.rate.set_text(rate);
        self.remaining.set_text(remaining);
    }
}

impl<C: Clock> fmt::Debug for TimedProgressDisplay<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimedProgressDisplay")
            .field("label", &self.label.text())
            .field("current", &self.current())
            .field("done", &self.done())
            .field("observers", &self.observers.len())
            .finish()
    }
}

pub struct TimedProgressDisplayBuilder<C: Clock = MonotonicClock> {
    units: UnitTable,
    done: f64,
    label: String,
    label_width: usize,
    round_digits: u32,
    clock: C,
    observers: Vec<Box<dyn DisplayObserver>>,
}

impl TimedProgressDisplayBuilder<MonotonicClock> {
    pub fn new(units: UnitTable) -> Self {
        Self {
            units,
            done: DEFAULT_DONE,
            label: DEFAULT_LABEL.to_string(),
            label_width: DEFAULT_LABEL_WIDTH,
            round_digits: DEFAULT_ROUND_DIGITS,
            clock: MonotonicClock,
            observers: Vec::new(),
        }
    }
}

impl<C: Clock> TimedProgressDisplayBuilder<C> {
    pub fn with_done(mut self, done: f64) -> Self {
        self.done = done;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Fixed label width. Use 0 with an empty label to hide the label.
    pub fn with_label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    pub fn with_round_digits(mut self, digits: u32) -> Self {
        self.round_digits = digits;
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn DisplayObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn with_clock<C2: Clock>(self, clock: C2) -> TimedProgressDisplayBuilder<C2> {
        TimedProgressDisplayBuilder {
            units: self.units,
            done: self.done,
            label: self.label,
            label_width: self.label_width,
            round_digits: self.round_digits,
            clock,
            observers: self.observers,
        }
    }

    /// Build the display and start its timer. Observers passed to the
    /// builder receive an initial `on_reset`.
    pub fn build(self) -> TimedProgressDisplay<C> {
        let state = ProgressState::with_clock(self.done, self.clock);
        let mut display = TimedProgressDisplay {
            label: TextRegion::fixed(self.label_width, Align::Left).with_text(self.label),
            bar: ProgressBarWidget::new(state, self.units, self.round_digits),
            rate: TextRegion::new(Align::Left),
            remaining: TextRegion::new(Align::Right),
            observers: self.observers,
        };
        display.reset();
        display
    }
}
