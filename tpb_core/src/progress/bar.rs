use crate::units::{round_to, select_unit_rounded, UnitTable};

use super::clock::{Clock, MonotonicClock};
use super::state::ProgressState;

/// The bar itself: fill proportion for the host to paint and the
/// `"<current> of <done> <unit> (<pct>%)"` overlay.
#[derive(Debug)]
pub struct ProgressBarWidget<C: Clock = MonotonicClock> {
    state: ProgressState<C>,
    units: UnitTable,
    round_digits: u32,
}

impl<C: Clock> ProgressBarWidget<C> {
    pub fn new(state: ProgressState<C>, units: UnitTable, round_digits: u32) -> Self {
        Self {
            state,
            units,
            round_digits,
        }
    }

    pub fn state(&self) -> &ProgressState<C> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ProgressState<C> {
        &mut self.state
    }

    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    pub fn round_digits(&self) -> u32 {
        self.round_digits
    }

    /// `current / done` in `[0, 1]`; 0 when `done` is not positive.
    pub fn fill_ratio(&self) -> f64 {
        let done = self.state.done();
        if done > 0.0 {
            (self.state.current() / done).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// `floor(current * 100 / done)`; 0 when `done` is not positive.
    pub fn percent(&self) -> i64 {
        let done = self.state.done();
        if done <= 0.0 {
            return 0;
        }
        let current = self.state.current();
        let scaled = current * 100.0;
        if scaled.is_finite() {
            (scaled / done).floor() as i64
        } else {
            (current / done * 100.0).floor() as i64
        }
    }

    /// Both amounts use the unit picked for `done`, so they read on the
    /// same scale.
    pub fn overlay_text(&self) -> String {
        let done = select_unit_rounded(self.state.done(), &self.units, self.round_digits);
        let current = round_to(self.state.current() / done.multiplier(), self.round_digits);
        format!(
            "{:.prec$} of {:.prec$} {} ({}%)",
            current,
            done.value,
            done.label(),
            self.percent(),
            prec = self.round_digits as usize
        )
    }
}
