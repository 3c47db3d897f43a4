use super::snapshot::DisplaySnapshot;

/// Redraw hook for a host toolkit.
///
/// A `TimedProgressDisplay` calls these on every registered observer after
/// it republishes its text:
/// - `on_reset` after `reset()` (and once when the display is built).
/// - `on_complete` after an `add_progress` that leaves `current == done`.
/// - `on_update` after any other `add_progress`.
///
/// Both `on_reset` and `on_complete` fall back to `on_update`.
pub trait DisplayObserver {
    fn on_update(&self, snapshot: &DisplaySnapshot);

    fn on_reset(&self, snapshot: &DisplaySnapshot) {
        self.on_update(snapshot);
    }

    fn on_complete(&self, snapshot: &DisplaySnapshot) {
        self.on_update(snapshot);
    }
}
