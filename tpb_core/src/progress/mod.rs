pub mod bar;
pub mod clock;
pub mod display;
pub mod format;
pub mod observer;
pub mod region;
pub mod snapshot;
pub mod state;

pub use bar::ProgressBarWidget;
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use display::{TimedProgressDisplay, TimedProgressDisplayBuilder};
pub use format::{format_duration, format_rate, format_remaining};
pub use observer::DisplayObserver;
pub use region::{Align, TextRegion};
pub use snapshot::DisplaySnapshot;
pub use state::{Measurement, ProgressState};
