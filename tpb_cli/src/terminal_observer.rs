use indicatif::style::TemplateError;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use tpb_core::progress::{DisplayObserver, DisplaySnapshot};

/// Positions on the indicatif bar; the fill ratio is mapped onto these.
const BAR_RESOLUTION: u64 = 1000;

/// Paints one `TimedProgressDisplay` as an indicatif bar.
///
/// Cloning shares the underlying bar, so `main` can keep a handle to
/// finish it after the display (which owns the boxed observer) is done.
#[derive(Clone)]
pub struct TerminalObserver {
    bar: ProgressBar,
}

impl TerminalObserver {
    pub fn new(multi: &MultiProgress) -> Result<Self, TemplateError> {
        let style = ProgressStyle::with_template("{prefix} [{bar:40.magenta/white}] {msg}")?
            .progress_chars("█▉▊▋▌▍▎▏ ");

        let bar = multi.add(ProgressBar::new(BAR_RESOLUTION));
        bar.set_style(style);
        Ok(Self { bar })
    }

    pub fn finish(&self) {
        self.bar.finish();
    }

    fn render(&self, snapshot: &DisplaySnapshot) {
        let position = (snapshot.fill_ratio * BAR_RESOLUTION as f64).round() as u64;
        self.bar.set_prefix(snapshot.label.clone());
        self.bar.set_position(position.min(BAR_RESOLUTION));
        self.bar.set_message(format!(
            "{}  {}  {}",
            snapshot.overlay, snapshot.rate_text, snapshot.remaining_text
        ));
    }
}

impl DisplayObserver for TerminalObserver {
    fn on_update(&self, snapshot: &DisplaySnapshot) {
        self.render(snapshot);
    }

    fn on_reset(&self, snapshot: &DisplaySnapshot) {
        self.bar.reset_elapsed();
        self.render(snapshot);
    }
}
