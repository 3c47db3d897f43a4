use std::time::Duration;

use tokio::time::{interval, sleep};

use tpb_core::progress::TimedProgressDisplay;

/// Head start given to the overall bar.
const OVERALL_HEAD_START: f64 = 40.0;

/// Two stacked bars. Every tick adds one to both; when the file bar fills
/// while the overall bar still has work left, the file bar starts over.
pub async fn run_files(
    file: &mut TimedProgressDisplay,
    overall: &mut TimedProgressDisplay,
    tick: Duration,
) {
    overall.add_progress(OVERALL_HEAD_START);

    let mut ticker = interval(tick);
    loop {
        ticker.tick().await;
        let overall_done = overall.add_progress(1.0);
        if file.add_progress(1.0) && !overall_done {
            log::debug!("file complete at {} of {}", overall.current(), overall.done());
            file.reset();
        }
        if overall_done {
            break;
        }
    }
}

/// Progress at three very different speeds so the rate and overlay text
/// move between units.
pub async fn run_units(bar: &mut TimedProgressDisplay, tick: Duration) {
    bar.reset();

    log::info!("starting out, running slowly");
    for _ in 0..5 {
        bar.add_progress(1.0);
        sleep(tick * 10).await;
    }
    for _ in 0..50 {
        bar.add_progress(200.0);
        sleep(tick * 2).await;
    }

    log::info!("running fast until done");
    while bar.current() < bar.done() {
        bar.add_progress(100_000.0);
        sleep(tick / 5).await;
    }
    log::info!("done");
}
