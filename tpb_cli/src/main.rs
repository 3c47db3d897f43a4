use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::MultiProgress;

use tpb_core::progress::TimedProgressDisplay;
use tpb_core::units::UnitTable;

mod demo;
mod json_observer;
mod terminal_observer;
use json_observer::JsonObserver;
use terminal_observer::TerminalObserver;

const DEFAULT_TICK_MS: u64 = 50;
const LABEL_WIDTH: usize = 15;

#[derive(Parser)]
#[command(name = "tpb", about = "Timed progress bar demos")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Base tick in milliseconds (default: $TPB_TICK_MS or 50)
    #[arg(long, global = true)]
    tick_ms: Option<u64>,

    /// Print every snapshot as a JSON line instead of drawing bars
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// A per-file bar stacked over an overall bar
    Files {
        /// Units, e.g. "MB" or "bytes=1,kB=1000"
        #[arg(short, long, default_value = "MB")]
        units: UnitTable,
        #[arg(long, default_value = "10", value_parser = parse_amount)]
        file_size: f64,
        #[arg(long, default_value = "100", value_parser = parse_amount)]
        total: f64,
    },
    /// Simulated transfer that switches units as the rate changes
    Units {
        #[arg(short, long, default_value = "preset:si-bytes")]
        units: UnitTable,
        #[arg(long, default_value = "5e7", value_parser = parse_amount)]
        total: f64,
    },
}

fn parse_amount(raw: &str) -> Result<f64, String> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        Ok(v) => Err(format!("{} is not a positive amount", v)),
        Err(e) => Err(e.to_string()),
    }
}

fn tick_interval(arg: Option<u64>) -> Duration {
    let ms = arg
        .or_else(|| std::env::var("TPB_TICK_MS").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(DEFAULT_TICK_MS);
    Duration::from_millis(ms.max(1))
}

/// Where displays send their snapshots.
enum Sink {
    Terminal(MultiProgress),
    Json,
}

impl Sink {
    /// Build a display wired to this sink. The returned observer handle is
    /// used to finish the terminal bar afterwards.
    fn display(
        &self,
        label: &str,
        done: f64,
        units: UnitTable,
    ) -> Result<(TimedProgressDisplay, Option<TerminalObserver>), String> {
        let builder = TimedProgressDisplay::builder(units)
            .with_done(done)
            .with_label(label)
            .with_label_width(LABEL_WIDTH);

        match self {
            Sink::Terminal(multi) => {
                let observer = TerminalObserver::new(multi).map_err(|e| e.to_string())?;
                let display = builder.with_observer(Box::new(observer.clone())).build();
                Ok((display, Some(observer)))
            }
            Sink::Json => Ok((builder.with_observer(Box::new(JsonObserver)).build(), None)),
        }
    }
}

async fn run(args: Args) -> Result<(), String> {
    let tick = tick_interval(args.tick_ms);
    let sink = if args.json {
        Sink::Json
    } else {
        Sink::Terminal(MultiProgress::new())
    };

    let handles = match args.command {
        Command::Files {
            units,
            file_size,
            total,
        } => {
            log::info!("files demo: file size {}, total {}, tick {:?}", file_size, total, tick);
            let (mut file, file_handle) = sink.display("Current File", file_size, units.clone())?;
            let (mut overall, overall_handle) = sink.display("Overall", total, units)?;
            demo::run_files(&mut file, &mut overall, tick).await;
            vec![file_handle, overall_handle]
        }
        Command::Units { units, total } => {
            log::info!("units demo: total {}, {} candidate units", total, units.len());
            let (mut bar, handle) = sink.display("Transfer", total, units)?;
            demo::run_units(&mut bar, tick).await;
            vec![handle]
        }
    };

    for handle in handles.into_iter().flatten() {
        handle.finish();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tpb failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
