//! ball-clock: command-line front end for the ball clock simulator.
//!
//! ```text
//! ball-clock 30          → 30 balls cycle after 15 days
//! ball-clock 30 325      → {"Min":[...],"FiveMin":[...],"Hour":[...],"Main":[...]}
//! ball-clock --sweep 27 127
//! ```
//!
//! Results go to stdout; logs go to stderr and are filtered with `RUST_LOG`
//! (default `warn`).

mod cli;

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use bc_clock::{find_cycle, predicted_period, replay_observed, sweep};
use bc_core::{ClockConfig, SearchLimits};
use bc_output::{CsvWriter, JsonLinesWriter, SnapshotObserver};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Command, USAGE};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let command = match cli::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{USAGE}");
            return Err(e.into());
        }
    };

    match command {
        Command::Usage => println!("{USAGE}"),
        Command::Cycle { balls, max_days, fast } => cycle(balls, max_days, fast)?,
        Command::Replay { balls, ticks, trace, csv } => {
            run_replay(balls, ticks, trace, csv.as_deref())?
        }
        Command::Sweep { from, to, max_days } => run_sweep(from, to, max_days),
    }
    Ok(())
}

fn cycle(balls: u32, max_days: u64, fast: bool) -> Result<()> {
    let config = ClockConfig::with_balls(balls);
    let t0 = Instant::now();
    let report = if fast {
        predicted_period(&config)?
    } else {
        find_cycle(&config, &SearchLimits::for_days(&config, max_days))?
    };
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, ticks = report.ticks, "search complete");
    println!("{report}");
    Ok(())
}

fn run_replay(balls: u32, ticks: u64, trace: bool, csv: Option<&std::path::Path>) -> Result<()> {
    let config = ClockConfig::with_balls(balls);

    let stdout = std::io::stdout();
    let trace_obs = trace.then(|| SnapshotObserver::new(JsonLinesWriter::new(stdout.lock()), 1));
    let csv_obs = match csv {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            Some(SnapshotObserver::new(CsvWriter::new(dir)?, 1))
        }
        None => None,
    };

    let mut observers = (trace_obs, csv_obs);
    let snapshot = replay_observed(&config, ticks, &mut observers)?;

    let (trace_obs, csv_obs) = &mut observers;
    let write_error = trace_obs
        .as_mut()
        .and_then(SnapshotObserver::take_error)
        .or_else(|| csv_obs.as_mut().and_then(SnapshotObserver::take_error));
    if let Some(e) = write_error {
        return Err(e).context("writing replay output");
    }

    if !trace {
        let mut out = stdout.lock();
        writeln!(out, "{snapshot}")?;
    }
    Ok(())
}

fn run_sweep(from: u32, to: u32, max_days: u64) {
    let base = ClockConfig::default();
    let limits = SearchLimits::for_days(&base, max_days);
    for (balls, result) in sweep(from..=to, &base, &limits) {
        match result {
            Ok(report) => println!("{report}"),
            Err(e) => {
                warn!(balls, error = %e, "no cycle");
                println!("{balls} balls: {e}");
            }
        }
    }
}
