//! Command-line parsing.

use std::path::PathBuf;

use bc_core::config::DEFAULT_MAX_DAYS;
use bc_core::{CoreError, CoreResult, parse_count};

pub const USAGE: &str = "\
USAGE:
\tball-clock [--max-days <days>] [--fast] <balls>
\tball-clock [--trace] [--csv <dir>] <balls> <ticks>
\tball-clock [--max-days <days>] --sweep <from> <to>
EXAMPLE:
\tball-clock 30
\t30 balls cycle after 15 days";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No arguments: print usage.
    Usage,

    /// Count days until the ball order repeats.
    Cycle {
        balls:    u32,
        max_days: u64,
        /// Use the one-day permutation instead of simulating the full period.
        fast:     bool,
    },

    /// Run a fixed number of ticks and print the snapshot.
    Replay {
        balls: u32,
        ticks: u64,
        /// Print the snapshot after every tick instead of only at the end.
        trace: bool,
        csv:   Option<PathBuf>,
    },

    /// Cycle search for every ball count in `from..=to`.
    Sweep {
        from:     u32,
        to:       u32,
        max_days: u64,
    },
}

/// Parse the arguments after the program name.
pub fn parse<I>(args: I) -> CoreResult<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut positional = Vec::new();
    let mut max_days = None;
    let mut fast = false;
    let mut trace = false;
    let mut csv = None;
    let mut sweep = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--max-days" => {
                let raw = value(&mut args, "--max-days")?;
                max_days = Some(parse_count::<u64>(&raw, "day ceiling")?);
            }
            "--fast" => fast = true,
            "--trace" => trace = true,
            "--csv" => csv = Some(PathBuf::from(value(&mut args, "--csv")?)),
            "--sweep" => sweep = true,
            flag if flag.starts_with("--") => {
                return Err(invalid(format!("unknown option {flag}")));
            }
            _ => positional.push(arg),
        }
    }

    if sweep {
        let [from, to] = positional.as_slice() else {
            return Err(invalid("--sweep takes exactly two ball counts".to_owned()));
        };
        let from = ball_count(from)?;
        let to = ball_count(to)?;
        if from > to {
            return Err(invalid(format!("empty sweep range {from}..={to}")));
        }
        return Ok(Command::Sweep { from, to, max_days: max_days.unwrap_or(DEFAULT_MAX_DAYS) });
    }

    match positional.as_slice() {
        [] => Ok(Command::Usage),
        [balls] => {
            if trace || csv.is_some() {
                return Err(invalid("--trace and --csv need a tick count".to_owned()));
            }
            Ok(Command::Cycle {
                balls: ball_count(balls)?,
                max_days: max_days.unwrap_or(DEFAULT_MAX_DAYS),
                fast,
            })
        }
        [balls, ticks] => Ok(Command::Replay {
            balls: ball_count(balls)?,
            ticks: parse_count(ticks, "tick count")?,
            trace,
            csv,
        }),
        _ => Err(invalid(format!("expected at most two counts, got {}", positional.len()))),
    }
}

fn ball_count(raw: &str) -> CoreResult<u32> {
    let n = parse_count::<u32>(raw, "ball count")?;
    if n == 0 {
        return Err(invalid("ball count must be at least 1".to_owned()));
    }
    Ok(n)
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> CoreResult<String> {
    args.next().ok_or_else(|| invalid(format!("{flag} needs a value")))
}

fn invalid(reason: String) -> CoreError {
    CoreError::InvalidConfiguration(reason)
}
