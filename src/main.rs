//! Command-line host for the tabletop robot.
//!
//! Reads one command per line from a file or stdin, prints every `REPORT`
//! to stdout and, with `--show-errors`, every rejected line to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tabletop_robot::{BoundaryPolicy, KeywordCase, RobotConfig, Session, Tabletop};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tabletop-robot")]
#[command(about = "Drive a robot around a bounded tabletop", long_about = None)]
#[command(version)]
struct Args {
    /// Command file; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Tabletop width in cells.
    #[arg(long, default_value_t = 5)]
    width: u32,

    /// Tabletop height in cells.
    #[arg(long, default_value_t = 5)]
    height: u32,

    /// Blocked cell as `X,Y`. Repeatable.
    #[arg(long = "obstacle", value_parser = parse_cell)]
    obstacles: Vec<(i32, i32)>,

    /// Only accept uppercase keywords and facings.
    #[arg(long)]
    exact_case: bool,

    /// Silently ignore moves that would leave the table.
    #[arg(long)]
    ignore_edge_moves: bool,

    /// Print rejected lines to stderr.
    #[arg(long)]
    show_errors: bool,

    /// Log at info level (overrides RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn parse_cell(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `X,Y`, got `{s}`"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid coordinate `{v}`: {e}"))
    };
    Ok((coord(x)?, coord(y)?))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let tabletop = Tabletop::new(args.width, args.height)
        .and_then(|table| {
            args.obstacles
                .iter()
                .try_fold(table, |table, &(x, y)| table.with_obstacle(x, y))
        })
        .context("invalid tabletop configuration")?;

    let config = RobotConfig {
        keyword_case: if args.exact_case {
            KeywordCase::Exact
        } else {
            KeywordCase::Insensitive
        },
        boundary_policy: if args.ignore_edge_moves {
            BoundaryPolicy::Ignore
        } else {
            BoundaryPolicy::Reject
        },
    };
    info!(
        width = tabletop.width(),
        height = tabletop.height(),
        obstacles = tabletop.obstacles().len(),
        ?config,
        "tabletop ready"
    );

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let mut session = Session::new(&tabletop, config);
    let batch = session.evaluate(&text);

    for report in batch.reports() {
        println!("{report}");
    }
    if args.show_errors {
        for outcome in &batch.outcomes {
            if let Err(err) = &outcome.result {
                eprintln!("line {}: {err}", outcome.number);
            }
        }
    }

    info!(
        lines = batch.len(),
        failures = batch.failures().count(),
        "evaluation finished"
    );
    Ok(())
}
