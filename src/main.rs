//! connectk command line
//!
//! Builds a board from a JSON config and/or flags, enumerates move paths
//! with `perft` and prints the counts followed by the board dump.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use connectk::{perft, BoardConfig, BoardState, Move, Owner};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON board config (columns, rows, win_length, gravity)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board width, overrides the config
    #[arg(long)]
    columns: Option<u32>,

    /// Board height, overrides the config
    #[arg(long)]
    rows: Option<u32>,

    /// Run length needed to win, overrides the config
    #[arg(short, long)]
    k: Option<u32>,

    /// Pieces drop to the lowest open cell
    #[arg(short, long)]
    gravity: bool,

    /// Plies to enumerate
    #[arg(short, long, default_value_t = 4)]
    depth: u32,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match &args.config {
        Some(path) => BoardConfig::load(path)
            .with_context(|| format!("loading board config {}", path.display()))?,
        None => BoardConfig::default(),
    };
    if let Some(columns) = args.columns {
        config.columns = columns;
    }
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(k) = args.k {
        config.win_length = k;
    }
    if args.gravity {
        config.gravity = true;
    }

    let mut board = BoardState::from_config(&config, Move::default(), 0)?;
    info!(
        "Board {}x{}, k={}, gravity={}, depth {}",
        config.columns, config.rows, config.win_length, config.gravity, args.depth
    );

    let start = Instant::now();
    let stats = perft(&mut board, Owner::First, args.depth);
    let elapsed = start.elapsed();

    info!(
        "perft({}) finished in {:.3}s ({:.0} nodes/s)",
        args.depth,
        elapsed.as_secs_f64(),
        stats.nodes as f64 / elapsed.as_secs_f64().max(1e-9)
    );
    println!("nodes: {}", stats.nodes);
    println!("wins:  {}", stats.wins);
    println!("draws: {}", stats.draws);
    println!("{board}");

    Ok(())
}
