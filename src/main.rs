#![forbid(unsafe_code)]

//! Terminal tally counter.
//!
//! Runs the tally widget full-screen: `+`/`-` (or the arrow keys) step the
//! count within its bounds, `r` resets it to zero with a short confirmation
//! banner, `q` quits and prints the final tally.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tally::counter::{self, Counter};
use tally::{Program, TallyApp};

#[derive(Debug, Parser)]
#[command(name = "tally", version, about = "A bounded tally counter for the terminal")]
struct Cli {
    /// Starting tally value.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    value: i32,

    /// Inclusive lower bound.
    #[arg(long, default_value_t = counter::DEFAULT_LOWER_BOUND, allow_negative_numbers = true)]
    depleted: i32,

    /// Inclusive upper bound.
    #[arg(long, default_value_t = counter::DEFAULT_UPPER_BOUND, allow_negative_numbers = true)]
    exceeded: i32,

    /// Render inline instead of on the alternate screen.
    #[arg(long)]
    no_alt_screen: bool,

    /// Append tracing output to this file. The TUI owns the terminal, so
    /// logging is off unless a file is given.
    #[arg(long, env = "TALLY_LOG")]
    log_file: Option<PathBuf>,
}

fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = std::fs::File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let counter = Counter::with_config(cli.value, cli.depleted, cli.exceeded)
        .context("invalid counter configuration")?;

    let mut program = Program::new(TallyApp::with_counter(counter));
    if !cli.no_alt_screen {
        program = program.with_alt_screen();
    }

    let final_model = program.run().context("failed to run tally")?;
    println!("Final tally: {}", final_model.counter().value());
    Ok(())
}
