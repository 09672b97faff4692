//! Algoviz CLI - Command Line Operations for Randomized Algorithm Demos
//!
//! This is the operational entry point for the algoviz library.
//!
//! # Commands
//!
//! - `algoviz trace --values "3, 1, 2"` - Record a randomized quicksort trace
//! - `algoviz trace --random` - Trace a freshly generated random input
//! - `algoviz simulate --a-min 2 --a-max 4 --b-min 3 --b-max 6 --hours 8` -
//!   Estimate task-completion probability by Monte Carlo simulation
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate plays the role of the
//! "surrounding application": it parses and validates end-user input,
//! invokes the engines, and serialises their results. The engines themselves
//! perform no defensive validation.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod parse;

pub use error::{CliError, Result};

/// Algoviz Randomized Algorithm Visualizer CLI
#[derive(Parser)]
#[command(name = "algoviz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a randomized quicksort trace for step-by-step playback
    Trace {
        /// Comma-separated list of numbers to sort (2 to 20 values)
        #[arg(long, conflicts_with = "random")]
        values: Option<String>,

        /// Generate a random input instead of supplying --values
        #[arg(long)]
        random: bool,

        /// Size of the generated random input (2 to 20; default 5-14)
        #[arg(long, requires = "random")]
        size: Option<usize>,

        /// Seed for reproducible pivot choices
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (json, table, summary)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Estimate task-completion probability by Monte Carlo simulation
    Simulate {
        /// Minimum duration of task A in hours
        #[arg(long)]
        a_min: f64,

        /// Maximum duration of task A in hours
        #[arg(long)]
        a_max: f64,

        /// Minimum duration of task B in hours
        #[arg(long)]
        b_min: f64,

        /// Maximum duration of task B in hours
        #[arg(long)]
        b_max: f64,

        /// Available hours (inclusive success threshold)
        #[arg(long)]
        hours: f64,

        /// Number of trials (100 to 10000)
        #[arg(short, long, default_value = "1000")]
        trials: usize,

        /// Seed for reproducible trial draws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (json, report)
        #[arg(short, long, default_value = "report")]
        format: String,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Trace {
            values,
            random,
            size,
            seed,
            format,
        } => commands::trace::run(values.as_deref(), random, size, seed, &format),
        Commands::Simulate {
            a_min,
            a_max,
            b_min,
            b_max,
            hours,
            trials,
            seed,
            format,
        } => commands::simulate::run(a_min, a_max, b_min, b_max, hours, trials, seed, &format),
    }
}
