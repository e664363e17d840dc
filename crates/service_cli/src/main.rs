//! Numerics CLI - Command Line Operations for the Method Catalogue
//!
//! This is the operational entry point for the numerical method catalogue.
//!
//! # Commands
//!
//! - `numerics spline --x "0 1 2" --y "1 3 2"` - Build a quadratic spline
//! - `numerics interpolate --x ... --y ...` - Run every interpolation method
//! - `numerics compare-roots --problem sqrt-two` - Compare root-finding methods
//! - `numerics compare-linear --matrix "4 1; 1 3" --vector "1 2"` - Compare
//!   iterative linear solvers
//! - `numerics check` - Print the effective configuration
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate validates configuration and
//! arguments, then hands the work to `numerics_compare` and prints what it
//! returns.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::compare::{CompareLinearArgs, CompareRootsArgs};
use config::NumericsConfig;

/// Numerical method catalogue CLI
#[derive(Parser)]
#[command(name = "numerics")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "numerics.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the natural quadratic spline through a point set
    Spline {
        /// X values, whitespace separated
        #[arg(short, long, allow_hyphen_values = true)]
        x: String,

        /// Y values, whitespace separated
        #[arg(short, long, allow_hyphen_values = true)]
        y: String,

        /// Write sampled (x, S(x)) pairs to this CSV file
        #[arg(short, long)]
        samples: Option<PathBuf>,
    },

    /// Run every interpolation method and emit the report as CSV
    Interpolate {
        /// X values, whitespace separated
        #[arg(short, long, allow_hyphen_values = true)]
        x: String,

        /// Y values, whitespace separated
        #[arg(short, long, allow_hyphen_values = true)]
        y: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare the root-finding methods on a built-in problem
    CompareRoots(CompareRootsArgs),

    /// Compare Jacobi, Gauss-Seidel and SOR on a linear system
    CompareLinear(CompareLinearArgs),

    /// Check configuration and list the method catalogues
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = NumericsConfig::load_with_env_and_validate(&cli.config)?;
    let log_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    init_tracing(log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Spline { x, y, samples } => {
            commands::spline::run(&config, &x, &y, samples.as_deref(), &mut out)
        }
        Commands::Interpolate { x, y, output } => {
            commands::interpolate::run(&config, &x, &y, output.as_deref(), &mut out)
        }
        Commands::CompareRoots(args) => commands::compare::run_roots(&config, &args, &mut out),
        Commands::CompareLinear(args) => commands::compare::run_linear(&config, &args, &mut out),
        Commands::Check => commands::check::run(&config, &cli.config, &mut out),
    }?;

    out.flush()?;
    Ok(())
}
