//! # taxpilot CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity flags select the tracing filter.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use taxpilot_cli::classify::{run_classify, ClassifyArgs};
use taxpilot_cli::quick::{run_quick, QuickArgs};
use taxpilot_cli::refdata::{run_refdata, RefdataArgs};

/// Taxpilot compliance classifier
///
/// Classifies a self-reported compliance profile into a risk level, a
/// complexity tier, and an estimated price band, against the built-in
/// jurisdiction/exchange/risk-factor reference tables.
#[derive(Parser, Debug)]
#[command(name = "taxpilot", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a profile document (JSON or YAML).
    Classify(ClassifyArgs),

    /// One-shot check from flags, no document needed.
    Quick(QuickArgs),

    /// Print a reference table as JSON.
    Refdata(RefdataArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Classify(args) => run_classify(&args),
        Commands::Quick(args) => run_quick(&args),
        Commands::Refdata(args) => run_refdata(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
