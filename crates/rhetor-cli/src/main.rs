//! rhetor CLI.
//!
//! Subcommands:
//! - `aggregate`: grouped sentiment statistics from the scored-results CSV
//! - `features`: rhetorical feature extraction over the transcript corpus
//! - `report`: full pipeline into a Markdown report plus exports

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;

use rhetor_core::errors::RhetorErrorCode;
use rhetor_core::tracing::init_tracing;

mod commands;

#[derive(Parser)]
#[command(name = "rhetor")]
#[command(version)]
#[command(about = "Political speech sentiment aggregation and rhetorical feature analysis")]
struct Cli {
    /// Verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Project root holding rhetor.toml
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grouped descriptive statistics over scored speeches
    Aggregate(commands::aggregate::AggregateArgs),
    /// Run the rhetorical detectors over the transcript corpus
    Features(commands::features::FeaturesArgs),
    /// Full pipeline: aggregation plus features into report files
    Report(commands::report::ReportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose > 0 && std::env::var_os("RHETOR_LOG").is_none() {
        let level = if cli.verbose == 1 { "debug" } else { "trace" };
        std::env::set_var("RHETOR_LOG", format!("rhetor={level},rhetor_core={level},rhetor_corpus={level},rhetor_analysis={level},rhetor_report={level}"));
    }
    init_tracing();

    let result = match cli.command {
        Commands::Aggregate(args) => commands::aggregate::run(&cli.root, args),
        Commands::Features(args) => commands::features::run(&cli.root, args),
        Commands::Report(args) => commands::report::run(&cli.root, args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.error_code(), error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
