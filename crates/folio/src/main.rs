//! Folio CLI - case-study portfolio site generator.
//!
//! Provides commands for:
//! - `build`: Render the site into a static output directory
//! - `check`: Load the site and report authoring lints

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs};
use output::Output;

/// Folio - case-study portfolio site generator.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static site.
    Build(BuildArgs),
    /// Check content for authoring problems.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = match &cli.command {
        Commands::Build(args) => args.verbose,
        Commands::Check(args) => args.verbose,
    };
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&err);
        std::process::exit(1);
    }
}
