//! Command-line interface for the Sema analyzer.

use anyhow::Result;
use clap::{Parser, Subcommand};
use sema_cli::commands;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sema")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log progress while analyzing
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze syntax trees and report their metrics
    #[command(visible_alias = "c")]
    Check {
        /// Tree files to analyze; defaults to the trees listed in sema.toml
        trees: Vec<PathBuf>,
    },

    /// Initialize a Sema project in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { trees } => commands::check::execute(&trees),
        Commands::Init => {
            let current_dir = std::env::current_dir()?;
            commands::init::execute(&current_dir)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
