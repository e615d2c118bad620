mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{CheckCommand, ExpandCommand};

/// Maxis CLI - build-matrix axis resolution tool
#[derive(Debug, Parser)]
#[command(
    name = "maxis",
    version,
    about = "Resolve and expand dynamic build-matrix axes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Expand a matrix from an axis definition file
    Expand(ExpandCommand),
    /// Validate a source variable name
    Check(CheckCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Expand(cmd) => cmd.execute()?,
        Commands::Check(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}
