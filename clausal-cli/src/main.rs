//! `clausal` command-line entry point

use clap::Parser;
use clausal_cli::commands::Commands;
use clausal_cli::CliResult;

/// Clause annotation for POS-tagged English
#[derive(Debug, Parser)]
#[command(name = "clausal")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    Cli::parse().command.execute()
}
