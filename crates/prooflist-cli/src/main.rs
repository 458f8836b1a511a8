//! prooflist: Build SHA-256 proof lists from files on disk

use clap::{Parser, Subcommand};
use prooflist_cli::commands;
use prooflist_cli::logging::setup_logging;
use prooflist_cli::HashArgs;

#[derive(Parser)]
#[command(name = "prooflist")]
#[command(author, version, about = "Batch SHA-256 proof lists", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash files and directories and print the result list
    Hash(HashArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Hash(args) => {
            commands::hash::run(&args).await?;
        }
    }

    Ok(())
}
