//! noughts CLI - play Tic-Tac-Toe against a rule-based engine
//!
//! This CLI provides:
//! - A single round from any position (what a front end calls per request)
//! - Engine self-play
//! - Engine against a random opponent

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-Tac-Toe against a rule-based engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one round from a given grid
    Play(noughts::cli::commands::play::PlayArgs),

    /// Let the engine play both sides
    SelfPlay(noughts::cli::commands::self_play::SelfPlayArgs),

    /// Play the engine against a random opponent
    VersusRandom(noughts::cli::commands::versus_random::VersusRandomArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::SelfPlay(args) => noughts::cli::commands::self_play::execute(args),
        Commands::VersusRandom(args) => noughts::cli::commands::versus_random::execute(args),
    }
}
