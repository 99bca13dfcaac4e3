//! Number Guessing Game - CLI
//!
//! Console guessing game with three difficulty tiers, optional hints, and
//! per-tier high scores persisted next to the working directory.

use anyhow::Result;
use clap::{Parser, Subcommand};
use high_low::engine::Engine;
use high_low::output::print_scores_overview;
use high_low::scores::{SCORES_FILE, ScoreStore};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "high_low",
    about = "Guess the secret number between 1 and 100 before your chances run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Score file location (defaults to highscores.json in the working directory)
    #[arg(long, global = true, default_value = SCORES_FILE)]
    scores_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play,

    /// Show the stored best score per difficulty tier
    Scores,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = ScoreStore::new(cli.scores_file);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(store),
        Commands::Scores => {
            print_scores_overview(&store.load());
            Ok(())
        }
    }
}

fn run_play(store: ScoreStore) -> Result<()> {
    let stdin = io::stdin();
    let mut engine = Engine::new(stdin.lock(), rand::rng(), store);
    engine.run()?;
    Ok(())
}
