//! Console banners, summaries, and operator warnings

use super::formatters::{format_millis, format_seconds};
use crate::core::{Difficulty, TARGET_MAX, TARGET_MIN};
use crate::scores::ScoreRecord;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io;
use std::time::Duration;

/// Clear the terminal and park the cursor at the origin
///
/// Best-effort: a terminal that rejects the escape codes just keeps its
/// scrollback.
pub fn clear_screen() {
    let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
}

/// Print the welcome banner and game rules
pub fn print_welcome() {
    clear_screen();
    println!("{}", "═".repeat(50).bright_cyan());
    println!(
        "{}",
        "    Welcome to the Number Guessing Game!"
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(50).bright_cyan());
    println!("\nI'm thinking of a number between {TARGET_MIN} and {TARGET_MAX}.");
    println!("Try to guess it with the fewest attempts possible!\n");
}

/// Print the stored best score line for a tier
pub fn print_best_score(record: &ScoreRecord) {
    println!(
        "The best score for this difficulty is {} attempts in {} seconds.",
        record.attempts.to_string().bright_yellow(),
        format_millis(record.time).bright_yellow()
    );
}

/// Print the victory summary
pub fn print_win(target: u32, attempts: u32, elapsed: Duration) {
    println!(
        "\n{}",
        format!("Congratulations! You guessed the correct number ({target}) in {attempts} attempts!")
            .green()
            .bold()
    );
    println!("Time taken: {} seconds.", format_seconds(elapsed));
}

/// Print the game-over summary
pub fn print_loss(target: u32, elapsed: Duration) {
    println!(
        "\n{}",
        format!("Game over! You've run out of chances. The number was {target}.")
            .red()
            .bold()
    );
    println!("Time taken: {} seconds.", format_seconds(elapsed));
}

/// Print the best score per tier for the `scores` command
pub fn print_scores_overview(records: &[ScoreRecord]) {
    println!("{}", "═".repeat(50).bright_cyan());
    println!("{}", "           Best scores by difficulty".bright_yellow().bold());
    println!("{}", "═".repeat(50).bright_cyan());
    println!();

    if records.is_empty() {
        println!("No scores recorded yet.");
        return;
    }

    for tier in Difficulty::ALL {
        // Pad before coloring so the escape codes don't skew the column
        let name = format!("{:<8}", tier.to_string()).bright_white().bold();
        match records.iter().find(|r| r.difficulty == tier) {
            Some(record) => println!(
                "  {name} {} attempts in {} seconds  (set {})",
                record.attempts.to_string().bright_yellow(),
                format_millis(record.time).bright_yellow(),
                record.date.bright_black()
            ),
            None => println!("  {name} {}", "no record yet".bright_black()),
        }
    }
}

/// Print a non-fatal operator warning
///
/// Persistence failures land here; the game keeps going without score data.
pub fn warn(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}
