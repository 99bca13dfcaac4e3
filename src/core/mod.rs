//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with no I/O dependencies.
//! All types here are pure, testable, and carry the game's invariants.

mod difficulty;
mod guess;
mod session;

pub use difficulty::Difficulty;
pub use guess::{GuessError, GuessInput, parse_guess};
pub use session::{GuessOutcome, Session, TARGET_MAX, TARGET_MIN};
