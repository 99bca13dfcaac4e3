//! Number Guessing Game
//!
//! A console guessing game: the program draws a secret number between 1 and 100
//! and the player hunts it down within a difficulty-dependent attempt budget.
//! The best winning run per difficulty is persisted to a local score file.
//!
//! # Quick Start
//!
//! ```rust
//! use high_low::core::{Difficulty, GuessOutcome, Session};
//!
//! let mut session = Session::new(Difficulty::Easy, 42);
//! assert_eq!(session.guess(10), GuessOutcome::TooLow);
//! assert_eq!(session.guess(42), GuessOutcome::Correct);
//! assert_eq!(session.attempts(), 2);
//! ```

// Core domain types
pub mod core;

// High score persistence
pub mod scores;

// Interactive game state machine
pub mod engine;

// Terminal output formatting
pub mod output;
