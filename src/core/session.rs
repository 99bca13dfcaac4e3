//! Game session state
//!
//! One `Session` is one play-through: an immutable target plus attempt
//! counters that move in lockstep. `remaining_attempts() + attempts()`
//! equals the tier budget from creation until the terminal outcome.

use super::difficulty::Difficulty;
use std::cmp::Ordering;
use std::time::{Duration, Instant};

/// Lowest drawable target number
pub const TARGET_MIN: u32 = 1;

/// Highest drawable target number
pub const TARGET_MAX: u32 = 100;

/// State for a single play-through
///
/// The target comes from the caller: the engine draws it from its injected
/// source, tests pass it directly.
#[derive(Debug, Clone)]
pub struct Session {
    target: u32,
    difficulty: Difficulty,
    remaining_attempts: u32,
    attempts: u32,
    started: Instant,
    hint_used: bool,
}

/// Result of applying one valid guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matches the target
    Correct,
    /// The target is greater than the guess
    TooLow,
    /// The target is less than the guess
    TooHigh,
}

impl Session {
    /// Start a new session at the given tier
    ///
    /// `target` is assumed to lie in `TARGET_MIN..=TARGET_MAX`; input
    /// validation happens at the parse layer, target drawing at the engine.
    #[must_use]
    pub fn new(difficulty: Difficulty, target: u32) -> Self {
        debug_assert!((TARGET_MIN..=TARGET_MAX).contains(&target));

        Self {
            target,
            difficulty,
            remaining_attempts: difficulty.budget(),
            attempts: 0,
            started: Instant::now(),
            hint_used: false,
        }
    }

    /// The secret number for this session
    #[inline]
    #[must_use]
    pub const fn target(&self) -> u32 {
        self.target
    }

    /// The tier this session was started at
    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Valid guesses made so far
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Guesses left before the session is lost
    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    /// Whether the attempt budget is spent
    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining_attempts == 0
    }

    /// Whether a hint has been accepted this session
    #[inline]
    #[must_use]
    pub const fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// Time elapsed since the session started
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Apply one valid guess
    ///
    /// Both counters move together, never one without the other. Range
    /// validation belongs to [`parse_guess`](super::parse_guess); this
    /// method only compares.
    ///
    /// # Panics
    /// Debug builds panic if called on an exhausted session; the engine
    /// checks [`is_exhausted`](Self::is_exhausted) before every prompt.
    pub fn guess(&mut self, value: u32) -> GuessOutcome {
        debug_assert!(self.remaining_attempts > 0);

        self.attempts += 1;
        self.remaining_attempts -= 1;

        match value.cmp(&self.target) {
            Ordering::Equal => GuessOutcome::Correct,
            Ordering::Less => GuessOutcome::TooLow,
            Ordering::Greater => GuessOutcome::TooHigh,
        }
    }

    /// Whether a hint should be offered before the next guess
    ///
    /// The offer opens once `remaining_attempts` drops to half the budget
    /// (rounded up) and stays open every cycle until a hint is accepted.
    /// Declining leaves the flag unset, so the offer recurs.
    #[must_use]
    pub fn hint_available(&self) -> bool {
        !self.hint_used && self.remaining_attempts <= self.difficulty.budget().div_ceil(2)
    }

    /// Accept the hint offer
    ///
    /// Marks the hint used and returns the bounds of the quartile holding
    /// the target. At most one hint is revealed per session.
    pub fn take_hint(&mut self) -> (u32, u32) {
        self.hint_used = true;
        self.hint_range()
    }

    /// Quartile of the guessing range containing the target
    #[must_use]
    pub const fn hint_range(&self) -> (u32, u32) {
        match self.target {
            ..=25 => (1, 25),
            ..=50 => (26, 50),
            ..=75 => (51, 75),
            _ => (76, 100),
        }
    }
}
