//! Interactive game state machine
//!
//! Drives the console protocol: difficulty selection, the guess loop with
//! its conditional hint offer, the end-of-game summary, and the replay
//! prompt. Each state reads at most one line of input and hands back the
//! next state; end of input anywhere counts as the declining answer.

use crate::core::{
    Difficulty, GuessInput, GuessOutcome, Session, TARGET_MAX, TARGET_MIN, parse_guess,
};
use crate::output::display;
use crate::scores::{RecordOutcome, ScoreStore};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Source of secret numbers
///
/// Production draws from thread-local randomness; tests inject a fixed
/// source so scenarios can script the target.
pub trait TargetSource {
    /// Draw the next target in `TARGET_MIN..=TARGET_MAX`
    fn draw(&mut self) -> u32;
}

impl<R: Rng> TargetSource for R {
    fn draw(&mut self) -> u32 {
        self.random_range(TARGET_MIN..=TARGET_MAX)
    }
}

/// Where the conversation stands between prompts
#[derive(Debug)]
enum State {
    /// Waiting for a tier choice
    Selecting,
    /// Inside the guess loop
    Guessing(Session),
    /// Terminal outcome reached, summary due
    Ended { session: Session, won: bool },
    /// Waiting for the play-again answer
    Replay,
    /// Conversation over, the process exits naturally
    Done,
}

/// The interactive game engine
///
/// Generic over its input stream and target source so tests can script
/// complete conversations. One `Session` lives at a time; every replay
/// cycle constructs a fresh one.
pub struct Engine<I, T> {
    input: I,
    targets: T,
    store: ScoreStore,
}

impl<I: BufRead, T: TargetSource> Engine<I, T> {
    pub fn new(input: I, targets: T, store: ScoreStore) -> Self {
        Self {
            input,
            targets,
            store,
        }
    }

    /// Run the conversation to completion
    ///
    /// Returns when the player quits mid-game, declines a replay, or the
    /// input stream ends.
    ///
    /// # Errors
    /// Returns an error only when reading input or flushing stdout fails.
    pub fn run(&mut self) -> io::Result<()> {
        display::print_welcome();

        let mut state = State::Selecting;
        loop {
            state = match state {
                State::Selecting => self.select_difficulty()?,
                State::Guessing(session) => self.guess_cycle(session)?,
                State::Ended { session, won } => self.end_game(&session, won),
                State::Replay => self.replay_prompt()?,
                State::Done => return Ok(()),
            };
        }
    }

    fn select_difficulty(&mut self) -> io::Result<State> {
        println!("Please select the difficulty level:");
        for (i, tier) in Difficulty::ALL.iter().enumerate() {
            println!("{}. {} ({} chances)", i + 1, tier, tier.budget());
        }
        println!();

        let answer = self.ask("Enter your choice")?;
        let difficulty = match answer.as_deref().and_then(Difficulty::from_choice) {
            Some(tier) => tier,
            None => {
                println!("Invalid choice. Defaulting to Medium difficulty.");
                Difficulty::Medium
            }
        };

        println!(
            "\nGreat! You have selected the {} difficulty level.",
            difficulty.to_string().bright_cyan().bold()
        );
        if let Some(best) = self.store.best_for(difficulty) {
            display::print_best_score(&best);
        }
        println!("Let's start the game!\n");

        let target = self.targets.draw();
        Ok(State::Guessing(Session::new(difficulty, target)))
    }

    fn guess_cycle(&mut self, mut session: Session) -> io::Result<State> {
        if session.is_exhausted() {
            return Ok(State::Ended {
                session,
                won: false,
            });
        }

        if session.remaining_attempts() == 1 {
            println!("{}", "This is your last chance!".bright_red().bold());
        } else {
            println!(
                "You have {} chances remaining.",
                session.remaining_attempts()
            );
        }

        if session.hint_available() {
            self.offer_hint(&mut session)?;
        }

        let Some(answer) = self.ask("Enter your guess (or \"q\" to quit)")? else {
            return Ok(self.farewell());
        };

        match parse_guess(&answer) {
            Ok(GuessInput::Quit) => Ok(self.farewell()),
            Err(_) => {
                // Rejected input costs nothing
                println!("Please enter a valid number between {TARGET_MIN} and {TARGET_MAX}.");
                Ok(State::Guessing(session))
            }
            Ok(GuessInput::Number(value)) => match session.guess(value) {
                GuessOutcome::Correct => Ok(State::Ended { session, won: true }),
                outcome => {
                    let direction = match outcome {
                        GuessOutcome::TooLow => "greater",
                        _ => "less",
                    };
                    println!("Incorrect! The number is {direction} than {value}.\n");
                    Ok(State::Guessing(session))
                }
            },
        }
    }

    fn offer_hint(&mut self, session: &mut Session) -> io::Result<()> {
        // Only an affirmative answer marks the hint used; a declined offer
        // comes back on the next cycle
        let accepted = self
            .ask("Would you like a hint? (y/n)")?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y"));

        if accepted {
            let (low, high) = session.take_hint();
            println!(
                "{} The number is in the range {low}-{high}.",
                "HINT:".bright_cyan().bold()
            );
        }

        Ok(())
    }

    fn end_game(&mut self, session: &Session, won: bool) -> State {
        let elapsed = session.elapsed();

        if won {
            display::print_win(session.target(), session.attempts(), elapsed);

            match self
                .store
                .record_result(session.difficulty(), session.attempts(), elapsed)
            {
                RecordOutcome::FirstScore => {
                    println!("{}", "First score for this difficulty level!".bright_green());
                }
                RecordOutcome::NewBest => {
                    println!("{}", "New high score achieved!".bright_green().bold());
                }
                RecordOutcome::NotImproved => {}
            }
        } else {
            display::print_loss(session.target(), elapsed);
        }

        State::Replay
    }

    fn replay_prompt(&mut self) -> io::Result<State> {
        let again = self
            .ask("\nDo you want to play again? (y/n)")?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y"));

        if again {
            display::print_welcome();
            Ok(State::Selecting)
        } else {
            Ok(self.farewell())
        }
    }

    fn farewell(&self) -> State {
        println!("Thanks for playing! Goodbye.");
        State::Done
    }

    /// Prompt and read one trimmed line; `None` once the input ends
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::SCORES_FILE;
    use std::io::Cursor;
    use tempfile::TempDir;

    /// Target source that replays a scripted constant
    struct FixedTarget(u32);

    impl TargetSource for FixedTarget {
        fn draw(&mut self) -> u32 {
            self.0
        }
    }

    fn run_scripted(input: &str, target: u32, dir: &TempDir) {
        let store = ScoreStore::new(dir.path().join(SCORES_FILE));
        let mut engine = Engine::new(Cursor::new(input.to_string()), FixedTarget(target), store);
        engine.run().unwrap();
    }

    fn stored(dir: &TempDir) -> ScoreStore {
        ScoreStore::new(dir.path().join(SCORES_FILE))
    }

    #[test]
    fn winning_run_persists_a_record() {
        let dir = TempDir::new().unwrap();

        // Easy, guesses 10 -> 50 -> 42, decline replay
        run_scripted("1\n10\n50\n42\nn\n", 42, &dir);

        let best = stored(&dir).best_for(Difficulty::Easy).unwrap();
        assert_eq!(best.attempts, 3);
    }

    #[test]
    fn lost_run_saves_nothing() {
        let dir = TempDir::new().unwrap();

        // Hard, three misses; hint offers at remaining 2 and 1 are declined
        run_scripted("3\n5\nn\n5\nn\n5\nn\n", 42, &dir);

        assert!(stored(&dir).load().is_empty());
    }

    #[test]
    fn invalid_input_costs_no_attempt_before_exhaustion() {
        let dir = TempDir::new().unwrap();

        // "abc" is rejected for free, then three misses exhaust the budget
        run_scripted("3\nabc\n5\nn\n5\nn\n5\nn\n", 42, &dir);

        assert!(stored(&dir).load().is_empty());
    }

    #[test]
    fn unrecognized_choice_falls_back_to_medium() {
        let dir = TempDir::new().unwrap();

        run_scripted("9\n42\nn\n", 42, &dir);

        let best = stored(&dir).best_for(Difficulty::Medium).unwrap();
        assert_eq!(best.attempts, 1);
    }

    #[test]
    fn quit_mid_game_saves_nothing() {
        let dir = TempDir::new().unwrap();

        run_scripted("2\nq\n", 42, &dir);

        assert!(stored(&dir).load().is_empty());
    }

    #[test]
    fn replay_starts_a_fresh_session() {
        let dir = TempDir::new().unwrap();

        // Win on Easy, replay, win on Medium, decline
        run_scripted("1\n42\ny\n2\n42\nn\n", 42, &dir);

        let store = stored(&dir);
        assert_eq!(store.best_for(Difficulty::Easy).unwrap().attempts, 1);
        assert_eq!(store.best_for(Difficulty::Medium).unwrap().attempts, 1);
    }

    #[test]
    fn accepted_hint_still_allows_the_win() {
        let dir = TempDir::new().unwrap();

        // Hard, miss once, accept the hint, then land the target
        run_scripted("3\n50\ny\n10\nn\n", 10, &dir);

        let best = stored(&dir).best_for(Difficulty::Hard).unwrap();
        assert_eq!(best.attempts, 2);
    }

    #[test]
    fn input_ending_mid_game_terminates_cleanly() {
        let dir = TempDir::new().unwrap();

        run_scripted("1\n", 42, &dir);

        assert!(stored(&dir).load().is_empty());
    }

    #[test]
    fn better_replay_run_beats_the_stored_record() {
        let dir = TempDir::new().unwrap();

        // Two-guess win, replay, one-guess win on the same tier
        run_scripted("2\n10\n42\ny\n2\n42\nn\n", 42, &dir);

        let best = stored(&dir).best_for(Difficulty::Medium).unwrap();
        assert_eq!(best.attempts, 1);
    }

    #[test]
    fn drawn_targets_stay_in_range() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let target = TargetSource::draw(&mut rng);
            assert!((TARGET_MIN..=TARGET_MAX).contains(&target));
        }
    }
}
