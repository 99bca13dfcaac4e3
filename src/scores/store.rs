//! Score file access
//!
//! The backing file is opened, read or written, and closed per operation;
//! no handle is held across prompts. Every failure degrades to "no score
//! data" with a console warning rather than interrupting play.

use super::record::ScoreRecord;
use crate::core::Difficulty;
use crate::output::warn;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default score file name, resolved against the current working directory
pub const SCORES_FILE: &str = "highscores.json";

/// Durable store of one best record per difficulty tier
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

/// How `record_result` classified a finished winning run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// No record existed for the tier yet
    FirstScore,
    /// The run beat the stored record
    NewBest,
    /// The stored record stands
    NotImproved,
}

impl ScoreStore {
    /// Store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `highscores.json` in the current working directory
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(SCORES_FILE)
    }

    /// The backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<Vec<ScoreRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;

        serde_json::from_str(&data).with_context(|| format!("parsing {}", self.path.display()))
    }

    /// Load all stored records
    ///
    /// A missing file means no scores yet. Read or parse failures are
    /// reported as a warning and degrade to an empty collection; they never
    /// reach the caller.
    #[must_use]
    pub fn load(&self) -> Vec<ScoreRecord> {
        self.read_records().unwrap_or_else(|err| {
            warn(&format!("could not load high scores: {err:#}"));
            Vec::new()
        })
    }

    /// Overwrite the score file with the full collection
    ///
    /// Write failures are reported as a warning; there is no rollback or
    /// retry.
    pub fn save(&self, records: &[ScoreRecord]) {
        let written = serde_json::to_string_pretty(records)
            .context("serializing high scores")
            .and_then(|json| {
                fs::write(&self.path, json)
                    .with_context(|| format!("writing {}", self.path.display()))
            });

        if let Err(err) = written {
            warn(&format!("could not save high scores: {err:#}"));
        }
    }

    /// Evaluate a finished winning run against the stored records
    ///
    /// Inserts the first record for a tier, replaces a beaten one, and
    /// leaves the collection alone otherwise. The file is rewritten in
    /// every case. The returned outcome drives the console feedback.
    pub fn record_result(
        &self,
        difficulty: Difficulty,
        attempts: u32,
        time: Duration,
    ) -> RecordOutcome {
        let mut records = self.load();
        let candidate = ScoreRecord::now(difficulty, attempts, time.as_millis() as u64);

        let outcome = match records.iter_mut().find(|r| r.difficulty == difficulty) {
            Some(existing) => {
                if candidate.improves_on(existing) {
                    *existing = candidate;
                    RecordOutcome::NewBest
                } else {
                    RecordOutcome::NotImproved
                }
            }
            None => {
                records.push(candidate);
                RecordOutcome::FirstScore
            }
        };

        self.save(&records);
        outcome
    }

    /// Best stored record for a tier, if any
    #[must_use]
    pub fn best_for(&self, difficulty: Difficulty) -> Option<ScoreRecord> {
        self.load().into_iter().find(|r| r.difficulty == difficulty)
    }
}
