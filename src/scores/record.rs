//! Persisted best-score records

use crate::core::Difficulty;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Best recorded winning run for one difficulty tier
///
/// One element of the JSON array in the score file. `difficulty` serializes
/// as the tier's numeric encoding, `time` is elapsed milliseconds, `date`
/// is the ISO-8601 UTC timestamp of when the record was set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub difficulty: Difficulty,
    pub attempts: u32,
    pub time: u64,
    pub date: String,
}

impl ScoreRecord {
    /// Build a record stamped with the current UTC time
    #[must_use]
    pub fn now(difficulty: Difficulty, attempts: u32, time: u64) -> Self {
        Self {
            difficulty,
            attempts,
            time,
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Whether this run beats an existing record
    ///
    /// Fewer attempts wins; equal attempts fall back to lower time.
    #[must_use]
    pub fn improves_on(&self, existing: &Self) -> bool {
        self.attempts < existing.attempts
            || (self.attempts == existing.attempts && self.time < existing.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(attempts: u32, time: u64) -> ScoreRecord {
        ScoreRecord {
            difficulty: Difficulty::Medium,
            attempts,
            time,
            date: "2026-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn fewer_attempts_always_improves() {
        assert!(record(2, 9000).improves_on(&record(3, 1000)));
    }

    #[test]
    fn more_attempts_never_improves() {
        assert!(!record(5, 1000).improves_on(&record(3, 9000)));
    }

    #[test]
    fn equal_attempts_fall_back_to_time() {
        assert!(record(3, 4000).improves_on(&record(3, 5000)));
        assert!(!record(3, 5000).improves_on(&record(3, 4000)));
    }

    #[test]
    fn identical_result_does_not_improve() {
        assert!(!record(3, 5000).improves_on(&record(3, 5000)));
    }

    #[test]
    fn serializes_with_numeric_difficulty() {
        let json = serde_json::to_string(&record(3, 5000)).unwrap();
        assert!(json.contains("\"difficulty\":5"));
        assert!(json.contains("\"attempts\":3"));
        assert!(json.contains("\"time\":5000"));
    }

    #[test]
    fn deserializes_the_original_file_shape() {
        let json = r#"[{ "difficulty": 10, "attempts": 4, "time": 12345, "date": "2026-08-07T12:00:00.000Z" }]"#;
        let records: Vec<ScoreRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].difficulty, Difficulty::Easy);
        assert_eq!(records[0].attempts, 4);
        assert_eq!(records[0].time, 12345);
    }

    #[test]
    fn now_stamps_an_iso8601_utc_date() {
        let record = ScoreRecord::now(Difficulty::Hard, 2, 1500);
        assert!(record.date.ends_with('Z'));
        assert!(record.date.contains('T'));
    }
}
