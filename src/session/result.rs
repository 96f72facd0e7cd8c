use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::WordPair;
use crate::catalog::level::Level;
use crate::engine::scoring::{self, Rating};
use crate::session::drill::SessionState;

/// Final numbers for a finished session, shown on the summary screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub level: Level,
    pub total_words: usize,
    pub correct: u32,
    pub incorrect: u32,
    pub hints_used: u32,
    pub wpm: u32,
    pub accuracy: u32,
    pub elapsed_secs: u64,
    pub rating: Rating,
    pub missed: Vec<WordPair>,
    pub finished_at: DateTime<Utc>,
}

impl SessionSummary {
    /// Summarize a session. Returns `None` for an idle session.
    pub fn from_session(session: &SessionState) -> Option<Self> {
        let level = session.level?;
        let elapsed_secs = session.elapsed_secs();
        let accuracy = session.accuracy_percent();
        Some(Self {
            level,
            total_words: session.sequence.len(),
            correct: session.correct,
            incorrect: session.incorrect,
            hints_used: session.hints_used,
            wpm: scoring::words_per_minute(session.correct, elapsed_secs),
            accuracy,
            elapsed_secs,
            rating: Rating::from_accuracy(accuracy),
            missed: session.missed.clone(),
            finished_at: Utc::now(),
        })
    }
}

/// `m:ss` clock display.
pub fn format_clock(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::catalog::dictionary::Dictionary;

    fn catalog() -> Dictionary {
        Dictionary::from_json(
            r#"{"A1": [{"tr": "elma", "en": "apple"}, {"tr": "kitap", "en": "book"}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn idle_session_has_no_summary() {
        assert!(SessionSummary::from_session(&SessionState::idle()).is_none());
    }

    #[test]
    fn summarizes_counts_and_missed_words() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut session = SessionState::start(Level::A1, &catalog(), &mut rng).unwrap();
        let first = session.current_word().unwrap().clone();
        session.submit_answer("wrong");
        session.request_hint();
        session.submit_answer(&first.target);
        let second = session.current_word().unwrap().target.clone();
        session.submit_answer(&second);

        let summary = SessionSummary::from_session(&session).unwrap();
        assert_eq!(summary.level, Level::A1);
        assert_eq!(summary.total_words, 2);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.incorrect, 1);
        assert_eq!(summary.hints_used, 1);
        assert_eq!(summary.accuracy, 67);
        assert_eq!(summary.rating, Rating::Good);
        assert_eq!(summary.missed, vec![first]);
    }

    #[test]
    fn clock_format_pads_seconds() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(75), "1:15");
        assert_eq!(format_clock(3600), "60:00");
    }

    #[test]
    fn summary_serializes_to_json() {
        let mut rng = SmallRng::seed_from_u64(3);
        let session = SessionState::start(Level::A1, &catalog(), &mut rng).unwrap();
        let summary = SessionSummary::from_session(&session).unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains(r#""level":"A1""#));
        assert!(json.contains(r#""rating":"Excellent""#));
    }
}
