use std::time::Instant;

use rand::Rng;

use crate::catalog::level::Level;
use crate::catalog::shuffle::shuffled;
use crate::catalog::{WordCatalog, WordPair, words_for};
use crate::engine::scoring;
use crate::error::DrillError;
use crate::session::input;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
    Complete,
}

/// Outcome of the most recent submission, consumed once by the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

/// One playthrough of a level.
///
/// Only `start`, `submit_answer`, `request_hint` and `end` change the
/// sequence, position and counters. `position` only moves forward and
/// `phase` is `Complete` exactly when every word has been answered.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub phase: Phase,
    pub level: Option<Level>,
    pub sequence: Vec<WordPair>,
    pub position: usize,
    pub input: String,
    pub hint_len: usize,
    pub correct: u32,
    pub incorrect: u32,
    pub hints_used: u32,
    pub missed: Vec<WordPair>,
    pub started_at: Option<Instant>,
    pub finished_at: Option<Instant>,
    feedback: Option<Feedback>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::idle()
    }
}

impl SessionState {
    pub fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            level: None,
            sequence: Vec::new(),
            position: 0,
            input: String::new(),
            hint_len: 0,
            correct: 0,
            incorrect: 0,
            hints_used: 0,
            missed: Vec::new(),
            started_at: None,
            finished_at: None,
            feedback: None,
        }
    }

    pub fn start<C, R>(level: Level, catalog: &C, rng: &mut R) -> Result<Self, DrillError>
    where
        C: WordCatalog + ?Sized,
        R: Rng + ?Sized,
    {
        Self::start_at(level, catalog, rng, Instant::now())
    }

    pub fn start_at<C, R>(
        level: Level,
        catalog: &C,
        rng: &mut R,
        now: Instant,
    ) -> Result<Self, DrillError>
    where
        C: WordCatalog + ?Sized,
        R: Rng + ?Sized,
    {
        let words = words_for(catalog, level);
        if words.is_empty() {
            return Err(DrillError::InvalidLevel(level));
        }
        Ok(Self {
            phase: Phase::Active,
            level: Some(level),
            sequence: shuffled(&words, rng),
            started_at: Some(now),
            ..Self::idle()
        })
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// The word being asked, if a session is in progress.
    pub fn current_word(&self) -> Option<&WordPair> {
        if self.is_active() {
            self.sequence.get(self.position)
        } else {
            None
        }
    }

    pub fn type_char(&mut self, ch: char) {
        if self.is_active() {
            self.input.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.is_active() {
            self.input.pop();
        }
    }

    /// Submit whatever is in the input buffer.
    pub fn submit_input(&mut self) -> Option<Feedback> {
        self.submit_input_at(Instant::now())
    }

    pub fn submit_input_at(&mut self, now: Instant) -> Option<Feedback> {
        let raw = self.input.clone();
        self.submit_answer_at(&raw, now)
    }

    pub fn submit_answer(&mut self, raw: &str) -> Option<Feedback> {
        self.submit_answer_at(raw, Instant::now())
    }

    /// Check `raw` against the current word. Returns `None` when nothing was
    /// submitted: no active session, or blank input.
    pub fn submit_answer_at(&mut self, raw: &str, now: Instant) -> Option<Feedback> {
        if input::is_blank(raw) {
            return None;
        }
        let word = self.current_word()?.clone();

        let feedback = if input::is_match(raw, &word.target) {
            self.correct += 1;
            self.hint_len = 0;
            self.position += 1;
            if self.position == self.sequence.len() {
                self.phase = Phase::Complete;
                self.finished_at = Some(now);
            }
            Feedback::Correct
        } else {
            self.incorrect += 1;
            if !self.missed.iter().any(|m| m.source == word.source) {
                self.missed.push(word);
            }
            Feedback::Incorrect
        };

        self.input.clear();
        self.feedback = Some(feedback);
        Some(feedback)
    }

    /// Reveal one more character of the current target. Returns false once
    /// the whole word is showing or no session is running.
    pub fn request_hint(&mut self) -> bool {
        let Some(len) = self.current_word().map(WordPair::target_len) else {
            return false;
        };
        if self.hint_len >= len {
            return false;
        }
        self.hint_len += 1;
        self.hints_used += 1;
        true
    }

    /// The revealed prefix of the current target.
    pub fn hint_text(&self) -> String {
        self.current_word()
            .map(|w| w.target.chars().take(self.hint_len).collect())
            .unwrap_or_default()
    }

    /// Abandon the session and return to idle.
    pub fn end(&mut self) {
        *self = Self::idle();
    }

    pub fn take_feedback(&mut self) -> Option<Feedback> {
        self.feedback.take()
    }

    /// Whole seconds since the start, frozen once the session completes.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs_at(Instant::now())
    }

    pub fn elapsed_secs_at(&self, now: Instant) -> u64 {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.saturating_duration_since(start).as_secs(),
            (Some(start), None) => now.saturating_duration_since(start).as_secs(),
            _ => 0,
        }
    }

    pub fn words_per_minute(&self) -> u32 {
        self.words_per_minute_at(Instant::now())
    }

    pub fn words_per_minute_at(&self, now: Instant) -> u32 {
        scoring::words_per_minute(self.correct, self.elapsed_secs_at(now))
    }

    pub fn accuracy_percent(&self) -> u32 {
        scoring::accuracy_percent(self.correct, self.incorrect)
    }

    /// Fraction of the sequence answered correctly so far.
    pub fn progress(&self) -> f64 {
        if self.sequence.is_empty() {
            return 0.0;
        }
        self.position as f64 / self.sequence.len() as f64
    }
}
