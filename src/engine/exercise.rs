use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crate::engine::passage::Passage;
use crate::error::ExerciseError;

/// Passage characters that are never offered as typing targets.
pub const SKIPPED_TARGETS: &[char] = &['\t'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExerciseState {
    InProgress,
    Complete,
}

/// One resolved keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutcomeRecord {
    /// Time since the previous keystroke; zero for the first one.
    pub elapsed: Duration,
    pub was_error: bool,
    /// Passage index the keystroke was aimed at.
    pub position: usize,
    pub typed: char,
}

/// Per-session typing state. Only the keystroke matcher mutates it.
#[derive(Clone, Debug)]
pub struct Exercise {
    pub(super) text: Passage,
    pub(super) index: usize,
    pub(super) outcomes: Vec<OutcomeRecord>,
    pub(super) frustration: u32,
    pub(super) last_keystroke: Option<Instant>,
}

impl Exercise {
    pub fn new(text: Passage) -> Self {
        let mut exercise = Self {
            text,
            index: 0,
            outcomes: Vec::new(),
            frustration: 0,
            last_keystroke: None,
        };
        exercise.skip_unpresentable();
        exercise
    }

    pub fn text(&self) -> &Passage {
        &self.text
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn outcomes(&self) -> &[OutcomeRecord] {
        &self.outcomes
    }

    pub fn frustration(&self) -> u32 {
        self.frustration
    }

    /// The character the user must type next.
    pub fn target(&self) -> Result<char, ExerciseError> {
        self.text.get(self.index).ok_or(ExerciseError::EndOfExercise)
    }

    pub fn state(&self) -> ExerciseState {
        if self.index >= self.text.len() {
            ExerciseState::Complete
        } else {
            ExerciseState::InProgress
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == ExerciseState::Complete
    }

    pub fn progress(&self) -> f64 {
        if self.text.is_empty() {
            return 0.0;
        }
        self.index as f64 / self.text.len() as f64
    }

    /// Positions that received at least one incorrect keystroke.
    pub fn missed_positions(&self) -> BTreeSet<usize> {
        self.outcomes
            .iter()
            .filter(|o| o.was_error)
            .map(|o| o.position)
            .collect()
    }

    pub(super) fn skip_unpresentable(&mut self) {
        while let Some(ch) = self.text.get(self.index) {
            if !SKIPPED_TARGETS.contains(&ch) {
                break;
            }
            self.index += 1;
        }
    }

    pub(super) fn record(&mut self, typed: char, was_error: bool, now: Instant) {
        let elapsed = self
            .last_keystroke
            .map(|prev| now.saturating_duration_since(prev))
            .unwrap_or_default();
        self.last_keystroke = Some(now);
        self.outcomes.push(OutcomeRecord {
            elapsed,
            was_error,
            position: self.index,
            typed,
        });
    }
}
