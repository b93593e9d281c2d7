pub mod exercise;
pub mod matcher;
pub mod passage;
pub mod summary;
pub mod wrap;

use crate::config::EngineSettings;
use crate::error::ExerciseError;

use exercise::Exercise;
use matcher::{Keystroke, Outcome};
use passage::Passage;
use wrap::Row;

/// Result of feeding one keystroke to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Press {
    pub outcome: Outcome,
    /// This keystroke brought the frustration streak up to the threshold.
    pub crossed_threshold: bool,
    /// This keystroke finished the passage.
    pub completed: bool,
}

/// A typing session: the passage, its display rows, and the exercise state.
pub struct Engine {
    passage: Passage,
    rows: Vec<Row>,
    exercise: Exercise,
    frustration_threshold: u32,
}

impl Engine {
    pub fn new(passage: Passage, settings: &EngineSettings) -> Self {
        let rows: Vec<Row> = wrap::wrap(passage.chars(), settings.row_width).collect();
        tracing::debug!(
            chars = passage.len(),
            rows = rows.len(),
            width = settings.row_width.get(),
            "wrapped passage"
        );
        let exercise = Exercise::new(passage.clone());
        Self {
            passage,
            rows,
            exercise,
            frustration_threshold: settings.frustration_threshold,
        }
    }

    pub fn passage(&self) -> &Passage {
        &self.passage
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    pub fn frustration_threshold(&self) -> u32 {
        self.frustration_threshold
    }

    /// Frustration has reached the threshold. A threshold of zero disables it.
    pub fn is_frustrated(&self) -> bool {
        self.frustration_threshold > 0 && self.exercise.frustration() >= self.frustration_threshold
    }

    /// Index of the row holding passage position `idx`.
    pub fn row_of(&self, idx: usize) -> Option<usize> {
        self.rows
            .binary_search_by(|row| {
                if row.end < idx {
                    std::cmp::Ordering::Less
                } else if row.start > idx {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .ok()
    }

    pub fn press(&mut self, keystroke: impl Into<Keystroke>) -> Result<Press, ExerciseError> {
        let outcome = matcher::evaluate(&mut self.exercise, keystroke).inspect_err(|_| {
            tracing::warn!("keystroke received after the exercise completed");
        })?;

        let crossed_threshold = outcome == Outcome::Incorrect
            && self.frustration_threshold > 0
            && self.exercise.frustration() == self.frustration_threshold;
        if crossed_threshold {
            tracing::info!(
                frustration = self.exercise.frustration(),
                index = self.exercise.index(),
                "frustration threshold reached"
            );
        }

        let completed = outcome == Outcome::Correct && self.exercise.is_complete();
        if completed {
            tracing::info!(
                keystrokes = self.exercise.outcomes().len(),
                "exercise complete"
            );
        }

        Ok(Press {
            outcome,
            crossed_threshold,
            completed,
        })
    }
}
