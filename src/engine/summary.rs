use std::time::Duration;

use crate::engine::exercise::Exercise;

/// Statistics derived from an exercise's outcome log.
#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseSummary {
    pub keystrokes: usize,
    pub errors: usize,
    pub accuracy: f64,
    pub elapsed: Duration,
    pub wpm: f64,
    pub longest_frustration: u32,
}

impl ExerciseSummary {
    pub fn from_exercise(exercise: &Exercise) -> Self {
        let outcomes = exercise.outcomes();
        let keystrokes = outcomes.len();
        let errors = outcomes.iter().filter(|o| o.was_error).count();
        let correct = keystrokes - errors;
        let elapsed: Duration = outcomes.iter().map(|o| o.elapsed).sum();

        let accuracy = if keystrokes == 0 {
            100.0
        } else {
            correct as f64 / keystrokes as f64 * 100.0
        };

        let secs = elapsed.as_secs_f64();
        let wpm = if secs < 0.1 {
            0.0
        } else {
            (correct as f64 / 5.0) / (secs / 60.0)
        };

        let mut streak = 0;
        let mut longest_frustration = 0;
        for outcome in outcomes {
            if outcome.was_error {
                streak += 1;
                longest_frustration = longest_frustration.max(streak);
            } else {
                streak = 0;
            }
        }

        Self {
            keystrokes,
            errors,
            accuracy,
            elapsed,
            wpm,
            longest_frustration,
        }
    }
}
