use std::time::Instant;

use crate::engine::exercise::Exercise;
use crate::error::ExerciseError;

/// A single keystroke delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keystroke {
    Char(char),
    Enter,
    Space,
}

impl Keystroke {
    /// The passage character this keystroke is compared against.
    pub fn as_char(self) -> char {
        match self {
            Keystroke::Char(ch) => ch,
            Keystroke::Enter => '\n',
            Keystroke::Space => ' ',
        }
    }
}

impl From<char> for Keystroke {
    fn from(ch: char) -> Self {
        match ch {
            '\n' => Keystroke::Enter,
            ' ' => Keystroke::Space,
            other => Keystroke::Char(other),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

pub fn evaluate(
    exercise: &mut Exercise,
    keystroke: impl Into<Keystroke>,
) -> Result<Outcome, ExerciseError> {
    evaluate_at(exercise, keystroke, Instant::now())
}

/// Like [`evaluate`], with the keystroke timestamp supplied by the caller.
pub fn evaluate_at(
    exercise: &mut Exercise,
    keystroke: impl Into<Keystroke>,
    now: Instant,
) -> Result<Outcome, ExerciseError> {
    let expected = exercise.target()?;
    let typed = keystroke.into().as_char();

    if typed == expected {
        exercise.record(typed, false, now);
        exercise.frustration = 0;
        exercise.index += 1;
        exercise.skip_unpresentable();
        Ok(Outcome::Correct)
    } else {
        exercise.record(typed, true, now);
        exercise.frustration += 1;
        Ok(Outcome::Incorrect)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::engine::exercise::ExerciseState;
    use crate::engine::passage::Passage;

    fn exercise(text: &str) -> Exercise {
        Exercise::new(Passage::new(text))
    }

    #[test]
    fn test_cat_scenario() {
        let mut ex = exercise("cat.");
        let outcomes: Vec<Outcome> = ['c', 'a', 't', 'x', '.']
            .into_iter()
            .map(|ch| evaluate(&mut ex, ch).unwrap())
            .collect();
        assert_eq!(
            outcomes,
            vec![
                Outcome::Correct,
                Outcome::Correct,
                Outcome::Correct,
                Outcome::Incorrect,
                Outcome::Correct,
            ]
        );
        assert_eq!(ex.index(), 4);
        assert_eq!(ex.frustration(), 0);
        assert_eq!(ex.state(), ExerciseState::Complete);
        assert_eq!(ex.outcomes().len(), 5);
    }

    #[test]
    fn test_correct_advances_incorrect_holds() {
        let mut ex = exercise("ab");
        assert_eq!(evaluate(&mut ex, 'b'), Ok(Outcome::Incorrect));
        assert_eq!(ex.index(), 0);
        assert_eq!(evaluate(&mut ex, 'a'), Ok(Outcome::Correct));
        assert_eq!(ex.index(), 1);
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let mut ex = exercise("A");
        assert_eq!(evaluate(&mut ex, 'a'), Ok(Outcome::Incorrect));
        assert_eq!(evaluate(&mut ex, 'A'), Ok(Outcome::Correct));
    }

    #[test]
    fn test_frustration_counts_streak_and_resets() {
        let mut ex = exercise("ok");
        for expected in 1..=4 {
            evaluate(&mut ex, 'z').unwrap();
            assert_eq!(ex.frustration(), expected);
        }
        evaluate(&mut ex, 'o').unwrap();
        assert_eq!(ex.frustration(), 0);
    }

    #[test]
    fn test_index_is_monotonic() {
        let mut ex = exercise("the cat sat.");
        let keys = "thx e caat sst.";
        let mut last = ex.index();
        for ch in keys.chars() {
            if ex.is_complete() {
                break;
            }
            evaluate(&mut ex, ch).unwrap();
            assert!(ex.index() >= last);
            last = ex.index();
        }
    }

    #[test]
    fn test_evaluate_after_complete_fails() {
        let mut ex = exercise("a");
        evaluate(&mut ex, 'a').unwrap();
        assert_eq!(evaluate(&mut ex, 'a'), Err(ExerciseError::EndOfExercise));
        assert_eq!(ex.outcomes().len(), 1);
    }

    #[test]
    fn test_tab_after_correct_key_is_skipped() {
        let mut ex = exercise("a\t\tb");
        evaluate(&mut ex, 'a').unwrap();
        assert_eq!(ex.index(), 3);
        assert_eq!(ex.target(), Ok('b'));
    }

    #[test]
    fn test_trailing_tab_completes_exercise() {
        let mut ex = exercise("a\t");
        evaluate(&mut ex, 'a').unwrap();
        assert!(ex.is_complete());
    }

    #[test]
    fn test_named_keystrokes() {
        let mut ex = exercise("a b\nc");
        evaluate(&mut ex, 'a').unwrap();
        assert_eq!(evaluate(&mut ex, Keystroke::Space), Ok(Outcome::Correct));
        evaluate(&mut ex, 'b').unwrap();
        assert_eq!(evaluate(&mut ex, Keystroke::Space), Ok(Outcome::Incorrect));
        assert_eq!(evaluate(&mut ex, Keystroke::Enter), Ok(Outcome::Correct));
        assert_eq!(ex.target(), Ok('c'));
    }

    #[test]
    fn test_outcome_timing_and_positions() {
        let mut ex = exercise("hi");
        let t0 = Instant::now();
        evaluate_at(&mut ex, 'h', t0).unwrap();
        evaluate_at(&mut ex, 'u', t0 + Duration::from_millis(300)).unwrap();
        evaluate_at(&mut ex, 'i', t0 + Duration::from_millis(450)).unwrap();

        let outcomes = ex.outcomes();
        assert_eq!(outcomes[0].elapsed, Duration::ZERO);
        assert_eq!(outcomes[1].elapsed, Duration::from_millis(300));
        assert_eq!(outcomes[2].elapsed, Duration::from_millis(150));
        assert!(outcomes[1].was_error);
        assert_eq!(outcomes[1].position, 1);
        assert_eq!(outcomes[2].position, 1);
        assert!(ex.missed_positions().contains(&1));
    }

    #[test]
    fn test_keystroke_from_char() {
        assert_eq!(Keystroke::from(' '), Keystroke::Space);
        assert_eq!(Keystroke::from('\n'), Keystroke::Enter);
        assert_eq!(Keystroke::from('q'), Keystroke::Char('q'));
        assert_eq!(Keystroke::Enter.as_char(), '\n');
    }
}
