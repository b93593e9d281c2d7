use std::iter::FusedIterator;
use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

pub const LINE_BREAK: char = '\n';

/// Characters a row may end on without splitting a word.
pub const BREAK_SAFE: &[char] = &[' ', '\t', '.', ',', ';', ':', '-', '?'];

pub fn is_break_safe(ch: char) -> bool {
    BREAK_SAFE.contains(&ch)
}

/// An inclusive `[start, end]` slice of the passage shown on one display line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Row {
    pub start: usize,
    pub end: usize,
}

impl Row {
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Rows always hold at least one character.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.start <= idx && idx <= self.end
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Lazy row iterator returned by [`wrap`]. Clone it before consuming, or call
/// `wrap` again, to replay the same rows.
#[derive(Clone, Debug)]
pub struct Rows<'a> {
    text: &'a [char],
    width: usize,
    left: usize,
}

/// Split `text` into rows of at most `width` characters, preferring to end each
/// row on a line break or break-safe character.
pub fn wrap(text: &[char], width: NonZeroUsize) -> Rows<'_> {
    Rows {
        text,
        width: width.get(),
        left: 0,
    }
}

impl Rows<'_> {
    fn boundary(&self) -> usize {
        let left = self.left;
        let hard = left.saturating_add(self.width - 1).min(self.text.len() - 1);
        let window = &self.text[left..=hard];

        // A line break inside the window always ends the row.
        if let Some(offset) = window.iter().position(|&c| c == LINE_BREAK) {
            return left + offset;
        }

        if hard == self.text.len() - 1 || is_break_safe(self.text[hard]) {
            return hard;
        }

        self.text[left..hard]
            .iter()
            .rposition(|&c| is_break_safe(c))
            .map(|offset| left + offset)
            .unwrap_or(hard)
    }
}

impl Iterator for Rows<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.left >= self.text.len() {
            return None;
        }
        let start = self.left;
        let end = self.boundary();
        self.left = end + 1;
        Some(Row { start, end })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len().saturating_sub(self.left);
        if remaining == 0 {
            (0, Some(0))
        } else {
            (remaining.div_ceil(self.width), Some(remaining))
        }
    }
}

impl FusedIterator for Rows<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn width(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn assert_partition(text: &[char], rows: &[Row]) {
        let mut next = 0;
        for row in rows {
            assert_eq!(row.start, next, "gap or overlap before {row:?}");
            assert!(row.end >= row.start);
            assert!(row.end < text.len());
            next = row.end + 1;
        }
        assert_eq!(next, text.len());
    }

    #[test]
    fn test_single_short_sentence() {
        let text = chars("cat.");
        let rows: Vec<Row> = wrap(&text, width(70)).collect();
        assert_eq!(rows, vec![Row { start: 0, end: 3 }]);
    }

    #[test]
    fn test_empty_text_yields_no_rows() {
        let text: Vec<char> = Vec::new();
        assert_eq!(wrap(&text, width(10)).count(), 0);
    }

    #[test]
    fn test_breaks_after_space() {
        // "the quick brown" with width 12: window "the quick br" ends mid-word,
        // so the row backs up to the space after "quick".
        let text = chars("the quick brown");
        let rows: Vec<Row> = wrap(&text, width(12)).collect();
        assert_eq!(rows[0], Row { start: 0, end: 9 });
        assert_eq!(rows[1], Row { start: 10, end: 14 });
    }

    #[test]
    fn test_keeps_hard_boundary_on_break_safe_char() {
        let text = chars("abcd,efgh");
        let rows: Vec<Row> = wrap(&text, width(5)).collect();
        assert_eq!(rows[0], Row { start: 0, end: 4 });
    }

    #[test]
    fn test_line_break_ends_row_early() {
        let text = chars("ab\ncd ef");
        let rows: Vec<Row> = wrap(&text, width(70)).collect();
        assert_eq!(rows, vec![Row { start: 0, end: 2 }, Row { start: 3, end: 7 }]);
    }

    #[test]
    fn test_line_break_wins_over_later_space() {
        // The space at 4 is closer to the hard boundary, but the line break at 1
        // takes priority.
        let text = chars("a\nbc de fgh");
        let rows: Vec<Row> = wrap(&text, width(6)).collect();
        assert_eq!(rows[0], Row { start: 0, end: 1 });
    }

    #[test]
    fn test_forced_break_without_break_safe_char() {
        let text = chars("abcdefghij");
        let rows: Vec<Row> = wrap(&text, width(4)).collect();
        assert_eq!(
            rows,
            vec![
                Row { start: 0, end: 3 },
                Row { start: 4, end: 7 },
                Row { start: 8, end: 9 },
            ]
        );
    }

    #[test]
    fn test_tab_is_one_position_and_break_safe() {
        let text = chars("ab\tcdef");
        let rows: Vec<Row> = wrap(&text, width(5)).collect();
        assert_eq!(rows[0], Row { start: 0, end: 2 });
        assert_eq!(rows[1], Row { start: 3, end: 6 });
    }

    const PASSAGES: [&str; 7] = [
        "Dorothy lived in the midst of the great Kansas prairies, with Uncle Henry.",
        "one\ntwo three\n\nfour-five;six:seven?eight",
        "abcdefghijklmnopqrstuvwxyz",
        "\n\n\n",
        "x",
        "tabs\tand\tspaces mixed in\t here.",
        "It was a bright cold day in April, and the clocks were striking thirteen.",
    ];

    #[test]
    fn test_rows_partition_passage() {
        for passage in PASSAGES {
            let text = chars(passage);
            for w in 1..=text.len() + 2 {
                let rows: Vec<Row> = wrap(&text, width(w)).collect();
                assert_partition(&text, &rows);
                for row in &rows {
                    assert!(row.len() <= w, "row {row:?} wider than {w}");
                }
            }
        }
    }

    #[test]
    fn test_rows_do_not_split_words() {
        for passage in PASSAGES {
            let text = chars(passage);
            for w in 1..=text.len() + 2 {
                let rows: Vec<Row> = wrap(&text, width(w)).collect();
                let Some((_, inner)) = rows.split_last() else {
                    continue;
                };
                for row in inner {
                    let last = text[row.end];
                    if is_break_safe(last) || last == LINE_BREAK {
                        continue;
                    }
                    // A forced break is only allowed when the whole window
                    // holds nothing to break on.
                    assert_eq!(row.len(), w, "short row {row:?} ends on {last:?}");
                    assert!(
                        !text[row.range()].iter().any(|&c| is_break_safe(c)),
                        "row {row:?} at width {w} split a word"
                    );
                }
            }
        }
    }

    #[test]
    fn test_huge_width_after_line_break() {
        let text = chars("ab\ncd");
        let rows: Vec<Row> = wrap(&text, width(usize::MAX)).collect();
        assert_eq!(rows, vec![Row { start: 0, end: 2 }, Row { start: 3, end: 5 }]);
    }

    #[test]
    fn test_wrap_is_restartable() {
        let text = chars("the rain fell steadily on the roof, making a soft drumming sound.");
        let rows = wrap(&text, width(20));
        let first: Vec<Row> = rows.clone().collect();
        let second: Vec<Row> = rows.collect();
        assert_eq!(first, second);
        assert_eq!(first, wrap(&text, width(20)).collect::<Vec<_>>());
    }

    #[test]
    fn test_row_contains() {
        let row = Row { start: 3, end: 5 };
        assert!(!row.contains(2));
        assert!(row.contains(3));
        assert!(row.contains(5));
        assert!(!row.contains(6));
        assert_eq!(row.len(), 3);
    }
}
