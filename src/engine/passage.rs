use std::fs;
use std::ops::Index;
use std::path::Path;
use std::sync::Arc;

use icu_normalizer::ComposingNormalizerBorrowed;
use rust_embed::Embed;

use crate::error::LoadError;

/// Substituted when the source holds no complete sentence within the budget.
pub const FALLBACK_TEXT: &str = "Invalid sample text.";

pub const SENTENCE_TERMINATOR: char = '.';

const BUNDLED_PASSAGE: &str = "default.txt";

#[derive(Embed)]
#[folder = "assets/passages/"]
struct PassageAssets;

/// The fixed text typed during a session. Cloning shares the same characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passage {
    chars: Arc<[char]>,
}

/// Maximum number of source characters considered for a given wpm ceiling.
pub fn char_budget(wpm_ceiling: u32) -> usize {
    wpm_ceiling as usize * 5 + 1
}

/// Cut `text` after the last sentence terminator within the character budget.
/// Returns `None` when no terminator falls inside the budget.
pub fn trim_to_budget(text: &str, wpm_ceiling: u32) -> Option<&str> {
    let end = text
        .char_indices()
        .nth(char_budget(wpm_ceiling))
        .map(|(byte, _)| byte)
        .unwrap_or(text.len());
    let window = &text[..end];
    window
        .rfind(SENTENCE_TERMINATOR)
        .map(|pos| &window[..pos + SENTENCE_TERMINATOR.len_utf8()])
}

/// NFC-normalize, unify line endings, and drop leading whitespace.
fn normalize(raw: &str) -> String {
    let composed = ComposingNormalizerBorrowed::new_nfc().normalize(raw);
    composed
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .trim_start()
        .to_string()
}

impl Passage {
    /// Build a passage from text as-is, without trimming.
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Build a passage from raw source text, applying normalization and the
    /// sentence-bounded length budget.
    pub fn from_source(raw: &str, wpm_ceiling: u32) -> Self {
        let normalized = normalize(raw);
        match trim_to_budget(&normalized, wpm_ceiling) {
            Some(text) => Self::new(text),
            None => {
                tracing::warn!(
                    budget = char_budget(wpm_ceiling),
                    "no sentence terminator within budget, using fallback passage"
                );
                Self::new(FALLBACK_TEXT)
            }
        }
    }

    pub fn load(path: &Path, wpm_ceiling: u32) -> Result<Self, LoadError> {
        let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let passage = Self::from_source(&raw, wpm_ceiling);
        tracing::info!(path = %path.display(), chars = passage.len(), "loaded passage");
        Ok(passage)
    }

    /// The sample passage compiled into the binary.
    pub fn bundled(wpm_ceiling: u32) -> Self {
        let Some(file) = PassageAssets::get(BUNDLED_PASSAGE) else {
            tracing::warn!("bundled passage missing, using fallback passage");
            return Self::new(FALLBACK_TEXT);
        };
        let raw = String::from_utf8_lossy(file.data.as_ref());
        let passage = Self::from_source(&raw, wpm_ceiling);
        tracing::info!(chars = passage.len(), "loaded bundled passage");
        passage
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).copied()
    }
}

impl Index<usize> for Passage {
    type Output = char;

    fn index(&self, idx: usize) -> &char {
        &self.chars[idx]
    }
}

impl std::fmt::Display for Passage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_char_budget() {
        assert_eq!(char_budget(1), 6);
        assert_eq!(char_budget(60), 301);
    }

    #[test]
    fn test_trim_to_last_terminator_within_budget() {
        // Budget for 2 wpm is 11 chars: "One. Two. T"
        let text = "One. Two. Three.";
        assert_eq!(trim_to_budget(text, 2), Some("One. Two."));
    }

    #[test]
    fn test_terminator_exactly_at_budget_edge() {
        // Budget 6 chars: "abcde." includes the terminator at position 5.
        assert_eq!(trim_to_budget("abcde.fgh", 1), Some("abcde."));
        // Terminator at position 6 is just outside.
        assert_eq!(trim_to_budget("abcdef.", 1), None);
    }

    #[test]
    fn test_short_text_keeps_whole_sentence() {
        assert_eq!(trim_to_budget("cat.", 60), Some("cat."));
    }

    #[test]
    fn test_no_terminator_uses_fallback() {
        let passage = Passage::from_source("no sentence ends here", 60);
        assert_eq!(passage.to_string(), FALLBACK_TEXT);
    }

    #[test]
    fn test_from_source_normalizes() {
        let passage = Passage::from_source("  \r\nfirst line\r\nsecond.", 60);
        assert_eq!(passage.to_string(), "first line\nsecond.");
    }

    #[test]
    fn test_from_source_composes_accents() {
        // "e" followed by a combining acute accent becomes a single "é".
        let passage = Passage::from_source("cafe\u{301}.", 60);
        assert_eq!(passage.len(), 5);
        assert_eq!(passage[3], '\u{e9}');
    }

    #[test]
    fn test_budget_counts_chars_not_bytes() {
        // 11-char budget; each "é" is two bytes.
        let passage = Passage::from_source("éé. éé. ééééé.", 2);
        assert_eq!(passage.to_string(), "éé. éé.");
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "The sky was grey. Everything was grey.").unwrap();
        let passage = Passage::load(file.path(), 60).unwrap();
        assert_eq!(passage.to_string(), "The sky was grey. Everything was grey.");
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = Passage::load(&path, 60).unwrap_err();
        match err {
            LoadError::Io { path: p, .. } => assert_eq!(p, path),
        }
    }

    #[test]
    fn test_bundled_passage_ends_on_sentence() {
        let passage = Passage::bundled(60);
        assert!(!passage.is_empty());
        assert!(passage.len() <= char_budget(60));
        assert_eq!(passage[passage.len() - 1], SENTENCE_TERMINATOR);
    }

    #[test]
    fn test_clone_shares_characters() {
        let a = Passage::new("shared.");
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.chars, &b.chars));
    }
}
