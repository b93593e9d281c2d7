//! Names for keys, used both as key-map lookup keys and for on-screen labels.

use std::borrow::Cow;

pub const TAB: char = '\t';
pub const ENTER: char = '\n';
pub const SPACE: char = ' ';

/// Physical key name for a character. Punctuation and whitespace get a
/// spelled-out name; everything else is named by the character itself.
pub fn key_name(ch: char) -> Cow<'static, str> {
    let name = match ch {
        '.' => "full_stop",
        ',' => "comma",
        ';' => "semicolon",
        ':' => "colon",
        '/' => "slash",
        '?' => "question_mark",
        '<' => "less_than_sign",
        '>' => "greater_than_sign",
        '-' => "minus",
        '\'' => "apostrophe",
        SPACE => "space",
        ENTER => "enter",
        TAB => "tab",
        other => return Cow::Owned(other.to_string()),
    };
    Cow::Borrowed(name)
}

/// Human-readable name for whitespace keys. Returns `""` for printable chars.
pub fn key_display_name(ch: char) -> &'static str {
    match ch {
        TAB => "Tab",
        ENTER => "Enter",
        SPACE => "Space",
        _ => "",
    }
}

/// Glyph drawn in the passage for characters without a visible form.
pub fn passage_glyph(ch: char) -> Option<&'static str> {
    match ch {
        ENTER => Some("\u{21b5}"), // ↵
        _ => None,
    }
}
