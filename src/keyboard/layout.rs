use std::fmt;

/// Identifies a physical key by ISO row name and 1-based column, e.g. `ad01`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyId(String);

impl KeyId {
    pub fn new(row: &str, col: usize) -> Self {
        Self(format!("{row}{:02}", col + 1))
    }

    /// Keys outside the letter block, such as `space` or `enter`.
    pub fn named(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyRow {
    /// ISO row name: `ad` top, `ac` home, `ab` bottom.
    pub name: String,
    pub keys: Vec<char>,
    pub shifted: Vec<char>,
}

impl KeyRow {
    fn new(name: &str, keys: &str, shifted: &str) -> Self {
        let keys: Vec<char> = keys.chars().collect();
        let shifted: Vec<char> = shifted.chars().collect();
        debug_assert_eq!(keys.len(), shifted.len());
        Self {
            name: name.to_string(),
            keys,
            shifted,
        }
    }

    pub fn key_id(&self, col: usize) -> KeyId {
        KeyId::new(&self.name, col)
    }
}

/// A physical key in a layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Key {
    pub id: KeyId,
    pub col: usize,
    pub glyph: char,
    pub shifted: char,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardLayout {
    pub name: String,
    pub rows: Vec<KeyRow>,
}

/// Names accepted by [`KeyboardLayout::by_name`].
pub const LAYOUT_NAMES: &[&str] = &["tarmak2-dhm", "colemak-dh", "qwerty"];

impl KeyboardLayout {
    /// Tarmak step 2 towards Colemak-DH (E, T, and G moved).
    pub fn tarmak2_dhm() -> Self {
        Self {
            name: "Tarmak2-DHm".to_string(),
            rows: vec![
                KeyRow::new("ad", "qwfrbyuiop", "QWFRBYUIOP"),
                KeyRow::new("ac", "asdtgmnel;", "ASDTGMNEL:"),
                KeyRow::new("ab", "zxcvbkh,./", "ZXCVBKH<>?"),
            ],
        }
    }

    pub fn colemak_dh() -> Self {
        Self {
            name: "Colemak-DH".to_string(),
            rows: vec![
                KeyRow::new("ad", "qwfpbjluy;", "QWFPBJLUY:"),
                KeyRow::new("ac", "arstgmneio", "ARSTGMNEIO"),
                KeyRow::new("ab", "zxcdvkh,./", "ZXCDVKH<>?"),
            ],
        }
    }

    pub fn qwerty() -> Self {
        Self {
            name: "QWERTY".to_string(),
            rows: vec![
                KeyRow::new("ad", "qwertyuiop", "QWERTYUIOP"),
                KeyRow::new("ac", "asdfghjkl;", "ASDFGHJKL:"),
                KeyRow::new("ab", "zxcvbnm,./", "ZXCVBNM<>?"),
            ],
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "tarmak2-dhm" | "tarmak2" => Some(Self::tarmak2_dhm()),
            "colemak-dh" | "colemak" => Some(Self::colemak_dh()),
            "qwerty" => Some(Self::qwerty()),
            _ => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.rows.iter().flat_map(|row| {
            row.keys
                .iter()
                .zip(&row.shifted)
                .enumerate()
                .map(move |(col, (&glyph, &shifted))| Key {
                    id: row.key_id(col),
                    col,
                    glyph,
                    shifted,
                })
        })
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::tarmak2_dhm()
    }
}
