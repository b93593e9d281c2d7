use std::collections::HashMap;

use crate::engine::matcher::Keystroke;
use crate::keyboard::display::{self, ENTER, SPACE};
use crate::keyboard::layout::{KeyId, KeyboardLayout};

/// What a physical key press means: the key to highlight and the keystroke to
/// hand to the matcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub key_id: KeyId,
    pub keystroke: Keystroke,
}

/// Lookup table from physical key name (`"a"`, `"A"`, `"full_stop"`,
/// `"enter"`, ...) to binding. Shifted and unshifted names of a key share its
/// key id.
#[derive(Clone, Debug)]
pub struct KeyMap {
    bindings: HashMap<String, Binding>,
    keys_by_char: HashMap<char, KeyId>,
}

impl KeyMap {
    pub fn from_layout(layout: &KeyboardLayout) -> Self {
        let mut map = Self {
            bindings: HashMap::new(),
            keys_by_char: HashMap::new(),
        };

        for key in layout.keys() {
            map.bind(key.glyph, key.id.clone());
            if key.shifted != key.glyph {
                map.bind(key.shifted, key.id);
            }
        }
        map.bind(SPACE, KeyId::named("space"));
        map.bind(ENTER, KeyId::named("enter"));

        tracing::debug!(layout = %layout.name, bindings = map.bindings.len(), "built key map");
        map
    }

    fn bind(&mut self, ch: char, key_id: KeyId) {
        self.keys_by_char.insert(ch, key_id.clone());
        self.bindings.insert(
            display::key_name(ch).into_owned(),
            Binding {
                key_id,
                keystroke: Keystroke::from(ch),
            },
        );
    }

    pub fn resolve(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// The key that produces `ch`, for highlighting the next target.
    pub fn key_for(&self, ch: char) -> Option<&KeyId> {
        self.keys_by_char.get(&ch)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
