use std::borrow::Cow;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::engine::Engine;
use crate::engine::matcher::{Keystroke, Outcome};
use crate::engine::summary::ExerciseSummary;
use crate::keyboard::display::{self, ENTER};
use crate::keyboard::keymap::KeyMap;
use crate::keyboard::layout::{KeyId, KeyboardLayout};
use crate::ui::components::status_bar::Tone;
use crate::ui::theme::Theme;

/// UI-side state around an [`Engine`]. Presentation is derived from the
/// engine on every frame; nothing authoritative is stored here.
pub struct App {
    pub engine: Engine,
    pub layout: KeyboardLayout,
    pub keymap: KeyMap,
    pub theme: Theme,
    pub hit_key: Option<KeyId>,
    pub last_outcome: Option<Outcome>,
    pub should_quit: bool,
}

/// Physical key name for a terminal key code, if it is one the engine accepts.
fn physical_key_name(code: KeyCode) -> Option<Cow<'static, str>> {
    match code {
        KeyCode::Enter => Some(display::key_name(ENTER)),
        KeyCode::Char(ch) => Some(display::key_name(ch)),
        _ => None,
    }
}

impl App {
    pub fn new(engine: Engine, layout: KeyboardLayout, theme: Theme) -> Self {
        let keymap = KeyMap::from_layout(&layout);
        Self {
            engine,
            layout,
            keymap,
            theme,
            hit_key: None,
            last_outcome: None,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ignore Release and Repeat so held keys do not count as extra input.
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Esc
            || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }

        if self.engine.exercise().is_complete() {
            return;
        }

        // Ctrl and Alt chords are shortcuts, not typing.
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return;
        }

        let Some(name) = physical_key_name(key.code) else {
            return;
        };

        let keystroke = match self.keymap.resolve(&name) {
            Some(binding) => {
                self.hit_key = Some(binding.key_id.clone());
                binding.keystroke
            }
            None => {
                self.hit_key = None;
                match key.code {
                    KeyCode::Char(ch) => Keystroke::from(ch),
                    _ => return,
                }
            }
        };

        self.press(keystroke);
    }

    fn press(&mut self, keystroke: Keystroke) {
        match self.engine.press(keystroke) {
            Ok(press) => self.last_outcome = Some(press.outcome),
            Err(err) => tracing::warn!(error = %err, "dropped keystroke"),
        }
    }

    /// The key producing the current target, for the keyboard diagram.
    pub fn next_key(&self) -> Option<&KeyId> {
        let target = self.engine.exercise().target().ok()?;
        self.keymap.key_for(target)
    }

    pub fn status(&self) -> (String, Tone) {
        let exercise = self.engine.exercise();
        if exercise.is_complete() {
            let summary = ExerciseSummary::from_exercise(exercise);
            return (
                format!(
                    "Done! {:.0} wpm, {:.1}% accuracy. Press Esc to quit.",
                    summary.wpm, summary.accuracy
                ),
                Tone::Success,
            );
        }
        if self.engine.is_frustrated() {
            return (
                format!(
                    "{} misses in a row. Maybe take a short break?",
                    exercise.frustration()
                ),
                Tone::Warning,
            );
        }
        (
            "Type the highlighted character. Esc quits.".to_string(),
            Tone::Normal,
        )
    }
}
