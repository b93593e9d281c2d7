use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::keyboard::finger::{self, Finger, FingerAssignment, Hand};
use crate::keyboard::layout::{KeyId, KeyboardLayout};
use crate::ui::theme::Theme;

/// Rows needed by the diagram, borders included.
pub const KEYBOARD_HEIGHT: u16 = 6;

const KEY_WIDTH: u16 = 5;
const ROW_OFFSETS: &[u16] = &[1, 3, 5];
const SPACE_LABEL: &str = "[          space          ]";

pub struct KeyboardDiagram<'a> {
    pub layout: &'a KeyboardLayout,
    /// The key pressed most recently.
    pub hit_key: Option<&'a KeyId>,
    /// The key that produces the current target character.
    pub next_key: Option<&'a KeyId>,
    pub theme: &'a Theme,
}

impl<'a> KeyboardDiagram<'a> {
    pub fn new(
        layout: &'a KeyboardLayout,
        hit_key: Option<&'a KeyId>,
        next_key: Option<&'a KeyId>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            layout,
            hit_key,
            next_key,
            theme,
        }
    }

    fn key_style(&self, id: &KeyId, assignment: FingerAssignment) -> Style {
        let colors = &self.theme.colors;
        if self.hit_key == Some(id) {
            Style::default()
                .fg(colors.bg())
                .bg(colors.key_hit())
                .add_modifier(Modifier::BOLD)
        } else if self.next_key == Some(id) {
            Style::default().fg(colors.bg()).bg(colors.key_next())
        } else {
            Style::default().fg(colors.fg()).bg(finger_color(assignment))
        }
    }
}

fn finger_color(assignment: FingerAssignment) -> Color {
    match (assignment.hand, assignment.finger) {
        (Hand::Left, Finger::Pinky) => Color::Rgb(180, 100, 100),
        (Hand::Left, Finger::Ring) => Color::Rgb(180, 140, 80),
        (Hand::Left, Finger::Middle) => Color::Rgb(120, 160, 80),
        (Hand::Left, Finger::Index) => Color::Rgb(80, 140, 180),
        (Hand::Right, Finger::Index) => Color::Rgb(100, 140, 200),
        (Hand::Right, Finger::Middle) => Color::Rgb(120, 160, 80),
        (Hand::Right, Finger::Ring) => Color::Rgb(180, 140, 80),
        (Hand::Right, Finger::Pinky) => Color::Rgb(180, 100, 100),
        _ => Color::Rgb(120, 120, 120),
    }
}

impl Widget for KeyboardDiagram<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.layout.name))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width < 30 {
            return;
        }

        for (row_idx, row) in self.layout.rows.iter().enumerate() {
            let y = inner.y + row_idx as u16;
            if y >= inner.y + inner.height {
                break;
            }

            let offset = ROW_OFFSETS.get(row_idx).copied().unwrap_or(0);

            for (col, &glyph) in row.keys.iter().enumerate() {
                let x = inner.x + offset + col as u16 * KEY_WIDTH;
                if x + KEY_WIDTH > inner.x + inner.width {
                    break;
                }
                let id = row.key_id(col);
                let style = self.key_style(&id, finger::finger_for_column(col));
                buf.set_string(x, y, format!("[ {glyph} ]"), style);
            }
        }

        let space_y = inner.y + self.layout.rows.len() as u16;
        let space_x = inner.x + ROW_OFFSETS[1] + 2 * KEY_WIDTH;
        if space_y < inner.y + inner.height
            && space_x + SPACE_LABEL.len() as u16 <= inner.x + inner.width
        {
            let style = self.key_style(&KeyId::named("space"), finger::space_finger());
            buf.set_string(space_x, space_y, SPACE_LABEL, style);
        }
    }
}
