use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::ui::components::keyboard_diagram::KEYBOARD_HEIGHT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥100 cols: typing area + sidebar
    Medium, // 60-99 cols: full-width typing area
    Narrow, // <60 cols: typing area only, no keyboard
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 100 {
            LayoutTier::Wide
        } else if area.width >= 60 {
            LayoutTier::Medium
        } else {
            LayoutTier::Narrow
        }
    }

    pub fn show_keyboard(&self, height: u16) -> bool {
        height >= 20 && *self != LayoutTier::Narrow
    }

    pub fn show_sidebar(&self) -> bool {
        *self == LayoutTier::Wide
    }
}

pub struct AppLayout {
    pub header: Rect,
    pub typing: Rect,
    pub sidebar: Option<Rect>,
    pub keyboard: Option<Rect>,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);
        let show_keyboard = tier.show_keyboard(area.height);

        let keyboard_height = if show_keyboard { KEYBOARD_HEIGHT } else { 0 };
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(keyboard_height),
                Constraint::Length(3),
            ])
            .split(area);

        let (typing, sidebar) = if tier.show_sidebar() {
            let horizontal = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
                .split(vertical[1]);
            (horizontal[0], Some(horizontal[1]))
        } else {
            (vertical[1], None)
        };

        Self {
            header: vertical[0],
            typing,
            sidebar,
            keyboard: show_keyboard.then_some(vertical[2]),
            footer: vertical[3],
            tier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_has_sidebar_and_keyboard() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.tier, LayoutTier::Wide);
        assert!(layout.sidebar.is_some());
        assert_eq!(layout.keyboard.map(|k| k.height), Some(KEYBOARD_HEIGHT));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.footer.height, 3);
    }

    #[test]
    fn test_narrow_layout_drops_keyboard() {
        let layout = AppLayout::new(Rect::new(0, 0, 50, 40));
        assert_eq!(layout.tier, LayoutTier::Narrow);
        assert!(layout.sidebar.is_none());
        assert!(layout.keyboard.is_none());
    }

    #[test]
    fn test_short_terminal_drops_keyboard() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 15));
        assert_eq!(layout.tier, LayoutTier::Medium);
        assert!(layout.keyboard.is_none());
    }
}
