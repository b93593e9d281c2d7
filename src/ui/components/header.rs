use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::ui::theme::Theme;

pub const TITLE: &str = "TUI Typing Tutor";

pub struct Header<'a> {
    pub subtitle: &'a str,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(subtitle: &'a str, theme: &'a Theme) -> Self {
        Self { subtitle, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let style = Style::default().fg(colors.header_fg()).bg(colors.header_bg());
        buf.set_style(area, style);

        let title = if self.subtitle.is_empty() {
            TITLE.to_string()
        } else {
            format!("{TITLE} | {}", self.subtitle)
        };
        let width = title.chars().count() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        buf.set_stringn(
            x,
            area.y,
            &title,
            area.width as usize,
            style.add_modifier(Modifier::BOLD),
        );
    }
}
