use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Warning,
    Success,
}

/// Passage progress drawn as a filled bar with a message on top.
pub struct StatusBar<'a> {
    pub ratio: f64,
    pub message: &'a str,
    pub tone: Tone,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(ratio: f64, message: &'a str, tone: Tone, theme: &'a Theme) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
            message,
            tone,
            theme,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let border = match self.tone {
            Tone::Normal => colors.border(),
            Tone::Warning => colors.warning(),
            Tone::Success => colors.success(),
        };
        let block = Block::bordered()
            .title(format!(" {:.0}% ", self.ratio * 100.0))
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let filled_width = (self.ratio * inner.width as f64) as u16;
        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled_width {
                Style::default().fg(colors.bg()).bg(colors.bar_filled())
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        let text_width = self.message.chars().count() as u16;
        let x = inner.x + inner.width.saturating_sub(text_width) / 2;
        buf.set_stringn(
            x,
            inner.y,
            self.message,
            inner.width as usize,
            Style::default(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_tracks_ratio() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        StatusBar::new(0.5, "", Tone::Normal, &theme).render(area, &mut buf);

        let colors = &theme.colors;
        assert_eq!(buf[(1, 1)].bg, colors.bar_filled());
        assert_eq!(buf[(5, 1)].bg, colors.bar_filled());
        assert_eq!(buf[(6, 1)].bg, colors.bar_empty());
    }

    #[test]
    fn test_ratio_is_clamped() {
        let theme = Theme::default();
        let bar = StatusBar::new(1.7, "done", Tone::Success, &theme);
        assert_eq!(bar.ratio, 1.0);
    }
}
