use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::engine::Engine;
use crate::engine::summary::ExerciseSummary;
use crate::keyboard::display;
use crate::ui::theme::Theme;

pub struct StatsSidebar<'a> {
    engine: &'a Engine,
    theme: &'a Theme,
}

impl<'a> StatsSidebar<'a> {
    pub fn new(engine: &'a Engine, theme: &'a Theme) -> Self {
        Self { engine, theme }
    }
}

fn target_label(ch: char) -> String {
    match display::key_display_name(ch) {
        "" => format!("'{ch}'"),
        name => name.to_string(),
    }
}

impl Widget for StatsSidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let exercise = self.engine.exercise();
        let summary = ExerciseSummary::from_exercise(exercise);

        let label = Style::default().fg(colors.text_pending());
        let value = Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD);

        let frustration_style = if self.engine.is_frustrated() {
            Style::default().fg(colors.warning()).add_modifier(Modifier::BOLD)
        } else {
            value
        };
        let threshold = match self.engine.frustration_threshold() {
            0 => "-".to_string(),
            n => n.to_string(),
        };
        let target = exercise
            .target()
            .map(target_label)
            .unwrap_or_else(|_| "done".to_string());

        let row = |name: &'static str, text: String, style: Style| {
            Line::from(vec![
                Span::styled(format!("{name:<13}"), label),
                Span::styled(text, style),
            ])
        };

        let lines = vec![
            row("Target", target, value),
            row("Progress", format!("{:.0}%", exercise.progress() * 100.0), value),
            row("WPM", format!("{:.0}", summary.wpm), value),
            row("Accuracy", format!("{:.1}%", summary.accuracy), value),
            row("Keystrokes", summary.keystrokes.to_string(), value),
            row("Errors", summary.errors.to_string(), value),
            row(
                "Frustration",
                format!("{}/{threshold}", exercise.frustration()),
                frustration_style,
            ),
            row(
                "Elapsed",
                format!("{:.1}s", summary.elapsed.as_secs_f64()),
                value,
            ),
        ];

        let block = Block::bordered()
            .title(" Stats ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_label() {
        assert_eq!(target_label('a'), "'a'");
        assert_eq!(target_label(' '), "Space");
        assert_eq!(target_label('\n'), "Enter");
    }
}
