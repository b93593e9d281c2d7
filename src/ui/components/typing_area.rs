use std::collections::BTreeSet;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::engine::Engine;
use crate::engine::wrap::Row;
use crate::keyboard::display::{self, TAB};
use crate::ui::theme::Theme;

const TAB_WIDTH: usize = 4;

pub struct TypingArea<'a> {
    engine: &'a Engine,
    theme: &'a Theme,
}

impl<'a> TypingArea<'a> {
    pub fn new(engine: &'a Engine, theme: &'a Theme) -> Self {
        Self { engine, theme }
    }
}

/// A render token maps a single passage character to its display representation.
#[derive(Debug)]
struct RenderToken {
    idx: usize,
    display: String,
}

/// Expand one row into render tokens. Tabs take one passage position but
/// several columns.
fn build_row_tokens(text: &[char], row: Row) -> Vec<RenderToken> {
    let mut tokens = Vec::with_capacity(row.len());
    let mut col = 0usize;

    for idx in row.range() {
        let ch = text[idx];
        let display = if ch == TAB {
            let tab_width = TAB_WIDTH - (col % TAB_WIDTH);
            col += tab_width;
            let mut display = String::from("\u{2192}"); // →
            for _ in 1..tab_width {
                display.push('\u{00b7}'); // ·
            }
            display
        } else if let Some(glyph) = display::passage_glyph(ch) {
            col += 1;
            glyph.to_string()
        } else {
            col += 1;
            ch.to_string()
        };
        tokens.push(RenderToken { idx, display });
    }

    tokens
}

/// First row to draw so the cursor row sits in the upper third of the view.
fn first_visible_row(cursor_row: usize, total: usize, height: usize) -> usize {
    if total <= height {
        return 0;
    }
    cursor_row
        .saturating_sub(height / 3)
        .min(total - height)
}

impl Widget for TypingArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let exercise = self.engine.exercise();
        let text = exercise.text().chars();
        let cursor = exercise.index();
        let missed: BTreeSet<usize> = exercise.missed_positions();
        let struggling = exercise.frustration() > 0;

        let block = Block::bordered()
            .title(" Passage ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);

        let rows = self.engine.rows();
        let cursor_row = self
            .engine
            .row_of(cursor)
            .unwrap_or(rows.len().saturating_sub(1));
        let first = first_visible_row(cursor_row, rows.len(), inner.height as usize);

        let lines: Vec<Line> = rows
            .iter()
            .skip(first)
            .take(inner.height as usize)
            .map(|&row| {
                let spans: Vec<Span> = build_row_tokens(text, row)
                    .into_iter()
                    .map(|token| {
                        let style = if token.idx < cursor {
                            if missed.contains(&token.idx) {
                                Style::default().fg(colors.text_corrected())
                            } else {
                                Style::default().fg(colors.text_correct())
                            }
                        } else if token.idx == cursor {
                            if struggling {
                                Style::default()
                                    .fg(colors.text_incorrect())
                                    .bg(colors.text_incorrect_bg())
                                    .add_modifier(Modifier::UNDERLINED)
                            } else {
                                Style::default()
                                    .fg(colors.text_cursor_fg())
                                    .bg(colors.text_cursor_bg())
                            }
                        } else {
                            Style::default().fg(colors.text_pending())
                        };
                        Span::styled(token.display, style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
