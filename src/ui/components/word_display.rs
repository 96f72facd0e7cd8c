use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::catalog::WordPair;
use crate::session::drill::Feedback;
use crate::ui::theme::Theme;

pub struct WordDisplay<'a> {
    word: &'a WordPair,
    hint: &'a str,
    index: usize,
    total: usize,
    flash: Option<Feedback>,
    theme: &'a Theme,
}

impl<'a> WordDisplay<'a> {
    pub fn new(word: &'a WordPair, index: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            word,
            hint: "",
            index,
            total,
            flash: None,
            theme,
        }
    }

    /// The revealed prefix of the target.
    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = hint;
        self
    }

    pub fn flash(mut self, flash: Option<Feedback>) -> Self {
        self.flash = flash;
        self
    }
}

/// Revealed prefix followed by one `_` per hidden character, e.g. `bo__`.
pub fn masked_hint(target: &str, revealed: &str) -> String {
    let hidden = target
        .chars()
        .count()
        .saturating_sub(revealed.chars().count());
    format!("{revealed}{}", "_".repeat(hidden))
}

/// Turkish casing: dotted `i` capitalizes to `İ`, dotless `ı` to `I`.
fn turkish_upper(c: char) -> String {
    match c {
        'i' => "İ".to_string(),
        'ı' => "I".to_string(),
        other => other.to_uppercase().to_string(),
    }
}

/// Letter-spaced rendering so the word reads as a headline.
fn spaced(text: &str) -> String {
    text.chars()
        .map(turkish_upper)
        .collect::<Vec<_>>()
        .join(" ")
}

impl Widget for WordDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let word_color = colors.flash_or(self.flash, colors.word());

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.flash_or(self.flash, colors.border())))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let top_pad = inner.height.saturating_sub(5) / 2;
        let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();

        lines.push(Line::from(Span::styled(
            spaced(&self.word.source),
            Style::default().fg(word_color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        if !self.hint.is_empty() {
            lines.push(Line::from(Span::styled(
                masked_hint(&self.word.target, self.hint),
                Style::default().fg(colors.hint()),
            )));
        } else {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} / {}", self.index + 1, self.total),
            Style::default().fg(colors.dim()),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
