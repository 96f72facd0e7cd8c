use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::drill::Feedback;
use crate::ui::theme::Theme;

const PLACEHOLDER: &str = "İngilizcesini yaz...";

pub struct AnswerInput<'a> {
    text: &'a str,
    flash: Option<Feedback>,
    theme: &'a Theme,
}

impl<'a> AnswerInput<'a> {
    pub fn new(text: &'a str, flash: Option<Feedback>, theme: &'a Theme) -> Self {
        Self { text, flash, theme }
    }
}

/// Keep the tail of `text` that fits in `width` columns, leaving one for the cursor.
fn visible_tail(text: &str, width: usize) -> &str {
    let room = width.saturating_sub(1);
    let count = text.chars().count();
    if count <= room {
        return text;
    }
    let skip = count - room;
    let byte = text.char_indices().nth(skip).map_or(text.len(), |(i, _)| i);
    &text[byte..]
}

impl Widget for AnswerInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let border = colors.flash_or(self.flash, colors.accent());

        let block = Block::bordered()
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.text.is_empty() {
            Line::from(vec![
                Span::styled(" ", Style::default().bg(colors.fg())),
                Span::styled(PLACEHOLDER, Style::default().fg(colors.dim())),
            ])
        } else {
            Line::from(vec![
                Span::styled(
                    visible_tail(self.text, inner.width as usize),
                    Style::default()
                        .fg(colors.flash_or(self.flash, colors.fg()))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ", Style::default().bg(colors.fg())),
            ])
        };

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(visible_tail("book", 10), "book");
    }

    #[test]
    fn long_text_keeps_the_end() {
        assert_eq!(visible_tail("responsibility", 6), "ility");
    }

    #[test]
    fn tail_respects_char_boundaries() {
        assert_eq!(visible_tail("çağdaş", 4), "daş");
    }

    #[test]
    fn zero_width_shows_nothing() {
        assert_eq!(visible_tail("abc", 0), "");
    }
}
