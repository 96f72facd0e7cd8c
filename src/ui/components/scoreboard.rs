use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::result::format_clock;
use crate::ui::theme::Theme;

/// Live numbers for the running session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreboardStats {
    pub elapsed_secs: u64,
    pub correct: u32,
    pub incorrect: u32,
    pub wpm: u32,
    pub accuracy: u32,
}

pub struct Scoreboard<'a> {
    stats: ScoreboardStats,
    compact: bool,
    theme: &'a Theme,
}

impl<'a> Scoreboard<'a> {
    pub fn new(stats: ScoreboardStats, theme: &'a Theme) -> Self {
        Self {
            stats,
            compact: false,
            theme,
        }
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    fn tiles(&self) -> [(&'static str, String, Color); 5] {
        let colors = &self.theme.colors;
        [
            ("SÜRE", format_clock(self.stats.elapsed_secs), colors.accent_alt()),
            ("DOĞRU", self.stats.correct.to_string(), colors.success()),
            ("YANLIŞ", self.stats.incorrect.to_string(), colors.warning()),
            ("WPM", self.stats.wpm.to_string(), colors.accent()),
            (
                "İSABET",
                format!("{}%", self.stats.accuracy),
                colors.accuracy(self.stats.accuracy),
            ),
        ]
    }
}

impl Widget for Scoreboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let tiles = self.tiles();

        if self.compact {
            let mut spans = Vec::new();
            for (label, value, color) in tiles {
                spans.push(Span::styled(format!(" {label} "), Style::default().fg(colors.dim())));
                spans.push(Span::styled(
                    format!("{value} "),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ));
            }
            Paragraph::new(Line::from(spans))
                .style(Style::default().bg(colors.header_bg()))
                .render(area, buf);
            return;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(tiles.iter().map(|_| Constraint::Ratio(1, 5)).collect::<Vec<_>>())
            .split(area);

        for (i, (label, value, color)) in tiles.into_iter().enumerate() {
            let block = Block::bordered()
                .title(Line::from(format!(" {label} ")).alignment(Alignment::Center))
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(colors.bg()));
            Paragraph::new(Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .block(block)
            .render(columns[i], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> ScoreboardStats {
        ScoreboardStats {
            elapsed_secs: 75,
            correct: 12,
            incorrect: 3,
            wpm: 10,
            accuracy: 80,
        }
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn wide_scoreboard_shows_all_tiles() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 100, 4);
        let mut buf = Buffer::empty(area);
        Scoreboard::new(stats(), &theme).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("1:15"));
        assert!(text.contains("12"));
        assert!(text.contains("80%"));
        assert!(text.contains("WPM"));
    }

    #[test]
    fn compact_scoreboard_fits_one_line() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 78, 1);
        let mut buf = Buffer::empty(area);
        Scoreboard::new(stats(), &theme).compact(true).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("1:15"));
        assert!(text.contains("WPM"));
    }
}
