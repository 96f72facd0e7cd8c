use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::result::{SessionSummary, format_clock};
use crate::ui::theme::Theme;

/// End-of-session results: rating, stats grid and the words that were missed.
pub struct Summary<'a> {
    pub summary: &'a SessionSummary,
    pub theme: &'a Theme,
}

impl<'a> Summary<'a> {
    pub fn new(summary: &'a SessionSummary, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }
}

impl Widget for Summary<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let s = self.summary;
        let rating_color = colors.accuracy(s.accuracy);

        let block = Block::bordered()
            .title(format!(" {} \u{2022} Oturum Tamamlandı ", s.level.label()))
            .border_style(Style::default().fg(rating_color))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(7),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(inner);

        let title = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{} {}", s.rating.badge(), s.rating.title()),
                Style::default()
                    .fg(rating_color)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        let stat = |label: &'static str, value: String, color| {
            Line::from(vec![
                Span::styled(format!("  {label:<10}"), Style::default().fg(colors.fg())),
                Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ])
        };
        let stats = vec![
            stat("Doğru:", s.correct.to_string(), colors.success()),
            stat("Yanlış:", s.incorrect.to_string(), colors.warning()),
            stat("İsabet:", format!("{}%", s.accuracy), rating_color),
            stat("WPM:", s.wpm.to_string(), colors.accent()),
            stat("Süre:", format_clock(s.elapsed_secs), colors.accent_alt()),
            stat("İpucu:", s.hints_used.to_string(), colors.hint()),
            Line::from(Span::styled(
                format!(
                    "  {} kelime \u{2022} {}",
                    s.total_words,
                    s.finished_at.format("%Y-%m-%d %H:%M")
                ),
                Style::default().fg(colors.dim()),
            )),
        ];
        Paragraph::new(stats).render(layout[1], buf);

        if !s.missed.is_empty() {
            let mut lines = vec![Line::from(Span::styled(
                format!("  Tekrar et ({})", s.missed.len()),
                Style::default()
                    .fg(colors.error())
                    .add_modifier(Modifier::BOLD),
            ))];
            lines.extend(s.missed.iter().map(|w| {
                Line::from(vec![
                    Span::styled(format!("    {}", w.source), Style::default().fg(colors.fg())),
                    Span::styled(" \u{2192} ", Style::default().fg(colors.dim())),
                    Span::styled(w.target.as_str(), Style::default().fg(colors.accent())),
                ])
            }));
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .render(layout[2], buf);
        }

        Paragraph::new(Line::from(vec![
            Span::styled("  [r/Enter] Tekrar oyna  ", Style::default().fg(colors.accent())),
            Span::styled("[Esc/q/m] Menü", Style::default().fg(colors.accent())),
        ]))
        .render(layout[3], buf);
    }
}
