use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::catalog::level::Level;
use crate::ui::theme::Theme;

pub const SLOGANS: &[&str] = &[
    "Kelime hazineni genişletmeye hazır mısın?",
    "Her gün yeni bir İngilizce kelime öğren.",
    "İngilizce reflekslerini güçlendir.",
    "Pratik yap, kelimeleri kalıcı hale getir.",
    "Kelimeler senin süper gücün olsun!",
    "Her kelime yeni bir kapı açar.",
    "Düşün Türkçe, yaz İngilizce.",
    "İngilizce öğrenmek hiç bu kadar kolay olmamıştı!",
];

/// Level picker shown on the start screen.
pub struct LevelMenu<'a> {
    pub levels: Vec<Level>,
    pub selected: usize,
    pub slogan: &'a str,
    pub notice: Option<String>,
    pub theme: &'a Theme,
}

impl<'a> LevelMenu<'a> {
    pub fn new(theme: &'a Theme, initial: Level) -> Self {
        let levels = Level::ALL.to_vec();
        let selected = levels.iter().position(|&l| l == initial).unwrap_or(0);
        Self {
            levels,
            selected,
            slogan: SLOGANS[0],
            notice: None,
            theme,
        }
    }

    pub fn selected_level(&self) -> Level {
        self.levels[self.selected]
    }

    pub fn select(&mut self, level: Level) {
        if let Some(idx) = self.levels.iter().position(|&l| l == level) {
            self.selected = idx;
        }
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.levels.len();
    }

    pub fn prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = self.levels.len() - 1;
        }
    }
}

fn difficulty_dots(level: Level) -> String {
    (1..=4)
        .map(|i| if i <= level.difficulty() { "\u{25cf}" } else { "\u{25cb}" })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Widget for &LevelMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let title_lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "En",
                    Style::default()
                        .fg(colors.accent_alt())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "TR",
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "R E F L E K S   İ N G İ L İ Z C E",
                Style::default().fg(colors.dim()),
            )),
            Line::from(""),
        ];
        Paragraph::new(title_lines)
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        Paragraph::new(Line::from(Span::styled(
            self.slogan,
            Style::default().fg(colors.fg()).add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center)
        .render(layout[1], buf);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                self.levels
                    .iter()
                    .map(|_| Constraint::Ratio(1, self.levels.len() as u32))
                    .collect::<Vec<_>>(),
            )
            .split(layout[2]);

        for (i, level) in self.levels.iter().enumerate() {
            let is_selected = i == self.selected;
            let card_color = if is_selected { colors.accent() } else { colors.dim() };
            let lines = vec![
                Line::from(Span::styled(
                    level.label(),
                    Style::default()
                        .fg(if is_selected { colors.accent() } else { colors.fg() })
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(level.description(), Style::default().fg(card_color))),
                Line::from(Span::styled(
                    difficulty_dots(*level),
                    Style::default().fg(if is_selected {
                        colors.accent()
                    } else {
                        colors.accent_alt()
                    }),
                )),
            ];
            let card = Block::bordered().border_style(Style::default().fg(card_color));
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(card)
                .render(cards[i], buf);
        }

        if let Some(ref notice) = self.notice {
            Paragraph::new(Line::from(Span::styled(
                notice.as_str(),
                Style::default().fg(colors.error()),
            )))
            .alignment(Alignment::Center)
            .render(layout[3], buf);
        }

        let start = format!(
            "[Enter] BAŞLA \u{2192} {}",
            self.selected_level().label()
        );
        Paragraph::new(Line::from(Span::styled(
            start,
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(layout[4], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_requested_level() {
        let theme = Theme::default();
        let menu = LevelMenu::new(&theme, Level::B1);
        assert_eq!(menu.selected_level(), Level::B1);
    }

    #[test]
    fn navigation_wraps() {
        let theme = Theme::default();
        let mut menu = LevelMenu::new(&theme, Level::A1);
        menu.prev();
        assert_eq!(menu.selected_level(), Level::Mixed);
        menu.next();
        assert_eq!(menu.selected_level(), Level::A1);
        menu.next();
        assert_eq!(menu.selected_level(), Level::A2);
    }

    #[test]
    fn select_jumps_to_level() {
        let theme = Theme::default();
        let mut menu = LevelMenu::new(&theme, Level::A1);
        menu.select(Level::B2);
        assert_eq!(menu.selected, 3);
    }

    #[test]
    fn dots_show_difficulty() {
        assert_eq!(difficulty_dots(Level::A2), "\u{25cf} \u{25cf} \u{25cb} \u{25cb}");
        assert_eq!(difficulty_dots(Level::B2), "\u{25cf} \u{25cf} \u{25cf} \u{25cf}");
    }
}
