use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::Theme;

pub struct ProgressBar<'a> {
    pub label: String,
    pub ratio: f64,
    pub theme: &'a Theme,
}

impl<'a> ProgressBar<'a> {
    pub fn new(label: &str, ratio: f64, theme: &'a Theme) -> Self {
        Self {
            label: label.to_string(),
            ratio: ratio.clamp(0.0, 1.0),
            theme,
        }
    }

    fn filled_width(&self, width: u16) -> u16 {
        (self.ratio * width as f64).round() as u16
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.label))
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let filled = self.filled_width(inner.width);
        for x in inner.x..inner.x + inner.width {
            let style = if x < inner.x + filled {
                Style::default().fg(colors.bg()).bg(colors.bar_filled())
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, inner.y)].set_style(style);
        }

        let label = format!("{:.0}%", self.ratio * 100.0);
        let label_x = inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
        buf.set_string(label_x, inner.y, &label, Style::default().fg(colors.fg()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_clamped() {
        let theme = Theme::default();
        assert_eq!(ProgressBar::new("x", 1.7, &theme).ratio, 1.0);
        assert_eq!(ProgressBar::new("x", -0.2, &theme).ratio, 0.0);
    }

    #[test]
    fn filled_width_rounds() {
        let theme = Theme::default();
        assert_eq!(ProgressBar::new("x", 0.5, &theme).filled_width(10), 5);
        assert_eq!(ProgressBar::new("x", 1.0 / 3.0, &theme).filled_width(10), 3);
        assert_eq!(ProgressBar::new("x", 0.0, &theme).filled_width(10), 0);
    }

    #[test]
    fn renders_percentage_label() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        ProgressBar::new("İlerleme", 0.25, &theme).render(area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("25%"));
    }
}
