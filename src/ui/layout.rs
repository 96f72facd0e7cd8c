use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥80 cols: scoreboard tiles in one row
    Narrow, // <80 cols: single-line scoreboard
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 80 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }

    pub fn scoreboard_height(&self) -> u16 {
        match self {
            LayoutTier::Wide => 4,
            LayoutTier::Narrow => 1,
        }
    }

    pub fn show_progress_bar(&self, height: u16) -> bool {
        height >= 18
    }
}

pub struct DrillLayout {
    pub scoreboard: Rect,
    pub word: Rect,
    pub input: Rect,
    pub progress: Option<Rect>,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl DrillLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);
        let show_progress = tier.show_progress_bar(area.height);

        let mut constraints = vec![
            Constraint::Length(tier.scoreboard_height()),
            Constraint::Min(5),
            Constraint::Length(3),
        ];
        if show_progress {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Length(1));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let input = centered_columns(60, rows[2]);
        if show_progress {
            Self {
                scoreboard: rows[0],
                word: rows[1],
                input,
                progress: Some(centered_columns(60, rows[3])),
                footer: rows[4],
                tier,
            }
        } else {
            Self {
                scoreboard: rows[0],
                word: rows[1],
                input,
                progress: None,
                footer: rows[3],
                tier,
            }
        }
    }
}

/// A horizontally centered slice of `area`, `percent_x` wide but never under 30 columns.
fn centered_columns(percent_x: u16, area: Rect) -> Rect {
    let requested = area.width.saturating_mul(percent_x.min(100)) / 100;
    let width = requested.max(30).min(area.width);
    let left = area.x.saturating_add((area.width - width) / 2);
    Rect::new(left, area.y, width, area.height)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 56;
    const MIN_POPUP_HEIGHT: u16 = 18;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
