use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;

use super::ViewMode;

/// Visual size of a day cell: one text cell in the month grid, a short
/// block in the week row, a tall block in the day view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSize {
    Small,
    Medium,
    Large,
}

impl CellSize {
    pub fn for_mode(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Month => CellSize::Small,
            ViewMode::Week => CellSize::Medium,
            ViewMode::Day => CellSize::Large,
        }
    }

    pub fn height(self) -> u16 {
        match self {
            CellSize::Small => 1,
            CellSize::Medium => 3,
            CellSize::Large => 5,
        }
    }
}

/// One day of the calendar: the day number in a filled marker, with a dot
/// when the day's reminder bucket is non-empty. The views register each
/// cell's rect with `CalendarState` so mouse clicks map back to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub has_reminders: bool,
    pub selected: bool,
    pub today: bool,
    /// Adjacent-month filler day in the month grid.
    pub dimmed: bool,
    pub size: CellSize,
}

impl DayCell {
    pub fn style(&self) -> Style {
        let theme = theme::current();
        if self.today && self.selected {
            theme.today.add_modifier(Modifier::BOLD)
        } else if self.selected {
            theme.selected
        } else if self.today {
            theme.today
        } else if self.dimmed {
            theme.dim
        } else {
            Style::default()
        }
    }

    /// Column width of the compact form, including the marker column.
    pub const SMALL_WIDTH: u16 = 5;

    /// Compact one-line form used by the month grid: ` 15* `.
    pub fn span(&self) -> Span<'static> {
        let marker = if self.has_reminders { '*' } else { ' ' };
        Span::styled(
            format!(" {:>2}{} ", self.date.day(), marker),
            self.style(),
        )
    }

    /// Block form used by the week and day views: the day number centered
    /// in the cell with the reminder dot underneath. The cell lays itself
    /// out at its size's height even when the area is taller.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let height = self.size.height().min(area.height);
        let w = area.width as usize;
        let day = format!("{:^w$}", self.date.day(), w = w);
        let dot = if self.has_reminders { "\u{2022}" } else { " " };

        let mut lines: Vec<Line> = Vec::new();
        for _ in 0..height.saturating_sub(2) / 2 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(day, self.style())));
        if height >= 2 {
            lines.push(Line::from(Span::styled(
                format!("{:^w$}", dot, w = w),
                theme::current().dot,
            )));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn cell(selected: bool, today: bool, dimmed: bool) -> DayCell {
        DayCell {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            has_reminders: true,
            selected,
            today,
            dimmed,
            size: CellSize::Small,
        }
    }

    #[test]
    fn marker_reflects_reminder_bucket() {
        let with = cell(false, false, false);
        assert_eq!(with.span().content, "  5* ");
        let without = DayCell {
            has_reminders: false,
            ..with
        };
        assert_eq!(without.span().content, "  5  ");
    }

    #[test]
    fn selection_outranks_today_outranks_dim() {
        let theme = theme::current();
        assert_eq!(cell(true, false, false).style(), theme.selected);
        assert_eq!(cell(false, true, false).style(), theme.today);
        assert_eq!(cell(false, false, true).style(), theme.dim);
        assert_eq!(
            cell(true, true, false).style(),
            theme.today.add_modifier(Modifier::BOLD)
        );
        assert_eq!(cell(false, false, false).style(), Style::default());
    }

    #[test]
    fn cell_sizes_follow_view_mode() {
        assert_eq!(CellSize::for_mode(ViewMode::Month), CellSize::Small);
        assert_eq!(CellSize::for_mode(ViewMode::Week), CellSize::Medium);
        assert_eq!(CellSize::for_mode(ViewMode::Day), CellSize::Large);
    }
}
