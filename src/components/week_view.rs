use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::calendar::{grid, DayGrouping};
use crate::theme;

use super::{CalendarState, CellSize, DayCell};

pub struct WeekView;

impl WeekView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &mut CalendarState,
        grouping: &DayGrouping,
    ) {
        let week = grid::week_of(state.selected, state.week_start);

        let title = match &week {
            Ok(days) => format!(" Week of {} ", days[0].format("%b %d, %Y")),
            Err(_) => " Week ".to_string(),
        };
        let block = Block::default()
            .title(title)
            .title_style(theme::current().header)
            .borders(Borders::ALL)
            .border_style(theme::current().border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let days = match week {
            Ok(days) => days,
            Err(_) => {
                let msg = Paragraph::new("(no days in range)").style(theme::current().dim);
                frame.render_widget(msg, inner);
                return;
            }
        };

        if inner.width < 7 || inner.height < 2 {
            return;
        }

        let col_w = (inner.width / 7).max(1);
        let mut col_constraints = Vec::with_capacity(8);
        for _ in 0..7 {
            col_constraints.push(Constraint::Length(col_w));
        }
        col_constraints.push(Constraint::Min(0)); // absorb remainder
        let cols = Layout::horizontal(col_constraints).split(inner);

        let size = CellSize::for_mode(state.mode);
        let cell_h = size.height().min(inner.height.saturating_sub(1));
        let rows = Layout::vertical([
            Constraint::Length(1), // day names
            Constraint::Length(cell_h),
            Constraint::Min(0),
        ])
        .split(inner);

        for (col, &date) in days.iter().enumerate() {
            let col_area = cols[col];

            let name_style = if date == state.today {
                theme::current().today
            } else {
                theme::current().header
            };
            let name = date.format("%a").to_string();
            let label = Paragraph::new(Line::from(Span::styled(
                format!("{:^width$}", name, width = col_w as usize),
                name_style,
            )));
            frame.render_widget(label, col_area.intersection(rows[0]));

            let cell_area = col_area.intersection(rows[1]);
            if cell_area.is_empty() {
                continue;
            }
            let cell = DayCell {
                date,
                has_reminders: grouping.has_reminders(date),
                selected: date == state.selected,
                today: date == state.today,
                dimmed: false,
                size,
            };
            cell.render(frame, cell_area);
            state.push_cell(cell_area, date);
        }
    }
}
