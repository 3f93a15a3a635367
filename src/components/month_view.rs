use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::calendar::{grid, DayGrouping};
use crate::theme;

use super::{CalendarState, CellSize, DayCell};

pub struct MonthView;

impl MonthView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &mut CalendarState,
        grouping: &DayGrouping,
    ) {
        let title = format!(" {} ", state.selected.format("%B %Y"));
        let block = Block::default()
            .title(title)
            .title_style(theme::current().header)
            .borders(Borders::ALL)
            .border_style(theme::current().border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let days = match grid::month_grid(state.selected, state.week_start) {
            Ok(days) => days,
            Err(_) => {
                let msg = Paragraph::new("(no days in range)").style(theme::current().dim);
                frame.render_widget(msg, inner);
                return;
            }
        };

        // Header row from the grid's first week, so it follows the
        // configured week start.
        let header_cells: Vec<Span> = days[..7]
            .iter()
            .map(|d| {
                let name = d.format("%a").to_string();
                Span::styled(
                    format!("{:^width$}", name, width = DayCell::SMALL_WIDTH as usize),
                    theme::current().header,
                )
            })
            .collect();
        let header = Line::from(header_cells);

        let weeks: Vec<&[NaiveDate]> = days.chunks(7).collect();

        let mut constraints = vec![Constraint::Length(1)]; // header
        for _ in &weeks {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(0)); // fill remaining

        let rows = Layout::vertical(constraints).split(inner);

        frame.render_widget(Paragraph::new(header), rows[0]);

        let month = state.selected.month();
        for (i, week) in weeks.iter().enumerate() {
            let row = rows[i + 1];
            if row.height == 0 {
                break;
            }
            let mut cells: Vec<Span> = Vec::new();
            for (col, &date) in week.iter().enumerate() {
                let cell = DayCell {
                    date,
                    has_reminders: grouping.has_reminders(date),
                    selected: date == state.selected,
                    today: date == state.today,
                    dimmed: date.month() != month,
                    size: CellSize::Small,
                };
                cells.push(cell.span());

                let hit = Rect::new(
                    inner.x + col as u16 * DayCell::SMALL_WIDTH,
                    row.y,
                    DayCell::SMALL_WIDTH,
                    1,
                )
                .intersection(inner);
                if !hit.is_empty() {
                    state.push_cell(hit, date);
                }
            }
            frame.render_widget(Paragraph::new(Line::from(cells)), row);
        }
    }
}
