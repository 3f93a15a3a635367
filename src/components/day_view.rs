use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::calendar::DayGrouping;
use crate::theme;

use super::{CalendarState, CellSize, DayCell, ReminderList};

const LARGE_CELL_WIDTH: u16 = 13;

pub struct DayView;

impl DayView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &mut CalendarState,
        grouping: &DayGrouping,
    ) {
        let date = state.selected;
        let reminders = grouping.on_day(date);
        let unscheduled = grouping.unscheduled();
        let w = area.width as usize;

        let title = if w >= 30 {
            format!(" {} ", date.format("%A, %B %d, %Y"))
        } else if w >= 18 {
            format!(" {} ", date.format("%b %d, %Y"))
        } else {
            format!(" {} ", date.format("%m/%d"))
        };

        let mut counts = Vec::new();
        if !reminders.is_empty() {
            let n = reminders.len();
            counts.push(format!("{} reminder{}", n, if n == 1 { "" } else { "s" }));
        }
        if !unscheduled.is_empty() {
            counts.push(format!("{} unscheduled", unscheduled.len()));
        }
        let count_str = if counts.is_empty() {
            String::new()
        } else {
            format!(" {} ", counts.join(", "))
        };

        let block = Block::default()
            .title(title)
            .title_style(theme::current().header)
            .title_bottom(Line::from(Span::styled(count_str, theme::current().dim)))
            .borders(Borders::ALL)
            .border_style(theme::current().border);

        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width < 5 || inner.height < 2 {
            return;
        }

        let cell_h = CellSize::Large.height().min(inner.height);
        let rows = Layout::vertical([
            Constraint::Length(cell_h),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        // The day itself, as one large cell centered in the row.
        let cell_w = LARGE_CELL_WIDTH.min(inner.width);
        let cell_area = Rect::new(
            inner.x + (inner.width - cell_w) / 2,
            rows[0].y,
            cell_w,
            rows[0].height,
        );
        let cell = DayCell {
            date,
            has_reminders: !reminders.is_empty(),
            selected: false,
            today: date == state.today,
            dimmed: false,
            size: CellSize::Large,
        };
        cell.render(frame, cell_area);
        state.push_cell(cell_area, date);

        let list_area = rows[2];
        if list_area.is_empty() {
            return;
        }

        if reminders.is_empty() && unscheduled.is_empty() {
            let msg = Paragraph::new("No reminders").style(theme::current().dim);
            frame.render_widget(msg, list_area);
            return;
        }

        let inner_w = inner.width as usize;
        let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        let mut items: Vec<ListItem> = Vec::new();

        if !reminders.is_empty() {
            items.extend(ReminderList::items(reminders, inner_w));
        }

        if !unscheduled.is_empty() {
            if !items.is_empty() {
                items.push(ListItem::new(Line::from("")));
            }
            items.push(ListItem::new(Line::from(Span::styled(
                "Unscheduled",
                section_style,
            ))));
            items.extend(ReminderList::items(unscheduled, inner_w));
        }

        // Apply scroll
        let visible: Vec<ListItem> = items.into_iter().skip(state.day_scroll).collect();
        frame.render_widget(List::new(visible), list_area);
    }
}
