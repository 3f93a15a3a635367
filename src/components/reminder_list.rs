use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::calendar::Reminder;
use crate::theme;

pub struct ReminderList;

impl ReminderList {
    /// List items for a run of reminders, with a colored header line per
    /// calendar, a completion checkbox, and the due time when it fits.
    pub fn items(reminders: &[Reminder], width: usize) -> Vec<ListItem<'static>> {
        let mut current_calendar = String::new();
        let mut items: Vec<ListItem> = Vec::new();

        for reminder in reminders {
            // Calendar header
            if reminder.calendar_name != current_calendar {
                if !current_calendar.is_empty() {
                    items.push(ListItem::new(Line::from("")));
                }
                current_calendar = reminder.calendar_name.clone();
                items.push(ListItem::new(Line::from(Span::styled(
                    format!(" {}", current_calendar),
                    Style::default()
                        .fg(reminder.calendar_color)
                        .add_modifier(Modifier::BOLD),
                ))));
            }

            let checkbox = if reminder.is_completed { "[x]" } else { "[ ]" };
            let title_style = if reminder.is_completed {
                Style::default().add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };

            let mut spans = vec![
                Span::raw(format!(" {} ", checkbox)),
                Span::styled(
                    truncate(&reminder.title, width.saturating_sub(12)),
                    title_style,
                ),
            ];

            if reminder.due.is_some() {
                let due_str = format!(" {}", reminder.due_display());
                if spans.iter().map(|s| s.width()).sum::<usize>() + due_str.len() < width {
                    spans.push(Span::styled(due_str, theme::current().dim));
                }
            }

            items.push(ListItem::new(Line::from(spans)));
        }

        items
    }

    /// Standalone bordered list, for embedders that want the reminders of
    /// a day next to another view.
    pub fn render(frame: &mut Frame, area: Rect, title: &str, reminders: &[Reminder]) {
        let w = area.width as usize;

        let full_title = if w >= 25 {
            format!(" {} ({}) ", title, reminders.len())
        } else {
            format!(" {} ", title)
        };

        let block = Block::default()
            .title(full_title)
            .title_style(theme::current().header)
            .borders(Borders::ALL)
            .border_style(theme::current().border);

        if reminders.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new("No reminders").style(theme::current().dim);
            frame.render_widget(msg, inner);
            return;
        }

        let inner_w = area.width.saturating_sub(2) as usize;
        let list = List::new(Self::items(reminders, inner_w)).block(block);
        frame.render_widget(list, area);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{}...", cut)
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("water the plants", 20), "water the plants");
        assert_eq!(truncate("water the plants", 10), "water t...");
        assert_eq!(truncate("water", 2), "wa");
    }
}
