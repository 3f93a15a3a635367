use chrono::{DateTime, Local};
use ratatui::style::Color;

/// A reminder item as supplied by the embedding application. The widget
/// never mutates reminders; completion toggles and edits belong to the
/// embedder's store.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub is_completed: bool,
    pub due: Option<DateTime<Local>>,
    pub calendar_name: String,
    pub calendar_color: Color,
    pub priority: u8,
}

impl Reminder {
    /// The local calendar date this reminder is due on, if it has a due
    /// datetime. This is the grouping key for the day views.
    pub fn due_day(&self) -> Option<chrono::NaiveDate> {
        self.due.map(|dt| dt.date_naive())
    }

    pub fn due_display(&self) -> String {
        match self.due {
            Some(dt) => dt.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        }
    }
}
