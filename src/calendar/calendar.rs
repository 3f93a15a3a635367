use ratatui::style::Color;

/// One calendar the embedder has loaded. Reminders refer to calendars by
/// name; the widget only uses the color and title for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarInfo {
    pub id: String,
    pub title: String,
    pub color: Color,
    pub source: String,
}
