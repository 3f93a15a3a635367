use std::path::PathBuf;

use remcal::{CalendarInfo, CalendarState, DayGrouping, Reminder};

use crate::store;

/// Demo embedder state. The app owns the reminder data and rebuilds the
/// day grouping whenever it changes; the widget owns mode and selection
/// inside `CalendarState`.
pub struct App {
    pub running: bool,
    pub calendar: CalendarState,
    pub calendars: Vec<CalendarInfo>,
    pub reminders: Vec<Reminder>,
    pub grouping: DayGrouping,
    pub file: Option<PathBuf>,
    pub status_message: Option<String>,
    pub show_help: bool,
}

impl App {
    pub fn new(
        calendars: Vec<CalendarInfo>,
        reminders: Vec<Reminder>,
        calendar: CalendarState,
        file: Option<PathBuf>,
    ) -> Self {
        let grouping = DayGrouping::build(&reminders);
        let mut app = Self {
            running: true,
            calendar,
            calendars,
            reminders,
            grouping,
            file,
            status_message: None,
            show_help: false,
        };
        app.status_message = Some(app.data_summary());
        app
    }

    fn data_summary(&self) -> String {
        format!(
            "{} reminders across {} calendars",
            self.reminders.len(),
            self.calendars.len()
        )
    }

    pub fn refresh_grouping(&mut self) {
        self.grouping = DayGrouping::build(&self.reminders);
    }

    /// Re-read the reminder file, if the app was started from one.
    pub fn reload(&mut self) {
        let Some(path) = self.file.clone() else {
            self.status_message = Some("No reminder file to reload".to_string());
            return;
        };
        match store::load(&path) {
            Ok((calendars, reminders)) => {
                self.calendars = calendars;
                self.reminders = reminders;
                self.refresh_grouping();
                self.status_message = Some(format!("Reloaded: {}", self.data_summary()));
            }
            Err(err) => {
                self.status_message = Some(format!("Reload failed: {err}"));
            }
        }
    }

    /// Mouse activation of a day cell.
    pub fn click(&mut self, column: u16, row: u16) {
        if let Some(date) = self.calendar.click(column, row) {
            self.status_message = Some(format!("Selected {}", date.format("%b %d, %Y")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use remcal::ViewMode;

    fn app() -> App {
        let (calendars, reminders) = store::sample();
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        App::new(calendars, reminders, CalendarState::new(today), None)
    }

    #[test]
    fn grouping_tracks_reminder_changes() {
        let mut app = app();
        let before = app.grouping.total();
        assert_eq!(before, app.reminders.len());

        app.reminders.pop();
        app.refresh_grouping();
        assert_eq!(app.grouping.total(), before - 1);
    }

    #[test]
    fn new_reports_a_data_summary() {
        let app = app();
        let msg = app.status_message.expect("summary message");
        assert!(msg.contains("reminders across 2 calendars"));
    }

    #[test]
    fn reload_without_a_file_reports_rather_than_fails() {
        let mut app = app();
        app.reload();
        assert_eq!(
            app.status_message.as_deref(),
            Some("No reminder file to reload")
        );
    }

    #[test]
    fn mode_is_readable_by_the_embedder() {
        let mut app = app();
        app.calendar.set_mode(ViewMode::Week);
        assert_eq!(app.calendar.mode, ViewMode::Week);
    }
}
