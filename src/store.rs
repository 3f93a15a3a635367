use std::path::{Path, PathBuf};

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use color_eyre::eyre::{eyre, Result, WrapErr};
use ratatui::style::Color;
use serde::Deserialize;

use remcal::calendar::{CalendarInfo, Reminder};
use remcal::theme;

/// TOML reminder source: the demo's stand-in for the embedder's reminder
/// store. Read-only; `r` in the app re-reads the same file.
///
/// ```toml
/// [[calendars]]
/// id = "personal"
/// title = "Personal"
/// color = "#bd93f9"
///
/// [[reminders]]
/// title = "Pay rent"
/// calendar = "personal"
/// due = "2026-08-01 09:00"    # or just "2026-08-01"
/// priority = 1
/// ```
#[derive(Debug, Deserialize)]
struct ReminderFile {
    #[serde(default)]
    calendars: Vec<CalendarEntry>,
    #[serde(default)]
    reminders: Vec<ReminderEntry>,
}

#[derive(Debug, Deserialize)]
struct CalendarEntry {
    id: String,
    title: String,
    color: Option<String>,
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReminderEntry {
    id: Option<String>,
    title: String,
    calendar: Option<String>,
    due: Option<String>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    priority: u8,
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("remcal").join("reminders.toml"))
}

pub fn load(path: &Path) -> Result<(Vec<CalendarInfo>, Vec<Reminder>)> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    parse(&content).wrap_err_with(|| format!("invalid reminder file {}", path.display()))
}

fn parse(content: &str) -> Result<(Vec<CalendarInfo>, Vec<Reminder>)> {
    let file: ReminderFile = toml::from_str(content)?;

    let calendars: Vec<CalendarInfo> = file
        .calendars
        .into_iter()
        .map(|entry| CalendarInfo {
            color: entry
                .color
                .as_deref()
                .and_then(theme::parse_color)
                .unwrap_or(Color::White),
            id: entry.id,
            title: entry.title,
            source: entry.source.unwrap_or_default(),
        })
        .collect();

    let mut reminders = Vec::with_capacity(file.reminders.len());
    for (index, entry) in file.reminders.into_iter().enumerate() {
        let due = entry
            .due
            .as_deref()
            .map(parse_due)
            .transpose()
            .wrap_err_with(|| format!("reminder {:?} has an invalid due date", entry.title))?;

        let (calendar_name, calendar_color) = entry
            .calendar
            .as_deref()
            .and_then(|id| calendars.iter().find(|c| c.id == id || c.title == id))
            .map(|c| (c.title.clone(), c.color))
            .unwrap_or_else(|| ("Reminders".to_string(), Color::White));

        reminders.push(Reminder {
            id: entry.id.unwrap_or_else(|| format!("reminder-{index}")),
            title: entry.title,
            is_completed: entry.completed,
            due,
            calendar_name,
            calendar_color,
            priority: entry.priority,
        });
    }

    Ok((calendars, reminders))
}

/// Accepts "YYYY-MM-DD HH:MM" or a bare "YYYY-MM-DD" (taken as midnight).
fn parse_due(s: &str) -> Result<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").or_else(|_| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN))
    })?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| eyre!("{s} does not exist in the local time zone"))
}

/// Built-in data shown when no reminder file exists, so the widget has
/// something to draw on first launch.
pub fn sample() -> (Vec<CalendarInfo>, Vec<Reminder>) {
    let personal = CalendarInfo {
        id: "personal".to_string(),
        title: "Personal".to_string(),
        color: Color::Cyan,
        source: "Sample".to_string(),
    };
    let work = CalendarInfo {
        id: "work".to_string(),
        title: "Work".to_string(),
        color: Color::Green,
        source: "Sample".to_string(),
    };

    let today = Local::now().date_naive();
    let at = |date: NaiveDate, hour: u32, minute: u32| {
        date.and_hms_opt(hour, minute, 0)
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
    };
    let shift = |days: i64| {
        if days >= 0 {
            today.checked_add_days(Days::new(days as u64))
        } else {
            today.checked_sub_days(Days::new(-days as u64))
        }
        .unwrap_or(today)
    };

    let entries = [
        ("sample-1", "Stand-up notes", &work, shift(0), 9, 0, false),
        ("sample-2", "Water the plants", &personal, shift(0), 18, 30, false),
        ("sample-3", "Book dentist", &personal, shift(1), 10, 0, false),
        ("sample-4", "Quarterly report", &work, shift(3), 15, 0, false),
        ("sample-5", "Return library books", &personal, shift(-1), 12, 0, true),
        ("sample-6", "Renew passport", &personal, shift(14), 9, 30, false),
    ];

    let mut reminders: Vec<Reminder> = entries
        .iter()
        .map(|&(id, title, cal, date, hour, minute, done)| Reminder {
            id: id.to_string(),
            title: title.to_string(),
            is_completed: done,
            due: at(date, hour, minute),
            calendar_name: cal.title.clone(),
            calendar_color: cal.color,
            priority: 0,
        })
        .collect();

    // One undated reminder so the unscheduled section has content.
    reminders.push(Reminder {
        id: "sample-7".to_string(),
        title: "Clean out the garage".to_string(),
        is_completed: false,
        due: None,
        calendar_name: personal.title.clone(),
        calendar_color: personal.color,
        priority: 0,
    });

    (vec![personal, work], reminders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    const SAMPLE: &str = r##"
        [[calendars]]
        id = "personal"
        title = "Personal"
        color = "#bd93f9"

        [[calendars]]
        id = "work"
        title = "Work"
        color = "green"

        [[reminders]]
        title = "Pay rent"
        calendar = "personal"
        due = "2026-08-01 09:00"
        priority = 1

        [[reminders]]
        title = "All-day errand"
        calendar = "work"
        due = "2026-08-02"

        [[reminders]]
        title = "Someday"
        completed = true
    "##;

    #[test]
    fn parses_calendars_and_reminders() {
        let (calendars, reminders) = parse(SAMPLE).unwrap();
        assert_eq!(calendars.len(), 2);
        assert_eq!(calendars[0].color, Color::Rgb(189, 147, 249));
        assert_eq!(reminders.len(), 3);

        let rent = &reminders[0];
        assert_eq!(rent.calendar_name, "Personal");
        assert_eq!(rent.priority, 1);
        let due = rent.due.expect("dated");
        assert_eq!(due.date_naive(), NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
        assert_eq!(due.hour(), 9);

        // Bare dates land at midnight of that day.
        let errand = &reminders[1];
        assert_eq!(
            errand.due.expect("dated").date_naive(),
            NaiveDate::from_ymd_opt(2026, 8, 2).unwrap()
        );

        // No due date, no calendar: kept, with fallbacks.
        let someday = &reminders[2];
        assert!(someday.due.is_none());
        assert!(someday.is_completed);
        assert_eq!(someday.calendar_name, "Reminders");
        assert_eq!(someday.id, "reminder-2");
    }

    #[test]
    fn bad_due_date_is_an_error_naming_the_reminder() {
        let err = parse(
            r#"
            [[reminders]]
            title = "Broken"
            due = "next tuesday"
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("Broken"));
    }

    #[test]
    fn sample_data_has_dated_and_undated_reminders() {
        let (calendars, reminders) = sample();
        assert_eq!(calendars.len(), 2);
        assert!(reminders.iter().any(|r| r.due.is_some()));
        assert!(reminders.iter().any(|r| r.due.is_none()));
    }
}
