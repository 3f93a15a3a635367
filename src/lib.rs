//! Embeddable terminal calendar widget for date-based reminders.
//!
//! The embedding application supplies calendars, reminders, and a view mode;
//! the widget groups reminders by day, renders a month grid, a week row, or
//! a single day, and tracks the selected date. See `CalendarView` for the
//! entry point and `CalendarState` for the state the embedder owns.

pub mod calendar;
pub mod components;
pub mod theme;

pub use calendar::{CalendarInfo, DayGrouping, GridError, Reminder};
pub use components::{CalendarState, CalendarView, ViewMode};
