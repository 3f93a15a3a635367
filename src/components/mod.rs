pub mod calendar_view;
pub mod day_cell;
pub mod day_view;
pub mod month_view;
pub mod reminder_list;
pub mod status_bar;
pub mod week_view;

pub use calendar_view::{CalendarState, CalendarView, ViewMode};
pub use day_cell::{CellSize, DayCell};
pub use day_view::DayView;
pub use month_view::MonthView;
pub use reminder_list::ReminderList;
pub use status_bar::StatusBar;
pub use week_view::WeekView;
