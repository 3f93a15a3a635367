pub mod calendar;
pub mod grid;
pub mod group;
pub mod reminder;

pub use calendar::CalendarInfo;
pub use grid::GridError;
pub use group::DayGrouping;
pub use reminder::Reminder;
