use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use ratatui::{
    layout::{Position, Rect},
    Frame,
};

use crate::calendar::{grid, DayGrouping};

use super::{DayView, MonthView, WeekView};

/// Which granularity the calendar renders at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Month,
    Week,
    Day,
}

/// State the embedder owns across renders: the display mode, the selected
/// date, what "today" is, the configured start of the week, and the hit
/// map of day cells from the most recent render.
///
/// The widget never looks at the reminder list itself; the embedder builds
/// a [`DayGrouping`] whenever its reminders change and passes it to
/// [`CalendarView::render`].
#[derive(Debug, Clone)]
pub struct CalendarState {
    pub mode: ViewMode,
    pub selected: NaiveDate,
    pub today: NaiveDate,
    pub week_start: Weekday,
    /// Scroll offset of the day view's reminder list.
    pub day_scroll: usize,
    cells: Vec<(Rect, NaiveDate)>,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            mode: ViewMode::Month,
            selected: today,
            today,
            week_start: Weekday::Sun,
            day_scroll: 0,
            cells: Vec::new(),
        }
    }

    pub fn with_mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
        self.day_scroll = 0;
    }

    pub fn next_day(&mut self) {
        let next = self.selected.succ_opt().unwrap_or(self.selected);
        self.select(next);
    }

    pub fn prev_day(&mut self) {
        let prev = self.selected.pred_opt().unwrap_or(self.selected);
        self.select(prev);
    }

    pub fn next_week(&mut self) {
        let next = self
            .selected
            .checked_add_days(Days::new(7))
            .unwrap_or(self.selected);
        self.select(next);
    }

    pub fn prev_week(&mut self) {
        let prev = self
            .selected
            .checked_sub_days(Days::new(7))
            .unwrap_or(self.selected);
        self.select(prev);
    }

    pub fn next_month(&mut self) {
        let (year, month) = match self.selected.month() {
            12 => (self.selected.year() + 1, 1),
            m => (self.selected.year(), m + 1),
        };
        if let Some(date) = grid::clamped_ymd(year, month, self.selected.day()) {
            self.select(date);
        }
    }

    pub fn prev_month(&mut self) {
        let (year, month) = match self.selected.month() {
            1 => (self.selected.year() - 1, 12),
            m => (self.selected.year(), m - 1),
        };
        if let Some(date) = grid::clamped_ymd(year, month, self.selected.day()) {
            self.select(date);
        }
    }

    pub fn go_to_today(&mut self) {
        self.today = Local::now().date_naive();
        self.select(self.today);
    }

    pub fn scroll_day_up(&mut self) {
        self.day_scroll = self.day_scroll.saturating_sub(1);
    }

    pub fn scroll_day_down(&mut self) {
        self.day_scroll = self.day_scroll.saturating_add(1);
    }

    /// The date of the day cell rendered at a terminal position, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<NaiveDate> {
        self.cells
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(column, row)))
            .map(|&(_, date)| date)
    }

    /// Select the day cell at a terminal position. This is the activation
    /// path for mouse clicks; returns the newly selected date on a hit.
    pub fn click(&mut self, column: u16, row: u16) -> Option<NaiveDate> {
        let date = self.hit(column, row)?;
        self.select(date);
        Some(date)
    }

    pub(crate) fn clear_cells(&mut self) {
        self.cells.clear();
    }

    pub(crate) fn push_cell(&mut self, area: Rect, date: NaiveDate) {
        self.cells.push((area, date));
    }
}

/// The composite widget: dispatches to the month grid, the week row, or
/// the single-day view depending on `state.mode`. The grouping is computed
/// once per data change by the embedder and only read here.
pub struct CalendarView;

impl CalendarView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &mut CalendarState,
        grouping: &DayGrouping,
    ) {
        state.clear_cells();
        match state.mode {
            ViewMode::Month => MonthView::render(frame, area, state, grouping),
            ViewMode::Week => WeekView::render(frame, area, state, grouping),
            ViewMode::Day => DayView::render(frame, area, state, grouping),
        }
    }
}
