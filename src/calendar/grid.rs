use chrono::{Datelike, Days, NaiveDate, Weekday};
use thiserror::Error;

/// Raised when chrono cannot represent the month or week boundaries around
/// a reference date (only possible at the far edges of its supported
/// range). Callers decide how to degrade; the bundled views render an
/// explicit placeholder instead of a blank area.
#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
pub enum GridError {
    #[error("cannot resolve month boundaries around {0}")]
    MonthBounds(NaiveDate),
    #[error("cannot resolve week boundaries around {0}")]
    WeekBounds(NaiveDate),
}

/// Every day shown in a month grid for the month containing `reference`:
/// from the start of the week containing the 1st through the end of the
/// week containing the last day of the month. The result is always whole
/// weeks in ascending order.
pub fn month_grid(
    reference: NaiveDate,
    week_start: Weekday,
) -> Result<Vec<NaiveDate>, GridError> {
    let err = GridError::MonthBounds(reference);
    let first = reference.with_day(1).ok_or(err)?;
    let last = first
        .with_day(days_in_month(first.year(), first.month()))
        .ok_or(err)?;

    let grid_start = start_of_week(first, week_start).ok_or(err)?;
    let grid_end = start_of_week(last, week_start)
        .and_then(|d| d.checked_add_days(Days::new(6)))
        .ok_or(err)?;

    let mut days = Vec::with_capacity(42);
    let mut day = grid_start;
    loop {
        days.push(day);
        if day == grid_end {
            break;
        }
        day = day.succ_opt().ok_or(err)?;
    }
    Ok(days)
}

/// The seven days of the week containing `reference`, starting on
/// `week_start`.
pub fn week_of(
    reference: NaiveDate,
    week_start: Weekday,
) -> Result<[NaiveDate; 7], GridError> {
    let err = GridError::WeekBounds(reference);
    let start = start_of_week(reference, week_start).ok_or(err)?;
    let mut days = [start; 7];
    for i in 1..7 {
        days[i] = days[i - 1].succ_opt().ok_or(err)?;
    }
    Ok(days)
}

fn start_of_week(date: NaiveDate, week_start: Weekday) -> Option<NaiveDate> {
    let offset = date.weekday().days_since(week_start);
    date.checked_sub_days(Days::new(u64::from(offset)))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// `from_ymd` with the day clamped to the target month's length, for
/// stepping between months while keeping the day of month where possible
/// (Jan 31 -> Feb 28/29).
pub fn clamped_ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day.min(days_in_month(year, month)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday::{Mon, Sat, Sun};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn march_2024_sunday_start() {
        // March 2024 starts on a Friday and ends on a Sunday, so the grid
        // runs from the Sunday before the 1st through the Saturday after
        // the 31st.
        let days = month_grid(ymd(2024, 3, 15), Sun).unwrap();
        assert_eq!(days.len(), 42);
        assert_eq!(days[0], ymd(2024, 2, 25));
        assert_eq!(*days.last().unwrap(), ymd(2024, 4, 6));
    }

    #[test]
    fn march_2024_monday_start() {
        let days = month_grid(ymd(2024, 3, 1), Mon).unwrap();
        assert_eq!(days.len(), 35);
        assert_eq!(days[0], ymd(2024, 2, 26));
        assert_eq!(*days.last().unwrap(), ymd(2024, 3, 31));
    }

    #[test]
    fn minimal_grid_is_exactly_the_month() {
        // February 2015 starts on a Sunday and spans exactly four weeks.
        let days = month_grid(ymd(2015, 2, 14), Sun).unwrap();
        assert_eq!(days.len(), 28);
        assert_eq!(days[0], ymd(2015, 2, 1));
        assert_eq!(*days.last().unwrap(), ymd(2015, 2, 28));
    }

    #[test]
    fn grid_is_whole_consecutive_weeks_containing_the_month() {
        for month in 1..=12 {
            let days = month_grid(ymd(2024, month, 1), Sun).unwrap();
            assert!(!days.is_empty());
            assert_eq!(days.len() % 7, 0);
            assert_eq!(days[0].weekday(), Sun);
            assert_eq!(days.last().unwrap().weekday(), Sat);
            for day in 1..=days_in_month(2024, month) {
                assert!(days.contains(&ymd(2024, month, day)));
            }
            for pair in days.windows(2) {
                assert_eq!(pair[0].succ_opt(), Some(pair[1]));
            }
        }
    }

    #[test]
    fn same_month_any_reference_day_same_grid() {
        let from_first = month_grid(ymd(2024, 3, 1), Sun).unwrap();
        let from_last = month_grid(ymd(2024, 3, 31), Sun).unwrap();
        assert_eq!(from_first, from_last);
    }

    #[test]
    fn week_of_contains_reference() {
        let week = week_of(ymd(2023, 11, 16), Sun).unwrap();
        assert_eq!(week[0], ymd(2023, 11, 12));
        assert_eq!(week[6], ymd(2023, 11, 18));
        assert!(week.contains(&ymd(2023, 11, 16)));
        for pair in week.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }

    #[test]
    fn week_of_monday_start() {
        // 2024-03-03 is a Sunday; with a Monday week start it is the last
        // day of its week.
        let week = week_of(ymd(2024, 3, 3), Mon).unwrap();
        assert_eq!(week[0], ymd(2024, 2, 26));
        assert_eq!(week[6], ymd(2024, 3, 3));
    }

    #[test]
    fn week_of_starts_on_the_reference_when_aligned() {
        let week = week_of(ymd(2023, 11, 12), Sun).unwrap();
        assert_eq!(week[0], ymd(2023, 11, 12));
    }

    #[test]
    fn leap_year_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn clamped_month_arithmetic() {
        assert_eq!(clamped_ymd(2023, 2, 31), Some(ymd(2023, 2, 28)));
        assert_eq!(clamped_ymd(2024, 2, 31), Some(ymd(2024, 2, 29)));
        assert_eq!(clamped_ymd(2024, 4, 15), Some(ymd(2024, 4, 15)));
    }

    #[test]
    fn grid_fails_at_the_edge_of_time() {
        // The week containing the first representable day extends before
        // it for at least one of these week starts, so boundary resolution
        // must report an error rather than fabricate a range.
        let results = [
            month_grid(NaiveDate::MIN, Sun),
            month_grid(NaiveDate::MIN, Mon),
        ];
        assert!(results.iter().any(|r| r.is_err()));
    }
}
