use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::reminder::Reminder;

/// Reminders bucketed by the local calendar date of their due datetime.
/// Built fresh from the embedder's reminder list whenever it changes;
/// nothing here is persisted. Reminders without a due date land in the
/// unscheduled bucket so they stay visible instead of collapsing into a
/// sentinel day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayGrouping {
    by_day: BTreeMap<NaiveDate, Vec<Reminder>>,
    unscheduled: Vec<Reminder>,
}

impl DayGrouping {
    pub fn build(reminders: &[Reminder]) -> Self {
        let mut grouping = Self::default();
        for reminder in reminders {
            match reminder.due_day() {
                Some(day) => grouping
                    .by_day
                    .entry(day)
                    .or_default()
                    .push(reminder.clone()),
                None => grouping.unscheduled.push(reminder.clone()),
            }
        }
        grouping
    }

    /// Reminders due on `day`, in input order. Empty slice for days with
    /// none.
    pub fn on_day(&self, day: NaiveDate) -> &[Reminder] {
        self.by_day.get(&day).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has_reminders(&self, day: NaiveDate) -> bool {
        self.by_day.contains_key(&day)
    }

    /// Reminders with no due date, in input order.
    pub fn unscheduled(&self) -> &[Reminder] {
        &self.unscheduled
    }

    /// Days with at least one reminder, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_day.keys().copied()
    }

    pub fn total(&self) -> usize {
        self.by_day.values().map(Vec::len).sum::<usize>() + self.unscheduled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty() && self.unscheduled.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate, TimeZone};
    use ratatui::style::Color;

    fn reminder(id: &str, due: Option<(i32, u32, u32, u32, u32)>) -> Reminder {
        Reminder {
            id: id.to_string(),
            title: format!("reminder {id}"),
            is_completed: false,
            due: due.map(|(y, mo, d, h, mi)| {
                Local
                    .with_ymd_and_hms(y, mo, d, h, mi, 0)
                    .single()
                    .expect("unambiguous local time")
            }),
            calendar_name: "Personal".to_string(),
            calendar_color: Color::Cyan,
            priority: 0,
        }
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn groups_by_due_day() {
        let reminders = vec![
            reminder("r1", Some((2024, 3, 5, 10, 0))),
            reminder("r2", Some((2024, 3, 5, 18, 0))),
            reminder("r3", Some((2024, 3, 6, 9, 0))),
        ];
        let grouping = DayGrouping::build(&reminders);

        let day5: Vec<&str> = grouping
            .on_day(ymd(2024, 3, 5))
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(day5, ["r1", "r2"]);
        let day6: Vec<&str> = grouping
            .on_day(ymd(2024, 3, 6))
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(day6, ["r3"]);
        assert!(grouping.on_day(ymd(2024, 3, 7)).is_empty());
    }

    #[test]
    fn nothing_dropped_or_duplicated() {
        let reminders = vec![
            reminder("a", Some((2024, 3, 5, 10, 0))),
            reminder("b", None),
            reminder("c", Some((2024, 3, 6, 9, 0))),
            reminder("d", Some((2024, 3, 5, 23, 59))),
            reminder("e", None),
        ];
        let grouping = DayGrouping::build(&reminders);
        assert_eq!(grouping.total(), reminders.len());

        let mut seen: Vec<&str> = grouping
            .days()
            .flat_map(|day| grouping.on_day(day).iter().map(|r| r.id.as_str()))
            .chain(grouping.unscheduled().iter().map(|r| r.id.as_str()))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn bucket_order_matches_input_order() {
        let reminders = vec![
            reminder("late", Some((2024, 3, 5, 22, 0))),
            reminder("early", Some((2024, 3, 5, 6, 0))),
            reminder("midday", Some((2024, 3, 5, 12, 0))),
        ];
        let grouping = DayGrouping::build(&reminders);
        let order: Vec<&str> = grouping
            .on_day(ymd(2024, 3, 5))
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(order, ["late", "early", "midday"]);
    }

    #[test]
    fn undated_reminders_stay_visible() {
        let reminders = vec![reminder("u1", None), reminder("u2", None)];
        let grouping = DayGrouping::build(&reminders);
        assert_eq!(grouping.days().count(), 0);
        assert_eq!(grouping.unscheduled().len(), 2);
        assert_eq!(grouping.unscheduled()[0].id, "u1");
    }

    #[test]
    fn building_twice_is_idempotent() {
        let reminders = vec![
            reminder("a", Some((2024, 3, 5, 10, 0))),
            reminder("b", None),
        ];
        assert_eq!(DayGrouping::build(&reminders), DayGrouping::build(&reminders));
    }

    #[test]
    fn days_iterate_in_ascending_order() {
        let reminders = vec![
            reminder("z", Some((2024, 3, 20, 8, 0))),
            reminder("a", Some((2024, 3, 1, 8, 0))),
            reminder("m", Some((2024, 3, 10, 8, 0))),
        ];
        let grouping = DayGrouping::build(&reminders);
        let days: Vec<NaiveDate> = grouping.days().collect();
        assert_eq!(
            days,
            [ymd(2024, 3, 1), ymd(2024, 3, 10), ymd(2024, 3, 20)]
        );
        assert!(grouping.has_reminders(ymd(2024, 3, 10)));
        assert!(!grouping.has_reminders(ymd(2024, 3, 11)));
    }

    #[test]
    fn empty_input_builds_empty_grouping() {
        let grouping = DayGrouping::build(&[]);
        assert!(grouping.is_empty());
        assert_eq!(grouping.total(), 0);
    }
}
