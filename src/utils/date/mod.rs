// Date utility functions

use chrono::{Datelike, Duration, NaiveDate};

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

/// The Sunday on or before `date`.
pub fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Column index (0-6, Sunday first) of `date` within the week starting at
/// `week_start`, or None when the date falls outside that week.
pub fn day_index_in_week(week_start: NaiveDate, date: NaiveDate) -> Option<usize> {
    let offset = (date - week_start).num_days();
    (0..7).contains(&offset).then_some(offset as usize)
}
