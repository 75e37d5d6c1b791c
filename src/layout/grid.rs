//! Month grid generation.
//!
//! The month view always shows 6 full weeks (42 cells) starting on the
//! Sunday on or before the first of the month, so the grid height never
//! jumps as the user pages between months.

use chrono::{Duration, NaiveDate};

use crate::utils::date::{first_of_month, sunday_on_or_before};

/// Days per week column count.
pub const DAYS_PER_WEEK: usize = 7;
/// Weeks shown per month, regardless of the month's actual length.
pub const WEEKS_PER_GRID: usize = 6;
/// Total day cells in the month grid.
pub const GRID_CELLS: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// First cell of the grid for the month containing `reference`.
/// The day component of `reference` is ignored.
pub fn grid_start(reference: NaiveDate) -> NaiveDate {
    sunday_on_or_before(first_of_month(reference))
}

/// The 42 consecutive dates of the month grid, in order.
pub fn month_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let start = grid_start(reference);
    (0..GRID_CELLS as i64)
        .map(|offset| start + Duration::days(offset))
        .collect()
}

/// Sundays opening each of the 6 grid weeks.
pub fn week_starts(reference: NaiveDate) -> [NaiveDate; WEEKS_PER_GRID] {
    let start = grid_start(reference);
    std::array::from_fn(|week| start + Duration::days((week * DAYS_PER_WEEK) as i64))
}
