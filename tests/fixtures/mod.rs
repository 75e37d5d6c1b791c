// Test fixtures - reusable test data
// Provides consistent dates and events across test files

use chrono::NaiveDate;
use lab_calendar::models::event::CalendarEvent;
use lab_calendar::models::label::EventLabel;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// July 2, 2025 (a Wednesday)
    pub fn jul_2_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 2).unwrap()
    }

    /// June 29, 2025 (the Sunday opening the July 2025 grid)
    pub fn jun_29_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 29).unwrap()
    }

    /// July 13, 2025 (Sunday opening the third grid week)
    pub fn jul_13_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 13).unwrap()
    }

    pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// A one-day seminar entry.
    pub fn seminar(id: i64, day: NaiveDate) -> CalendarEvent {
        CalendarEvent::builder()
            .id(id)
            .label(EventLabel::Seminar)
            .title(format!("Seminar {id}"))
            .on(day)
            .build()
            .unwrap()
    }

    /// A leave entry spanning an inclusive range.
    pub fn leave(id: i64, start: NaiveDate, end: NaiveDate) -> CalendarEvent {
        CalendarEvent::builder()
            .id(id)
            .label(EventLabel::Annual)
            .title(format!("Researcher {id}"))
            .start_date(start)
            .end_date(end)
            .build()
            .unwrap()
    }
}
