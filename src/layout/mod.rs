//! Calendar event layout engine.
//!
//! Pure derived state: given a reference month and the current event
//! snapshot, produce the 6-week grid, the per-week track assignment, the
//! per-day segment classification, and the per-day overflow counts. The
//! whole pipeline is recomputed from scratch whenever the snapshot or the
//! visible month changes; nothing here is persisted or mutated in place.

pub mod grid;
pub mod segments;
pub mod tracks;

use chrono::{Duration, NaiveDate};

pub use grid::{month_grid, week_starts, DAYS_PER_WEEK, GRID_CELLS, WEEKS_PER_GRID};
pub use segments::{classify, SegmentKind};
pub use tracks::{assign_tracks, WeekTracks, TRACKS_PER_WEEK};

use crate::models::event::CalendarEvent;

/// One placed bar segment in a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedSegment {
    pub event_id: i64,
    pub kind: SegmentKind,
}

/// A single day cell: the date, the segment (if any) on each track, and the
/// overflow accounting for the "+N" badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Indexed by track; None where the track is empty on this day.
    pub segments: [Option<PlacedSegment>; TRACKS_PER_WEEK],
    /// Distinct events covering this day, before the track cap.
    pub total: usize,
    /// Distinct events actually placed on a track for this day.
    pub displayed: usize,
}

impl DayCell {
    /// Count shown on the "+N more" badge; zero means no badge.
    pub fn overflow(&self) -> usize {
        self.total - self.displayed
    }
}

/// One grid week: seven day cells sharing a track table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekLayout {
    pub week_start: NaiveDate,
    pub days: [DayCell; DAYS_PER_WEEK],
}

/// The fully assembled month view layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLayout {
    /// First of the displayed month.
    pub month: NaiveDate,
    pub weeks: [WeekLayout; WEEKS_PER_GRID],
}

impl MonthLayout {
    /// Cell for a date, if it falls inside the 6-week grid.
    pub fn day(&self, date: NaiveDate) -> Option<&DayCell> {
        self.weeks
            .iter()
            .flat_map(|week| week.days.iter())
            .find(|cell| cell.date == date)
    }
}

/// Run the full grid/track/segment pipeline for one month.
///
/// Total over any input: malformed events are dropped by the track and
/// segment layers, and a bad record never blanks the rest of the calendar.
pub fn layout_month(reference: NaiveDate, events: &[CalendarEvent]) -> MonthLayout {
    let weeks = week_starts(reference).map(|week_start| layout_week(week_start, events));

    MonthLayout {
        month: crate::utils::date::first_of_month(reference),
        weeks,
    }
}

fn layout_week(week_start: NaiveDate, events: &[CalendarEvent]) -> WeekLayout {
    let tracks = assign_tracks(week_start, events);

    let days = std::array::from_fn(|day_index| {
        let date = week_start + Duration::days(day_index as i64);

        let segments = std::array::from_fn(|track| {
            tracks.slots[track][day_index].and_then(|event_id| {
                let event = events.iter().find(|e| e.id == event_id)?;
                classify(event, date, week_start)
                    .map(|kind| PlacedSegment { event_id, kind })
            })
        });

        // Event ids are unique and an event holds one track per week, so a
        // plain count is already a distinct count.
        let displayed = segments.iter().flatten().count();
        let total = events
            .iter()
            .filter(|event| event.is_well_formed() && event.covers(date))
            .count();

        DayCell {
            date,
            segments,
            total,
            displayed,
        }
    });

    WeekLayout { week_start, days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::label::EventLabel;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: i64, start: NaiveDate, end: NaiveDate) -> CalendarEvent {
        CalendarEvent::new(id, EventLabel::Seminar, format!("Event {id}"), start, end).unwrap()
    }

    #[test]
    fn test_layout_month_covers_full_grid() {
        let layout = layout_month(date(2025, 7, 10), &[]);
        assert_eq!(layout.month, date(2025, 7, 1));
        assert_eq!(layout.weeks[0].week_start, date(2025, 6, 29));
        assert_eq!(layout.weeks[5].days[6].date, date(2025, 8, 9));
    }

    #[test]
    fn test_empty_month_has_no_segments() {
        let layout = layout_month(date(2025, 7, 1), &[]);
        for week in &layout.weeks {
            for cell in &week.days {
                assert_eq!(cell.total, 0);
                assert_eq!(cell.displayed, 0);
                assert!(cell.segments.iter().all(Option::is_none));
            }
        }
    }

    #[test]
    fn test_multiday_event_segments_line_up() {
        let events = vec![event(1, date(2025, 7, 15), date(2025, 7, 17))];
        let layout = layout_month(date(2025, 7, 1), &events);

        let kinds: Vec<Option<SegmentKind>> = (13..=19)
            .map(|d| {
                layout
                    .day(date(2025, 7, d))
                    .and_then(|cell| cell.segments[0].map(|s| s.kind))
            })
            .collect();

        assert_eq!(
            kinds,
            vec![
                None,
                None,
                Some(SegmentKind::Start),
                Some(SegmentKind::Middle),
                Some(SegmentKind::End),
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_overflow_badge_accounting() {
        let day = date(2025, 7, 2);
        let events: Vec<CalendarEvent> = (1..=4).map(|id| event(id, day, day)).collect();
        let layout = layout_month(date(2025, 7, 1), &events);

        let cell = layout.day(day).unwrap();
        assert_eq!(cell.total, 4);
        assert_eq!(cell.displayed, 3);
        assert_eq!(cell.overflow(), 1);
    }

    #[test]
    fn test_week_boundary_reentry() {
        // Spans the boundary between the first two grid weeks of July 2025
        let events = vec![event(1, date(2025, 7, 3), date(2025, 7, 8))];
        let layout = layout_month(date(2025, 7, 1), &events);

        let sunday = layout.day(date(2025, 7, 6)).unwrap();
        assert_eq!(
            sunday.segments[0],
            Some(PlacedSegment {
                event_id: 1,
                kind: SegmentKind::ContinuationStart,
            })
        );
    }

    #[test]
    fn test_malformed_event_does_not_blank_layout() {
        let mut bad = event(1, date(2025, 7, 10), date(2025, 7, 12));
        bad.end_date = date(2025, 7, 1);
        let good = event(2, date(2025, 7, 10), date(2025, 7, 10));

        let layout = layout_month(date(2025, 7, 1), &[bad, good]);
        let cell = layout.day(date(2025, 7, 10)).unwrap();

        assert_eq!(cell.total, 1);
        assert_eq!(cell.displayed, 1);
        assert_eq!(cell.segments[0].map(|s| s.event_id), Some(2));
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let events = vec![
            event(1, date(2025, 7, 2), date(2025, 7, 9)),
            event(2, date(2025, 7, 2), date(2025, 7, 2)),
            event(3, date(2025, 6, 25), date(2025, 7, 1)),
        ];
        let first = layout_month(date(2025, 7, 1), &events);
        let second = layout_month(date(2025, 7, 1), &events);
        assert_eq!(first, second);
    }
}
