//! Track assignment for one grid week.
//!
//! Each week owns a fixed number of horizontal tracks. Events intersecting
//! the week are placed greedily into the lowest free track; overlapping
//! events never share a track. The track count is a deliberate density cap:
//! events that do not fit are hidden from the row area and surface only
//! through the day's overflow count.

use chrono::{Duration, NaiveDate};

use crate::layout::grid::DAYS_PER_WEEK;
use crate::models::event::CalendarEvent;
use crate::utils::date::day_index_in_week;

/// Fixed number of event rows per week.
pub const TRACKS_PER_WEEK: usize = 3;

/// Track table for a single week. `slots[track][day]` holds the id of the
/// event occupying that cell, if any. Tracks are a per-week resource: the
/// same event may sit on different track indices in adjacent weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekTracks {
    pub week_start: NaiveDate,
    pub slots: [[Option<i64>; DAYS_PER_WEEK]; TRACKS_PER_WEEK],
    /// Events intersecting the week that found no free track, in placement
    /// order. Still counted by the overflow badge.
    pub hidden: Vec<i64>,
}

impl WeekTracks {
    /// Track index the event was placed on, if it was placed.
    pub fn track_of(&self, event_id: i64) -> Option<usize> {
        self.slots
            .iter()
            .position(|track| track.iter().any(|slot| *slot == Some(event_id)))
    }

    /// Distinct events placed somewhere in the week.
    pub fn placed_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self
            .slots
            .iter()
            .flatten()
            .filter_map(|slot| *slot)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

/// Assign every event intersecting the week to a track.
///
/// Events carried over from an earlier week sort ahead of events starting
/// within the week, so a multi-week bar keeps a low track index from week
/// to week instead of scattering. Ties are broken by start date, then id;
/// the id tie-break makes placement deterministic where the portal's
/// ordering was unspecified.
pub fn assign_tracks(week_start: NaiveDate, events: &[CalendarEvent]) -> WeekTracks {
    let week_end = week_start + Duration::days(DAYS_PER_WEEK as i64 - 1);

    let mut candidates: Vec<&CalendarEvent> = events
        .iter()
        .filter(|event| event.is_well_formed())
        .filter(|event| event.intersects(week_start, week_end))
        .collect();
    candidates.sort_by_key(|event| (event.start_date >= week_start, event.start_date, event.id));

    let mut tracks = WeekTracks {
        week_start,
        slots: [[None; DAYS_PER_WEEK]; TRACKS_PER_WEEK],
        hidden: Vec::new(),
    };

    for event in candidates {
        let first = day_index_in_week(week_start, event.start_date.max(week_start))
            .unwrap_or(0);
        let last = day_index_in_week(week_start, event.end_date.min(week_end))
            .unwrap_or(DAYS_PER_WEEK - 1);

        let free_track = tracks
            .slots
            .iter()
            .position(|track| track[first..=last].iter().all(Option::is_none));

        match free_track {
            Some(track) => {
                for slot in &mut tracks.slots[track][first..=last] {
                    *slot = Some(event.id);
                }
            }
            None => tracks.hidden.push(event.id),
        }
    }

    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::label::EventLabel;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: i64, start: NaiveDate, end: NaiveDate) -> CalendarEvent {
        CalendarEvent::new(id, EventLabel::Annual, format!("Event {id}"), start, end).unwrap()
    }

    // Week of Sun Jun 29 - Sat Jul 5, 2025
    fn week() -> NaiveDate {
        date(2025, 6, 29)
    }

    #[test]
    fn test_non_overlapping_events_share_first_track() {
        let events = vec![
            event(1, date(2025, 6, 30), date(2025, 7, 1)),
            event(2, date(2025, 7, 3), date(2025, 7, 4)),
        ];
        let tracks = assign_tracks(week(), &events);

        assert_eq!(tracks.track_of(1), Some(0));
        assert_eq!(tracks.track_of(2), Some(0));
        assert!(tracks.hidden.is_empty());
    }

    #[test]
    fn test_overlapping_events_take_separate_tracks() {
        let events = vec![
            event(1, date(2025, 6, 30), date(2025, 7, 2)),
            event(2, date(2025, 7, 1), date(2025, 7, 3)),
        ];
        let tracks = assign_tracks(week(), &events);

        assert_eq!(tracks.track_of(1), Some(0));
        assert_eq!(tracks.track_of(2), Some(1));
    }

    #[test]
    fn test_carried_over_event_sorts_ahead() {
        // Event 9 started the previous week; event 1 starts inside the week
        // on an earlier weekday. The carried-over event still wins track 0.
        let events = vec![
            event(1, date(2025, 6, 29), date(2025, 7, 4)),
            event(9, date(2025, 6, 25), date(2025, 7, 2)),
        ];
        let tracks = assign_tracks(week(), &events);

        assert_eq!(tracks.track_of(9), Some(0));
        assert_eq!(tracks.track_of(1), Some(1));
    }

    #[test]
    fn test_tie_break_is_deterministic_by_id() {
        let events = vec![
            event(12, date(2025, 7, 2), date(2025, 7, 2)),
            event(3, date(2025, 7, 2), date(2025, 7, 2)),
        ];
        let tracks = assign_tracks(week(), &events);

        assert_eq!(tracks.track_of(3), Some(0));
        assert_eq!(tracks.track_of(12), Some(1));
    }

    #[test]
    fn test_fourth_concurrent_event_is_hidden() {
        let day = date(2025, 7, 2);
        let events: Vec<CalendarEvent> = (1..=4).map(|id| event(id, day, day)).collect();
        let tracks = assign_tracks(week(), &events);

        assert_eq!(tracks.placed_ids(), vec![1, 2, 3]);
        assert_eq!(tracks.hidden, vec![4]);
    }

    #[test]
    fn test_event_range_clamped_to_week() {
        let events = vec![event(1, date(2025, 6, 20), date(2025, 7, 20))];
        let tracks = assign_tracks(week(), &events);

        // Occupies all 7 slots of track 0
        assert!(tracks.slots[0].iter().all(|slot| *slot == Some(1)));
    }

    #[test]
    fn test_event_outside_week_is_ignored() {
        let events = vec![event(1, date(2025, 7, 7), date(2025, 7, 9))];
        let tracks = assign_tracks(week(), &events);

        assert_eq!(tracks.track_of(1), None);
        assert!(tracks.hidden.is_empty());
    }

    #[test]
    fn test_malformed_event_is_skipped() {
        let mut bad = event(1, date(2025, 7, 1), date(2025, 7, 3));
        bad.end_date = date(2025, 6, 30);
        let tracks = assign_tracks(week(), &[bad]);

        assert_eq!(tracks.track_of(1), None);
        assert!(tracks.hidden.is_empty());
    }

    #[test]
    fn test_no_two_events_share_a_slot() {
        let events = vec![
            event(1, date(2025, 6, 29), date(2025, 7, 5)),
            event(2, date(2025, 6, 29), date(2025, 7, 1)),
            event(3, date(2025, 7, 2), date(2025, 7, 5)),
            event(4, date(2025, 7, 1), date(2025, 7, 3)),
        ];
        let tracks = assign_tracks(week(), &events);

        for day in 0..DAYS_PER_WEEK {
            let occupants: Vec<i64> = tracks
                .slots
                .iter()
                .filter_map(|track| track[day])
                .collect();
            let mut deduped = occupants.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(occupants.len(), deduped.len());
        }
    }
}
