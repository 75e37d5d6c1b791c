//! Segment classification for event bars.
//!
//! A multi-day event renders as one continuous bar per week, built from
//! per-day segments. The classification is a tagged union the renderer
//! dispatches on; it replaces per-variant pill components with a single
//! render path keyed on the kind.

use chrono::NaiveDate;

use crate::models::event::CalendarEvent;

/// Visual role of one day cell within an event's bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// One-day event: closed pill on both sides.
    Single,
    /// True first day of a multi-day event: closed left, open right.
    Start,
    /// Interior day: open both sides, no visible text (accessible label only).
    Middle,
    /// True last day: open left, closed right.
    End,
    /// Week re-entry: the event started in a prior week and its bar resumes
    /// at this week's first column. Open on the left like a continuation,
    /// but the label text repeats so the new row stays identifiable. Never
    /// a fresh start cap.
    ContinuationStart,
}

impl SegmentKind {
    /// Whether the renderer draws the event's label text on this segment.
    pub fn shows_label(&self) -> bool {
        matches!(
            self,
            SegmentKind::Single | SegmentKind::Start | SegmentKind::ContinuationStart
        )
    }

    /// Left edge is open, merging into the previous day's segment or the
    /// previous week's bar.
    pub fn open_left(&self) -> bool {
        matches!(
            self,
            SegmentKind::Middle | SegmentKind::End | SegmentKind::ContinuationStart
        )
    }

    /// Right edge is open, merging into the next day's segment.
    pub fn open_right(&self) -> bool {
        matches!(
            self,
            SegmentKind::Start | SegmentKind::Middle | SegmentKind::ContinuationStart
        )
    }
}

/// Classify the segment an event contributes to `day` within the week
/// starting at `week_start`. Returns None when the event does not cover the
/// day (or is malformed), so callers never place stray segments.
///
/// `End` takes precedence over `ContinuationStart` when an event carried
/// over from a prior week ends exactly on the week's first column: the bar
/// closes there and a closed right edge matters more than a repeated label.
pub fn classify(event: &CalendarEvent, day: NaiveDate, week_start: NaiveDate) -> Option<SegmentKind> {
    if !event.is_well_formed() || !event.covers(day) {
        return None;
    }

    let kind = if event.start_date == event.end_date {
        SegmentKind::Single
    } else if day == event.start_date {
        SegmentKind::Start
    } else if day == event.end_date {
        SegmentKind::End
    } else if day == week_start {
        // Covers the day, is neither endpoint, and sits on the week's first
        // column: the true start lies in an earlier week.
        SegmentKind::ContinuationStart
    } else {
        SegmentKind::Middle
    };

    Some(kind)
}
