//! Event label model.
//!
//! Labels form a closed set covering both calendars the portal shows:
//! seminar/conference entries and the six leave types. Each label carries
//! a display name and a color tag used by the rendering layer.

use serde::{Deserialize, Serialize};

/// Category key for a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventLabel {
    Seminar,
    Conference,
    Annual,
    Sick,
    Maternity,
    Paternity,
    Bereavement,
    Unpaid,
}

impl EventLabel {
    /// All labels, in the order the portal lists them.
    pub const ALL: [EventLabel; 8] = [
        EventLabel::Seminar,
        EventLabel::Conference,
        EventLabel::Annual,
        EventLabel::Sick,
        EventLabel::Maternity,
        EventLabel::Paternity,
        EventLabel::Bereavement,
        EventLabel::Unpaid,
    ];

    /// Human-readable name shown in pills and detail panels.
    pub fn display_name(&self) -> &'static str {
        match self {
            EventLabel::Seminar => "Seminar",
            EventLabel::Conference => "Conference",
            EventLabel::Annual => "Annual Leave",
            EventLabel::Sick => "Sick Leave",
            EventLabel::Maternity => "Maternity Leave",
            EventLabel::Paternity => "Paternity Leave",
            EventLabel::Bereavement => "Bereavement Leave",
            EventLabel::Unpaid => "Unpaid Leave",
        }
    }

    /// Hex color tag for the event bar.
    pub fn color(&self) -> &'static str {
        match self {
            EventLabel::Seminar => "#3B82F6",
            EventLabel::Conference => "#8B5CF6",
            EventLabel::Annual => "#10B981",
            EventLabel::Sick => "#F59E0B",
            EventLabel::Maternity => "#EC4899",
            EventLabel::Paternity => "#06B6D4",
            EventLabel::Bereavement => "#6B7280",
            EventLabel::Unpaid => "#EF4444",
        }
    }

    /// True for the six leave types, false for seminar calendar entries.
    pub fn is_leave(&self) -> bool {
        !matches!(self, EventLabel::Seminar | EventLabel::Conference)
    }
}
