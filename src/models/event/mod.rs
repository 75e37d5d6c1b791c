// Event module
// Calendar event model shared by the seminar and leave calendars

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::label::EventLabel;

/// A date-ranged calendar entry fetched from the portal backend.
///
/// The `[start_date, end_date]` range is inclusive; a single-day event has
/// `start_date == end_date`. Events are immutable snapshots: edits go
/// through the portal API and the visible window is refetched wholesale.
/// Identity is the `id`, never content equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: i64,
    pub label: EventLabel,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Pill text: the seminar title, or the owner's name for leave entries.
    pub title: String,
    /// Shown only in detail panels, never in the grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Validation errors for calendar events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventValidationError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event start and end dates are required")]
    MissingDates,
    #[error("Event end date {end} is before start date {start}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

impl CalendarEvent {
    /// Create a new event with required fields.
    pub fn new(
        id: i64,
        label: EventLabel,
        title: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, EventValidationError> {
        let event = Self {
            id,
            label,
            start_date,
            end_date,
            title: title.into(),
            description: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields.
    pub fn builder() -> CalendarEventBuilder {
        CalendarEventBuilder::new()
    }

    /// Validate the event range and title.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        if self.end_date < self.start_date {
            return Err(EventValidationError::InvertedRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// True when the range is not inverted. Malformed records are skipped
    /// by the layout engine rather than blanking the calendar.
    pub fn is_well_formed(&self) -> bool {
        self.start_date <= self.end_date
    }

    /// Whether the inclusive range covers `day`.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    /// Inclusive overlap test against `[range_start, range_end]`.
    pub fn intersects(&self, range_start: NaiveDate, range_end: NaiveDate) -> bool {
        !(self.end_date < range_start || self.start_date > range_end)
    }

    /// Number of calendar days the event spans (at least 1).
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Builder for creating events with optional fields.
pub struct CalendarEventBuilder {
    id: Option<i64>,
    label: Option<EventLabel>,
    title: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    description: Option<String>,
}

impl CalendarEventBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            label: None,
            title: None,
            start_date: None,
            end_date: None,
            description: None,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn label(mut self, label: EventLabel) -> Self {
        self.label = Some(label);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Single-day event: start and end on the same date.
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self.end_date = Some(date);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the event, validating required fields and the date range.
    pub fn build(self) -> Result<CalendarEvent, EventValidationError> {
        let event = CalendarEvent {
            id: self.id.unwrap_or_default(),
            label: self.label.unwrap_or(EventLabel::Seminar),
            title: self.title.ok_or(EventValidationError::EmptyTitle)?,
            start_date: self.start_date.ok_or(EventValidationError::MissingDates)?,
            end_date: self.end_date.ok_or(EventValidationError::MissingDates)?,
            description: self.description,
        };
        event.validate()?;
        Ok(event)
    }
}

impl Default for CalendarEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
