//! Calendar view state.
//!
//! Owns the displayed month and the current event snapshot. Both are
//! replaced wholesale: a completed fetch swaps the whole list, and the
//! layout is recomputed over whatever snapshot is current. A generation
//! counter guards against a stale fetch landing after the user has moved
//! to another month.

use anyhow::Result;
use chrono::{Duration, NaiveDate};

use crate::layout::{self, grid, MonthLayout};
use crate::models::event::CalendarEvent;
use crate::services::portal::EventProvider;
use crate::utils::date::first_of_month;

/// In-memory state for the month calendar.
#[derive(Debug, Clone)]
pub struct CalendarView {
    month: NaiveDate,
    events: Vec<CalendarEvent>,
    generation: u64,
}

impl CalendarView {
    /// Start on the month containing `reference`, with no events yet.
    pub fn new(reference: NaiveDate) -> Self {
        Self {
            month: first_of_month(reference),
            events: Vec::new(),
            generation: 0,
        }
    }

    /// First of the displayed month.
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    /// Current snapshot, in whatever order the backend returned it.
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Look up an event by identity for selection/detail panels.
    pub fn event(&self, id: i64) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Fetch generation the next snapshot must carry to be accepted.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Inclusive date window the view needs: the full 6-week grid, not
    /// just the calendar month, so leading/trailing cells show their bars.
    pub fn visible_window(&self) -> (NaiveDate, NaiveDate) {
        let start = grid::grid_start(self.month);
        let end = start + Duration::days(grid::GRID_CELLS as i64 - 1);
        (start, end)
    }

    /// Switch the displayed month. Invalidates in-flight fetches by
    /// bumping the generation; the old snapshot stays visible until a
    /// fresh one lands.
    pub fn set_month(&mut self, reference: NaiveDate) {
        let month = first_of_month(reference);
        if month != self.month {
            self.month = month;
            self.generation += 1;
        }
    }

    /// Install a fetched snapshot. Returns false (and changes nothing)
    /// when `generation` is stale, closing the race where a slow response
    /// for a previous month would overwrite the current view.
    pub fn apply_snapshot(&mut self, generation: u64, events: Vec<CalendarEvent>) -> bool {
        if generation != self.generation {
            log::debug!(
                "Discarding stale event snapshot (generation {} != {})",
                generation,
                self.generation
            );
            return false;
        }
        self.events = events;
        true
    }

    /// Fetch the visible window from the provider and install it.
    pub fn refresh<P: EventProvider>(&mut self, provider: &P) -> Result<()> {
        let generation = self.generation;
        let (start, end) = self.visible_window();
        let events = provider.events_between(start, end)?;
        log::info!(
            "Loaded {} events for {}..{}",
            events.len(),
            start,
            end
        );
        self.apply_snapshot(generation, events);
        Ok(())
    }

    /// Recompute the full layout pipeline over the current snapshot.
    pub fn layout(&self) -> MonthLayout {
        layout::layout_month(self.month, &self.events)
    }
}
