//! Portal backend API client.
//!
//! Supplies event snapshots for a visible date window and performs the
//! create/update/delete round-trips. Mutations never patch client state:
//! the caller refetches the whole window afterwards, so the in-memory list
//! stays an authoritative snapshot.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::thread;
use std::time::Duration;

use crate::models::event::CalendarEvent;
use crate::models::settings::PortalConfig;

#[cfg(test)]
use mockall::automock;

/// Authenticated portal session, created once at startup and passed
/// explicitly to whatever needs it. No component reads token storage on
/// its own.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Value for the Authorization header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Source of event snapshots for a date window. The calendar view depends
/// on this seam, not on the concrete HTTP client.
#[cfg_attr(test, automock)]
pub trait EventProvider {
    /// All events whose range intersects `[start, end]` (inclusive). The
    /// backend may return a superset of the window; the layout engine
    /// filters per week anyway.
    fn events_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<CalendarEvent>>;
}

/// HTTP client for the portal REST API.
pub struct PortalClient {
    client: Client,
    base_url: String,
    session: Session,
    max_retries: usize,
    retry_delay_ms: u64,
}

impl PortalClient {
    pub fn new(config: &PortalConfig, session: Session) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build portal HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            session,
            max_retries: config.max_retries,
            retry_delay_ms: config.retry_delay_ms,
        })
    }

    /// Create an event; returns the stored record with its assigned id.
    pub fn create_event(&self, draft: &CalendarEvent) -> Result<CalendarEvent> {
        draft.validate()?;
        let url = format!("{}/events", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, self.session.bearer())
            .json(draft)
            .send()
            .context("Network error while creating event")?;

        Self::check_status(&url, response.status())?;
        response
            .json::<CalendarEvent>()
            .context("Failed to decode created event")
    }

    /// Update an existing event in place on the backend.
    pub fn update_event(&self, event: &CalendarEvent) -> Result<()> {
        event.validate()?;
        let url = format!("{}/events/{}", self.base_url, event.id);
        let response = self
            .client
            .put(&url)
            .header(reqwest::header::AUTHORIZATION, self.session.bearer())
            .json(event)
            .send()
            .context("Network error while updating event")?;

        Self::check_status(&url, response.status())
    }

    /// Delete an event by id.
    pub fn delete_event(&self, id: i64) -> Result<()> {
        let url = format!("{}/events/{}", self.base_url, id);
        let response = self
            .client
            .delete(&url)
            .header(reqwest::header::AUTHORIZATION, self.session.bearer())
            .send()
            .context("Network error while deleting event")?;

        Self::check_status(&url, response.status())
    }

    fn fetch_window_once(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<CalendarEvent>> {
        let url = format!("{}/events?from={}&to={}", self.base_url, start, end);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, self.session.bearer())
            .send()
            .context("Network error while fetching events")?;

        Self::check_status(&url, response.status())?;

        let records: Vec<serde_json::Value> = response
            .json()
            .context("Failed to decode event list response")?;

        Ok(decode_records(records))
    }

    fn check_status(url: &str, status: StatusCode) -> Result<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(anyhow!("Portal request to {} failed with HTTP status {}", url, status))
        }
    }
}

impl EventProvider for PortalClient {
    fn events_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<CalendarEvent>> {
        let mut last_error: Option<anyhow::Error> = None;

        for attempt in 0..=self.max_retries {
            match self.fetch_window_once(start, end) {
                Ok(events) => return Ok(events),
                Err(err) => {
                    if attempt == self.max_retries {
                        last_error = Some(err.context(format!(
                            "Failed to fetch events {}..{} after {} attempts",
                            start,
                            end,
                            attempt + 1
                        )));
                    } else {
                        log::warn!(
                            "Event fetch attempt {} failed for {}..{}: {}",
                            attempt + 1,
                            start,
                            end,
                            err
                        );
                        thread::sleep(Duration::from_millis(self.retry_delay_ms));
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("Unknown event fetch error")))
    }
}

/// Decode a batch of event records, dropping malformed entries with a
/// warning. One bad record must not fail the whole window.
fn decode_records(records: Vec<serde_json::Value>) -> Vec<CalendarEvent> {
    records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<CalendarEvent>(record) {
            Ok(event) if event.is_well_formed() => Some(event),
            Ok(event) => {
                log::warn!(
                    "Skipping event {} with inverted range {}..{}",
                    event.id,
                    event.start_date,
                    event.end_date
                );
                None
            }
            Err(err) => {
                log::warn!("Skipping undecodable event record: {}", err);
                None
            }
        })
        .collect()
}
