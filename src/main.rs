// Lab Calendar
// Command-line entry point: fetches the current month from the portal and
// prints the computed layout as a text grid.

use anyhow::{Context, Result};
use chrono::{Datelike, Local};

use lab_calendar::layout::{MonthLayout, SegmentKind, DAYS_PER_WEEK, TRACKS_PER_WEEK};
use lab_calendar::models::event::CalendarEvent;
use lab_calendar::services::calendar::CalendarView;
use lab_calendar::services::portal::{PortalClient, Session};
use lab_calendar::services::settings;

const CELL_WIDTH: usize = 12;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting lab calendar");

    let config = settings::load().context("Failed to load configuration")?;

    let token = std::env::var("LAB_PORTAL_TOKEN").unwrap_or_default();
    if token.is_empty() {
        log::warn!("LAB_PORTAL_TOKEN is not set; requests will be unauthenticated");
    }

    let client = PortalClient::new(&config, Session::new(token))?;

    let mut view = CalendarView::new(Local::now().date_naive());
    view.refresh(&client)
        .context("Failed to fetch events for the current month")?;

    let layout = view.layout();
    print!("{}", render_month(&layout, view.events()));

    Ok(())
}

/// Render the month layout as a fixed-width text grid, one line per track
/// plus an overflow line where any day has hidden events.
fn render_month(layout: &MonthLayout, events: &[CalendarEvent]) -> String {
    let mut out = String::new();

    let heading = layout.month.format("%B %Y").to_string();
    out.push_str(&format!("{:^width$}\n", heading, width = CELL_WIDTH * DAYS_PER_WEEK));
    for name in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
        out.push_str(&format!("{:^width$}", name, width = CELL_WIDTH));
    }
    out.push('\n');

    for week in &layout.weeks {
        out.push_str(&"-".repeat(CELL_WIDTH * DAYS_PER_WEEK));
        out.push('\n');

        for cell in &week.days {
            let day = if cell.date.month() == layout.month.month() {
                format!("{:2}", cell.date.day())
            } else {
                format!("({:2})", cell.date.day())
            };
            out.push_str(&format!("{:<width$}", day, width = CELL_WIDTH));
        }
        out.push('\n');

        for track in 0..TRACKS_PER_WEEK {
            let mut line = String::new();
            for cell in &week.days {
                line.push_str(&render_segment(cell.segments[track], events));
            }
            if !line.trim().is_empty() {
                out.push_str(line.trim_end());
                out.push('\n');
            }
        }

        if week.days.iter().any(|cell| cell.overflow() > 0) {
            for cell in &week.days {
                let badge = match cell.overflow() {
                    0 => String::new(),
                    n => format!("+{} more", n),
                };
                out.push_str(&format!("{:<width$}", badge, width = CELL_WIDTH));
            }
            out.push('\n');
        }
    }

    out
}

fn render_segment(
    segment: Option<lab_calendar::layout::PlacedSegment>,
    events: &[CalendarEvent],
) -> String {
    let Some(segment) = segment else {
        return " ".repeat(CELL_WIDTH);
    };

    let title = events
        .iter()
        .find(|event| event.id == segment.event_id)
        .map(|event| event.title.as_str())
        .unwrap_or("?");
    let inner = CELL_WIDTH - 2;
    let text: String = title.chars().take(inner).collect();

    let body = match segment.kind {
        SegmentKind::Single => format!("[{:=<inner$}]", text, inner = inner),
        SegmentKind::Start => format!("[{:=<inner$}=", text, inner = inner),
        SegmentKind::ContinuationStart => format!("={:=<inner$}=", text, inner = inner),
        SegmentKind::Middle => "=".repeat(CELL_WIDTH),
        SegmentKind::End => format!("={}]", "=".repeat(inner)),
    };
    body
}
