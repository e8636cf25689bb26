use crate::error::{google_calendar_error, SyncResult};
use crate::extractor::ScheduleRecord;
use crate::sync::CalendarService;
use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use super::models::{CalendarEvent, EventDateTime};

const CALENDAR_EVENTS_URL: &str =
    "https://www.googleapis.com/calendar/v3/calendars/primary/events";

/// Wall-clock format the calendar API expects alongside a timeZone field
const EVENT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

impl CalendarEvent {
    /// Build the event request for an extracted class schedule
    pub fn for_class(record: &ScheduleRecord, timezone: &str) -> Self {
        Self {
            summary: format!("Gym Class: {}", record.name),
            start: EventDateTime {
                date_time: record.start.format(EVENT_TIME_FORMAT).to_string(),
                time_zone: timezone.to_string(),
            },
            end: EventDateTime {
                date_time: record.end.format(EVENT_TIME_FORMAT).to_string(),
                time_zone: timezone.to_string(),
            },
        }
    }
}

/// Google Calendar REST API client, writes to the primary calendar
#[derive(Clone, Default)]
pub struct GoogleCalendarClient {
    client: Client,
}

impl GoogleCalendarClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl CalendarService for GoogleCalendarClient {
    async fn create_event(&self, token: &str, event: &CalendarEvent) -> SyncResult<()> {
        let response = self
            .client
            .post(CALENDAR_EVENTS_URL)
            .header("Authorization", format!("Bearer {}", token))
            .json(event)
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to add event: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_calendar_error(&format!(
                "Failed to add event: HTTP {} - {}",
                status, error_body
            )));
        }

        info!("Added \"{}\" to calendar", event.summary);

        Ok(())
    }
}
