use gymcal::config::Config;
use gymcal::extractor::extract_schedule;
use gymcal::google::models::CalendarEvent;
use gymcal::sync::SyncReport;

/// Smoke test to verify that a config can be constructed
#[tokio::test]
async fn test_config_builds() {
    // Create a minimal config for testing
    let config = Config {
        target_sender: "gym@example.com".to_string(),
        calendar_timezone: "UTC".to_string(),
        google_client_id: String::new(),
        google_client_secret: String::new(),
        token_file: "token.json".to_string(),
    };

    assert_eq!(config.calendar_timezone, "UTC");
    assert!(config.google_client_id.is_empty());
}

/// The configured timezone must be a real IANA identifier
#[test]
fn test_timezone_parses() {
    assert!("America/New_York".parse::<chrono_tz::Tz>().is_ok());
    assert!("Not/AZone".parse::<chrono_tz::Tz>().is_err());
}

/// End-to-end extraction into an event request
#[test]
fn test_extracted_record_becomes_event() {
    let record = extract_schedule("Yoga Basics on 3/5/2024 at 6:30pm").unwrap();
    let event = CalendarEvent::for_class(&record, "UTC");

    assert_eq!(event.summary, "Gym Class: Yoga Basics");
    assert_eq!(event.start.date_time, "2024-03-05T18:30:00");
    assert_eq!(event.end.date_time, "2024-03-05T19:15:00");
}

/// A fresh report counts nothing
#[test]
fn test_report_default() {
    let report = SyncReport::default();
    assert_eq!(report.listed, 0);
    assert_eq!(report.created, 0);
    assert_eq!(report.skipped, 0);
}
