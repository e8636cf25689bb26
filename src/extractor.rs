use chrono::{Duration, NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;

/// How long a class runs; the emails never include an end time
const CLASS_LENGTH_MINUTES: i64 = 45;

lazy_static! {
    /// Matches "<class name> on <M>/<D>/<Y> at <H>:<MM><am|pm>"
    static ref SCHEDULE_PATTERN: Regex =
        Regex::new(r"(?i)(.+?) on (\d+)/(\d+)/(\d+) at (\d+):(\d+)([ap]m)")
            .expect("schedule pattern is valid");
}

/// A class schedule pulled out of an email body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRecord {
    /// Class name as written in the email, trimmed
    pub name: String,
    /// Wall-clock start in the configured calendar timezone
    pub start: NaiveDateTime,
    /// Always start + 45 minutes
    pub end: NaiveDateTime,
}

/// Extract a schedule from a plain-text email body.
///
/// Only the first occurrence of the pattern is used. Returns `None` when the
/// body contains no schedule sentence, or when the mentioned date/time cannot
/// be represented (e.g. month 13); that is a skip, not an error.
pub fn extract_schedule(body: &str) -> Option<ScheduleRecord> {
    let caps = SCHEDULE_PATTERN.captures(body)?;

    let name = caps[1].trim().to_string();
    let month = caps[2].parse::<u32>().ok()?;
    let day = caps[3].parse::<u32>().ok()?;
    let year = caps[4].parse::<i32>().ok()?;
    let mut hour = caps[5].parse::<u32>().ok()?;
    let minute = caps[6].parse::<u32>().ok()?;
    let meridiem = caps[7].to_lowercase();

    // 12-hour to 24-hour: 12am is midnight, 12pm stays noon
    if meridiem == "pm" && hour != 12 {
        hour += 12;
    }
    if meridiem == "am" && hour == 12 {
        hour = 0;
    }

    let start = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)?;
    let end = start + Duration::minutes(CLASS_LENGTH_MINUTES);

    Some(ScheduleRecord { name, start, end })
}
