//! Display formatting for backend timestamps.
//!
//! The backend sends either offset-less local timestamps
//! (`2024-04-12T18:30:00`) or RFC 3339. Both are shown as the wall-clock
//! time they carry.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Label for an event without a usable start time
pub const DATE_TBD: &str = "Date TBD";

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// "Fri, Apr 12, 2024, 06:30 PM"
fn long_form(dt: NaiveDateTime) -> String {
    dt.format("%a, %b %-d, %Y, %I:%M %p").to_string()
}

/// Event start for the registration list; missing or unparseable → "Date TBD"
pub fn event_start(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(long_form)
        .unwrap_or_else(|| DATE_TBD.to_string())
}

/// Registration time; unparseable input is shown as received
pub fn registered_at(raw: &str) -> String {
    parse_timestamp(raw)
        .map(long_form)
        .unwrap_or_else(|| raw.to_string())
}

/// "Member since" date on the profile; "-" when unknown
pub fn member_since(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}
