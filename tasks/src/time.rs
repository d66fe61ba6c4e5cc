//! Display formatting for API timestamps.
//!
//! The backend sends ISO 8601 values, usually without an offset. Those are
//! treated as wall-clock time in the viewer's zone; date-only values are
//! midnight UTC. Anything unparseable renders as an empty string.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Format `raw` in the local time zone.
#[must_use]
pub fn format_timestamp(raw: Option<&str>) -> String {
    format_timestamp_in(raw, &Local)
}

/// Format `raw` as `M/D/YYYY, h:mm:ss AM` in `tz`.
#[must_use]
pub fn format_timestamp_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };
    parse_in(raw, tz).map_or_else(String::new, |at| at.format(DISPLAY_FORMAT).to_string())
}

fn parse_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(tz));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return local_in(&naive, tz);
        }
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?).with_timezone(tz))
}

/// Wall-clock time in `tz`. A time skipped by a forward DST jump moves
/// forward by the usual one-hour gap.
fn local_in<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Some(at) = tz.from_local_datetime(naive).earliest() {
        return Some(at);
    }
    let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
    tz.from_local_datetime(&shifted).earliest().or_else(|| Some(tz.from_utc_datetime(naive)))
}

/// Status followed by the creation time when one can be shown.
#[must_use]
pub fn meta_line(status: &str, created_label: &str) -> String {
    if created_label.is_empty() {
        status.to_owned()
    } else {
        format!("{status} · Created {created_label}")
    }
}
