//! Relative timestamps for the session list.
//!
//! The backend emits ISO 8601 timestamps, sometimes without an offset
//! (naive UTC). Unparseable input is shown as-is.

#[cfg(test)]
#[path = "time_ago_test.rs"]
mod time_ago_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Parse an RFC 3339 timestamp, or a naive one interpreted as UTC.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }
    let naive = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
    PrimitiveDateTime::parse(raw, naive).ok().map(PrimitiveDateTime::assume_utc)
}

/// `Just now`, `5m ago`, `3h ago`, `2d ago`, or the calendar date after a week.
pub fn format_relative(raw: &str, now: OffsetDateTime) -> String {
    let Some(ts) = parse_timestamp(raw) else {
        return raw.to_owned();
    };
    let elapsed = now - ts;
    let minutes = elapsed.whole_minutes();
    let hours = elapsed.whole_hours();
    let days = elapsed.whole_days();
    if minutes < 1 {
        "Just now".to_owned()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        let date = format_description!("[month padding:none]/[day padding:none]/[year]");
        ts.format(date).unwrap_or_else(|_| raw.to_owned())
    }
}

/// Current wall-clock time. Uses the JS clock in the browser, where the
/// system clock is unavailable.
pub fn now_utc() -> OffsetDateTime {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let nanos = (js_sys::Date::now() * 1_000_000.0) as i128;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc()
    }
}
