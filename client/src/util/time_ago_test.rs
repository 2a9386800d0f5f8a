use super::*;
use time::Duration;
use time::macros::datetime;

const NOW: OffsetDateTime = datetime!(2025-03-10 12:00:00 UTC);

fn ago(d: Duration) -> String {
    let ts = NOW - d;
    format_relative(&ts.format(&Rfc3339).unwrap(), NOW)
}

#[test]
fn parses_naive_timestamps_as_utc() {
    let ts = parse_timestamp("2025-03-10T11:30:00.123456").unwrap();
    assert_eq!(ts.offset(), time::UtcOffset::UTC);
    assert_eq!(ts.minute(), 30);
}

#[test]
fn parses_rfc3339_with_offset() {
    let ts = parse_timestamp("2025-03-10T13:00:00+01:00").unwrap();
    assert_eq!(NOW - ts, Duration::ZERO);
}

#[test]
fn under_a_minute_is_just_now() {
    assert_eq!(ago(Duration::seconds(30)), "Just now");
}

#[test]
fn minutes_hours_and_days() {
    assert_eq!(ago(Duration::minutes(5)), "5m ago");
    assert_eq!(ago(Duration::minutes(59)), "59m ago");
    assert_eq!(ago(Duration::hours(3)), "3h ago");
    assert_eq!(ago(Duration::days(2)), "2d ago");
}

#[test]
fn older_than_a_week_shows_date() {
    assert_eq!(format_relative("2025-02-01T08:00:00", NOW), "2/1/2025");
}

#[test]
fn naive_input_is_relative_too() {
    assert_eq!(format_relative("2025-03-10T11:00:00", NOW), "1h ago");
}

#[test]
fn garbage_is_returned_verbatim() {
    assert_eq!(format_relative("yesterday-ish", NOW), "yesterday-ish");
}
