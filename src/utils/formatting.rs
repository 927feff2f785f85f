//! Formatting utilities for display

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Parse a backend timestamp into wall-clock time in `tz`.
///
/// RFC 3339 timestamps are converted into `tz`. Offset-less ISO date-times
/// (Python's `isoformat()`) and bare dates carry no zone and are taken as
/// already local.
pub fn parse_timestamp_in<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> Option<NaiveDateTime> {
    let timestamp = timestamp.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(parsed.with_timezone(tz).naive_local());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// [`format_date`] in an explicit zone
pub fn format_date_in<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> String {
    match parse_timestamp_in(timestamp, tz) {
        Some(parsed) => parsed.format("%b %-d, %Y").to_string(),
        None => timestamp.to_string(),
    }
}

/// [`format_timestamp`] in an explicit zone
pub fn format_timestamp_in<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> String {
    match parse_timestamp_in(timestamp, tz) {
        Some(parsed) => parsed.format("%b %-d, %Y, %-I:%M:%S %p").to_string(),
        None => timestamp.to_string(),
    }
}

/// Format a timestamp as a date in the viewer's zone, e.g. `Jan 1, 2024`
pub fn format_date(timestamp: &str) -> String {
    format_date_in(timestamp, &Local)
}

/// Format a timestamp as date and time in the viewer's zone, e.g.
/// `Jan 1, 2024, 1:00:00 AM`
pub fn format_timestamp(timestamp: &str) -> String {
    format_timestamp_in(timestamp, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use rstest::rstest;

    #[rstest]
    #[case("2024-01-01T00:00:00Z", "Jan 1, 2024")]
    #[case("2024-12-31T23:59:59.999Z", "Dec 31, 2024")]
    #[case("2024-06-15T10:30:00+02:00", "Jun 15, 2024")]
    #[case("2024-06-15T01:30:00+02:00", "Jun 14, 2024")]
    #[case("2024-03-05T10:00:00.123456", "Mar 5, 2024")]
    #[case("2024-03-05", "Mar 5, 2024")]
    fn test_format_date_utc(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_date_in(input, &Utc), expected);
    }

    #[rstest]
    #[case("2024-01-01T01:00:00Z", "Jan 1, 2024, 1:00:00 AM")]
    #[case("2024-01-01T13:05:09Z", "Jan 1, 2024, 1:05:09 PM")]
    #[case("2024-01-01T00:00:00", "Jan 1, 2024, 12:00:00 AM")]
    #[case("2024-07-04T18:30:00-04:00", "Jul 4, 2024, 10:30:00 PM")]
    fn test_format_timestamp_utc(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_timestamp_in(input, &Utc), expected);
    }

    #[test]
    fn test_converts_into_viewer_zone() {
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_date_in("2024-01-01T00:00:00Z", &new_york), "Dec 31, 2023");
        assert_eq!(
            format_timestamp_in("2024-01-01T01:00:00Z", &new_york),
            "Dec 31, 2023, 8:00:00 PM"
        );

        // No offset means already local
        assert_eq!(
            format_timestamp_in("2024-01-01T01:00:00", &new_york),
            "Jan 1, 2024, 1:00:00 AM"
        );
    }

    #[test]
    fn test_unparsable_passes_through() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
        assert!(parse_timestamp_in("2024-13-01", &Utc).is_none());
    }
}
