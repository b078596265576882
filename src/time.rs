//! ISO 8601 date and interval text.
//!
//! CZML expresses instants as ISO 8601 strings and time spans as
//! `"start/stop"` interval strings. All output uses UTC with a `Z` suffix;
//! subsecond digits appear only when the instant has them.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats an instant as an ISO 8601 string, e.g. `2012-04-02T12:00:00Z`.
pub fn to_iso8601(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Formats a time span as a CZML interval string, e.g.
/// `2012-04-02T12:00:00Z/2012-04-02T13:00:00Z`.
pub fn interval_string(start: &DateTime<Utc>, stop: &DateTime<Utc>) -> String {
    format!("{}/{}", to_iso8601(start), to_iso8601(stop))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_iso8601() {
        let date = Utc.with_ymd_and_hms(2012, 4, 2, 12, 0, 0).unwrap();
        assert_eq!(to_iso8601(&date), "2012-04-02T12:00:00Z");
    }

    #[test]
    fn test_interval_string() {
        let start = Utc.with_ymd_and_hms(2012, 4, 2, 12, 0, 0).unwrap();
        let stop = Utc.with_ymd_and_hms(2012, 4, 2, 13, 0, 0).unwrap();
        assert_eq!(
            interval_string(&start, &stop),
            "2012-04-02T12:00:00Z/2012-04-02T13:00:00Z"
        );
    }
}
