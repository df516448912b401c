use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a timestamp for storage. Fixed-width RFC 3339 (microseconds, `Z`
/// suffix) so that lexicographic ordering in SQL matches chronological order.
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_datetime(value: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("failed to parse {field}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn stored_timestamps_are_fixed_width() {
        let early = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let late = early + chrono::Duration::milliseconds(1500);
        let a = format_datetime(&early);
        let b = format_datetime(&late);
        assert_eq!(a.len(), b.len());
        assert!(a < b);
    }

    #[test]
    fn round_trips_through_storage_format() {
        let now = Utc::now();
        let parsed = parse_datetime(&format_datetime(&now), "created_at").unwrap();
        assert_eq!(parsed.timestamp_micros(), now.timestamp_micros());
    }
}
