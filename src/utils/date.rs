//! Date formats used by store records, sitemaps, feeds and the outbox.
//!
//! - `YYYY-MM-DD` for store records and sitemap `lastmod`
//! - RFC 2822 for RSS `pubDate` and `lastBuildDate`
//! - RFC 3339 (seconds, `Z`) for the outbox log

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Record date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a record date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The day at midnight UTC, as RFC 2822.
pub fn rfc2822_midnight(date: NaiveDate) -> Option<String> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().to_rfc2822())
}

/// Outbox timestamp with second precision.
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_dates() {
        let date = parse_date("2026-10-18").unwrap();
        assert_eq!(format_date(date), "2026-10-18");
        assert!(parse_date("2026/10/18").is_none());
        assert!(parse_date("2023-02-29").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_rfc2822_midnight() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(
            rfc2822_midnight(date).as_deref(),
            Some("Sun, 18 Oct 2026 00:00:00 +0000")
        );
    }

    #[test]
    fn test_timestamp_uses_z_suffix() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        assert_eq!(timestamp(now), "2026-10-18T09:30:00Z");
    }
}
