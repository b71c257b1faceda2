//! Expiration date parsing in the business time zone
//!
//! Handlers and the workflow only see UTC instants; local wall-clock input
//! is converted here.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

const DATE_TIME_FORMATS: &[&str] = &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"];
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a day-first date (`dd/mm/yyyy`, optional `HH:MM` or `HH:MM:SS`)
/// as local time in `tz`.
///
/// `-` is accepted as the date separator. A date without a time means local
/// midnight. Returns `None` for unparseable input and for wall-clock times
/// skipped by a DST transition; ambiguous times resolve to the later instant.
pub fn parse_expiration_date(input: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let normalized = input.trim().replace('-', "/");
    if normalized.is_empty() {
        return None;
    }

    let naive = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(&normalized, DATE_FORMAT)
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })?;

    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Europe::Paris;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_date_and_time() {
        // Winter: Paris is UTC+1
        assert_eq!(
            parse_expiration_date("01/01/2024 13:00", Paris),
            Some(utc(2024, 1, 1, 12, 0))
        );
        assert_eq!(
            parse_expiration_date("01/01/2024 13:00:30", Paris),
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 30).unwrap())
        );
    }

    #[test]
    fn test_date_only_is_local_midnight() {
        assert_eq!(
            parse_expiration_date("02/01/2024", Paris),
            Some(utc(2024, 1, 1, 23, 0))
        );
        // Summer: Paris is UTC+2
        assert_eq!(
            parse_expiration_date("15/07/2024", Paris),
            Some(utc(2024, 7, 14, 22, 0))
        );
    }

    #[test]
    fn test_dash_separator_and_whitespace() {
        assert_eq!(
            parse_expiration_date("  01-01-2024 13:00 ", Paris),
            Some(utc(2024, 1, 1, 12, 0))
        );
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_expiration_date("", Paris), None);
        assert_eq!(parse_expiration_date("tomorrow", Paris), None);
        assert_eq!(parse_expiration_date("2024/01/01", Paris), None);
        assert_eq!(parse_expiration_date("31/02/2024", Paris), None);
        assert_eq!(parse_expiration_date("01/01/2024 25:00", Paris), None);
    }

    #[test]
    fn test_dst_gap_is_rejected() {
        // 2024-03-31 02:30 does not exist in Paris
        assert_eq!(parse_expiration_date("31/03/2024 02:30", Paris), None);
    }

    #[test]
    fn test_dst_overlap_takes_later_instant() {
        // 2024-10-27 02:30 happens twice in Paris; the second one is UTC+1
        assert_eq!(
            parse_expiration_date("27/10/2024 02:30", Paris),
            Some(utc(2024, 10, 27, 1, 30))
        );
    }

    #[test]
    fn test_other_zone() {
        assert_eq!(
            parse_expiration_date("01/01/2024 13:00", chrono_tz::UTC),
            Some(utc(2024, 1, 1, 13, 0))
        );
    }
}
