use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses the text as a UTC date and time, ignoring surrounding whitespace.
///
/// The text is tried against `format` first, as a date and time or as a
/// date at midnight, then as an RFC 3339 timestamp, and finally as a
/// `%Y-%m-%d` date at midnight. Values without an offset are read as UTC.
pub fn parse_date_time(text: &str, format: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
        return Some(dt.and_utc());
    }
    if let Some(dt) = parse_midnight(text, format) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_midnight(text, "%Y-%m-%d")
}

/// Parses the text as a date at midnight UTC.
fn parse_midnight(text: &str, format: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(text, format)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::parse_date_time;
    use crate::config::DEFAULT_DATE_TIME_FORMAT;
    use chrono::{TimeZone, Utc};

    #[test]
    fn it_parses_date_times() {
        let expected = Utc.with_ymd_and_hms(2024, 2, 29, 13, 45, 10).unwrap();
        assert_eq!(
            parse_date_time("2024-02-29 13:45:10", DEFAULT_DATE_TIME_FORMAT),
            Some(expected)
        );
        assert_eq!(
            parse_date_time("2024-02-29T15:45:10+02:00", DEFAULT_DATE_TIME_FORMAT),
            Some(expected)
        );
        assert_eq!(
            parse_date_time("29/02/2024 13:45:10", "%d/%m/%Y %H:%M:%S"),
            Some(expected)
        );
        assert_eq!(
            parse_date_time("2024-02-29", DEFAULT_DATE_TIME_FORMAT),
            Some(Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn it_parses_dates_with_date_only_formats() {
        let midnight = Utc.with_ymd_and_hms(2030, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(parse_date_time("02/01/2030", "%d/%m/%Y"), Some(midnight));
        assert_eq!(parse_date_time(" 2030.01.02 ", "%Y.%m.%d"), Some(midnight));
        assert_eq!(parse_date_time("02/01/2030 03:04", "%d/%m/%Y"), None);
        assert_eq!(parse_date_time("31/02/2030", "%d/%m/%Y"), None);
    }

    #[test]
    fn it_rejects_invalid_date_times() {
        assert_eq!(parse_date_time("2023-02-29", DEFAULT_DATE_TIME_FORMAT), None);
        assert_eq!(parse_date_time("fake", DEFAULT_DATE_TIME_FORMAT), None);
        assert_eq!(parse_date_time("", DEFAULT_DATE_TIME_FORMAT), None);
        assert_eq!(
            parse_date_time("2024-13-01 00:00:00", DEFAULT_DATE_TIME_FORMAT),
            None
        );
    }
}
