use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Accepts a bare date, a naive date-time (with optional fractional seconds),
/// or an offset date-time with `Z` or a numeric zone.
pub fn is_iso_datetime(raw: &str) -> bool {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
        || NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").is_ok()
        || NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || DateTime::parse_from_rfc3339(raw).is_ok()
}

#[cfg(test)]
mod tests {
    use super::is_iso_datetime;

    #[test]
    fn accepts_dates_and_datetimes() {
        assert!(is_iso_datetime("2024-01-15"));
        assert!(is_iso_datetime("2024-01-15T09:30:00"));
        assert!(is_iso_datetime("2024-01-15T09:30:00.123"));
        assert!(is_iso_datetime("2024-01-15T09:30:00Z"));
        assert!(is_iso_datetime("2024-01-15T09:30:00+02:00"));
    }

    #[test]
    fn rejects_non_iso_values() {
        assert!(!is_iso_datetime("15/01/2024"));
        assert!(!is_iso_datetime("January 15, 2024"));
        assert!(!is_iso_datetime("2024-13-40"));
        assert!(!is_iso_datetime("not a date"));
    }
}
