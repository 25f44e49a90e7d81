use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::draw_time::parse_time_of_day;

/// Rendered in place of a date or time that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Calendar date from `YYYY-MM-DD`, an RFC 3339 timestamp (UTC date), or a
/// naive `YYYY-MM-DDTHH:MM:SS` timestamp.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc().date());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
        .map(|dt| dt.date())
        .ok()
}

/// `2024-03-05` -> `05/03/2024`.
pub fn format_date(value: &str) -> String {
    parse_calendar_date(value)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// `14:30` -> `2:30 PM`, `00:05:10` -> `12:05 AM`.
pub fn format_time(value: &str) -> String {
    parse_time_of_day(value)
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// 1-based display number of a row, derived only from its position in the
/// current page. Not an identity: it changes whenever sorting or paging does.
pub fn serial_number(page: usize, page_size: usize, index_in_page: usize) -> usize {
    page.saturating_sub(1) * page_size + index_in_page + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("2024-03-05", "05/03/2024" ; "plain date")]
    #[test_case("2024-03-05T00:00:00.000Z", "05/03/2024" ; "utc timestamp")]
    #[test_case("2024-12-31T23:30:00+00:00", "31/12/2024" ; "offset timestamp")]
    #[test_case("2024-03-05T10:15:00", "05/03/2024" ; "naive timestamp")]
    #[test_case("not a date", INVALID_DATE ; "garbage")]
    #[test_case("2024-02-30", INVALID_DATE ; "impossible day")]
    fn test_format_date(input: &str, expected: &str) {
        assert_eq!(format_date(input), expected);
    }

    #[test_case("14:30", "2:30 PM" ; "afternoon")]
    #[test_case("09:05", "9:05 AM" ; "morning")]
    #[test_case("00:05:10", "12:05 AM" ; "just after midnight")]
    #[test_case("12:00", "12:00 PM" ; "noon")]
    #[test_case("23:59:59", "11:59 PM" ; "end of day")]
    #[test_case("7pm", INVALID_DATE ; "garbage")]
    fn test_format_time(input: &str, expected: &str) {
        assert_eq!(format_time(input), expected);
    }

    #[test]
    fn test_serial_number_follows_position() {
        assert_eq!(serial_number(1, 10, 0), 1);
        assert_eq!(serial_number(1, 10, 9), 10);
        assert_eq!(serial_number(3, 10, 4), 25);
        assert_eq!(serial_number(0, 10, 0), 1);
    }
}
