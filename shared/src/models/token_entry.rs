use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::format::parse_calendar_date;
use crate::models::draw_time::parse_time_of_day;

/// A recorded token entry as listed on the agent dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEntry {
    /// Backend identifier, only needed for deletion.
    #[serde(rename = "tokenId", alias = "_id", default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,

    #[serde(rename = "tokenNumber", deserialize_with = "super::lenient::string_or_number")]
    pub token_number: String,

    #[serde(rename = "tokenCount", deserialize_with = "super::lenient::count")]
    pub token_count: u64,

    /// Calendar date, either `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date: String,

    #[serde(rename = "drawTime")]
    pub draw_time: String,
}

impl TokenEntry {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }

    pub fn parsed_draw_time(&self) -> Option<NaiveTime> {
        parse_time_of_day(&self.draw_time)
    }

    pub fn token_value(&self) -> Option<u32> {
        self.token_number.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_entry_from_backend_json() {
        let json = r#"{
            "tokenId": "t-1",
            "tokenNumber": "07",
            "tokenCount": 25,
            "date": "2024-03-05T00:00:00.000Z",
            "drawTime": "14:30"
        }"#;
        let entry: TokenEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.token_id.as_deref(), Some("t-1"));
        assert_eq!(entry.token_number, "07");
        assert_eq!(entry.token_value(), Some(7));
        assert_eq!(entry.token_count, 25);
        assert_eq!(entry.parsed_date(), NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(entry.parsed_draw_time(), NaiveTime::from_hms_opt(14, 30, 0));
    }

    #[test]
    fn test_numeric_token_and_string_count_are_accepted() {
        let json = r#"{"tokenNumber": 42, "tokenCount": "300", "date": "2024-01-01", "drawTime": "09:00"}"#;
        let entry: TokenEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.token_id, None);
        assert_eq!(entry.token_number, "42");
        assert_eq!(entry.token_count, 300);
    }

    #[test]
    fn test_mongo_style_id_alias() {
        let json = r#"{"_id": "abc", "tokenNumber": "1", "tokenCount": 1, "date": "2024-01-01", "drawTime": "09:00"}"#;
        let entry: TokenEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.token_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_negative_count_is_rejected() {
        let json = r#"{"tokenNumber": "1", "tokenCount": -4, "date": "2024-01-01", "drawTime": "09:00"}"#;
        assert!(serde_json::from_str::<TokenEntry>(json).is_err());
    }
}
