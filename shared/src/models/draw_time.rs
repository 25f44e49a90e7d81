use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend identifier of a draw-time slot (`_id` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawTimeId(pub String);

impl DrawTimeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DrawTimeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DrawTimeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DrawTimeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A named time-of-day slot that token entries are grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawTime {
    #[serde(rename = "_id")]
    pub id: DrawTimeId,

    /// 24-hour `HH:MM` or `HH:MM:SS`, exactly as the backend sent it.
    /// Non-string values arrive as an empty string and never parse.
    #[serde(rename = "drawTime", deserialize_with = "super::lenient::string_or_empty")]
    pub time_of_day: String,
}

impl DrawTime {
    pub fn new(id: impl Into<DrawTimeId>, time_of_day: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            time_of_day: time_of_day.into(),
        }
    }

    /// Parsed time of day, `None` when the backend value is malformed.
    pub fn time(&self) -> Option<NaiveTime> {
        parse_time_of_day(&self.time_of_day)
    }

    pub fn minutes_since_midnight(&self) -> Option<u32> {
        self.time().map(minutes_of_day)
    }
}

/// Parses `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S%.f"))
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

/// Whole minutes since midnight; seconds are dropped.
pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// The draw times fetched for the form, looked up by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawTimeCatalog {
    draw_times: Vec<DrawTime>,
}

impl DrawTimeCatalog {
    pub fn new(draw_times: Vec<DrawTime>) -> Self {
        Self { draw_times }
    }

    pub fn is_empty(&self) -> bool {
        self.draw_times.is_empty()
    }

    pub fn len(&self) -> usize {
        self.draw_times.len()
    }

    pub fn as_slice(&self) -> &[DrawTime] {
        &self.draw_times
    }

    pub fn get(&self, id: &DrawTimeId) -> Option<&DrawTime> {
        self.draw_times.iter().find(|d| &d.id == id)
    }

    pub fn contains(&self, id: &DrawTimeId) -> bool {
        self.get(id).is_some()
    }

    /// Time-of-day string for display or for the create payload.
    pub fn label(&self, id: &DrawTimeId) -> Option<&str> {
        self.get(id).map(|d| d.time_of_day.as_str())
    }
}
