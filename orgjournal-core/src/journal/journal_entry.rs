use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One level-4 outline node that carried a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    pub date: NaiveDate,
    /// Full weekday name, e.g. `Saturday`.
    pub day_of_week: String,
    /// Serialized without offset, e.g. `2025-01-04T09:00:00`.
    pub timestamp: NaiveDateTime,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    /// Name of the monthly file the entry came from.
    pub file: String,
}

impl JournalEntry {
    pub fn has_any_tag(&self, tags: &[String]) -> bool {
        self.tags.iter().any(|t| tags.contains(t))
    }
}
