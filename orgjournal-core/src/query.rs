//! Filters over an already loaded entry list. Nothing here touches the disk.
use crate::journal::{DateQuery, JournalEntry};
use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which fields a keyword search looks at. All enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchOptions {
    /// Search in entry bodies.
    #[serde(default = "enabled")]
    pub search_in_body: bool,
    /// Search in entry titles.
    #[serde(default = "enabled")]
    pub search_in_title: bool,
    /// Search in entry tags.
    #[serde(default = "enabled")]
    pub search_in_tags: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            search_in_body: true,
            search_in_title: true,
            search_in_tags: true,
        }
    }
}

fn enabled() -> bool {
    true
}

/// Keeps entries satisfying every bound present in `query`:
/// `timestamp >= now - last_days`, `timestamp >= since` and `timestamp < before`.
///
/// The bounds are AND-ed, so `last_days = 7` with a `since` 30 days back keeps
/// only the last 7 days.
pub fn filter_by_date(
    entries: Vec<JournalEntry>,
    query: &DateQuery,
    now: NaiveDateTime,
) -> Vec<JournalEntry> {
    // A cutoff before the representable calendar excludes nothing.
    let cutoff = query.cutoff(now).unwrap_or_default();
    let since = query.since_start();
    let before = query.before_start();

    entries
        .into_iter()
        .filter(|e| cutoff.is_none_or(|c| e.timestamp >= c))
        .filter(|e| since.is_none_or(|s| e.timestamp >= s))
        .filter(|e| before.is_none_or(|b| e.timestamp < b))
        .collect()
}

/// Case-insensitive substring search. An empty query keeps everything.
pub fn search_entries(
    entries: Vec<JournalEntry>,
    query: &str,
    options: &SearchOptions,
) -> Vec<JournalEntry> {
    if query.is_empty() {
        return entries;
    }
    let needle = query.to_lowercase();
    entries
        .into_iter()
        .filter(|e| matches_keyword(e, &needle, options))
        .collect()
}

/// `needle` must already be lowercase.
pub fn matches_keyword(entry: &JournalEntry, needle: &str, options: &SearchOptions) -> bool {
    (options.search_in_title && entry.title.to_lowercase().contains(needle))
        || (options.search_in_body && entry.body.to_lowercase().contains(needle))
        || (options.search_in_tags
            && entry
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(needle)))
}

/// Keeps entries having one of `include` (any entry when `include` is empty) and none of
/// `exclude`. Exclusion wins. Tags compare exactly.
pub fn filter_by_tags(
    entries: Vec<JournalEntry>,
    include: &[String],
    exclude: &[String],
) -> Vec<JournalEntry> {
    entries
        .into_iter()
        .filter(|e| include.is_empty() || e.has_any_tag(include))
        .filter(|e| !e.has_any_tag(exclude))
        .collect()
}

/// Entries of the last `days` days without any of `exclude`.
pub fn recent_entries(
    entries: Vec<JournalEntry>,
    days: u32,
    now: NaiveDateTime,
    exclude: &[String],
) -> Vec<JournalEntry> {
    let query = DateQuery {
        last_days: Some(days),
        ..Default::default()
    };
    filter_by_tags(filter_by_date(entries, &query, now), &[], exclude)
}
