//! The four journal operations offered to tool-calling clients.
//!
//! Every operation resolves its date window, loads the overlapping monthly files,
//! applies its filters and wraps the entries in a fixed response envelope.

use crate::config::Config;
use crate::errors::{JournalError, JournalResult};
use crate::journal::{DateQuery, DateWindow, Diagnostic, Journal, JournalEntry, QueryResult};
use crate::query::{SearchOptions, filter_by_date, filter_by_tags, recent_entries, search_entries};
use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use strum_macros::{AsRefStr, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ToolName {
    GetJournalEntries,
    SearchJournal,
    GetRecentEntries,
    GetEntriesByTag,
}

// ----- parameters -----

/// `get_journal_entries`. Without any date parameter the last 7 days are returned.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GetJournalEntriesParams {
    /// Entries from the last N days (e.g. 7, 30, 90).
    pub last_days: Option<u32>,
    /// Entries from this date onwards (`YYYY-MM-DD`, inclusive).
    pub since: Option<String>,
    /// Entries before this date (`YYYY-MM-DD`, exclusive).
    pub before: Option<String>,
    /// Journal directory; defaults to the configured one.
    pub journal_dir: Option<PathBuf>,
}

/// `search_journal`. Title, body and tags are all searched unless switched off.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchJournalParams {
    /// Search keyword, matched case-insensitively.
    pub query: String,
    #[serde(default)]
    pub last_days: Option<u32>,
    #[serde(default)]
    pub since: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
    #[serde(flatten)]
    pub options: SearchOptions,
    #[serde(default)]
    pub journal_dir: Option<PathBuf>,
}

/// `get_recent_entries`. `days` defaults to the configured window (7).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GetRecentEntriesParams {
    /// Number of days to retrieve.
    pub days: Option<u32>,
    pub journal_dir: Option<PathBuf>,
}

/// `get_entries_by_tag`. Empty `tags` means "any tags"; `exclude_tags` defaults to none.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GetEntriesByTagParams {
    /// Entries having any of these tags; empty means any.
    pub tags: Vec<String>,
    /// Entries having any of these tags are left out.
    pub exclude_tags: Vec<String>,
    pub last_days: Option<u32>,
    pub since: Option<String>,
    pub before: Option<String>,
    pub journal_dir: Option<PathBuf>,
}

// ----- responses -----

#[derive(Debug, Serialize)]
pub struct Period {
    pub last_days: Option<u32>,
    pub since: Option<String>,
    pub before: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct JournalEntriesResponse {
    pub entries: Vec<JournalEntry>,
    pub count: usize,
    pub period: Period,
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Serialize)]
pub struct SearchJournalResponse {
    pub entries: Vec<JournalEntry>,
    pub count: usize,
    pub query: String,
    pub search_options: SearchOptions,
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Serialize)]
pub struct RecentEntriesResponse {
    pub entries: Vec<JournalEntry>,
    pub count: usize,
    pub days: u32,
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Serialize)]
pub struct EntriesByTagResponse {
    pub entries: Vec<JournalEntry>,
    pub count: usize,
    pub tags: Vec<String>,
    pub exclude_tags: Vec<String>,
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

/// Read access shared by every response envelope.
pub trait EntriesResponse {
    fn entries(&self) -> &[JournalEntry];
    fn diagnostics(&self) -> &[Diagnostic];
}

macro_rules! impl_entries_response {
    ($($t:ty),*) => {
        $(impl EntriesResponse for $t {
            fn entries(&self) -> &[JournalEntry] {
                &self.entries
            }
            fn diagnostics(&self) -> &[Diagnostic] {
                &self.diagnostics
            }
        })*
    };
}

impl_entries_response!(
    JournalEntriesResponse,
    SearchJournalResponse,
    RecentEntriesResponse,
    EntriesByTagResponse
);

/// Entries of one window, before any operation-specific filter.
struct Loaded {
    result: QueryResult,
    window: DateWindow,
    query: DateQuery,
    now: NaiveDateTime,
}

/// Entry point for all journal queries.
#[derive(Debug, Clone)]
pub struct OrgJournal {
    pub config: Config,
}

impl OrgJournal {
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn get_journal_entries(
        &self,
        params: &GetJournalEntriesParams,
    ) -> JournalResult<JournalEntriesResponse> {
        let query = DateQuery::from_params(
            params.last_days,
            params.since.as_deref(),
            params.before.as_deref(),
        )?;
        let loaded = self.load(params.journal_dir.as_deref(), query)?;
        let entries = filter_by_date(loaded.result.entries, &loaded.query, loaded.now);

        Ok(JournalEntriesResponse {
            count: entries.len(),
            entries,
            period: Period {
                last_days: loaded.query.last_days,
                since: params.since.clone(),
                before: params.before.clone(),
                start: loaded.window.start,
                end: loaded.window.end,
            },
            diagnostics: loaded.result.diagnostics,
        })
    }

    pub fn search_journal(
        &self,
        params: &SearchJournalParams,
    ) -> JournalResult<SearchJournalResponse> {
        let query = DateQuery::from_params(
            params.last_days,
            params.since.as_deref(),
            params.before.as_deref(),
        )?;
        let loaded = self.load(params.journal_dir.as_deref(), query)?;
        let entries = filter_by_date(loaded.result.entries, &loaded.query, loaded.now);
        let entries = search_entries(entries, &params.query, &params.options);

        Ok(SearchJournalResponse {
            count: entries.len(),
            entries,
            query: params.query.clone(),
            search_options: params.options,
            diagnostics: loaded.result.diagnostics,
        })
    }

    /// Last `days` days, hiding `chore` (or the configured `recent_exclude_tags`).
    pub fn get_recent_entries(
        &self,
        params: &GetRecentEntriesParams,
    ) -> JournalResult<RecentEntriesResponse> {
        let days = params.days.unwrap_or(self.config.default_last_days);
        let query = DateQuery {
            last_days: Some(days),
            ..Default::default()
        };
        let loaded = self.load(params.journal_dir.as_deref(), query)?;
        let entries = recent_entries(
            loaded.result.entries,
            days,
            loaded.now,
            &self.config.recent_exclude_tags,
        );

        Ok(RecentEntriesResponse {
            count: entries.len(),
            entries,
            days,
            diagnostics: loaded.result.diagnostics,
        })
    }

    pub fn get_entries_by_tag(
        &self,
        params: &GetEntriesByTagParams,
    ) -> JournalResult<EntriesByTagResponse> {
        let query = DateQuery::from_params(
            params.last_days,
            params.since.as_deref(),
            params.before.as_deref(),
        )?;
        let loaded = self.load(params.journal_dir.as_deref(), query)?;
        let entries = filter_by_date(loaded.result.entries, &loaded.query, loaded.now);
        let entries = filter_by_tags(entries, &params.tags, &params.exclude_tags);

        Ok(EntriesByTagResponse {
            count: entries.len(),
            entries,
            tags: params.tags.clone(),
            exclude_tags: params.exclude_tags.clone(),
            diagnostics: loaded.result.diagnostics,
        })
    }

    /// Runs a tool from its JSON arguments and returns the JSON envelope.
    pub fn call_tool(&self, tool: ToolName, arguments: Value) -> JournalResult<Value> {
        let arguments = if arguments.is_null() {
            json!({})
        } else {
            arguments
        };
        let response = match tool {
            ToolName::GetJournalEntries => {
                serde_json::to_value(self.get_journal_entries(&parse_arguments(tool, arguments)?)?)
            }
            ToolName::SearchJournal => {
                serde_json::to_value(self.search_journal(&parse_arguments(tool, arguments)?)?)
            }
            ToolName::GetRecentEntries => {
                serde_json::to_value(self.get_recent_entries(&parse_arguments(tool, arguments)?)?)
            }
            ToolName::GetEntriesByTag => {
                serde_json::to_value(self.get_entries_by_tag(&parse_arguments(tool, arguments)?)?)
            }
        };
        Ok(response?)
    }

    fn load(&self, journal_dir: Option<&Path>, query: DateQuery) -> JournalResult<Loaded> {
        let dir = journal_dir.unwrap_or(&self.config.journal_dir);
        let journal = Journal::open(dir, &self.config.file_extension)?;
        let query = query.or_default_days(self.config.default_last_days);
        let now = self.config.now();
        let window = DateWindow::resolve(&query, now)?;
        Ok(Loaded {
            result: journal.load(&window),
            window,
            query,
            now,
        })
    }
}

fn parse_arguments<T: DeserializeOwned>(tool: ToolName, arguments: Value) -> JournalResult<T> {
    serde_json::from_value(arguments).map_err(|source| JournalError::InvalidArguments {
        tool: tool.as_ref().to_string(),
        source,
    })
}

impl ToolName {
    pub fn description(self) -> &'static str {
        match self {
            ToolName::GetJournalEntries => {
                "Retrieve journal entries for a date range. Defaults to the last 7 days."
            }
            ToolName::SearchJournal => {
                "Search journal entries by keyword (case-insensitive) in titles, bodies and tags."
            }
            ToolName::GetRecentEntries => {
                "Get entries from the last N days (default 7), leaving out entries tagged `chore`."
            }
            ToolName::GetEntriesByTag => {
                "Filter journal entries by tags to include and tags to exclude. Exclusion wins."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{JANUARY_2025, at, mk_config, write_month};
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use tempfile::{TempDir, tempdir};

    /// Journal with January 2025 on disk, "now" pinned to 2025-01-06 12:00.
    fn mk_journal() -> (OrgJournal, TempDir) {
        let tmp = tempdir().unwrap();
        write_month(tmp.path(), "2025-01", JANUARY_2025);
        let config = mk_config(tmp.path().to_path_buf(), at(2025, 1, 6, 12, 0));
        (OrgJournal::with_config(config), tmp)
    }

    fn titles(entries: &[JournalEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn default_period_is_last_seven_days() {
        let (j, _tmp) = mk_journal();
        let res = j
            .get_journal_entries(&GetJournalEntriesParams::default())
            .unwrap();
        assert_eq!(res.count, 5);
        assert_eq!(res.period.last_days, Some(7));
        assert_eq!(res.period.start, at(2024, 12, 30, 12, 0));
        assert_eq!(res.period.end, at(2025, 1, 7, 12, 0));
        assert_eq!(
            titles(&res.entries),
            vec![
                "Daily Standup",
                "Personal Note",
                "Project Meeting",
                "Code Review",
                "Laundry"
            ]
        );
    }

    #[test]
    fn last_days_and_since_are_both_applied() {
        let (j, _tmp) = mk_journal();
        let res = j
            .get_journal_entries(&GetJournalEntriesParams {
                last_days: Some(2),
                since: Some("2024-12-01".to_string()),
                ..Default::default()
            })
            .unwrap();
        // The two-day cutoff (2025-01-04 12:00) is stricter than `since`.
        assert_eq!(titles(&res.entries), vec!["Code Review", "Laundry"]);
        assert_eq!(res.period.since.as_deref(), Some("2024-12-01"));
    }

    #[test]
    fn since_and_before_select_a_range() {
        let (j, _tmp) = mk_journal();
        let res = j
            .get_journal_entries(&GetJournalEntriesParams {
                since: Some("2025-01-04".to_string()),
                before: Some("2025-01-05".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(titles(&res.entries), vec!["Project Meeting", "Code Review"]);
        assert_eq!(res.period.last_days, None);
    }

    #[test]
    fn invalid_date_is_an_error() {
        let (j, _tmp) = mk_journal();
        let err = j
            .get_journal_entries(&GetJournalEntriesParams {
                since: Some("04/01/2025".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(
            err,
            JournalError::InvalidDateFormat { param: "since", .. }
        ));
    }

    #[test]
    fn invalid_journal_dir_override_does_not_fall_back() {
        let (j, tmp) = mk_journal();
        let missing = tmp.path().join("elsewhere");
        let err = j
            .get_recent_entries(&GetRecentEntriesParams {
                days: None,
                journal_dir: Some(missing.clone()),
            })
            .unwrap_err();
        assert!(matches!(err, JournalError::InvalidJournalDir { path } if path == missing));
    }

    #[test]
    fn journal_dir_override_is_used() {
        let (j, _tmp) = mk_journal();
        let other = tempdir().unwrap();
        write_month(other.path(), "2025-01", "**** [2025-01-05 Sun 08:00] Elsewhere\n");
        let res = j
            .get_journal_entries(&GetJournalEntriesParams {
                journal_dir: Some(other.path().to_path_buf()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(titles(&res.entries), vec!["Elsewhere"]);
    }

    #[test]
    fn search_is_case_insensitive_and_echoes_options() {
        let (j, _tmp) = mk_journal();
        let res = j
            .search_journal(&SearchJournalParams {
                query: "PROJECT".to_string(),
                last_days: None,
                since: None,
                before: None,
                options: SearchOptions::default(),
                journal_dir: None,
            })
            .unwrap();
        assert_eq!(titles(&res.entries), vec!["Personal Note", "Project Meeting"]);
        assert_eq!(res.count, 2);
        assert_eq!(res.query, "PROJECT");
        assert!(res.search_options.search_in_body);
    }

    #[test]
    fn recent_entries_hide_chores_but_tag_filter_does_not() {
        let (j, _tmp) = mk_journal();
        let recent = j
            .get_recent_entries(&GetRecentEntriesParams::default())
            .unwrap();
        assert_eq!(recent.days, 7);
        assert!(!titles(&recent.entries).contains(&"Laundry"));
        assert_eq!(recent.count, 4);

        let by_tag = j
            .get_entries_by_tag(&GetEntriesByTagParams::default())
            .unwrap();
        assert!(titles(&by_tag.entries).contains(&"Laundry"));
        assert_eq!(by_tag.count, 5);
    }

    #[test]
    fn tag_filter_includes_and_excludes() {
        let (j, _tmp) = mk_journal();
        let res = j
            .get_entries_by_tag(&GetEntriesByTagParams {
                tags: vec!["meeting".to_string()],
                exclude_tags: vec!["work".to_string()],
                ..Default::default()
            })
            .unwrap();
        assert_eq!(titles(&res.entries), vec!["Daily Standup"]);
        assert_eq!(res.tags, vec!["meeting"]);
        assert_eq!(res.exclude_tags, vec!["work"]);
    }

    #[test]
    fn diagnostics_travel_with_the_response() {
        let (j, _tmp) = mk_journal();
        let res = j
            .get_journal_entries(&GetJournalEntriesParams {
                since: Some("2024-12-01".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(res.count, 5);
        assert!(
            res.diagnostics
                .iter()
                .any(|d| matches!(d, Diagnostic::MissingFile { path } if path.ends_with("journal-2024-12.org")))
        );
        assert!(
            res.diagnostics
                .iter()
                .any(|d| matches!(d, Diagnostic::MissingTimestamp { .. }))
        );
    }

    #[test]
    fn empty_journal_directory_is_not_an_error() {
        let tmp = tempdir().unwrap();
        let j = OrgJournal::with_config(mk_config(tmp.path().to_path_buf(), at(2025, 1, 6, 12, 0)));
        let res = j
            .get_journal_entries(&GetJournalEntriesParams::default())
            .unwrap();
        assert_eq!(res.count, 0);
        assert!(res.entries.is_empty());
    }

    #[test]
    fn call_tool_returns_json_envelopes() {
        let (j, _tmp) = mk_journal();
        let value = j
            .call_tool(
                ToolName::SearchJournal,
                json!({ "query": "standup", "search_in_body": false }),
            )
            .unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["query"], "standup");
        assert_eq!(value["search_options"]["search_in_body"], false);
        assert_eq!(value["search_options"]["search_in_tags"], true);
        let entry = &value["entries"][0];
        assert_eq!(entry["title"], "Daily Standup");
        assert_eq!(entry["timestamp"], "2025-01-03T10:00:00");
        assert_eq!(entry["day_of_week"], "Friday");
        assert_eq!(entry["tags"], json!(["meeting"]));
        assert_eq!(entry["file"], "journal-2025-01.org");
        assert!(value.get("diagnostics").is_none());

        let value = j.call_tool(ToolName::GetRecentEntries, Value::Null).unwrap();
        assert_eq!(value["days"], 7);

        let value = j
            .call_tool(ToolName::GetJournalEntries, json!({ "last_days": 1 }))
            .unwrap();
        assert_eq!(value["period"]["start"], "2025-01-05T12:00:00");
        assert_eq!(value["count"], 0);
    }

    #[test]
    fn call_tool_rejects_bad_arguments() {
        let (j, _tmp) = mk_journal();
        let err = j
            .call_tool(ToolName::SearchJournal, json!({ "last_days": 3 }))
            .unwrap_err();
        assert!(matches!(err, JournalError::InvalidArguments { .. }));

        let err = j
            .call_tool(ToolName::GetJournalEntries, json!({ "last_days": -1 }))
            .unwrap_err();
        assert!(matches!(err, JournalError::InvalidArguments { .. }));
    }

    #[test]
    fn enormous_day_counts_are_rejected_without_panicking() {
        let (j, _tmp) = mk_journal();
        let err = j
            .call_tool(ToolName::GetJournalEntries, json!({ "last_days": 4000000000u32 }))
            .unwrap_err();
        assert!(matches!(err, JournalError::DaysOutOfRange { days: 4000000000 }));

        let err = j
            .get_recent_entries(&GetRecentEntriesParams {
                days: Some(u32::MAX),
                journal_dir: None,
            })
            .unwrap_err();
        assert!(matches!(err, JournalError::DaysOutOfRange { .. }));

        let err = j
            .call_tool(
                ToolName::SearchJournal,
                json!({ "query": "x", "last_days": u32::MAX }),
            )
            .unwrap_err();
        assert!(err.to_string().contains("outside the supported date range"));
    }

    #[test]
    fn tool_names_round_trip_through_strings() {
        let names: Vec<String> = ToolName::iter().map(|t| t.as_ref().to_string()).collect();
        assert_eq!(
            names,
            vec![
                "get_journal_entries",
                "search_journal",
                "get_recent_entries",
                "get_entries_by_tag"
            ]
        );
        assert_eq!(ToolName::from_str("search_journal").unwrap(), ToolName::SearchJournal);
        assert!(ToolName::from_str("delete_journal").is_err());
        for tool in ToolName::iter() {
            assert!(!tool.description().is_empty());
        }
    }

    #[test]
    fn parameter_schemas_follow_the_serde_shape() {
        let search = schemars::schema_for!(SearchJournalParams);
        let search = search.as_value();
        assert_eq!(search["type"], "object");
        assert_eq!(search["required"], json!(["query"]));
        // Flattened search options appear as top-level properties.
        assert!(search["properties"]["search_in_body"].is_object());
        assert!(search["properties"]["journal_dir"].is_object());

        let by_tag = schemars::schema_for!(GetEntriesByTagParams);
        let by_tag = by_tag.as_value();
        assert!(by_tag["properties"]["exclude_tags"].is_object());

        let recent = schemars::schema_for!(GetRecentEntriesParams);
        assert!(recent.as_value()["properties"]["days"].is_object());
    }
}
