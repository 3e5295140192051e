pub mod config;
pub mod errors;
pub mod journal;
pub mod outline;
pub mod query;
pub mod tools;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use errors::{JournalError, JournalResult};
pub use journal::{DateQuery, DateWindow, Diagnostic, Journal, JournalEntry, QueryResult};
pub use query::SearchOptions;
pub use tools::{
    EntriesResponse, GetEntriesByTagParams, GetJournalEntriesParams, GetRecentEntriesParams,
    OrgJournal, SearchJournalParams, ToolName,
};
