mod date_window;
mod diagnostic;
mod extract_entries;
mod heading;
mod journal;
mod journal_entry;
mod journal_paths;

pub use date_window::{DateQuery, DateWindow, epoch_floor};
pub use diagnostic::Diagnostic;
pub use extract_entries::{ENTRY_LEVEL, ExtractResult, extract_entries};
pub use heading::{DecomposedHeading, decompose_heading, extract_tags, remove_tags, remove_timestamps};
pub use journal::{Journal, QueryResult};
pub use journal_entry::JournalEntry;
pub use journal_paths::{ResolvedFiles, month_file, month_file_name, resolve_month_files};
