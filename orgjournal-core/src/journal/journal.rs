//! The `Journal` struct: reads the monthly files of one journal directory.
use super::date_window::DateWindow;
use super::diagnostic::Diagnostic;
use super::extract_entries::extract_entries;
use super::journal_entry::JournalEntry;
use super::journal_paths::resolve_month_files;
use crate::errors::{JournalError, JournalResult};
use crate::outline::parse_outline;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A journal directory holding `journal-YYYY-MM.<ext>` files.
#[derive(Debug, Clone)]
pub struct Journal {
    pub journal_dir: PathBuf,
    pub file_extension: String,
}

/// The complete result of a load, containing the parsed entries and any diagnostics.
#[derive(Debug, Default)]
pub struct QueryResult {
    pub entries: Vec<JournalEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Journal {
    /// Opens a journal directory. The directory must already exist.
    pub fn open(journal_dir: impl Into<PathBuf>, file_extension: &str) -> JournalResult<Self> {
        let journal_dir = journal_dir.into();
        if !journal_dir.is_dir() {
            return Err(JournalError::InvalidJournalDir { path: journal_dir });
        }
        Ok(Self {
            journal_dir,
            file_extension: file_extension.to_string(),
        })
    }

    /// Loads every entry of the monthly files overlapping `window`.
    ///
    /// No date filtering happens here; entries outside the window but inside one of
    /// its months are returned too. The result is sorted ascending by timestamp,
    /// whatever order the files were read in.
    pub fn load(&self, window: &DateWindow) -> QueryResult {
        let mut result = QueryResult::default();
        let files = resolve_month_files(&self.journal_dir, window, &self.file_extension);
        debug!(
            start = %window.start,
            end = %window.end,
            files = files.existing.len(),
            "resolved journal window"
        );

        for path in files.missing {
            debug!(file = %path.display(), "no journal file for month");
            result.diagnostics.push(Diagnostic::MissingFile { path });
        }

        if files.existing.is_empty() {
            warn!(
                dir = %self.journal_dir.display(),
                "no journal files found for the requested period"
            );
            result.diagnostics.push(Diagnostic::NoFiles {
                dir: self.journal_dir.clone(),
            });
            return result;
        }

        for path in &files.existing {
            let file_result = self.parse_file(path);
            result.entries.extend(file_result.entries);
            result.diagnostics.extend(file_result.diagnostics);
        }

        result.entries.sort_by_key(|e| e.timestamp);
        result
    }

    /// Reads and extracts one file.
    ///
    /// A file that cannot be read or parsed contributes no entries at all, only a
    /// [`Diagnostic::FileError`].
    pub fn parse_file(&self, path: &Path) -> QueryResult {
        let parsed = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))
            .and_then(|content| {
                parse_outline(&content).with_context(|| format!("parsing {}", path.display()))
            });

        match parsed {
            Ok(nodes) => {
                let extracted = extract_entries(&nodes, path);
                QueryResult {
                    entries: extracted.entries,
                    diagnostics: extracted.diagnostics,
                }
            }
            Err(error) => {
                warn!(file = %path.display(), "skipping journal file: {error:#}");
                QueryResult {
                    entries: Vec::new(),
                    diagnostics: vec![Diagnostic::FileError {
                        path: path.to_path_buf(),
                        error,
                    }],
                }
            }
        }
    }
}
