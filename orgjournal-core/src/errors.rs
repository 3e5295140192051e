//! Errors that abort a single query.
//!
//! Problems local to one journal file never end up here; those are collected as
//! [`Diagnostic`](crate::journal::Diagnostic)s next to the entries that did load.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    /// The journal directory (configured or passed per call) is missing or not a directory.
    #[error("journal directory '{}' does not exist or is not a directory", path.display())]
    InvalidJournalDir { path: PathBuf },

    /// A date parameter was not a real `YYYY-MM-DD` calendar date.
    #[error("invalid date for '{param}': '{input}' (expected YYYY-MM-DD)")]
    InvalidDateFormat { param: &'static str, input: String },

    /// A day count reaches back past the earliest representable date.
    #[error("{days} days back from now is outside the supported date range")]
    DaysOutOfRange { days: u32 },

    /// Tool arguments did not match the tool's parameters.
    #[error("invalid arguments for '{tool}': {source}")]
    InvalidArguments {
        tool: String,
        source: serde_json::Error,
    },

    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type JournalResult<T> = Result<T, JournalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = JournalError::InvalidDateFormat {
            param: "since",
            input: "01/02/2025".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("since"));
        assert!(msg.contains("01/02/2025"));

        let err = JournalError::InvalidJournalDir {
            path: PathBuf::from("/nope"),
        };
        assert!(err.to_string().contains("/nope"));
    }
}
