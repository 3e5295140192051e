use std::fmt;
use std::path::{Path, PathBuf};

/// Represents a non-critical issue that occurred while loading entries.
///
/// Diagnostics are reported next to the entries that did load, so one broken file
/// or half-written entry never fails a query.
#[derive(Debug)]
pub enum Diagnostic {
    /// The file could not be read or parsed; none of its entries were used.
    FileError { path: PathBuf, error: anyhow::Error },
    /// A level-4 node without any timestamp was skipped.
    MissingTimestamp { path: PathBuf, heading: String },
    /// A month inside the window has no journal file.
    MissingFile { path: PathBuf },
    /// No journal file exists for any month of the window.
    NoFiles { dir: PathBuf },
}

impl Diagnostic {
    pub fn path(&self) -> &Path {
        match self {
            Diagnostic::FileError { path, .. }
            | Diagnostic::MissingTimestamp { path, .. }
            | Diagnostic::MissingFile { path } => path,
            Diagnostic::NoFiles { dir } => dir,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::FileError { path, error } => {
                write!(f, "skipped '{}': {error:#}", path.display())
            }
            Diagnostic::MissingTimestamp { path, heading } => {
                write!(
                    f,
                    "skipped entry without timestamp in '{}': {heading}",
                    path.display()
                )
            }
            Diagnostic::MissingFile { path } => {
                write!(f, "no journal file '{}'", path.display())
            }
            Diagnostic::NoFiles { dir } => {
                write!(
                    f,
                    "no journal files in '{}' for the requested period",
                    dir.display()
                )
            }
        }
    }
}
