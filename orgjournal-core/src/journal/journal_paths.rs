use super::date_window::DateWindow;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// `journal-2025-01.org`
pub fn month_file_name(month: NaiveDate, extension: &str) -> String {
    format!("journal-{}.{extension}", month.format("%Y-%m"))
}

pub fn month_file(root: &Path, month: NaiveDate, extension: &str) -> PathBuf {
    root.join(month_file_name(month, extension))
}

/// Monthly files overlapping a window, in calendar order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ResolvedFiles {
    pub existing: Vec<PathBuf>,
    /// Months of the window that have no file yet.
    pub missing: Vec<PathBuf>,
}

pub fn resolve_month_files(root: &Path, window: &DateWindow, extension: &str) -> ResolvedFiles {
    let mut resolved = ResolvedFiles::default();
    for month in window.months() {
        let path = month_file(root, month, extension);
        if path.is_file() {
            resolved.existing.push(path);
        } else {
            resolved.missing.push(path);
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn at(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn file_names_are_zero_padded() {
        let month = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(month_file_name(month, "org"), "journal-2025-03.org");
        assert_eq!(
            month_file(Path::new("/j"), month, "txt"),
            PathBuf::from("/j/journal-2025-03.txt")
        );
    }

    #[test]
    fn resolves_existing_and_missing_months() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("journal-2024-12.org"), "").unwrap();
        fs::write(tmp.path().join("journal-2025-02.org"), "").unwrap();
        // A directory with a matching name is not a journal file.
        fs::create_dir(tmp.path().join("journal-2025-01.org")).unwrap();

        let window = DateWindow {
            start: at(2024, 12, 20),
            end: at(2025, 2, 10),
        };
        let resolved = resolve_month_files(tmp.path(), &window, "org");
        assert_eq!(
            resolved.existing,
            vec![
                tmp.path().join("journal-2024-12.org"),
                tmp.path().join("journal-2025-02.org"),
            ]
        );
        assert_eq!(resolved.missing, vec![tmp.path().join("journal-2025-01.org")]);
    }

    #[test]
    fn other_extensions_are_ignored() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("journal-2025-01.md"), "").unwrap();
        let window = DateWindow {
            start: at(2025, 1, 2),
            end: at(2025, 1, 9),
        };
        let resolved = resolve_month_files(tmp.path(), &window, "org");
        assert!(resolved.existing.is_empty());
        assert_eq!(resolved.missing.len(), 1);
    }
}
