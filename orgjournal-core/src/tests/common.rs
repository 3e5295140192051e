use crate::Config;
use crate::journal::JournalEntry;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};

/// Sample month: five dated entries (one tagged `chore`) and one draft without timestamp.
pub const JANUARY_2025: &str = r#"#+TITLE: Journal 2025-01
* 2025
** 2025-01 January
*** 2025-01-03 Friday
**** [2025-01-03 Fri 10:00] Daily Standup :meeting:
Team standup meeting.
**** [2025-01-03 Fri 16:00] Personal Note
Some personal thoughts about the project.
*** 2025-01-04 Saturday
**** [2025-01-04 Sat 09:00] Project Meeting :meeting:work:
Discussed new features in today's project meeting.
**** [2025-01-04 Sat 14:30] Code Review :code:review:
Reviewed pull requests for the authentication module.
**** Draft idea
Not timestamped yet.
*** 2025-01-05 Sunday
**** [2025-01-05 Sun 11:00] Laundry :chore:
"#;

/// Test helper to create a `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(journal_dir: PathBuf, now: NaiveDateTime) -> Config {
    Config {
        journal_dir,
        file_extension: "org".to_string(),
        default_last_days: 7,
        recent_exclude_tags: vec!["chore".to_string()],
        reference_time: Some(now),
    }
}

/// Writes `journal-{year_month}.org` into `dir`.
pub fn write_month(dir: &Path, year_month: &str, content: &str) -> PathBuf {
    let path = dir.join(format!("journal-{year_month}.org"));
    fs::write(&path, content).expect("write journal file");
    path
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .expect("valid test timestamp")
}

pub fn entry(timestamp: NaiveDateTime, title: &str, body: &str, tags: &[&str]) -> JournalEntry {
    JournalEntry {
        date: timestamp.date(),
        day_of_week: timestamp.format("%A").to_string(),
        timestamp,
        title: title.to_string(),
        body: body.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        file: format!("journal-{}.org", timestamp.format("%Y-%m")),
    }
}
