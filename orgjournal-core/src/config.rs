use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::warn;

pub const DEFAULT_LAST_DAYS: u32 = 7;
pub const DEFAULT_FILE_EXTENSION: &str = "org";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the monthly `journal-YYYY-MM.<ext>` files.
    pub journal_dir: PathBuf,
    /// Extension of the monthly files, without the dot.
    pub file_extension: String,
    /// Window used when a query gives neither `last_days` nor `since`/`before`.
    pub default_last_days: u32,
    /// Tags hidden by the recent-entries shortcut.
    pub recent_exclude_tags: Vec<String>,
    /// Fixed "now" for relative windows. `None` reads the local clock on every query.
    pub reference_time: Option<NaiveDateTime>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    journal_dir: Option<PathBuf>,
    file_extension: Option<String>,
    default_last_days: Option<u32>,
    recent_exclude_tags: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file_config(FileConfig::default())
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    /// A broken config file is reported and ignored.
    pub fn load() -> Self {
        let file_config = Self::read_file_config().unwrap_or_else(|err| {
            warn!("ignoring unreadable config file: {err:#}");
            FileConfig::default()
        });
        Self::from_file_config(file_config)
    }

    /// Current instant used for relative windows.
    pub fn now(&self) -> NaiveDateTime {
        self.reference_time
            .unwrap_or_else(|| Local::now().naive_local())
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let file_extension = file_config
            .file_extension
            .map(|ext| ext.trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .unwrap_or_else(|| DEFAULT_FILE_EXTENSION.to_string());

        Self {
            journal_dir: file_config
                .journal_dir
                .unwrap_or_else(Self::default_journal_dir),
            file_extension,
            default_last_days: file_config
                .default_last_days
                .unwrap_or(DEFAULT_LAST_DAYS),
            recent_exclude_tags: file_config
                .recent_exclude_tags
                .unwrap_or_else(|| vec!["chore".to_string()]),
            reference_time: None,
        }
    }

    /// Default journal root: `{home}/Documents/org/journal`, or `./journal` when no home is known.
    fn default_journal_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.home_dir().join("Documents").join("org").join("journal")
        } else {
            PathBuf::from("./journal")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("orgjournal")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("orgjournal").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
