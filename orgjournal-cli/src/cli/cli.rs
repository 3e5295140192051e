use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::render::ColorMode;

/// orgjournal — query an org-mode journal, or serve it to tool-calling clients
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Journal directory holding the `journal-YYYY-MM.org` files.
    /// Overrides `journal_dir` from the config file.
    #[arg(long, global = true, env = "ORGJOURNAL_DIR")]
    pub journal_dir: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Print the JSON response instead of rendered entries.
    #[arg(long, global = true)]
    pub json: bool,
    /// Only shows the date, time, title and tags of found entries.
    #[arg(long, short, global = true)]
    pub short: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the journal tools over stdin/stdout (JSON-RPC, one message per line).
    Serve,
    /// Entries of a period (e.g. `orgjournal entries --since 2025-01-01 --before 2025-02-01`).
    /// Defaults to the last 7 days.
    Entries(DateArgs),
    /// Case-insensitive keyword search (e.g. `orgjournal search standup --last-days 30`).
    Search {
        query: String,
        #[command(flatten)]
        dates: DateArgs,
        /// Do not look at entry bodies.
        #[arg(long)]
        no_body: bool,
        /// Do not look at entry titles.
        #[arg(long)]
        no_title: bool,
        /// Do not look at entry tags.
        #[arg(long)]
        no_tags: bool,
    },
    /// Entries of the last N days, without chores.
    Recent {
        #[arg(long, short)]
        days: Option<u32>,
    },
    /// Entries by tag (e.g. `orgjournal tags -t meeting -x work`).
    Tags {
        /// Keep entries having any of these tags. Omit to keep all.
        #[arg(long, short, num_args(1..))]
        tags: Vec<String>,
        /// Drop entries having any of these tags.
        #[arg(long, short = 'x', num_args(1..))]
        exclude: Vec<String>,
        #[command(flatten)]
        dates: DateArgs,
    },
    /// Prints the journal root directory
    Path,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DateArgs {
    /// Entries from the last N days.
    #[arg(long, short = 'd')]
    pub last_days: Option<u32>,
    /// Entries from this date onwards (YYYY-MM-DD).
    #[arg(long)]
    pub since: Option<String>,
    /// Entries before this date (YYYY-MM-DD).
    #[arg(long)]
    pub before: Option<String>,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_search_with_toggles_and_dates() {
        let cli = Cli::try_parse_from([
            "orgjournal", "--json", "search", "standup", "--no-body", "-d", "30",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Search {
                query,
                dates,
                no_body,
                no_title,
                ..
            } => {
                assert_eq!(query, "standup");
                assert_eq!(dates.last_days, Some(30));
                assert!(no_body);
                assert!(!no_title);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_tag_lists() {
        let cli = Cli::try_parse_from([
            "orgjournal", "tags", "-t", "meeting", "code", "-x", "work", "--since", "2025-01-01",
        ])
        .unwrap();
        match cli.command {
            Command::Tags {
                tags,
                exclude,
                dates,
            } => {
                assert_eq!(tags, vec!["meeting", "code"]);
                assert_eq!(exclude, vec!["work"]);
                assert_eq!(dates.since.as_deref(), Some("2025-01-01"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn journal_dir_flag_is_global() {
        let cli = Cli::try_parse_from(["orgjournal", "recent", "--journal-dir", "/tmp/j"]).unwrap();
        assert_eq!(cli.journal_dir, Some(PathBuf::from("/tmp/j")));
    }
}
