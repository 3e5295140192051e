use crate::cli::{Cli, Command, DateArgs};
use crate::render::Renderer;
use anyhow::{Result, bail};
use orgjournal_core::{
    EntriesResponse, GetEntriesByTagParams, GetJournalEntriesParams, GetRecentEntriesParams,
    OrgJournal, SearchJournalParams, SearchOptions,
};
use serde::Serialize;

/// Runs one of the query subcommands and prints its response.
pub fn query_mode(cli: &Cli, renderer: &Renderer, journal: &OrgJournal) -> Result<()> {
    match &cli.command {
        Command::Entries(dates) => {
            let params = GetJournalEntriesParams {
                last_days: dates.last_days,
                since: dates.since.clone(),
                before: dates.before.clone(),
                journal_dir: None,
            };
            print_response(cli, renderer, &journal.get_journal_entries(&params)?)
        }
        Command::Search {
            query,
            dates,
            no_body,
            no_title,
            no_tags,
        } => {
            let DateArgs {
                last_days,
                since,
                before,
            } = dates.clone();
            let params = SearchJournalParams {
                query: query.clone(),
                last_days,
                since,
                before,
                options: SearchOptions {
                    search_in_body: !no_body,
                    search_in_title: !no_title,
                    search_in_tags: !no_tags,
                },
                journal_dir: None,
            };
            print_response(cli, renderer, &journal.search_journal(&params)?)
        }
        Command::Recent { days } => {
            let params = GetRecentEntriesParams {
                days: *days,
                journal_dir: None,
            };
            print_response(cli, renderer, &journal.get_recent_entries(&params)?)
        }
        Command::Tags {
            tags,
            exclude,
            dates,
        } => {
            let params = GetEntriesByTagParams {
                tags: tags.clone(),
                exclude_tags: exclude.clone(),
                last_days: dates.last_days,
                since: dates.since.clone(),
                before: dates.before.clone(),
                journal_dir: None,
            };
            print_response(cli, renderer, &journal.get_entries_by_tag(&params)?)
        }
        Command::Serve | Command::Path => bail!("not a query command"),
    }
}

fn print_response<R>(cli: &Cli, renderer: &Renderer, response: &R) -> Result<()>
where
    R: EntriesResponse + Serialize,
{
    if cli.json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }

    let entries = response.entries();
    if entries.is_empty() {
        renderer.print_info("No entries found");
    } else {
        renderer.print_info(&format!("{} entries found.", entries.len()));
        renderer.print_entries(entries);
    }
    renderer.print_diagnostics(response.diagnostics());
    Ok(())
}
