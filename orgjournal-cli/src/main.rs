mod cli;
mod cli_modes;
mod render;
mod server;

use anyhow::Result;
use cli::{Cli, Command};
use cli_modes::query_mode;
use orgjournal_core::{Config, OrgJournal};
use render::{RenderOptions, Renderer};
use server::JournalServer;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("orgjournal: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout is reserved for output and protocol messages.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::new();
    let mut config = Config::load();
    if let Some(dir) = &cli.journal_dir {
        config.journal_dir = dir.clone();
    }
    let journal = OrgJournal::with_config(config);

    let renderer = Renderer::new(Some(RenderOptions {
        use_color: cli.color.enabled(),
        short_mode: cli.short,
        ..Default::default()
    }));

    match &cli.command {
        Command::Serve => tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(JournalServer::new(journal).run()),
        Command::Path => {
            println!("{}", journal.config.journal_dir.display());
            Ok(())
        }
        _ => query_mode(&cli, &renderer, &journal),
    }
}
