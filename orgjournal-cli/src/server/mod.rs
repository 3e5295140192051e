mod journal_server;

pub use journal_server::JournalServer;
