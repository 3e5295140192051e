//! Turns the nodes of one parsed outline document into [`JournalEntry`]s.
use super::diagnostic::Diagnostic;
use super::heading::decompose_heading;
use super::journal_entry::JournalEntry;
use crate::outline::OutlineNode;
use std::path::Path;
use tracing::debug;

/// Depth of entry headings. Shallower levels are year/month/day scaffolding.
pub const ENTRY_LEVEL: usize = 4;

#[derive(Debug, Default)]
pub struct ExtractResult {
    pub entries: Vec<JournalEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Extracts every level-4 node that carries a timestamp, sorted by timestamp.
///
/// The first timestamp attached to the node becomes the entry's timestamp. Nodes
/// without one are skipped and reported as [`Diagnostic::MissingTimestamp`].
///
/// # Arguments
///
/// * `nodes` - Nodes of one document, in document order.
/// * `path` - File the nodes came from, used for `file` and diagnostics.
pub fn extract_entries(nodes: &[OutlineNode], path: &Path) -> ExtractResult {
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut result = ExtractResult::default();

    for node in nodes.iter().filter(|n| n.level == ENTRY_LEVEL) {
        let Some(first) = node.timestamps.first() else {
            debug!(file = %path.display(), heading = %node.heading, "skipping entry without timestamp");
            result.diagnostics.push(Diagnostic::MissingTimestamp {
                path: path.to_path_buf(),
                heading: node.heading.trim().to_string(),
            });
            continue;
        };

        let timestamp = first.start;
        let heading = decompose_heading(&node.heading);
        result.entries.push(JournalEntry {
            date: timestamp.date(),
            day_of_week: timestamp.format("%A").to_string(),
            timestamp,
            title: heading.title,
            body: node.body.trim().to_string(),
            tags: heading.tags,
            file: file.clone(),
        });
    }

    result.entries.sort_by_key(|e| e.timestamp);
    result
}
