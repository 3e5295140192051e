//! Maps an `orgize` syntax tree onto a flat, document-ordered list of [`OutlineNode`]s.
use super::outline_node::{OutlineNode, OutlineTimestamp};
use anyhow::{Result, anyhow};
use orgize::Org;
use orgize::ast::{Headline, Timestamp};
use orgize::rowan::ast::AstNode;

/// Parses a whole outline document.
///
/// - Text before the first heading is ignored.
/// - Planning lines and the property drawer directly under a heading belong to the
///   heading, not its section, so they stay out of the body and its timestamps.
///
/// # Errors
///
/// Fails for the whole document when a timestamp names an impossible date or time
/// (e.g. `[2025-02-30 Sun 10:00]`).
pub fn parse_outline(content: &str) -> Result<Vec<OutlineNode>> {
    let org = Org::parse(content);
    org.document()
        .syntax()
        .descendants()
        .filter_map(Headline::cast)
        .map(|hdl| to_node(content, &hdl))
        .collect()
}

fn to_node(content: &str, hdl: &Headline) -> Result<OutlineNode> {
    let start = usize::from(hdl.syntax().text_range().start());
    let first_line = content[start..].lines().next().unwrap_or_default();
    let heading = first_line.trim_start_matches('*');
    let heading = heading.strip_prefix(' ').unwrap_or(heading);

    let mut timestamps = hdl
        .title()
        .filter_map(|element| element.into_node())
        .flat_map(|node| node.descendants())
        .filter_map(Timestamp::cast)
        .map(|ts| to_timestamp(content, &ts))
        .collect::<Result<Vec<_>>>()?;

    let body = match hdl.section() {
        Some(section) => {
            for ts in section.syntax().descendants().filter_map(Timestamp::cast) {
                timestamps.push(to_timestamp(content, &ts)?);
            }
            content[section.syntax().text_range()].trim_end().to_string()
        }
        None => String::new(),
    };

    Ok(OutlineNode {
        level: hdl.level(),
        heading: heading.to_string(),
        body,
        timestamps,
    })
}

fn to_timestamp(content: &str, ts: &Timestamp) -> Result<OutlineTimestamp> {
    let range = ts.syntax().text_range();
    let invalid = || {
        let line_no = content[..usize::from(range.start())].matches('\n').count() + 1;
        anyhow!(
            "line {line_no}: invalid date or time in timestamp `{}`",
            content[range].trim_end()
        )
    };
    // Date-only timestamps start at midnight.
    let start = ts.start_to_chrono().ok_or_else(invalid)?;
    Ok(OutlineTimestamp {
        start,
        end: ts.end_to_chrono().filter(|end| *end != start),
        active: ts.is_active(),
    })
}
