//! Splits a raw entry heading into its plain title and its tags.
//!
//! `[2025-01-04 Sat 09:00] Project Meeting :meeting:work:` becomes the title
//! `Project Meeting` with tags `["meeting", "work"]`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing `:a:b:` cluster, preceded by whitespace or the start of the line. No whitespace inside.
static TAG_CLUSTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s+)(:(?:[^\s:]*:)+)$").expect("valid tag regex"));

/// `[2025-01-04 Sat 09:00]` plus the whitespace after it, anywhere in the line.
static TIMESTAMP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[\d-]+ \w+ [\d:]+\]\s*").expect("valid timestamp regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedHeading {
    pub title: String,
    pub tags: Vec<String>,
}

/// Tags first, then timestamps, then trim. The tag cluster must be the very end of the
/// heading; trailing whitespace after it leaves the tags in the title.
pub fn decompose_heading(heading: &str) -> DecomposedHeading {
    let tags = extract_tags(heading);
    let title = remove_timestamps(&remove_tags(heading)).trim().to_string();
    DecomposedHeading { title, tags }
}

/// Tags of the trailing cluster, left to right. Empty fragments (`::`) are dropped.
pub fn extract_tags(heading: &str) -> Vec<String> {
    TAG_CLUSTER_RE
        .captures(heading)
        .map(|caps| {
            caps[1]
                .split(':')
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Removes the trailing tag cluster and the whitespace run before it.
pub fn remove_tags(heading: &str) -> String {
    TAG_CLUSTER_RE.replace(heading, "").into_owned()
}

pub fn remove_timestamps(heading: &str) -> String {
    TIMESTAMP_RE.replace_all(heading, "").into_owned()
}
