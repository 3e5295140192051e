//! Org inline markup to the Markdown subset termimad renders.
use once_cell::sync::Lazy;
use regex::Regex;

// Org emphasis: marker after start/whitespace/opening paren, no space just inside the markers.
static BOLD_RE: Lazy<Regex> = Lazy::new(|| emphasis(r"\*"));
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| emphasis("/"));
static VERBATIM_RE: Lazy<Regex> = Lazy::new(|| emphasis("="));
static CODE_RE: Lazy<Regex> = Lazy::new(|| emphasis("~"));

fn emphasis(marker: &str) -> Regex {
    let pattern = format!(
        r"(?m)(^|[\s(]){marker}([^\s{marker}](?:[^{marker}\n]*[^\s{marker}])?){marker}($|[\s.,;:!?)])"
    );
    Regex::new(&pattern).expect("valid emphasis regex")
}

pub fn markup_to_markdown(body: &str) -> String {
    let body = VERBATIM_RE.replace_all(body, "$1`$2`$3");
    let body = CODE_RE.replace_all(&body, "$1`$2`$3");
    let body = BOLD_RE.replace_all(&body, "$1**$2**$3");
    ITALIC_RE.replace_all(&body, "$1*$2*$3").into_owned()
}
