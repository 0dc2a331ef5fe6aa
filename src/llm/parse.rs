//! Parsing of numbered commit-message suggestions from an LLM reply.
//!
//! Models are asked for five numbered lines, but replies often come wrapped
//! in prose, blank lines, or quotes. Only lines that start with a `N. `
//! marker count; everything else is ignored.

use regex_lite::Regex;

/// At most this many suggestions are kept.
const MAX_SUGGESTIONS: usize = 5;

/// Extract up to five suggestions from a reply, order preserved.
///
/// A suggestion line starts with digits followed by a dot and whitespace.
/// The marker and one pair of surrounding double quotes are stripped.
pub fn parse_suggestions(reply: &str) -> Vec<String> {
    let marker = Regex::new(r"^\d+\.\s+").expect("Invalid regex");

    reply
        .lines()
        .filter_map(|line| {
            marker
                .find(line)
                .map(|m| strip_quotes(&line[m.end()..]).to_string())
        })
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Strip one leading and one trailing double quote, if present.
fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}
