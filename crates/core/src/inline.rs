//! Inline bold/italic tokenizer.
//!
//! Recognizes `**bold**` and `*italic*` spans. The bold alternative is tried
//! first at every position so a double asterisk is never read as two italic
//! markers. Matching is non-greedy and leftmost-first.

use crate::types::Run;
use regex::Regex;
use std::sync::LazyLock;

/// Bold or italic span. Group 1 is bold content, group 2 italic content.
static EMPHASIS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*|\*(.*?)\*").unwrap());

/// Split paragraph text into styled runs.
///
/// Concatenating the returned runs reproduces `text` with the `*`/`**`
/// delimiters removed. Emphasis spans may be empty (`****`); they produce an
/// empty run. Empty input yields no runs.
pub fn tokenize(text: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut last_end = 0;

    for caps in EMPHASIS_REGEX.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        if whole.start() > last_end {
            runs.push(Run::plain(&text[last_end..whole.start()]));
        }

        if let Some(bold) = caps.get(1) {
            runs.push(Run::bold(bold.as_str()));
        } else if let Some(italic) = caps.get(2) {
            runs.push(Run::italic(italic.as_str()));
        }

        last_end = whole.end();
    }

    if last_end < text.len() {
        runs.push(Run::plain(&text[last_end..]));
    }

    runs
}
