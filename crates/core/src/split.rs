//! Slide splitting and title/body separation.
//!
//! A deck source is split on standalone `---` lines; each non-blank block
//! becomes one slide. Within a block the first `# ` line is the title and
//! every other non-blank line is body text.

use regex::Regex;
use std::sync::LazyLock;

/// A line holding only `---`, optionally padded with spaces or tabs.
static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*---[ \t]*\r?$").unwrap());

/// Marker that introduces a slide title.
const TITLE_MARKER: &str = "# ";

/// Split raw Markdown into per-slide blocks, in source order.
///
/// Blocks that are empty or whitespace-only are skipped, so leading and
/// trailing separators never produce blank slides.
pub fn split_slides(text: &str) -> impl Iterator<Item = &str> {
    SEPARATOR_REGEX
        .split(text)
        .filter(|block| !block.trim().is_empty())
}

/// The title and body lines of one slide block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSource<'a> {
    /// Text of the first `# ` line, trimmed. `None` if the block has none.
    pub title: Option<&'a str>,

    /// Non-blank body lines with trailing whitespace removed.
    ///
    /// Leading indentation is kept so nested bullets stay recognizable.
    pub body: Vec<&'a str>,
}

impl<'a> SlideSource<'a> {
    /// Separate a block into its title and body lines.
    pub fn parse(block: &'a str) -> Self {
        let mut title = None;
        let mut body = Vec::new();

        for line in block.lines() {
            if title.is_none() {
                if let Some(rest) = line.strip_prefix(TITLE_MARKER) {
                    title = Some(rest.trim());
                    continue;
                }
            }

            let line = line.trim_end();
            if !line.trim_start().is_empty() {
                body.push(line);
            }
        }

        Self { title, body }
    }
}
