//! One-shot Markdown to PPTX conversion.

use crate::writer::PptxWriter;
use deck_core::{DeckBuilder, Error, Result};

/// File name offered when the converted deck is downloaded.
pub const OUTPUT_FILE_NAME: &str = "presentation.pptx";

/// MIME type of a .pptx document.
pub const PPTX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// Convert Markdown text into PPTX bytes with default settings.
///
/// Blank input is rejected with [`Error::EmptyInput`] before any work is done.
/// Otherwise the result is all-or-nothing: the first failure aborts.
pub fn convert(markdown: &str) -> Result<Vec<u8>> {
    convert_with(markdown, &DeckBuilder::new(), &PptxWriter::new())
}

/// Convert Markdown text into PPTX bytes using the given builder and writer.
pub fn convert_with(markdown: &str, builder: &DeckBuilder, writer: &PptxWriter) -> Result<Vec<u8>> {
    if markdown.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let deck = builder.build(markdown);
    writer.to_bytes(&deck)
}
