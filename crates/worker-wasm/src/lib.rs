//! WASM-compatible wrapper for Markdown to PowerPoint conversion.
//!
//! This crate exposes the conversion to JavaScript so a browser form can
//! offer the generated deck as a download.

use deck_core::{Deck, DeckBuilder, Error};
use deck_pptx::{OUTPUT_FILE_NAME, PPTX_MIME_TYPE};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Outline of a deck, for a live preview next to the text box.
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResult {
    /// Number of slides the text would produce.
    pub slide_count: usize,
    /// The slide model itself.
    pub deck: Deck,
}

/// Whether `markdown` has anything to convert.
///
/// The form shows its "please enter text" warning when this is false,
/// without attempting a conversion.
#[wasm_bindgen]
pub fn has_content(markdown: &str) -> bool {
    !markdown.trim().is_empty()
}

/// Convert Markdown text into .pptx bytes.
///
/// # Returns
/// A `Uint8Array` with the document, or throws with the error message.
#[wasm_bindgen]
pub fn convert_markdown(markdown: &str) -> Result<js_sys::Uint8Array, JsValue> {
    let bytes = convert_markdown_impl(markdown).map_err(|e| JsValue::from_str(&e))?;
    Ok(js_sys::Uint8Array::from(bytes.as_slice()))
}

fn convert_markdown_impl(markdown: &str) -> Result<Vec<u8>, String> {
    deck_pptx::convert(markdown).map_err(|e| match e {
        Error::ConversionError(_) => e.to_string(),
        e if e.is_empty_input() => e.to_string(),
        other => Error::ConversionError(other.to_string()).to_string(),
    })
}

/// Build the slide outline for `markdown` without rendering it.
///
/// # Returns
/// A JavaScript object with the preview result, or throws on error.
#[wasm_bindgen]
pub fn preview_markdown(markdown: &str) -> Result<JsValue, JsValue> {
    let result = preview_markdown_impl(markdown).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn preview_markdown_impl(markdown: &str) -> Result<PreviewResult, String> {
    if !has_content(markdown) {
        return Err(Error::EmptyInput.to_string());
    }

    let deck = DeckBuilder::new().build(markdown);
    Ok(PreviewResult {
        slide_count: deck.len(),
        deck,
    })
}

/// File name to offer for the download.
#[wasm_bindgen]
pub fn download_file_name() -> String {
    OUTPUT_FILE_NAME.to_string()
}

/// MIME type to attach to the download.
#[wasm_bindgen]
pub fn download_mime_type() -> String {
    PPTX_MIME_TYPE.to_string()
}
