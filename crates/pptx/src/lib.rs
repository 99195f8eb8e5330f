//! PPTX (Office Open XML) backend for Markdown to PowerPoint conversion.
//!
//! Writes a [`deck_core::Deck`] as a .pptx package (a ZIP archive of XML
//! parts) and reads such packages back into the same model.

pub mod convert;
mod parts;
pub mod reader;
pub mod slide;
pub mod writer;

pub use convert::{convert, convert_with, OUTPUT_FILE_NAME, PPTX_MIME_TYPE};
pub use reader::PptxReader;
pub use writer::{PptxWriter, SlideSize};
