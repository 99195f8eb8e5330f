//! Error types for Markdown to PowerPoint conversion.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting Markdown into a slide deck.
#[derive(Error, Debug)]
pub enum Error {
    /// No Markdown text was supplied.
    ///
    /// Callers treat this as a warning ("please enter text") rather than a
    /// failed conversion; it is raised before any conversion work starts.
    #[error("Please enter some Markdown text")]
    EmptyInput,

    /// Failed to read input or write output.
    #[error("Failed to read or write file: {0}")]
    IoError(#[from] std::io::Error),

    /// ZIP archive error while writing or reading a PPTX package.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML error while writing or reading a PPTX part.
    #[error("XML error: {0}")]
    XmlError(String),

    /// Any other failure during conversion.
    #[error("Conversion failed: {0}")]
    ConversionError(String),
}

impl Error {
    /// Whether this error is the empty-input warning rather than a real failure.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Error::EmptyInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_warning() {
        assert!(Error::EmptyInput.is_empty_input());
        assert!(!Error::ZipError("bad".to_string()).is_empty_input());
    }

    #[test]
    fn test_messages_surface_underlying_text() {
        let err = Error::XmlError("unexpected end of file".to_string());
        assert_eq!(err.to_string(), "XML error: unexpected end of file");

        let err = Error::ConversionError("boom".to_string());
        assert_eq!(err.to_string(), "Conversion failed: boom");
    }
}
