//! Core slide model and Markdown parsing for Markdown to PowerPoint conversion.
//!
//! The supported dialect is small: `# ` titles, `---` slide
//! separators, two levels of `-` bullets, `**bold**` and `*italic*`.

pub mod builder;
pub mod bullets;
pub mod error;
pub mod inline;
pub mod split;
pub mod types;

pub use builder::{DeckBuilder, DEFAULT_SLIDE_TITLE};
pub use error::{Error, Result};
pub use types::{BulletLevel, Deck, Paragraph, Run, Slide};
