//! Deck builder: turns Markdown source into the slide model.
//!
//! Bullet markers are stripped before inline tokenization, so a marker can
//! never leak into a run.

use crate::bullets::classify;
use crate::inline::tokenize;
use crate::split::{split_slides, SlideSource};
use crate::types::{Deck, Paragraph, Slide};

/// Title used for slides whose block has no `# ` line.
pub const DEFAULT_SLIDE_TITLE: &str = "New Slide";

/// Builds a [`Deck`] from Markdown text.
#[derive(Debug, Clone)]
pub struct DeckBuilder {
    /// Title given to slides without a heading.
    default_title: String,
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_SLIDE_TITLE.to_string(),
        }
    }
}

impl DeckBuilder {
    /// Create a builder with the default placeholder title.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title used for slides without a `# ` line.
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Build the deck for `markdown`.
    ///
    /// Never fails: any text, including empty text, yields zero or more slides.
    pub fn build(&self, markdown: &str) -> Deck {
        let mut deck = Deck::new();

        for block in split_slides(markdown) {
            let slide = self.build_slide(block);
            log::debug!(
                "Slide {}: \"{}\" with {} paragraphs",
                deck.len() + 1,
                slide.title,
                slide.body.len()
            );
            deck.add_slide(slide);
        }

        log::info!("Built deck with {} slides", deck.len());
        deck
    }

    /// Build one slide from a raw block.
    fn build_slide(&self, block: &str) -> Slide {
        let source = SlideSource::parse(block);

        let title = match source.title {
            Some(title) if !title.is_empty() => title,
            _ => self.default_title.as_str(),
        };

        let mut slide = Slide::new(title);
        for line in source.body {
            let (level, text) = classify(line);
            slide.add_paragraph(Paragraph::new(level, tokenize(text)));
        }

        slide
    }
}
