//! Domain types for representing a slide deck built from Markdown.

use serde::{Deserialize, Serialize};

/// An entire deck, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a slide to the end of the deck.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Number of slides in the deck.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Title of the first slide, if any.
    pub fn first_title(&self) -> Option<&str> {
        self.slides.first().map(|s| s.title.as_str())
    }
}

/// A single slide: one title and a body of formatted paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide title, taken from the first `# ` line of the block.
    pub title: String,

    /// Body paragraphs, in reading order.
    pub body: Vec<Paragraph>,
}

impl Slide {
    /// Create a slide with the given title and no body.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Vec::new(),
        }
    }

    /// Add a paragraph to the slide body.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(paragraph);
    }
}

/// Bullet nesting depth. The dialect only knows two levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletLevel {
    /// Top-level bullet or plain text.
    #[default]
    Top,
    /// Bullet indented by exactly two spaces.
    Nested,
}

impl BulletLevel {
    /// Numeric depth as used by DrawingML `lvl` (0 or 1).
    pub fn depth(self) -> u8 {
        match self {
            BulletLevel::Top => 0,
            BulletLevel::Nested => 1,
        }
    }

    /// Map a DrawingML `lvl` value back to a level.
    ///
    /// Anything deeper than 1 is clamped to `Nested`.
    pub fn from_depth(depth: u8) -> Self {
        if depth == 0 {
            BulletLevel::Top
        } else {
            BulletLevel::Nested
        }
    }
}

/// A body paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Bullet nesting depth.
    pub level: BulletLevel,

    /// Styled text runs, in order.
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create a paragraph from a level and its runs.
    pub fn new(level: BulletLevel, runs: Vec<Run>) -> Self {
        Self { level, runs }
    }

    /// Concatenated text of all runs, with no markup.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A span of text sharing one bold/italic style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl Run {
    /// Unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    /// Bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            italic: false,
        }
    }

    /// Italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_level_depth() {
        assert_eq!(BulletLevel::Top.depth(), 0);
        assert_eq!(BulletLevel::Nested.depth(), 1);
        assert_eq!(BulletLevel::from_depth(0), BulletLevel::Top);
        assert_eq!(BulletLevel::from_depth(1), BulletLevel::Nested);
        assert_eq!(BulletLevel::from_depth(4), BulletLevel::Nested);
    }

    #[test]
    fn test_paragraph_plain_text() {
        let paragraph = Paragraph::new(
            BulletLevel::Top,
            vec![Run::bold("bold"), Run::plain(" and "), Run::italic("italic")],
        );
        assert_eq!(paragraph.plain_text(), "bold and italic");
    }

    #[test]
    fn test_deck_first_title() {
        let mut deck = Deck::new();
        assert!(deck.is_empty());
        assert_eq!(deck.first_title(), None);

        deck.add_slide(Slide::new("Intro"));
        deck.add_slide(Slide::new("Details"));
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.first_title(), Some("Intro"));
    }

    #[test]
    fn test_model_serializes_to_json() {
        let mut slide = Slide::new("Title");
        slide.add_paragraph(Paragraph::new(BulletLevel::Nested, vec![Run::plain("sub")]));

        let json = serde_json::to_value(&slide).unwrap();
        assert_eq!(json["title"], "Title");
        assert_eq!(json["body"][0]["level"], "nested");
        assert_eq!(json["body"][0]["runs"][0]["text"], "sub");
        assert_eq!(json["body"][0]["runs"][0]["bold"], false);
    }
}
