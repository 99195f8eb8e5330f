//! PPTX package writer.

use crate::parts::{self, paths};
use crate::slide::slide_xml;
use deck_core::{Deck, Error, Result};
use std::io::{Cursor, Seek, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Page size of the generated deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlideSize {
    /// 4:3, 10 x 7.5 inches.
    #[default]
    Standard,
    /// 16:9, 13.333 x 7.5 inches.
    Widescreen,
}

impl SlideSize {
    /// Width and height in EMU.
    pub fn dimensions(self) -> (i64, i64) {
        match self {
            SlideSize::Standard => (9_144_000, 6_858_000),
            SlideSize::Widescreen => (12_192_000, 6_858_000),
        }
    }
}

/// Renders a [`Deck`] into an OOXML presentation package.
#[derive(Debug, Clone, Default)]
pub struct PptxWriter {
    slide_size: SlideSize,
}

impl PptxWriter {
    /// Create a writer producing 4:3 slides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size of generated slides.
    pub fn with_slide_size(mut self, size: SlideSize) -> Self {
        self.slide_size = size;
        self
    }

    /// Render the deck into an in-memory buffer.
    pub fn to_bytes(&self, deck: &Deck) -> Result<Vec<u8>> {
        let cursor = self.write(deck, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Render the deck into `writer`, returning it once the archive is complete.
    pub fn write<W: Write + Seek>(&self, deck: &Deck, writer: W) -> Result<W> {
        let mut archive = ZipWriter::new(writer);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        let slide_count = deck.len();

        add_part(
            &mut archive,
            options,
            paths::CONTENT_TYPES,
            &parts::content_types_xml(slide_count),
        )?;
        add_part(&mut archive, options, paths::ROOT_RELS, &parts::root_rels_xml())?;
        add_part(
            &mut archive,
            options,
            paths::APP_PROPERTIES,
            &parts::app_properties_xml(slide_count),
        )?;
        add_part(
            &mut archive,
            options,
            paths::CORE_PROPERTIES,
            &parts::core_properties_xml(deck.first_title()),
        )?;
        add_part(
            &mut archive,
            options,
            paths::PRESENTATION,
            &parts::presentation_xml(slide_count, self.slide_size),
        )?;
        add_part(
            &mut archive,
            options,
            paths::PRESENTATION_RELS,
            &parts::presentation_rels_xml(slide_count),
        )?;
        add_part(
            &mut archive,
            options,
            paths::SLIDE_MASTER,
            &parts::slide_master_xml(self.slide_size),
        )?;
        add_part(
            &mut archive,
            options,
            paths::SLIDE_MASTER_RELS,
            &parts::slide_master_rels_xml(),
        )?;
        add_part(
            &mut archive,
            options,
            paths::SLIDE_LAYOUT,
            &parts::slide_layout_xml(),
        )?;
        add_part(
            &mut archive,
            options,
            paths::SLIDE_LAYOUT_RELS,
            &parts::slide_layout_rels_xml(),
        )?;
        add_part(&mut archive, options, paths::THEME, parts::THEME_XML)?;

        let slide_rels = parts::slide_rels_xml();
        for (index, slide) in deck.slides.iter().enumerate() {
            let number = index + 1;
            log::debug!("Writing slide {}: \"{}\"", number, slide.title);
            add_part(&mut archive, options, &paths::slide(number), &slide_xml(slide))?;
            add_part(&mut archive, options, &paths::slide_rels(number), &slide_rels)?;
        }

        let writer = archive
            .finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))?;

        log::info!("Wrote PPTX with {} slides", slide_count);
        Ok(writer)
    }
}

/// Add one part to the archive.
fn add_part<W: Write + Seek>(
    archive: &mut ZipWriter<W>,
    options: FileOptions,
    path: &str,
    content: &str,
) -> Result<()> {
    archive
        .start_file(path, options)
        .map_err(|e| Error::ZipError(format!("Failed to start '{}': {}", path, e)))?;
    archive.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::DeckBuilder;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_part(bytes: &[u8], path: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(path).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_contains_required_parts() {
        let deck = DeckBuilder::new().build("# One\n- a\n---\n# Two\n- b");
        let bytes = PptxWriter::new().to_bytes(&deck).unwrap();

        let archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/app.xml",
            "docProps/core.xml",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide2.xml.rels",
        ] {
            assert!(names.contains(&part), "missing part {}", part);
        }
        assert!(!names.contains(&"ppt/slides/slide3.xml"));
    }

    #[test]
    fn test_starts_with_zip_magic() {
        let bytes = PptxWriter::new().to_bytes(&Deck::new()).unwrap();
        assert!(bytes.starts_with(&[0x50, 0x4B, 0x03, 0x04]));
    }

    #[test]
    fn test_slide_content_written() {
        let deck = DeckBuilder::new().build("# Hello\n**bold** text");
        let bytes = PptxWriter::new().to_bytes(&deck).unwrap();

        let slide = read_part(&bytes, "ppt/slides/slide1.xml");
        assert!(slide.contains("<a:t>Hello</a:t>"));
        assert!(slide.contains(r#"<a:rPr b="1" dirty="0"/><a:t>bold</a:t>"#));

        let core = read_part(&bytes, "docProps/core.xml");
        assert!(core.contains("<dc:title>Hello</dc:title>"));
    }

    #[test]
    fn test_widescreen_size() {
        let deck = DeckBuilder::new().build("# Wide");
        let bytes = PptxWriter::new()
            .with_slide_size(SlideSize::Widescreen)
            .to_bytes(&deck)
            .unwrap();

        let presentation = read_part(&bytes, "ppt/presentation.xml");
        assert!(presentation.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));
    }

    #[test]
    fn test_output_is_deterministic_in_structure() {
        let deck = DeckBuilder::new().build("# A\n- x\n---\n# B");
        let writer = PptxWriter::new();
        let first = writer.to_bytes(&deck).unwrap();
        let second = writer.to_bytes(&deck).unwrap();
        assert_eq!(
            read_part(&first, "ppt/slides/slide2.xml"),
            read_part(&second, "ppt/slides/slide2.xml")
        );
    }
}
