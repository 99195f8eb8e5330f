//! PPTX reader: loads a presentation back into the slide model.
//!
//! Only what the writer produces is recovered: the title placeholder text and
//! the body placeholder's paragraphs with their level and bold/italic runs.
//! Other shapes are ignored.

use crate::parts::paths;
use deck_core::{BulletLevel, Deck, Error, Paragraph, Result, Run, Slide};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// Relationship type suffix of slide parts.
const SLIDE_REL_SUFFIX: &str = "/relationships/slide";

/// Reader for PPTX (Office Open XML) files.
pub struct PptxReader;

impl PptxReader {
    /// Create a new PPTX reader.
    pub fn new() -> Self {
        Self
    }

    /// Read a PPTX package into a deck.
    pub fn read<R: Read + Seek>(&self, reader: R) -> Result<Deck> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let mut deck = Deck::new();
        for slide_path in self.slide_order(&mut archive)? {
            let content = self.read_file_from_archive(&mut archive, &slide_path)?;
            deck.add_slide(self.parse_slide_xml(&content)?);
        }

        log::debug!("Read {} slides", deck.len());
        Ok(deck)
    }

    /// Get the ordered list of slide paths from the presentation relationships.
    fn slide_order<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
        let rels_content = self.read_file_from_archive(archive, paths::PRESENTATION_RELS)?;
        let mut slides: Vec<(String, Option<usize>)> = Vec::new();

        let mut reader = Reader::from_str(&rels_content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if local_name(e.name().as_ref()) == b"Relationship" =>
                {
                    let rel_type = attribute(e, b"Type").unwrap_or_default();
                    let target = attribute(e, b"Target").unwrap_or_default();

                    if rel_type.ends_with(SLIDE_REL_SUFFIX) {
                        let order_num = extract_slide_number(&target);
                        let full_path = match target.strip_prefix('/') {
                            Some(absolute) => absolute.to_string(),
                            None => format!("ppt/{}", target),
                        };
                        slides.push((full_path, order_num));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "Error parsing relationships: {}",
                        e
                    )));
                }
                _ => {}
            }
        }

        slides.sort_by(|a, b| match (a.1, b.1) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        Ok(slides.into_iter().map(|(path, _)| path).collect())
    }

    /// Parse one slide part into a slide.
    fn parse_slide_xml(&self, xml_content: &str) -> Result<Slide> {
        // Text runs keep their surrounding spaces, so no trimming here.
        let mut reader = Reader::from_str(xml_content);

        let mut title: Option<String> = None;
        let mut body = Vec::new();

        let mut role = ShapeRole::Other;
        let mut paragraph: Option<Paragraph> = None;
        let mut run: Option<Run> = None;
        let mut in_text = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                    b"sp" => role = ShapeRole::Other,
                    b"ph" => role = ShapeRole::from_placeholder(e),
                    b"p" => paragraph = Some(Paragraph::default()),
                    b"pPr" => apply_level(e, paragraph.as_mut()),
                    b"r" => run = Some(Run::default()),
                    b"rPr" => apply_flags(e, run.as_mut()),
                    b"t" => in_text = true,
                    _ => {}
                },
                Ok(Event::Empty(ref e)) => match local_name(e.name().as_ref()) {
                    b"ph" => role = ShapeRole::from_placeholder(e),
                    b"pPr" => apply_level(e, paragraph.as_mut()),
                    b"rPr" => apply_flags(e, run.as_mut()),
                    _ => {}
                },
                Ok(Event::Text(ref e)) => {
                    if in_text {
                        if let Some(run) = run.as_mut() {
                            let text = e
                                .unescape()
                                .map_err(|e| Error::XmlError(format!("Bad text: {}", e)))?;
                            run.text.push_str(&text);
                        }
                    }
                }
                Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                    b"t" => in_text = false,
                    b"r" => {
                        if let (Some(finished), Some(paragraph)) = (run.take(), paragraph.as_mut()) {
                            paragraph.runs.push(finished);
                        }
                    }
                    b"p" => {
                        if let Some(finished) = paragraph.take() {
                            match role {
                                ShapeRole::Title => {
                                    let text = finished.plain_text();
                                    title = Some(match title {
                                        Some(existing) => format!("{}\n{}", existing, text),
                                        None => text,
                                    });
                                }
                                ShapeRole::Body => body.push(finished),
                                ShapeRole::Other => {}
                            }
                        }
                    }
                    b"sp" => role = ShapeRole::Other,
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    log::warn!("XML parsing error, keeping slide content read so far: {}", e);
                    break;
                }
                _ => {}
            }
        }

        let mut slide = Slide::new(title.unwrap_or_default());
        slide.body = body;
        Ok(slide)
    }

    /// Read a file from the ZIP archive.
    fn read_file_from_archive<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        path: &str,
    ) -> Result<String> {
        let mut file = archive
            .by_name(path)
            .map_err(|e| Error::ZipError(format!("File not found in archive '{}': {}", path, e)))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

        Ok(content)
    }
}

impl Default for PptxReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Which placeholder the current shape fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShapeRole {
    Title,
    Body,
    Other,
}

impl ShapeRole {
    fn from_placeholder(e: &BytesStart) -> Self {
        match attribute(e, b"type").as_deref() {
            Some("title") | Some("ctrTitle") => ShapeRole::Title,
            Some("body") | Some("obj") | Some("subTitle") => ShapeRole::Body,
            Some(_) => ShapeRole::Other,
            // A bare `<p:ph idx=".."/>` is a content placeholder.
            None if attribute(e, b"idx").is_some() => ShapeRole::Body,
            None => ShapeRole::Other,
        }
    }
}

fn apply_level(e: &BytesStart, paragraph: Option<&mut Paragraph>) {
    if let Some(paragraph) = paragraph {
        if let Some(depth) = attribute(e, b"lvl").and_then(|v| v.parse::<u8>().ok()) {
            paragraph.level = BulletLevel::from_depth(depth);
        }
    }
}

fn apply_flags(e: &BytesStart, run: Option<&mut Run>) {
    if let Some(run) = run {
        run.bold = attribute(e, b"b").is_some_and(|v| is_true(&v));
        run.italic = attribute(e, b"i").is_some_and(|v| is_true(&v));
    }
}

fn is_true(value: &str) -> bool {
    value == "1" || value == "true"
}

/// Value of the attribute whose local name is `key`.
fn attribute(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| local_name(attr.key.as_ref()) == key)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Extract a slide number from a string like "slides/slide3.xml".
fn extract_slide_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml");

    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::PptxWriter;
    use deck_core::DeckBuilder;
    use std::io::Cursor;

    fn round_trip(markdown: &str) -> (Deck, Deck) {
        let built = DeckBuilder::new().build(markdown);
        let bytes = PptxWriter::new().to_bytes(&built).unwrap();
        let read = PptxReader::new().read(Cursor::new(bytes)).unwrap();
        (built, read)
    }

    #[test]
    fn test_extract_slide_number() {
        assert_eq!(extract_slide_number("slides/slide1.xml"), Some(1));
        assert_eq!(extract_slide_number("slides/slide12.xml"), Some(12));
        assert_eq!(extract_slide_number("/ppt/slides/slide123.xml"), Some(123));
        assert_eq!(extract_slide_number("nodigits"), None);
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"p:sp"), b"sp");
        assert_eq!(local_name(b"a:t"), b"t");
        assert_eq!(local_name(b"sp"), b"sp");
    }

    #[test]
    fn test_round_trip_example_deck() {
        let (built, read) =
            round_trip("# Title A\n- one\n  - two\n---\n# Title B\n**bold** text\n");
        assert_eq!(read, built);
    }

    #[test]
    fn test_round_trip_preserves_order_and_escaping() {
        let markdown = (1..=12)
            .map(|n| format!("# Slide {}\n- *a* & <b> {}", n, n))
            .collect::<Vec<_>>()
            .join("\n---\n");
        let (built, read) = round_trip(&markdown);

        assert_eq!(read.len(), 12);
        assert_eq!(read.slides[9].title, "Slide 10");
        assert_eq!(read, built);
    }

    #[test]
    fn test_round_trip_title_only_slide() {
        let (built, read) = round_trip("just text\n---\n# Lonely");
        assert_eq!(read.slides[0].title, "New Slide");
        assert!(read.slides[1].body.is_empty());
        assert_eq!(read, built);
    }

    #[test]
    fn test_placeholder_roles() {
        let xml = r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld><p:spTree>
            <p:sp><p:nvSpPr><p:nvPr><p:ph type="ctrTitle"/></p:nvPr></p:nvSpPr>
              <p:txBody><a:p><a:r><a:t>Main</a:t></a:r></a:p></p:txBody></p:sp>
            <p:sp><p:nvSpPr><p:nvPr><p:ph type="sldNum" idx="12"/></p:nvPr></p:nvSpPr>
              <p:txBody><a:p><a:r><a:t>7</a:t></a:r></a:p></p:txBody></p:sp>
            <p:sp><p:nvSpPr><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr>
              <p:txBody><a:p><a:pPr lvl="3"/><a:r><a:rPr b="true"/><a:t>deep</a:t></a:r></a:p></p:txBody></p:sp>
            </p:spTree></p:cSld></p:sld>"#;

        let slide = PptxReader::new().parse_slide_xml(xml).unwrap();
        assert_eq!(slide.title, "Main");
        assert_eq!(slide.body.len(), 1);
        assert_eq!(slide.body[0].level, BulletLevel::Nested);
        assert_eq!(slide.body[0].runs, vec![Run::bold("deep")]);
    }

    #[test]
    fn test_rejects_non_zip_input() {
        let result = PptxReader::new().read(Cursor::new(b"not a zip".to_vec()));
        assert!(matches!(result, Err(Error::ZipError(_))));
    }
}
