//! Slide part rendering.
//!
//! Each slide is rendered in one pass from its finished model: the title
//! placeholder gets the title text and the body placeholder gets one
//! paragraph per model paragraph.

use crate::parts::{xml_text, NS_DECLARATIONS, XML_DECLARATION};
use deck_core::{BulletLevel, Paragraph, Run, Slide};

/// Render `ppt/slides/slideN.xml` for one slide.
pub fn slide_xml(slide: &Slide) -> String {
    let mut xml = String::with_capacity(1024 + slide.body.len() * 128);

    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!("<p:sld {}>", NS_DECLARATIONS));
    xml.push_str("<p:cSld><p:spTree>");

    xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
    xml.push_str("<p:grpSpPr><a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm></p:grpSpPr>");

    write_title_shape(&mut xml, &slide.title);
    if !slide.body.is_empty() {
        write_body_shape(&mut xml, &slide.body);
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");

    xml
}

/// Write the title placeholder shape.
fn write_title_shape(xml: &mut String, title: &str) {
    xml.push_str("<p:sp><p:nvSpPr>");
    // Group shape uses id=1, so the title takes id=2.
    xml.push_str(r#"<p:cNvPr id="2" name="Title 1"/>"#);
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    xml.push_str(r#"<p:nvPr><p:ph type="title"/></p:nvPr>"#);
    xml.push_str("</p:nvSpPr><p:spPr/>");

    xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/><a:p>");
    if title.is_empty() {
        xml.push_str(r#"<a:endParaRPr dirty="0"/>"#);
    } else {
        write_run(xml, &Run::plain(title));
    }
    xml.push_str("</a:p></p:txBody></p:sp>");
}

/// Write the content placeholder shape holding the body paragraphs.
fn write_body_shape(xml: &mut String, body: &[Paragraph]) {
    xml.push_str("<p:sp><p:nvSpPr>");
    xml.push_str(r#"<p:cNvPr id="3" name="Content Placeholder 2"/>"#);
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    xml.push_str(r#"<p:nvPr><p:ph idx="1"/></p:nvPr>"#);
    xml.push_str("</p:nvSpPr><p:spPr/>");

    xml.push_str("<p:txBody><a:bodyPr><a:normAutofit/></a:bodyPr><a:lstStyle/>");
    for paragraph in body {
        write_paragraph(xml, paragraph);
    }
    xml.push_str("</p:txBody></p:sp>");
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) {
    xml.push_str("<a:p>");
    if paragraph.level != BulletLevel::Top {
        xml.push_str(&format!(r#"<a:pPr lvl="{}"/>"#, paragraph.level.depth()));
    }

    let mut wrote_run = false;
    for run in paragraph.runs.iter().filter(|r| !r.text.is_empty()) {
        write_run(xml, run);
        wrote_run = true;
    }
    if !wrote_run {
        xml.push_str(r#"<a:endParaRPr dirty="0"/>"#);
    }

    xml.push_str("</a:p>");
}

fn write_run(xml: &mut String, run: &Run) {
    xml.push_str("<a:r><a:rPr");
    if run.bold {
        xml.push_str(r#" b="1""#);
    }
    if run.italic {
        xml.push_str(r#" i="1""#);
    }
    xml.push_str(r#" dirty="0"/>"#);
    xml.push_str("<a:t>");
    xml.push_str(&xml_text(&run.text));
    xml.push_str("</a:t></a:r>");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_slide() -> Slide {
        let mut slide = Slide::new("Quarterly <Review>");
        slide.add_paragraph(Paragraph::new(
            BulletLevel::Top,
            vec![Run::bold("Revenue"), Run::plain(" up & away")],
        ));
        slide.add_paragraph(Paragraph::new(
            BulletLevel::Nested,
            vec![Run::italic("details")],
        ));
        slide
    }

    #[test]
    fn test_title_is_escaped() {
        let xml = slide_xml(&sample_slide());
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains("<a:t>Quarterly &lt;Review&gt;</a:t>"));
    }

    #[test]
    fn test_runs_carry_flags() {
        let xml = slide_xml(&sample_slide());
        assert!(xml.contains(r#"<a:rPr b="1" dirty="0"/><a:t>Revenue</a:t>"#));
        assert!(xml.contains(r#"<a:rPr dirty="0"/><a:t> up &amp; away</a:t>"#));
        assert!(xml.contains(r#"<a:rPr i="1" dirty="0"/><a:t>details</a:t>"#));
    }

    #[test]
    fn test_nested_paragraph_has_level() {
        let xml = slide_xml(&sample_slide());
        assert_eq!(xml.matches(r#"<a:pPr lvl="1"/>"#).count(), 1);
    }

    #[test]
    fn test_empty_body_omits_content_placeholder() {
        let xml = slide_xml(&Slide::new("Only a title"));
        assert!(!xml.contains(r#"<p:ph idx="1"/>"#));
    }

    #[test]
    fn test_empty_runs_are_skipped() {
        let mut slide = Slide::new("T");
        slide.add_paragraph(Paragraph::new(BulletLevel::Top, vec![Run::bold("")]));
        let xml = slide_xml(&slide);
        assert!(!xml.contains(r#"<a:rPr b="1""#));
        assert!(xml.contains(r#"<a:p><a:endParaRPr dirty="0"/></a:p>"#));
    }
}
