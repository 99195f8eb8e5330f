//! Fixed package parts of a generated PPTX.
//!
//! Every deck shares one theme, one slide master and one "Title and Content"
//! layout. Only the presentation part, the relationship lists, the content
//! types and the document properties depend on the deck.

use crate::writer::SlideSize;
use quick_xml::escape::escape;

pub(crate) const XML_DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub(crate) const NS_DECLARATIONS: &str = concat!(
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#,
);

/// Relationship type URIs.
pub(crate) mod rel_types {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    pub const SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
}

/// Part names inside the package.
pub(crate) mod paths {
    pub const CONTENT_TYPES: &str = "[Content_Types].xml";
    pub const ROOT_RELS: &str = "_rels/.rels";
    pub const APP_PROPERTIES: &str = "docProps/app.xml";
    pub const CORE_PROPERTIES: &str = "docProps/core.xml";
    pub const PRESENTATION: &str = "ppt/presentation.xml";
    pub const PRESENTATION_RELS: &str = "ppt/_rels/presentation.xml.rels";
    pub const SLIDE_MASTER: &str = "ppt/slideMasters/slideMaster1.xml";
    pub const SLIDE_MASTER_RELS: &str = "ppt/slideMasters/_rels/slideMaster1.xml.rels";
    pub const SLIDE_LAYOUT: &str = "ppt/slideLayouts/slideLayout1.xml";
    pub const SLIDE_LAYOUT_RELS: &str = "ppt/slideLayouts/_rels/slideLayout1.xml.rels";
    pub const THEME: &str = "ppt/theme/theme1.xml";

    /// Part name of the 1-based slide `number`.
    pub fn slide(number: usize) -> String {
        format!("ppt/slides/slide{}.xml", number)
    }

    /// Relationship part of the 1-based slide `number`.
    pub fn slide_rels(number: usize) -> String {
        format!("ppt/slides/_rels/slide{}.xml.rels", number)
    }
}

/// Application recorded in `docProps/app.xml`.
const APPLICATION_NAME: &str = "md2pptx";

/// First slide id; PresentationML requires ids of at least 256.
const FIRST_SLIDE_ID: usize = 256;

/// Relationship id of the first slide in `presentation.xml.rels`.
/// `rId1` is the master and `rId2` the theme.
const FIRST_SLIDE_REL: usize = 3;

/// `[Content_Types].xml` for a deck with `slide_count` slides.
pub(crate) fn content_types_xml(slide_count: usize) -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECLARATION);
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#);
    for number in 1..=slide_count {
        xml.push_str(&format!(
            r#"<Override PartName="/{}" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
            paths::slide(number)
        ));
    }
    xml.push_str(r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#);
    xml.push_str(r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#);
    xml.push_str("</Types>");
    xml
}

/// Package-level relationships (`_rels/.rels`).
pub(crate) fn root_rels_xml() -> String {
    relationships_xml(&[
        ("rId1", rel_types::OFFICE_DOCUMENT, "ppt/presentation.xml"),
        ("rId2", rel_types::CORE_PROPERTIES, "docProps/core.xml"),
        ("rId3", rel_types::EXTENDED_PROPERTIES, "docProps/app.xml"),
    ])
}

/// `ppt/presentation.xml`.
pub(crate) fn presentation_xml(slide_count: usize, size: SlideSize) -> String {
    let (cx, cy) = size.dimensions();
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!(r#"<p:presentation {} saveSubsetFonts="1">"#, NS_DECLARATIONS));
    xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
    if slide_count > 0 {
        xml.push_str("<p:sldIdLst>");
        for index in 0..slide_count {
            xml.push_str(&format!(
                r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                FIRST_SLIDE_ID + index,
                FIRST_SLIDE_REL + index
            ));
        }
        xml.push_str("</p:sldIdLst>");
    }
    xml.push_str(&format!(r#"<p:sldSz cx="{}" cy="{}"/>"#, cx, cy));
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    xml
}

/// `ppt/_rels/presentation.xml.rels`.
pub(crate) fn presentation_rels_xml(slide_count: usize) -> String {
    let slide_rels: Vec<(String, String)> = (0..slide_count)
        .map(|index| {
            (
                format!("rId{}", FIRST_SLIDE_REL + index),
                format!("slides/slide{}.xml", index + 1),
            )
        })
        .collect();

    let mut entries = vec![
        ("rId1", rel_types::SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
        ("rId2", rel_types::THEME, "theme/theme1.xml"),
    ];
    entries.extend(
        slide_rels
            .iter()
            .map(|(id, target)| (id.as_str(), rel_types::SLIDE, target.as_str())),
    );

    relationships_xml(&entries)
}

/// Relationships of a slide: just its layout.
pub(crate) fn slide_rels_xml() -> String {
    relationships_xml(&[(
        "rId1",
        rel_types::SLIDE_LAYOUT,
        "../slideLayouts/slideLayout1.xml",
    )])
}

/// Relationships of the slide master: its layout and the theme.
pub(crate) fn slide_master_rels_xml() -> String {
    relationships_xml(&[
        ("rId1", rel_types::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
        ("rId2", rel_types::THEME, "../theme/theme1.xml"),
    ])
}

/// Relationships of the layout: its master.
pub(crate) fn slide_layout_rels_xml() -> String {
    relationships_xml(&[(
        "rId1",
        rel_types::SLIDE_MASTER,
        "../slideMasters/slideMaster1.xml",
    )])
}

fn relationships_xml(entries: &[(&str, &str, &str)]) -> String {
    let mut xml = String::with_capacity(256 + entries.len() * 160);
    xml.push_str(XML_DECLARATION);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for (id, rel_type, target) in entries {
        xml.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            id, rel_type, target
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

/// `docProps/core.xml`; the deck title is the first slide's title.
pub(crate) fn core_properties_xml(title: Option<&str>) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECLARATION);
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    ));
    if let Some(title) = title {
        xml.push_str(&format!("<dc:title>{}</dc:title>", xml_text(title)));
    }
    xml.push_str("</cp:coreProperties>");
    xml
}

/// `docProps/app.xml`.
pub(crate) fn app_properties_xml(slide_count: usize) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECLARATION);
    xml.push_str(concat!(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    ));
    xml.push_str(&format!(
        "<Application>{}</Application><Slides>{}</Slides>",
        APPLICATION_NAME, slide_count
    ));
    xml.push_str("</Properties>");
    xml
}

/// Escape text for element content, dropping characters XML 1.0 forbids.
pub(crate) fn xml_text(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|&c| is_xml_char(c))
        .collect();
    escape(cleaned.as_str()).into_owned()
}

/// The XML 1.0 `Char` production. Surrogates cannot occur in a `char`.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Position and size, in EMU, of the title and body placeholders.
struct PlaceholderFrames {
    title: (i64, i64, i64, i64),
    body: (i64, i64, i64, i64),
}

fn placeholder_frames(size: SlideSize) -> PlaceholderFrames {
    match size {
        SlideSize::Standard => PlaceholderFrames {
            title: (457200, 274638, 8229600, 1143000),
            body: (457200, 1600200, 8229600, 4525963),
        },
        SlideSize::Widescreen => PlaceholderFrames {
            title: (838200, 365125, 10515600, 1325563),
            body: (838200, 1825625, 10515600, 4351338),
        },
    }
}

const GROUP_SHAPE_PROPERTIES: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
);

fn master_placeholder(
    xml: &mut String,
    id: u32,
    name: &str,
    placeholder: &str,
    frame: (i64, i64, i64, i64),
    anchor: &str,
) {
    let (x, y, cx, cy) = frame;
    xml.push_str("<p:sp><p:nvSpPr>");
    xml.push_str(&format!(r#"<p:cNvPr id="{}" name="{}"/>"#, id, name));
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    xml.push_str(&format!("<p:nvPr>{}</p:nvPr></p:nvSpPr>", placeholder));
    xml.push_str(&format!(
        r#"<p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
        x, y, cx, cy
    ));
    xml.push_str(&format!(
        r#"<p:txBody><a:bodyPr vert="horz" lIns="91440" tIns="45720" rIns="91440" bIns="45720" rtlCol="0" anchor="{}"><a:normAutofit/></a:bodyPr>"#,
        anchor
    ));
    xml.push_str(r#"<a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#);
}

/// `ppt/slideMasters/slideMaster1.xml`, with bullet styles for both levels.
pub(crate) fn slide_master_xml(size: SlideSize) -> String {
    let frames = placeholder_frames(size);
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!("<p:sldMaster {}>", NS_DECLARATIONS));
    xml.push_str(r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree>"#);
    xml.push_str(GROUP_SHAPE_PROPERTIES);
    master_placeholder(
        &mut xml,
        2,
        "Title Placeholder 1",
        r#"<p:ph type="title"/>"#,
        frames.title,
        "ctr",
    );
    master_placeholder(
        &mut xml,
        3,
        "Text Placeholder 2",
        r#"<p:ph type="body" idx="1"/>"#,
        frames.body,
        "t",
    );
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
        r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
    ));
    xml.push_str(r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#);
    xml.push_str(MASTER_TEXT_STYLES);
    xml.push_str("</p:sldMaster>");
    xml
}

const MASTER_TEXT_STYLES: &str = concat!(
    "<p:txStyles>",
    "<p:titleStyle>",
    r#"<a:lvl1pPr algn="ctr" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
    r#"<a:spcBef><a:spcPct val="0"/></a:spcBef><a:buNone/>"#,
    r#"<a:defRPr sz="4400" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
    r#"<a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/></a:defRPr>"#,
    "</a:lvl1pPr>",
    "</p:titleStyle>",
    "<p:bodyStyle>",
    r#"<a:lvl1pPr marL="342900" indent="-342900" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
    r#"<a:spcBef><a:spcPct val="20000"/></a:spcBef><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/>"#,
    r#"<a:defRPr sz="3200" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
    r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr>"#,
    "</a:lvl1pPr>",
    r#"<a:lvl2pPr marL="742950" indent="-285750" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
    r#"<a:spcBef><a:spcPct val="20000"/></a:spcBef><a:buFont typeface="Arial"/><a:buChar char="&#8211;"/>"#,
    r#"<a:defRPr sz="2800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
    r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr>"#,
    "</a:lvl2pPr>",
    "</p:bodyStyle>",
    r#"<p:otherStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr></p:otherStyle>"#,
    "</p:txStyles>",
);

/// `ppt/slideLayouts/slideLayout1.xml`: "Title and Content".
pub(crate) fn slide_layout_xml() -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&format!(
        r#"<p:sldLayout {} type="obj" preserve="1">"#,
        NS_DECLARATIONS
    ));
    xml.push_str(r#"<p:cSld name="Title and Content"><p:spTree>"#);
    xml.push_str(GROUP_SHAPE_PROPERTIES);
    xml.push_str(concat!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#,
        r#"<p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr/>"#,
        r#"<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="Content Placeholder 2"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#,
        r#"<p:nvPr><p:ph idx="1"/></p:nvPr></p:nvSpPr><p:spPr/>"#,
        r#"<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
    ));
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    xml
}

/// `ppt/theme/theme1.xml`.
pub(crate) const THEME_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">"#,
    "<a:themeElements>",
    r#"<a:clrScheme name="Office">"#,
    r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
    r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
    r#"<a:dk2><a:srgbClr val="1F497D"/></a:dk2>"#,
    r#"<a:lt2><a:srgbClr val="EEECE1"/></a:lt2>"#,
    r#"<a:accent1><a:srgbClr val="4F81BD"/></a:accent1>"#,
    r#"<a:accent2><a:srgbClr val="C0504D"/></a:accent2>"#,
    r#"<a:accent3><a:srgbClr val="9BBB59"/></a:accent3>"#,
    r#"<a:accent4><a:srgbClr val="8064A2"/></a:accent4>"#,
    r#"<a:accent5><a:srgbClr val="4BACC6"/></a:accent5>"#,
    r#"<a:accent6><a:srgbClr val="F79646"/></a:accent6>"#,
    r#"<a:hlink><a:srgbClr val="0000FF"/></a:hlink>"#,
    r#"<a:folHlink><a:srgbClr val="800080"/></a:folHlink>"#,
    "</a:clrScheme>",
    r#"<a:fontScheme name="Office">"#,
    r#"<a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
    r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
    "</a:fontScheme>",
    r#"<a:fmtScheme name="Office">"#,
    "<a:fillStyleLst>",
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    "</a:fillStyleLst>",
    "<a:lnStyleLst>",
    r#"<a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="25400"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="38100"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    "</a:lnStyleLst>",
    "<a:effectStyleLst>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "</a:effectStyleLst>",
    "<a:bgFillStyleLst>",
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    "</a:bgFillStyleLst>",
    "</a:fmtScheme>",
    "</a:themeElements>",
    "<a:objectDefaults/><a:extraClrSchemeLst/>",
    "</a:theme>",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_lists_every_slide() {
        let xml = content_types_xml(2);
        assert!(xml.contains(r#"PartName="/ppt/slides/slide1.xml""#));
        assert!(xml.contains(r#"PartName="/ppt/slides/slide2.xml""#));
        assert!(!xml.contains("slide3.xml"));
    }

    #[test]
    fn test_presentation_slide_ids() {
        let xml = presentation_xml(2, SlideSize::Standard);
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId4"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));
    }

    #[test]
    fn test_presentation_without_slides_has_no_id_list() {
        let xml = presentation_xml(0, SlideSize::Widescreen);
        assert!(!xml.contains("sldIdLst"));
        assert!(xml.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));
    }

    #[test]
    fn test_presentation_rels_match_slide_ids() {
        let xml = presentation_rels_xml(2);
        assert!(xml.contains(r#"Id="rId3""#));
        assert!(xml.contains(r#"Target="slides/slide1.xml""#));
        assert!(xml.contains(r#"Id="rId4""#));
        assert!(xml.contains(r#"Target="slides/slide2.xml""#));
    }

    #[test]
    fn test_core_properties_escape_title() {
        let xml = core_properties_xml(Some("Q&A <live>"));
        assert!(xml.contains("<dc:title>Q&amp;A &lt;live&gt;</dc:title>"));
        assert!(!core_properties_xml(None).contains("dc:title"));
    }

    #[test]
    fn test_xml_text_drops_control_characters() {
        assert_eq!(xml_text("a\u{0}b\u{7}c\td"), "abc\td");
        assert_eq!(xml_text("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_xml_text_follows_xml_char_range() {
        assert_eq!(xml_text("a\u{FFFE}b\u{FFFF}c"), "abc");
        assert_eq!(xml_text("a\u{85}b\u{9F}c"), "a\u{85}b\u{9F}c");
        let edges = "\u{D7FF}\u{E000}\u{FFFD}\u{1F600}";
        assert_eq!(xml_text(edges), edges);
    }

    #[test]
    fn test_master_frames_follow_slide_size() {
        let standard = slide_master_xml(SlideSize::Standard);
        let wide = slide_master_xml(SlideSize::Widescreen);
        assert!(standard.contains(r#"<a:ext cx="8229600" cy="1143000"/>"#));
        assert!(wide.contains(r#"<a:ext cx="10515600" cy="1325563"/>"#));
        assert!(standard.contains("<a:lvl2pPr"));
    }
}
