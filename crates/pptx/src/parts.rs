//! Fixed and near-fixed parts of the presentationml package.
//!
//! Everything here is package plumbing: the content-types manifest,
//! relationship parts, the single dark master/layout pair, the notes
//! master, and the theme part generated from the deck's `ThemeSpec`.

use pitch_core::ThemeSpec;

pub const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

// Relationship types.
pub const RT_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
pub const RT_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
pub const RT_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
pub const RT_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
pub const RT_NOTES_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesMaster";
pub const RT_NOTES_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide";
pub const RT_THEME: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
pub const RT_IMAGE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

// Content types.
const CT_PRESENTATION: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
const CT_SLIDE_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
const CT_SLIDE_LAYOUT: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
const CT_SLIDE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const CT_NOTES_MASTER: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.notesMaster+xml";
const CT_NOTES_SLIDE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.notesSlide+xml";
const CT_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";

/// One `<Relationship>` entry of a `.rels` part.
pub struct Relationship {
    pub id: String,
    pub rel_type: &'static str,
    pub target: String,
}

impl Relationship {
    pub fn new(id: impl Into<String>, rel_type: &'static str, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rel_type,
            target: target.into(),
        }
    }
}

/// Render a `.rels` part from its entries.
pub fn relationships_xml(entries: &[Relationship]) -> String {
    let mut out = String::from(XML_DECL);
    out.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for rel in entries {
        out.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            rel.id, rel.rel_type, rel.target
        ));
    }
    out.push_str("</Relationships>");
    out
}

/// The package-level content-types manifest.
pub fn content_types_xml(slide_count: usize, has_media: bool) -> String {
    let mut out = String::from(XML_DECL);
    out.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    out.push_str(
        r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    );
    out.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    if has_media {
        out.push_str(r#"<Default Extension="png" ContentType="image/png"/>"#);
    }
    let overrides = [
        ("/ppt/presentation.xml", CT_PRESENTATION),
        ("/ppt/slideMasters/slideMaster1.xml", CT_SLIDE_MASTER),
        ("/ppt/slideLayouts/slideLayout1.xml", CT_SLIDE_LAYOUT),
        ("/ppt/notesMasters/notesMaster1.xml", CT_NOTES_MASTER),
        ("/ppt/theme/theme1.xml", CT_THEME),
    ];
    for (part, ct) in overrides {
        out.push_str(&format!(
            r#"<Override PartName="{part}" ContentType="{ct}"/>"#
        ));
    }
    for n in 1..=slide_count {
        out.push_str(&format!(
            r#"<Override PartName="/ppt/slides/slide{n}.xml" ContentType="{CT_SLIDE}"/>"#
        ));
        out.push_str(&format!(
            r#"<Override PartName="/ppt/notesSlides/notesSlide{n}.xml" ContentType="{CT_NOTES_SLIDE}"/>"#
        ));
    }
    out.push_str("</Types>");
    out
}

/// The package root relationships, pointing at the presentation part.
pub fn root_rels_xml() -> String {
    relationships_xml(&[Relationship::new(
        "rId1",
        RT_OFFICE_DOCUMENT,
        "ppt/presentation.xml",
    )])
}

/// `ppt/presentation.xml`: master list, notes master, slide list, 16:9 size.
pub fn presentation_xml(slide_count: usize) -> String {
    let mut out = String::from(XML_DECL);
    out.push_str(&format!(
        r#"<p:presentation xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">"#
    ));
    out.push_str(
        r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#,
    );
    out.push_str(r#"<p:notesMasterIdLst><p:notesMasterId r:id="rId2"/></p:notesMasterIdLst>"#);
    out.push_str("<p:sldIdLst>");
    for n in 0..slide_count {
        out.push_str(&format!(
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            256 + n,
            3 + n
        ));
    }
    out.push_str("</p:sldIdLst>");
    out.push_str(r#"<p:sldSz cx="12192000" cy="6858000"/>"#);
    out.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    out.push_str("</p:presentation>");
    out
}

/// Relationships for `ppt/presentation.xml`.
pub fn presentation_rels_xml(slide_count: usize) -> String {
    let mut rels = vec![
        Relationship::new("rId1", RT_SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
        Relationship::new("rId2", RT_NOTES_MASTER, "notesMasters/notesMaster1.xml"),
    ];
    for n in 1..=slide_count {
        rels.push(Relationship::new(
            format!("rId{}", 2 + n),
            RT_SLIDE,
            format!("slides/slide{n}.xml"),
        ));
    }
    relationships_xml(&rels)
}

/// The single slide master: a solid dark background and no placeholders.
///
/// All slides use the blank layout; role-specific geometry is drawn as
/// explicit shapes on each slide.
pub fn slide_master_xml(theme: &ThemeSpec) -> String {
    format!(
        r#"{XML_DECL}<p:sldMaster xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld><p:bg><p:bgPr><a:solidFill><a:srgbClr val="{bg}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld><p:clrMap bg1="dk1" tx1="lt1" bg2="dk2" tx2="lt2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/><p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst></p:sldMaster>"#,
        bg = theme.background.to_hex(),
    )
}

pub fn slide_master_rels_xml() -> String {
    relationships_xml(&[
        Relationship::new("rId1", RT_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
        Relationship::new("rId2", RT_THEME, "../theme/theme1.xml"),
    ])
}

/// The blank layout every slide references.
pub fn slide_layout_xml() -> String {
    format!(
        r#"{XML_DECL}<p:sldLayout xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" type="blank"><p:cSld name="Blank"><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#
    )
}

pub fn slide_layout_rels_xml() -> String {
    relationships_xml(&[Relationship::new(
        "rId1",
        RT_SLIDE_MASTER,
        "../slideMasters/slideMaster1.xml",
    )])
}

/// A minimal notes master.
pub fn notes_master_xml() -> String {
    format!(
        r#"{XML_DECL}<p:notesMaster xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld><p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/></p:notesMaster>"#
    )
}

pub fn notes_master_rels_xml() -> String {
    relationships_xml(&[Relationship::new("rId1", RT_THEME, "../theme/theme1.xml")])
}

/// The theme part, generated from the deck's color and font constants.
pub fn theme_xml(theme: &ThemeSpec) -> String {
    let bg = theme.background.to_hex();
    let text = theme.body_text.to_hex();
    let accent = theme.accent.to_hex();
    let secondary = theme.secondary_text.to_hex();
    let font = &theme.font_family;

    let fill_styles = format!(
        "<a:fillStyleLst>{fill}{fill}{fill}</a:fillStyleLst>",
        fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#
    );
    let line_styles = format!(
        "<a:lnStyleLst>{ln}{ln}{ln}</a:lnStyleLst>",
        ln = r#"<a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#
    );
    let effect_styles = format!(
        "<a:effectStyleLst>{fx}{fx}{fx}</a:effectStyleLst>",
        fx = "<a:effectStyle><a:effectLst/></a:effectStyle>"
    );
    let bg_fill_styles = format!(
        "<a:bgFillStyleLst>{fill}{fill}{fill}</a:bgFillStyleLst>",
        fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#
    );

    format!(
        r#"{XML_DECL}<a:theme xmlns:a="{NS_A}" name="Deck"><a:themeElements><a:clrScheme name="Deck"><a:dk1><a:srgbClr val="{bg}"/></a:dk1><a:lt1><a:srgbClr val="{text}"/></a:lt1><a:dk2><a:srgbClr val="{bg}"/></a:dk2><a:lt2><a:srgbClr val="{secondary}"/></a:lt2><a:accent1><a:srgbClr val="{accent}"/></a:accent1><a:accent2><a:srgbClr val="{accent}"/></a:accent2><a:accent3><a:srgbClr val="{secondary}"/></a:accent3><a:accent4><a:srgbClr val="{secondary}"/></a:accent4><a:accent5><a:srgbClr val="{accent}"/></a:accent5><a:accent6><a:srgbClr val="{secondary}"/></a:accent6><a:hlink><a:srgbClr val="{accent}"/></a:hlink><a:folHlink><a:srgbClr val="{secondary}"/></a:folHlink></a:clrScheme><a:fontScheme name="Deck"><a:majorFont><a:latin typeface="{font}"/><a:ea typeface="{font}"/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="{font}"/><a:ea typeface="{font}"/><a:cs typeface=""/></a:minorFont></a:fontScheme><a:fmtScheme name="Office">{fill_styles}{line_styles}{effect_styles}{bg_fill_styles}</a:fmtScheme></a:themeElements></a:theme>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_lists_every_slide() {
        let xml = content_types_xml(2, false);
        assert!(xml.contains(r#"PartName="/ppt/slides/slide1.xml""#));
        assert!(xml.contains(r#"PartName="/ppt/slides/slide2.xml""#));
        assert!(xml.contains(r#"PartName="/ppt/notesSlides/notesSlide2.xml""#));
        assert!(!xml.contains("slide3.xml"));
        assert!(!xml.contains(r#"Extension="png""#));
    }

    #[test]
    fn test_content_types_declares_png_only_with_media() {
        assert!(content_types_xml(1, true).contains(r#"Extension="png""#));
    }

    #[test]
    fn test_presentation_lists_slides_after_masters() {
        let xml = presentation_xml(3);
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldId id="258" r:id="rId5"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));
    }

    #[test]
    fn test_presentation_rels_match_slide_ids() {
        let xml = presentation_rels_xml(2);
        assert!(xml.contains(r#"Id="rId3" Type"#));
        assert!(xml.contains("slides/slide2.xml"));
        assert!(xml.contains("notesMasters/notesMaster1.xml"));
    }

    #[test]
    fn test_theme_uses_spec_colors_and_font() {
        let xml = theme_xml(&ThemeSpec::default());
        assert!(xml.contains(r#"<a:accent1><a:srgbClr val="22D3EE"/></a:accent1>"#));
        assert!(xml.contains(r#"typeface="Microsoft YaHei""#));
    }

    #[test]
    fn test_master_background_is_solid_theme_fill() {
        let xml = slide_master_xml(&ThemeSpec::default());
        assert!(xml.contains(r#"<a:srgbClr val="0B0F19"/>"#));
    }
}
