//! Slide and notes-slide markup generation.
//!
//! Each layout role maps to a fixed arrangement of explicit shapes:
//! the opening slide centers title, subtitle, and logo; body slides
//! left-align a title over a decorative rule and a bulleted body; the
//! closing slide centers a large title and its bullets.

use pitch_core::{strip_emphasis, LayoutRole, SlideRecord, ThemeSpec};

use crate::parts::{NS_A, NS_P, NS_R, XML_DECL};

// Slide geometry in EMU (914,400 per inch), 16:9.
const SLIDE_W: i64 = 12_192_000;
const SLIDE_H: i64 = 6_858_000;

const LOGO_SIZE: i64 = 1_371_600; // 1.5 inches square

/// Paragraph alignment.
#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Center,
}

impl Align {
    fn attr(self) -> &'static str {
        match self {
            Align::Left => "l",
            Align::Center => "ctr",
        }
    }
}

/// Escape text content for XML.
fn esc(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}

/// One styled paragraph with a single run.
fn paragraph(text: &str, align: Align, size_pt: u32, color_hex: &str, bold: bool, font: &str) -> String {
    format!(
        r#"<a:p><a:pPr algn="{algn}"/><a:r><a:rPr lang="en-US" sz="{sz}" b="{b}" dirty="0"><a:solidFill><a:srgbClr val="{color_hex}"/></a:solidFill><a:latin typeface="{font}"/><a:ea typeface="{font}"/></a:rPr><a:t>{text}</a:t></a:r></a:p>"#,
        algn = align.attr(),
        sz = size_pt * 100,
        b = u8::from(bold),
        text = esc(&strip_emphasis(text)),
    )
}

/// A positioned text box holding pre-rendered paragraphs.
fn text_shape(id: u32, name: &str, x: i64, y: i64, cx: i64, cy: i64, paragraphs: &str) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr><p:txBody><a:bodyPr wrap="square"><a:normAutofit/></a:bodyPr><a:lstStyle/>{paragraphs}</p:txBody></p:sp>"#
    )
}

/// A solid-filled rectangle with no outline (the decorative rule).
fn rect_shape(id: u32, name: &str, x: i64, y: i64, cx: i64, cy: i64, color_hex: &str) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:solidFill><a:srgbClr val="{color_hex}"/></a:solidFill><a:ln><a:noFill/></a:ln></p:spPr><p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody></p:sp>"#
    )
}

/// An embedded picture referenced through a slide relationship.
fn picture_shape(id: u32, name: &str, rel_id: &str, x: i64, y: i64, cx: i64, cy: i64) -> String {
    format!(
        r#"<p:pic><p:nvPicPr><p:cNvPr id="{id}" name="{name}"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="{rel_id}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#
    )
}

/// Render one slide part.
///
/// `background_rel` draws a full-bleed picture behind the content;
/// without it the slide keeps a solid fill in the theme background.
/// `logo_rel` is only passed for opening slides with a loaded logo.
pub fn slide_xml(
    role: LayoutRole,
    record: &SlideRecord,
    theme: &ThemeSpec,
    background_rel: Option<&str>,
    logo_rel: Option<&str>,
) -> String {
    let accent = theme.accent.to_hex();
    let text_color = theme.body_text.to_hex();
    let font = &theme.font_family;

    let mut shapes = String::new();
    let mut next_id = 2u32;
    let mut id = || {
        let id = next_id;
        next_id += 1;
        id
    };

    if let Some(rel) = background_rel {
        shapes.push_str(&picture_shape(id(), "Background", rel, 0, 0, SLIDE_W, SLIDE_H));
    }

    match role {
        LayoutRole::Opening => {
            if let Some(title) = &record.title {
                let p = paragraph(title, Align::Center, theme.opening_title_pt, &accent, true, font);
                shapes.push_str(&text_shape(id(), "Title", 914_400, 1_371_600, 10_363_200, 1_371_600, &p));
            }
            // Subtitle box carries the subtitle and any remaining bullets.
            let mut paragraphs = String::new();
            if let Some(subtitle) = &record.subtitle {
                paragraphs.push_str(&paragraph(subtitle, Align::Center, theme.body_pt, &text_color, false, font));
            }
            for bullet in &record.bullets {
                paragraphs.push_str(&paragraph(bullet, Align::Center, theme.body_pt, &text_color, false, font));
            }
            if !paragraphs.is_empty() {
                shapes.push_str(&text_shape(id(), "Subtitle", 914_400, 2_971_800, 10_363_200, 1_600_200, &paragraphs));
            }
            if let Some(rel) = logo_rel {
                let x = (SLIDE_W - LOGO_SIZE) / 2;
                shapes.push_str(&picture_shape(id(), "Logo", rel, x, 4_686_300, LOGO_SIZE, LOGO_SIZE));
            }
        }
        LayoutRole::Body => {
            if let Some(title) = &record.title {
                let p = paragraph(title, Align::Left, theme.body_title_pt, &accent, true, font);
                shapes.push_str(&text_shape(id(), "Title", 457_200, 274_638, 11_277_600, 1_143_000, &p));
            }
            let secondary = theme.secondary_text.to_hex();
            shapes.push_str(&rect_shape(id(), "Rule", 457_200, 1_371_600, 8_229_600, 45_720, &secondary));
            let paragraphs: String = record
                .bullets
                .iter()
                .map(|b| paragraph(b, Align::Left, theme.body_pt, &text_color, false, font))
                .collect();
            if !paragraphs.is_empty() {
                shapes.push_str(&text_shape(id(), "Body", 457_200, 1_600_200, 11_277_600, 4_800_600, &paragraphs));
            }
        }
        LayoutRole::Closing => {
            if let Some(title) = &record.title {
                let p = paragraph(title, Align::Center, theme.closing_title_pt, &accent, true, font);
                shapes.push_str(&text_shape(id(), "Title", 914_400, 2_286_000, 10_363_200, 1_371_600, &p));
            }
            let paragraphs: String = record
                .bullets
                .iter()
                .map(|b| paragraph(b, Align::Center, theme.body_pt, &text_color, false, font))
                .collect();
            if !paragraphs.is_empty() {
                shapes.push_str(&text_shape(id(), "Bullets", 914_400, 3_657_600, 10_363_200, 1_828_800, &paragraphs));
            }
        }
    }

    format!(
        r#"{XML_DECL}<p:sld xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld><p:bg><p:bgPr><a:solidFill><a:srgbClr val="{bg}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>{shapes}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#,
        bg = theme.background.to_hex(),
    )
}

/// Render one notes-slide part.
///
/// One paragraph per note line; an empty list still yields a valid
/// (empty) notes body.
pub fn notes_slide_xml(notes: &[String]) -> String {
    let paragraphs = if notes.is_empty() {
        "<a:p/>".to_string()
    } else {
        notes
            .iter()
            .map(|note| {
                format!(
                    r#"<a:p><a:r><a:rPr lang="en-US" dirty="0"/><a:t>{}</a:t></a:r></a:p>"#,
                    esc(&strip_emphasis(note))
                )
            })
            .collect()
    };

    format!(
        r#"{XML_DECL}<p:notes xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/><p:sp><p:nvSpPr><p:cNvPr id="2" name="Notes Placeholder 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/>{paragraphs}</p:txBody></p:sp></p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:notes>"#
    )
}
