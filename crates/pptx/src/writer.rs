//! The PPTX emitter: accumulates slides, assembles the package on
//! `finalize`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use pitch_core::{DeckEmitter, Error, LayoutRole, Result, SlideId, SlideRecord, ThemeSpec};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::parts;
use crate::parts::Relationship;
use crate::xml;

const LOGO_PART: &str = "ppt/media/logo.png";
const BACKGROUND_PART: &str = "ppt/media/background.png";

/// A slide waiting for package assembly.
struct PendingSlide {
    role: LayoutRole,
    record: SlideRecord,
    notes: Vec<String>,
}

/// Writes a compiled deck as an OOXML presentation package.
pub struct PptxEmitter {
    theme: ThemeSpec,
    slides: Vec<PendingSlide>,
}

impl PptxEmitter {
    pub fn new() -> Self {
        Self {
            theme: ThemeSpec::default(),
            slides: Vec::new(),
        }
    }
}

impl Default for PptxEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckEmitter for PptxEmitter {
    fn begin_deck(&mut self, theme: &ThemeSpec) -> Result<()> {
        self.theme = theme.clone();
        self.slides.clear();
        Ok(())
    }

    fn add_slide(&mut self, role: LayoutRole, record: &SlideRecord) -> Result<SlideId> {
        self.slides.push(PendingSlide {
            role,
            record: record.clone(),
            notes: Vec::new(),
        });
        Ok(SlideId::new(self.slides.len() - 1))
    }

    fn set_notes(&mut self, slide: SlideId, notes: &[String]) -> Result<()> {
        let pending = self
            .slides
            .get_mut(slide.index())
            .ok_or_else(|| Error::Emission(format!("unknown slide handle {}", slide.index())))?;
        pending.notes = notes.to_vec();
        Ok(())
    }

    fn finalize(&mut self, output: &Path) -> Result<()> {
        let logo = load_optional_asset(self.theme.logo.as_deref(), "logo");
        let background = load_optional_asset(self.theme.background_image.as_deref(), "background");
        let has_media = logo.is_some() || background.is_some();
        let slide_count = self.slides.len();

        let file = File::create(output).map_err(|e| {
            Error::Emission(format!("cannot write {}: {e}", output.display()))
        })?;
        let mut package = Package::new(file);

        package.add(
            "[Content_Types].xml",
            &parts::content_types_xml(slide_count, has_media),
        )?;
        package.add("_rels/.rels", &parts::root_rels_xml())?;
        package.add("ppt/presentation.xml", &parts::presentation_xml(slide_count))?;
        package.add(
            "ppt/_rels/presentation.xml.rels",
            &parts::presentation_rels_xml(slide_count),
        )?;
        package.add("ppt/theme/theme1.xml", &parts::theme_xml(&self.theme))?;
        package.add(
            "ppt/slideMasters/slideMaster1.xml",
            &parts::slide_master_xml(&self.theme),
        )?;
        package.add(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            &parts::slide_master_rels_xml(),
        )?;
        package.add("ppt/slideLayouts/slideLayout1.xml", &parts::slide_layout_xml())?;
        package.add(
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            &parts::slide_layout_rels_xml(),
        )?;
        package.add("ppt/notesMasters/notesMaster1.xml", &parts::notes_master_xml())?;
        package.add(
            "ppt/notesMasters/_rels/notesMaster1.xml.rels",
            &parts::notes_master_rels_xml(),
        )?;

        if let Some(bytes) = &logo {
            package.add_bytes(LOGO_PART, bytes)?;
        }
        if let Some(bytes) = &background {
            package.add_bytes(BACKGROUND_PART, bytes)?;
        }

        for (index, slide) in self.slides.iter().enumerate() {
            let n = index + 1;
            let mut rels = vec![
                Relationship::new("rId1", parts::RT_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
                Relationship::new(
                    "rId2",
                    parts::RT_NOTES_SLIDE,
                    format!("../notesSlides/notesSlide{n}.xml"),
                ),
            ];

            let mut next_rel = 3;
            let mut image_rel = |rels: &mut Vec<Relationship>, target: &str| {
                let id = format!("rId{next_rel}");
                next_rel += 1;
                rels.push(Relationship::new(id.clone(), parts::RT_IMAGE, target));
                id
            };

            let background_rel = background
                .is_some()
                .then(|| image_rel(&mut rels, "../media/background.png"));
            let logo_rel = (slide.role == LayoutRole::Opening && logo.is_some())
                .then(|| image_rel(&mut rels, "../media/logo.png"));

            let slide_xml = xml::slide_xml(
                slide.role,
                &slide.record,
                &self.theme,
                background_rel.as_deref(),
                logo_rel.as_deref(),
            );
            package.add(&format!("ppt/slides/slide{n}.xml"), &slide_xml)?;
            package.add(
                &format!("ppt/slides/_rels/slide{n}.xml.rels"),
                &parts::relationships_xml(&rels),
            )?;

            package.add(
                &format!("ppt/notesSlides/notesSlide{n}.xml"),
                &xml::notes_slide_xml(&slide.notes),
            )?;
            let notes_rels = [
                Relationship::new("rId1", parts::RT_NOTES_MASTER, "../notesMasters/notesMaster1.xml"),
                Relationship::new("rId2", parts::RT_SLIDE, format!("../slides/slide{n}.xml")),
            ];
            package.add(
                &format!("ppt/notesSlides/_rels/notesSlide{n}.xml.rels"),
                &parts::relationships_xml(&notes_rels),
            )?;
        }

        package.finish()?;
        log::info!("Wrote {} slides to {}", slide_count, output.display());
        Ok(())
    }
}

/// Read an optional theme asset, degrading to `None` with a warning
/// when the configured file is absent.
fn load_optional_asset(path: Option<&Path>, what: &str) -> Option<Vec<u8>> {
    let path = path?;
    match load_asset(path) {
        Ok(bytes) => Some(bytes),
        Err(Error::AssetMissing(p)) => {
            log::warn!("{what} asset {} not found, falling back", p.display());
            None
        }
        Err(e) => {
            log::warn!("{what} asset {} unreadable ({e}), falling back", path.display());
            None
        }
    }
}

fn load_asset(path: &Path) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(Error::AssetMissing(path.to_path_buf()));
    }
    Ok(std::fs::read(path)?)
}

/// Thin wrapper over the ZIP writer with error mapping.
struct Package {
    zip: ZipWriter<File>,
    options: FileOptions,
}

impl Package {
    fn new(file: File) -> Self {
        Self {
            zip: ZipWriter::new(file),
            options: FileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }

    fn add(&mut self, name: &str, content: &str) -> Result<()> {
        self.add_bytes(name, content.as_bytes())
    }

    fn add_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.zip
            .start_file(name, self.options)
            .map_err(|e| Error::Zip(format!("starting {name}: {e}")))?;
        self.zip.write_all(bytes)?;
        Ok(())
    }

    fn finish(mut self) -> Result<()> {
        self.zip
            .finish()
            .map_err(|e| Error::Zip(format!("closing package: {e}")))?;
        Ok(())
    }
}
