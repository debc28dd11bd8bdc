//! Per-show settings, read from a TOML file:
//!
//! ```toml
//! show_year = "2024"
//!
//! [fonts]
//! text = "fonts/texgyreheros-regular.otf"
//! barcode = "fonts/free3of9.ttf"
//!
//! [templates]
//! bid_sheet = "templates/bidsheet.pdf"
//! control_form = "templates/controlform.png"
//!
//! [bid_sheets]
//! layout = "plain"
//! ```
//!
//! Relative paths are taken relative to the directory the file is in.

use crate::forms::{SheetKind, SheetLayout};
use crate::image::Image;
use crate::surface::FontSet;
use crate::template::Template;
use crate::units::{In, Pt};
use crate::{Font, RenderError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A bid sheet fills a quarter of a letter page
pub const BID_SHEET_SIZE: (In, In) = (In(4.25), In(5.5));
pub const CONTROL_FORM_SIZE: (In, In) = (In(8.5), In(11.0));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontPaths {
    pub text: PathBuf,
    /// Without one, barcodes are set in the text font
    #[serde(default)]
    pub barcode: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplatePaths {
    pub bid_sheet: PathBuf,
    pub control_form: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BidSheetSettings {
    #[serde(default)]
    pub layout: SheetKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowConfig {
    /// Printed at the top of every control form
    pub show_year: String,
    pub fonts: FontPaths,
    pub templates: TemplatePaths,
    #[serde(default)]
    pub bid_sheets: BidSheetSettings,
    #[serde(skip)]
    base_dir: PathBuf,
}

impl ShowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ShowConfig, RenderError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut config = ShowConfig::from_toml_str(&text)?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        tracing::debug!(path = %path.display(), show_year = %config.show_year, "loaded show config");
        Ok(config)
    }

    /// Parses a config; relative paths in it are relative to the working directory
    pub fn from_toml_str(text: &str) -> Result<ShowConfig, RenderError> {
        Ok(toml::from_str(text)?)
    }

    /// Where a path named in the config actually is
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }

    pub fn fonts(&self) -> Result<FontSet, RenderError> {
        let fonts = FontSet::new(Font::load_from_disk(self.resolve(&self.fonts.text))?);
        match &self.fonts.barcode {
            Some(barcode) => Ok(fonts.with_barcode(Font::load_from_disk(self.resolve(barcode))?)),
            None => Ok(fonts),
        }
    }

    pub fn sheet_layout(&self) -> SheetLayout {
        SheetLayout::for_kind(self.bid_sheets.layout)
    }

    pub fn bid_sheet_template(&self) -> Result<Template, RenderError> {
        load_template(&self.resolve(&self.templates.bid_sheet), BID_SHEET_SIZE)
    }

    pub fn control_form_template(&self) -> Result<Template, RenderError> {
        load_template(&self.resolve(&self.templates.control_form), CONTROL_FORM_SIZE)
    }
}

/// PDFs are imported as they are; anything else is read as an image and stretched over
/// `size`
pub fn load_template(path: &Path, size: (In, In)) -> Result<Template, RenderError> {
    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    tracing::debug!(path = %path.display(), is_pdf, "loading template");
    if is_pdf {
        Template::from_pdf_file(path)
    } else {
        let (width, height): (Pt, Pt) = (size.0.into(), size.1.into());
        Ok(Template::from_image(Image::new_from_disk(path)?, width, height))
    }
}
