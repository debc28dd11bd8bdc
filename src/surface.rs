//! The drawing surface forms are composed onto.
//!
//! Composers never touch the PDF directly: they save and restore a translation, stamp
//! the template, blank out regions and draw fitted text through [Surface]. [PdfSurface]
//! does this on an in-memory [Document]; anything else (tests, previews) can implement
//! the same trait.

use crate::colour::{colours, Colour};
use crate::document::Document;
use crate::font::Font;
use crate::form_xobject::{FormXObject, FormXObjectLayout};
use crate::info::Info;
use crate::layout::{FittedText, FontFamily, TextMetrics};
use crate::page::{Page, SpanFont, SpanLayout};
use crate::pagesize::{self, PageSize};
use crate::rect::Rect;
use crate::template::Template;
use crate::transform::Transform;
use crate::units::Pt;
use id_arena::Id;
use pdf_writer::Content;

/// Control point distance for approximating a quarter circle with a cubic Bézier
const KAPPA: f32 = 0.5523;

/// A filled and stroked rounded rectangle, used to blank out part of a template
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mask {
    pub rect: Rect,
    pub radius: Pt,
    pub line_width: Pt,
    pub fill: Colour,
    pub stroke: Colour,
}

impl Mask {
    /// The path and paint operators for this mask, shifted by `transform`
    pub fn to_content(&self, transform: Transform) -> Content {
        let (x1, y1) = transform.apply(self.rect.x1, self.rect.y1);
        let (x2, y2) = transform.apply(self.rect.x2, self.rect.y2);
        let (x1, y1, x2, y2) = (*x1, *y1, *x2, *y2);
        let r = self.radius.0.min((x2 - x1) / 2.0).min((y2 - y1) / 2.0);
        let k = r * KAPPA;

        let mut content = Content::new();
        content.set_line_width(*self.line_width);
        self.fill.set_fill(&mut content);
        self.stroke.set_stroke(&mut content);

        content.move_to(x1 + r, y1);
        content.line_to(x2 - r, y1);
        content.cubic_to(x2 - r + k, y1, x2, y1 + r - k, x2, y1 + r);
        content.line_to(x2, y2 - r);
        content.cubic_to(x2, y2 - r + k, x2 - r + k, y2, x2 - r, y2);
        content.line_to(x1 + r, y2);
        content.cubic_to(x1 + r - k, y2, x1, y2 - r + k, x1, y2 - r);
        content.line_to(x1, y1 + r);
        content.cubic_to(x1, y1 + r - k, x1 + r - k, y1, x1 + r, y1);
        content.close_path();
        content.fill_nonzero_and_stroke();
        content
    }
}

/// Everything a form composer needs from whatever it is drawing on
pub trait Surface {
    /// Measures text in the given family's font
    fn metrics(&self, family: FontFamily) -> &dyn TextMetrics;

    /// Remember the current translation
    fn save_state(&mut self);

    /// Go back to the most recently saved translation
    fn restore_state(&mut self);

    /// Shift everything drawn afterwards, on top of the current translation
    fn translate(&mut self, dx: Pt, dy: Pt);

    /// Place a copy of the template at the current origin
    fn stamp_template(&mut self);

    fn mask(&mut self, mask: &Mask);

    /// Draw text already fitted to its box
    fn draw_text(&mut self, family: FontFamily, text: &FittedText);

    /// Finish the current page and start a new one
    fn show_page(&mut self);
}

/// The fonts a document is set in
pub struct FontSet {
    pub text: Font,
    /// A Code 39 font for barcode fields
    pub barcode: Option<Font>,
}

impl FontSet {
    pub fn new(text: Font) -> FontSet {
        FontSet {
            text,
            barcode: None,
        }
    }

    pub fn with_barcode(mut self, barcode: Font) -> FontSet {
        self.barcode = Some(barcode);
        self
    }
}

/// A [Surface] that builds up a PDF [Document] page by page
pub struct PdfSurface {
    document: Document,
    page_size: PageSize,
    current: Page,
    template: Id<FormXObject>,
    text_font: Id<Font>,
    barcode_font: Id<Font>,
    transform: Transform,
    saved: Vec<Transform>,
}

impl PdfSurface {
    pub fn new(template: Template, fonts: FontSet) -> PdfSurface {
        let mut document = Document::default();
        let template = document.add_template(template);

        let FontSet { text, barcode } = fonts;
        tracing::debug!(font = %text.name(), "using text font");
        let text_font = document.add_font(text);
        let barcode_font = match barcode {
            Some(barcode) => {
                tracing::debug!(font = %barcode.name(), "using barcode font");
                document.add_font(barcode)
            }
            None => {
                tracing::warn!("no barcode font loaded, barcodes will be set in the text font");
                text_font
            }
        };

        PdfSurface {
            document,
            page_size: pagesize::LETTER,
            current: Page::new(pagesize::LETTER),
            template,
            text_font,
            barcode_font,
            transform: Transform::identity(),
            saved: Vec::new(),
        }
    }

    /// Sets the document's info block
    pub fn set_info(&mut self, info: Info) {
        self.document.set_info(info);
    }

    fn font_id(&self, family: FontFamily) -> Id<Font> {
        match family {
            FontFamily::Text => self.text_font,
            FontFamily::Barcode => self.barcode_font,
        }
    }

    /// The finished document. A page that was drawn on but never shown is kept.
    pub fn into_document(self) -> Document {
        let PdfSurface {
            mut document,
            current,
            ..
        } = self;
        if !current.is_empty() {
            document.add_page(current);
        }
        document
    }
}

impl Surface for PdfSurface {
    fn metrics(&self, family: FontFamily) -> &dyn TextMetrics {
        &self.document.fonts[self.font_id(family)]
    }

    fn save_state(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore_state(&mut self) {
        self.transform = self.saved.pop().unwrap_or_default();
    }

    fn translate(&mut self, dx: Pt, dy: Pt) {
        self.transform = Transform::translate(dx, dy).then(self.transform);
    }

    fn stamp_template(&mut self) {
        self.current.add_form_xobject(FormXObjectLayout {
            xobj_id: self.template,
            transform: self.transform,
        });
    }

    fn mask(&mut self, mask: &Mask) {
        self.current.add_content(mask.to_content(self.transform));
    }

    fn draw_text(&mut self, family: FontFamily, text: &FittedText) {
        let font = SpanFont {
            id: self.font_id(family),
            size: text.size,
        };
        let spans = text
            .lines
            .iter()
            .map(|line| SpanLayout {
                text: line.text.clone(),
                font,
                colour: colours::BLACK,
                coords: self.transform.apply(line.origin.0, line.origin.1),
            })
            .collect();
        self.current.add_spans(spans);
    }

    fn show_page(&mut self) {
        let page = std::mem::replace(&mut self.current, Page::new(self.page_size));
        self.document.add_page(page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_path_is_translated() {
        let mask = Mask {
            rect: Rect::from_inches(1.0, 1.0, 2.0, 1.5),
            radius: Pt(4.0),
            line_width: Pt(4.0),
            fill: colours::WHITE,
            stroke: colours::WHITE,
        };
        let content = mask.to_content(Transform::translate(Pt(306.0), Pt(0.0))).finish();
        let text = String::from_utf8(content).expect("content is ascii");
        assert!(text.contains("4 w"));
        assert!(text.contains("1 g"));
        assert!(text.contains("1 G"));
        // starts at the bottom edge, one radius in from the shifted left side
        assert!(text.contains("382 72 m"));
        assert!(text.trim_end().ends_with('B'));
    }
}
