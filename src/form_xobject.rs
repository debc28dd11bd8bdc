//! Form XObjects for reusable PDF content with transformation support.
//!
//! A form template is drawn once into a Form XObject and then placed on every page
//! (or every quadrant of a page) with a translation. The form's content is stored once
//! in the output file no matter how many times it is stamped.
//!
//! # Coordinate system
//!
//! Form XObjects use PDF's coordinate system where (0, 0) is at the bottom-left.
//! When placed on a page, the form's origin aligns with the page origin unless
//! a transformation is applied.

use crate::content::{render_contents, write_resources};
use crate::font::Font;
use crate::image::Image;
use crate::page::{ImageLayout, PageContents};
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::template::ImportedResources;
use crate::transform::Transform;
use crate::units::*;
use crate::RenderError;
use id_arena::{Arena, Id};
use pdf_writer::{Filter, Pdf};

/// A reusable content container (Form XObject) that can be placed on pages
/// with transformations.
///
/// # Usage
///
/// 1. Create a `FormXObject` with a bounding box, or import one from a template
/// 2. Add content using the same methods as [`Page`](crate::Page)
/// 3. Register it with the document via [`Document::add_form_xobject`](crate::Document::add_form_xobject)
/// 4. Place it on pages using [`Page::add_form_xobject`](crate::Page::add_form_xobject)
///    with a [`FormXObjectLayout`]
///
/// # Example
///
/// ```
/// use artshow_forms::{Document, Page, FormXObject, FormXObjectLayout, Transform, Pt};
/// use artshow_forms::pagesize;
///
/// let mut doc = Document::default();
///
/// // create a 2x2 inch form
/// let form = FormXObject::new(Pt(144.0), Pt(144.0));
/// let form_id = doc.add_form_xobject(form);
///
/// let mut page = Page::new(pagesize::LETTER);
/// // place the form translated 1 inch from the origin
/// page.add_form_xobject(FormXObjectLayout {
///     xobj_id: form_id,
///     transform: Transform::translate(Pt(72.0), Pt(72.0)),
/// });
/// doc.add_page(page);
/// ```
#[derive(Debug)]
pub struct FormXObject {
    /// Bounding box of the form content
    pub bbox: Rect,
    /// Content to render (same types as Page)
    pub contents: Vec<PageContents>,
    /// Resources brought along with content copied out of another PDF. Forms built
    /// in this document use the document's own fonts, images and forms instead.
    pub(crate) imported: Option<ImportedResources>,
}

impl FormXObject {
    /// Create a new Form XObject with the given dimensions
    pub fn new(width: Pt, height: Pt) -> Self {
        FormXObject::from_bbox(Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: width,
            y2: height,
        })
    }

    /// Create a new Form XObject from an explicit bounding box
    pub fn from_bbox(bbox: Rect) -> Self {
        FormXObject {
            bbox,
            contents: Vec::new(),
            imported: None,
        }
    }

    /// A form holding a content stream lifted from another PDF, along with the
    /// resources that content refers to
    pub(crate) fn imported(bbox: Rect, content: Vec<u8>, resources: ImportedResources) -> Self {
        FormXObject {
            bbox,
            contents: vec![PageContents::RawContent(content)],
            imported: Some(resources),
        }
    }

    /// Add an image to the form
    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    /// Write this Form XObject (and any objects it imported) to the PDF. The form's
    /// own ref must already have been generated.
    pub(crate) fn write_with_ref(
        &self,
        refs: &mut ObjectReferences,
        xobj_index: usize,
        fonts: &Arena<Font>,
        images: &Arena<Image>,
        all_form_xobjects: &Arena<FormXObject>,
        writer: &mut Pdf,
    ) -> Result<(), RenderError> {
        let xobj_ref = refs
            .get(RefType::FormXObject(xobj_index))
            .expect("FormXObject ref should be pre-generated");

        // imported objects have to be written out before the form's own stream is opened
        if let Some(imported) = &self.imported {
            imported.write_objects(refs, xobj_index, writer);
        }

        let rendered = render_contents(&self.contents, fonts)?;
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            &rendered,
            miniz_oxide::deflate::CompressionLevel::DefaultLevel as u8,
        );

        let mut xobj = writer.form_xobject(xobj_ref, &compressed);
        xobj.filter(Filter::FlateDecode);
        xobj.bbox(self.bbox.into());

        match &self.imported {
            Some(imported) => imported.write_resources(&mut xobj, refs, xobj_index),
            None => write_resources(xobj.resources(), refs, fonts, images, all_form_xobjects),
        }

        Ok(())
    }
}

/// Specifies how to place a Form XObject on a page.
///
/// Combines the form to render with a transformation that controls where
/// and how it appears, allowing the same form to be placed multiple times with
/// different positions.
#[derive(Debug)]
pub struct FormXObjectLayout {
    /// The Form XObject to place (obtained from [`Document::add_form_xobject`](crate::Document::add_form_xobject))
    pub xobj_id: Id<FormXObject>,
    /// Transformation matrix applied when rendering this placement
    pub transform: Transform,
}
