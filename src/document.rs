use crate::{
    font::Font,
    form_xobject::FormXObject,
    image::Image,
    info::Info,
    page::{ImageLayout, Page},
    refs::{ObjectReferences, RefType},
    template::{Template, TemplateSource},
    RenderError, Pt, Rect,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    pub images: Arena<Image>,
    pub form_xobjects: Arena<FormXObject>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// The number of pages added so far
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Add a font to the document structure. Fonts are stored "globally" within the
    /// document, such that any page can access it by referring to it by its [Id].
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Add an image to the document structure. Images are stored "globally" within the
    /// document, such that any page can re-use an image by referring to it by its [Id].
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Add a Form XObject to the document structure. Form XObjects are reusable content
    /// containers that can be placed on pages with transformations.
    pub fn add_form_xobject(&mut self, form: FormXObject) -> Id<FormXObject> {
        self.form_xobjects.alloc(form)
    }

    /// Register a template as a Form XObject that can be stamped onto any number of pages.
    /// Raster templates are wrapped in a form that stretches the image over its bounding box.
    pub fn add_template(&mut self, template: Template) -> Id<FormXObject> {
        match template.source {
            TemplateSource::Imported(form) => self.add_form_xobject(form),
            TemplateSource::Image {
                image,
                width,
                height,
            } => {
                let image_id = self.add_image(image);
                let mut form = FormXObject::new(width, height);
                form.add_image(ImageLayout {
                    image_id,
                    position: Rect {
                        x1: Pt(0.0),
                        y1: Pt(0.0),
                        x2: width,
                        y2: height,
                    },
                });
                self.add_form_xobject(form)
            }
        }
    }

    /// Write the entire document to the writer. Although this can write to arbitrary
    /// streams, the entire document is "rendered" in memory first, so nothing reaches
    /// `w` if anything fails along the way.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), RenderError> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
            images,
            form_xobjects,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // page refs are keyed by position in the document, not by arena index
        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (i, font) in fonts.iter() {
            font.write(&mut refs, i, &mut writer);
        }

        for (i, image) in images.iter() {
            image.write(&mut refs, i.index(), &mut writer)?;
        }

        // pre-generate refs for all form xobjects before writing any of them
        // this allows form xobjects to reference each other
        for (i, _) in form_xobjects.iter() {
            refs.gen(RefType::FormXObject(i.index()));
        }

        for (i, xobj) in form_xobjects.iter() {
            xobj.write_with_ref(
                &mut refs,
                i.index(),
                &fonts,
                &images,
                &form_xobjects,
                &mut writer,
            )?;
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(RenderError::PageMissing)?;
            page.write(
                &mut refs,
                page_index,
                &fonts,
                &images,
                &form_xobjects,
                &mut writer,
            )?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        tracing::debug!(
            pages = page_order.len(),
            fonts = fonts.len(),
            forms = form_xobjects.len(),
            "writing PDF"
        );
        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pagesize, FormXObjectLayout, Transform};

    fn written(doc: Document) -> lopdf::Document {
        let mut bytes = Vec::new();
        doc.write(&mut bytes).expect("can write document");
        lopdf::Document::load_mem(&bytes).expect("output parses")
    }

    #[test]
    fn empty_document_has_no_pages() {
        let parsed = written(Document::default());
        assert!(parsed.get_pages().is_empty());
    }

    #[test]
    fn stamped_raster_template_is_shared_between_pages() {
        let mut doc = Document::default();
        let image = Image::new_raster(::image::DynamicImage::new_rgb8(4, 4));
        let template = doc.add_template(Template::from_image(image, Pt(306.0), Pt(396.0)));

        for _ in 0..3 {
            let mut page = Page::new(pagesize::LETTER);
            page.add_form_xobject(FormXObjectLayout {
                xobj_id: template,
                transform: Transform::translate(Pt(306.0), Pt(0.0)),
            });
            doc.add_page(page);
        }
        assert_eq!(doc.page_count(), 3);

        let parsed = written(doc);
        assert_eq!(parsed.get_pages().len(), 3);

        let forms = parsed
            .objects
            .values()
            .filter(|object| match object {
                lopdf::Object::Stream(stream) => stream
                    .dict
                    .get(b"Subtype")
                    .and_then(|subtype| subtype.as_name())
                    .map(|name| name == b"Form")
                    .unwrap_or(false),
                _ => false,
            })
            .count();
        assert_eq!(forms, 1);
    }
}
