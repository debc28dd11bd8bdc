//! Form templates: the pre-printed background every bid sheet or control form is
//! stamped from.
//!
//! Templates are usually single-page PDFs laid out in a design tool. The first page is
//! lifted out of the file with [lopdf] and turned into a Form XObject of the output
//! document: its content stream is copied verbatim, and every object reachable from its
//! resource dictionary (fonts, images, nested forms, colour spaces...) is deep-copied
//! with fresh object numbers. Raster images can stand in for a PDF template as well.

use crate::form_xobject::FormXObject;
use crate::image::Image;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::RenderError;
use lopdf::{Object, ObjectId};
use pdf_writer::writers::FormXObject as FormXObjectWriter;
use pdf_writer::{Name, Null, Obj, Pdf, Str};
use std::collections::BTreeMap;
use std::path::Path;

/// Page tree nesting deeper than this is treated as a cycle
const MAX_PAGE_TREE_DEPTH: usize = 64;

pub(crate) enum TemplateSource {
    Imported(FormXObject),
    Image {
        image: Image,
        width: Pt,
        height: Pt,
    },
}

/// A loaded template, ready to be added to a [`Document`](crate::Document) with
/// [`Document::add_template`](crate::Document::add_template)
pub struct Template {
    pub(crate) source: TemplateSource,
}

impl Template {
    /// Load the first page of a PDF file as a template
    pub fn from_pdf_file<P: AsRef<Path>>(path: P) -> Result<Template, RenderError> {
        let document = lopdf::Document::load(path)?;
        Template::from_pdf(&document)
    }

    /// Load the first page of an in-memory PDF as a template
    pub fn from_pdf_bytes(bytes: &[u8]) -> Result<Template, RenderError> {
        let document = lopdf::Document::load_mem(bytes)?;
        Template::from_pdf(&document)
    }

    /// Lift the first page out of an already-parsed PDF
    pub fn from_pdf(document: &lopdf::Document) -> Result<Template, RenderError> {
        let page_id = *document
            .get_pages()
            .values()
            .next()
            .ok_or(RenderError::TemplateMissingPage)?;

        let media_box = match inherited(document, page_id, b"MediaBox")? {
            Some(value) => rect_from(document, value)?,
            None => {
                tracing::warn!("template page has no MediaBox, assuming US Letter");
                let (width, height) = crate::pagesize::LETTER;
                Rect {
                    x1: Pt(0.0),
                    y1: Pt(0.0),
                    x2: width,
                    y2: height,
                }
            }
        };

        let content = document.get_page_content(page_id)?;

        let resources = inherited(document, page_id, b"Resources")?.cloned();
        let mut objects = BTreeMap::new();
        if let Some(resources) = &resources {
            collect_referenced(document, resources, &mut objects);
        }

        tracing::debug!(
            content_bytes = content.len(),
            objects = objects.len(),
            "imported template page"
        );

        Ok(Template {
            source: TemplateSource::Imported(FormXObject::imported(
                media_box,
                content,
                ImportedResources { resources, objects },
            )),
        })
    }

    /// Use a raster image, stretched to `width` x `height`, as the template
    pub fn from_image(image: Image, width: Pt, height: Pt) -> Template {
        Template {
            source: TemplateSource::Image {
                image,
                width,
                height,
            },
        }
    }

    /// The area the template covers, relative to wherever it is stamped
    pub fn bbox(&self) -> Rect {
        match &self.source {
            TemplateSource::Imported(form) => form.bbox,
            TemplateSource::Image { width, height, .. } => Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: *width,
                y2: *height,
            },
        }
    }
}

/// The resource dictionary of an imported page and every object it reaches, keyed by
/// their object ids in the source file
#[derive(Debug)]
pub(crate) struct ImportedResources {
    resources: Option<Object>,
    objects: BTreeMap<ObjectId, Object>,
}

impl ImportedResources {
    /// Allocates refs for, then writes, every copied object
    pub(crate) fn write_objects(&self, refs: &mut ObjectReferences, form: usize, writer: &mut Pdf) {
        for &object in self.objects.keys() {
            refs.gen(RefType::Imported { form, object });
        }

        for (&object, value) in self.objects.iter() {
            let id = refs
                .get(RefType::Imported { form, object })
                .expect("imported refs were just generated");
            match value {
                Object::Stream(stream) => {
                    let mut out = writer.stream(id, &stream.content);
                    for (key, value) in stream.dict.iter() {
                        // pdf-writer writes the length of the data itself
                        if key.as_slice() == b"Length" {
                            continue;
                        }
                        copy_object(out.insert(Name(key)), value, refs, form);
                    }
                }
                other => copy_object(writer.indirect(id), other, refs, form),
            }
        }
    }

    pub(crate) fn write_resources(
        &self,
        xobj: &mut FormXObjectWriter,
        refs: &ObjectReferences,
        form: usize,
    ) {
        if let Some(resources) = &self.resources {
            copy_object(xobj.insert(Name(b"Resources")), resources, refs, form);
        }
    }
}

/// Looks up a page attribute, walking up the page tree for inheritable ones
fn inherited<'a>(
    document: &'a lopdf::Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<&'a Object>, RenderError> {
    let mut node = document.get_dictionary(page_id)?;
    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Ok(value) = node.get(key) {
            return Ok(Some(value));
        }
        match node.get(b"Parent").and_then(|parent| parent.as_reference()) {
            Ok(parent) => node = document.get_dictionary(parent)?,
            Err(_) => return Ok(None),
        }
    }
    Ok(None)
}

fn resolve<'a>(document: &'a lopdf::Document, value: &'a Object) -> Result<&'a Object, RenderError> {
    match value {
        Object::Reference(id) => Ok(document.get_object(*id)?),
        other => Ok(other),
    }
}

fn number(value: &Object) -> Option<f32> {
    match value {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r as f32),
        _ => None,
    }
}

fn rect_from(document: &lopdf::Document, value: &Object) -> Result<Rect, RenderError> {
    let corners = resolve(document, value)?
        .as_array()?
        .iter()
        .map(|corner| resolve(document, corner).ok().and_then(number))
        .collect::<Option<Vec<f32>>>();

    match corners.as_deref() {
        Some(&[x1, y1, x2, y2]) => Ok(Rect {
            x1: Pt(x1.min(x2)),
            y1: Pt(y1.min(y2)),
            x2: Pt(x1.max(x2)),
            y2: Pt(y1.max(y2)),
        }),
        _ => Err(RenderError::TemplateMalformed("MediaBox is not four numbers")),
    }
}

/// Gathers every indirect object reachable from `root`. `/Parent` links are not
/// followed so the source page tree isn't dragged along. References to objects that
/// don't exist are left out and end up written as null.
fn collect_referenced<'a>(
    document: &'a lopdf::Document,
    root: &'a Object,
    objects: &mut BTreeMap<ObjectId, Object>,
) {
    let mut pending: Vec<&'a Object> = vec![root];
    while let Some(value) = pending.pop() {
        match value {
            Object::Reference(id) => {
                if objects.contains_key(id) {
                    continue;
                }
                if let Ok(target) = document.get_object(*id) {
                    objects.insert(*id, target.clone());
                    pending.push(target);
                }
            }
            Object::Array(items) => pending.extend(items.iter()),
            Object::Dictionary(dict) => pending.extend(
                dict.iter()
                    .filter(|(key, _)| key.as_slice() != b"Parent")
                    .map(|(_, value)| value),
            ),
            Object::Stream(stream) => pending.extend(
                stream
                    .dict
                    .iter()
                    .filter(|(key, _)| key.as_slice() != b"Parent")
                    .map(|(_, value)| value),
            ),
            _ => {}
        }
    }
}

/// Writes a direct copy of `value`, rewriting references to the copied objects' new ids
fn copy_object(obj: Obj<'_>, value: &Object, refs: &ObjectReferences, form: usize) {
    match value {
        Object::Null => obj.primitive(Null),
        Object::Boolean(b) => obj.primitive(*b),
        Object::Integer(i) => obj.primitive(*i as i32),
        Object::Real(r) => obj.primitive(*r as f32),
        Object::Name(name) => obj.primitive(Name(name)),
        Object::String(bytes, _) => obj.primitive(Str(bytes)),
        Object::Array(items) => {
            let mut array = obj.array();
            for item in items {
                copy_object(array.push(), item, refs, form);
            }
        }
        Object::Dictionary(dict) => {
            let mut out = obj.dict();
            for (key, value) in dict.iter() {
                copy_object(out.insert(Name(key)), value, refs, form);
            }
        }
        // streams can only live in indirect objects, which are written separately
        Object::Stream(_) => obj.primitive(Null),
        Object::Reference(object) => match refs.get(RefType::Imported {
            form,
            object: *object,
        }) {
            Some(id) => obj.primitive(id),
            None => obj.primitive(Null),
        },
    }
}
