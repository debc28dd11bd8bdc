//! Shared content rendering logic for pages and form XObjects.

use crate::colour::Colour;
use crate::font::Font;
use crate::form_xobject::FormXObject;
use crate::image::Image;
use crate::page::{PageContents, SpanFont, SpanLayout};
use crate::refs::{ObjectReferences, RefType};
use id_arena::Arena;
use pdf_writer::writers::Resources;
use pdf_writer::{Finish, Name};
use std::io::Write;

/// Writes the resource dictionary shared by every page and document-built form: all of
/// the document's fonts as `/F{i}`, images as `/I{i}`, and forms as `/X{i}`.
pub(crate) fn write_resources(
    mut resources: Resources,
    refs: &ObjectReferences,
    fonts: &Arena<Font>,
    images: &Arena<Image>,
    form_xobjects: &Arena<FormXObject>,
) {
    let mut resource_fonts = resources.fonts();
    for (id, _) in fonts.iter() {
        let i = id.index();
        resource_fonts.pair(
            Name(format!("F{i}").as_bytes()),
            refs.get(RefType::Font(i))
                .expect("fonts are written before anything that uses them"),
        );
    }
    resource_fonts.finish();

    let mut resource_xobjects = resources.x_objects();
    for (id, _) in images.iter() {
        let i = id.index();
        resource_xobjects.pair(
            Name(format!("I{i}").as_bytes()),
            refs.get(RefType::Image(i))
                .expect("images are written before anything that uses them"),
        );
    }
    for (id, _) in form_xobjects.iter() {
        let i = id.index();
        resource_xobjects.pair(
            Name(format!("X{i}").as_bytes()),
            refs.get(RefType::FormXObject(i))
                .expect("form refs are generated before anything is written"),
        );
    }
    resource_xobjects.finish();
    resources.finish();
}

/// Renders page contents to a PDF content stream.
///
/// Shared by pages and Form XObjects to turn high-level content items into
/// low-level PDF operators. Every item is isolated in its own `q`/`Q` pair.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => {
                render_text_spans(&mut content, spans, fonts)?;
            }
            PageContents::Image(image) => {
                write!(&mut content, "q\n")?;
                write!(
                    &mut content,
                    "{} 0 0 {} {} {} cm\n",
                    image.position.x2 - image.position.x1,
                    image.position.y2 - image.position.y1,
                    image.position.x1,
                    image.position.y1
                )?;
                write!(&mut content, "/I{} Do\n", image.image_id.index())?;
                write!(&mut content, "Q\n")?;
            }
            PageContents::RawContent(c) => {
                write!(&mut content, "q\n")?;
                content.write_all(c.as_slice())?;
                write!(&mut content, "\nQ\n")?;
            }
            PageContents::FormXObject(layout) => {
                let t = &layout.transform;
                write!(&mut content, "q\n")?;
                write!(
                    &mut content,
                    "{} {} {} {} {} {} cm\n",
                    t.a, t.b, t.c, t.d, t.e, t.f
                )?;
                write!(&mut content, "/X{} Do\n", layout.xobj_id.index())?;
                write!(&mut content, "Q\n")?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;

    write!(
        content,
        "/F{} {} Tf\n",
        current_font.id.index(),
        current_font.size
    )?;
    write_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.id.index(),
                current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_colour(content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<")?;
        let font = &fonts[current_font.id];
        for ch in span.text.chars() {
            let gid = font.drawn_glyph(ch);
            write!(content, "{gid:04x}")?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    write!(content, "{} g\n", colour.grey)
}
