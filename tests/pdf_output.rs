mod common;

use artshow_forms::forms::{render_bid_sheets_for_artists, render_control_forms, SheetLayout};
use artshow_forms::{
    pagesize, Document, Font, FontSet, FormXObjectLayout, Image, Page, Pt, Template, Transform,
};
use common::artist;
use lopdf::{dictionary, Object, Stream};

/// A one page template with a font resource and a line of pre-printed text
fn pdf_template() -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        b"BT /F1 18 Tf 36 360 Td (BID SHEET) Tj ET".to_vec(),
    ));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => dictionary! { "Font" => dictionary! { "F1" => font_id } },
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(306),
            Object::Integer(396),
        ],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => Object::Integer(1),
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("can serialize template");
    bytes
}

fn form_streams(doc: &lopdf::Document) -> Vec<&Stream> {
    doc.objects
        .values()
        .filter_map(|object| match object {
            Object::Stream(stream) => Some(stream),
            _ => None,
        })
        .filter(|stream| {
            stream
                .dict
                .get(b"Subtype")
                .and_then(|subtype| subtype.as_name())
                .map(|name| name == b"Form")
                .unwrap_or(false)
        })
        .collect()
}

#[test]
fn imported_template_keeps_its_content_and_resources() {
    let template = Template::from_pdf_bytes(&pdf_template()).expect("template imports");
    assert_eq!(template.bbox().width(), Pt(306.0));

    let mut doc = Document::default();
    let form = doc.add_template(template);
    let mut page = Page::new(pagesize::LETTER);
    for (x, y) in [(0.0, 396.0), (306.0, 396.0)] {
        page.add_form_xobject(FormXObjectLayout {
            xobj_id: form,
            transform: Transform::translate(Pt(x), Pt(y)),
        });
    }
    doc.add_page(page);

    let mut bytes = Vec::new();
    doc.write(&mut bytes).expect("can write");
    let parsed = lopdf::Document::load_mem(&bytes).expect("output parses");
    assert_eq!(parsed.get_pages().len(), 1);

    let forms = form_streams(&parsed);
    assert_eq!(forms.len(), 1);
    let content = forms[0].decompressed_content().expect("form content inflates");
    assert_eq!(content, b"q\nBT /F1 18 Tf 36 360 Td (BID SHEET) Tj ET\nQ\n".to_vec());

    let font = forms[0]
        .dict
        .get(b"Resources")
        .and_then(Object::as_dict)
        .and_then(|resources| resources.get(b"Font"))
        .and_then(Object::as_dict)
        .and_then(|fonts| fonts.get(b"F1"))
        .and_then(Object::as_reference)
        .and_then(|id| parsed.get_dictionary(id))
        .expect("font resource is carried over");
    assert_eq!(font.get(b"BaseFont").and_then(Object::as_name).ok(), Some(&b"Helvetica"[..]));

    let page_id = *parsed.get_pages().values().next().expect("one page");
    let page_content = parsed.get_page_content(page_id).expect("page content");
    let page_content = String::from_utf8_lossy(&page_content);
    assert_eq!(page_content.matches("/X0 Do").count(), 2);
    assert!(page_content.contains("1 0 0 1 306 396 cm"));
}

fn dejavu_sans() -> Font {
    let bytes = include_bytes!("assets/DejaVuSans.ttf");
    Font::load(bytes.to_vec()).expect("can load font")
}

fn raster_template(width: f32, height: f32) -> Template {
    let image = Image::new_raster(image::DynamicImage::new_rgb8(17, 22));
    Template::from_image(image, Pt(width), Pt(height))
}

#[test]
fn rendered_bid_sheets_reparse() {
    let artists = [artist(1, 3), artist(2, 2)];
    let mut bytes = Vec::new();
    let composed = render_bid_sheets_for_artists(
        raster_template(306.0, 396.0),
        FontSet::new(dejavu_sans()),
        &SheetLayout::barcoded(),
        &artists,
        &mut bytes,
    )
    .expect("renders");
    assert_eq!(composed.forms, 5);
    assert_eq!(composed.pages, 2);

    let parsed = lopdf::Document::load_mem(&bytes).expect("output parses");
    assert_eq!(parsed.get_pages().len(), 2);
}

#[test]
fn rendering_is_deterministic() {
    let artists = [artist(3, 21)];
    let render = |font| {
        let mut bytes = Vec::new();
        render_control_forms(raster_template(612.0, 792.0), FontSet::new(dejavu_sans()), "2024", &artists, &mut bytes)
            .expect("renders");
        bytes
    };
    let once = render(dejavu_sans());
    assert_eq!(once, render(dejavu_sans()));

    let parsed = lopdf::Document::load_mem(&once).expect("output parses");
    assert_eq!(parsed.get_pages().len(), 2);
}

#[test]
fn failed_render_writes_nothing() {
    let mut artists = [artist(1, 1)];
    artists[0].pieces[0].media = "mixed ".repeat(200);
    let mut bytes = Vec::new();
    let result = render_bid_sheets_for_artists(
        raster_template(306.0, 396.0),
        FontSet::new(dejavu_sans()),
        &SheetLayout::plain(),
        &artists,
        &mut bytes,
    );
    assert!(result.is_err());
    assert!(bytes.is_empty());
}
