mod common;

use artshow_forms::forms::{
    bid_sheets_for_artists, compose, control_pages, ControlForm, Form, SheetLayout,
    PIECES_PER_CONTROL_FORM,
};
use artshow_forms::layout::FontFamily;
use artshow_forms::{In, Pt, RenderError, Surface};
use common::{artist, piece, Op, RecordingSurface};

fn quadrant(x: f32, y: f32) -> (Pt, Pt) {
    (In(x).into(), In(y).into())
}

#[test]
fn bid_sheet_page_count_rounds_up_without_blank_pages() {
    for (pieces, pages) in [(0, 0), (1, 1), (4, 1), (5, 2), (8, 2), (9, 3)] {
        let artists = [artist(1, pieces)];
        let sheets = bid_sheets_for_artists(&artists);

        let mut surface = RecordingSurface::default();
        let composed = compose(&mut surface, &SheetLayout::barcoded(), sheets.iter().copied())
            .expect("sheets fit");

        assert_eq!(composed.forms, pieces as usize);
        assert_eq!(composed.pages, pages, "{pieces} pieces");
        assert_eq!(surface.page_breaks(), pages);
        assert_eq!(surface.ops.last().is_some(), pieces > 0);
        if pieces > 0 {
            assert_eq!(surface.ops.last(), Some(&Op::ShowPage));
        }
    }
}

#[test]
fn five_pieces_across_two_artists() {
    let artists = [artist(2, 2), artist(1, 3)];
    let sheets = bid_sheets_for_artists(&artists);
    let order: Vec<(u32, u32)> = sheets
        .iter()
        .map(|(artist, piece)| (artist.artist_id, piece.piece_id))
        .collect();
    assert_eq!(order, vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2)]);

    let mut surface = RecordingSurface::default();
    let composed = compose(&mut surface, &SheetLayout::barcoded(), sheets.iter().copied())
        .expect("sheets fit");
    assert_eq!(composed.pages, 2);

    let pages = surface.pages();
    assert_eq!(pages.len(), 2);
    assert_eq!(
        RecordingSurface::stamps(&pages[0]),
        vec![
            quadrant(0.0, 5.5),
            quadrant(4.25, 5.5),
            quadrant(0.0, 0.0),
            quadrant(4.25, 0.0)
        ]
    );
    assert_eq!(RecordingSurface::stamps(&pages[1]), vec![quadrant(0.0, 5.5)]);

    // the mask is drawn relative to each sheet
    assert_eq!(pages[1][1], Op::Mask(Pt(85.5), Pt(396.0 + 319.5)));

    let second_page = RecordingSurface::texts(&pages[1]);
    assert_eq!(second_page[0], "*A2P2*");
    assert!(second_page.contains(&"Artist 2".to_string()));
    assert!(second_page.contains(&"Piece 2".to_string()));
}

#[test]
fn sheets_come_out_in_input_order() {
    let pieces = [piece(7, 3), piece(7, 1), piece(7, 2)];
    let owner = artist(7, 0);
    let sheets: Vec<_> = pieces.iter().map(|p| (&owner, p)).collect();

    let mut surface = RecordingSurface::default();
    compose(&mut surface, &SheetLayout::barcoded(), sheets.iter().copied()).expect("sheets fit");

    let barcodes: Vec<Vec<String>> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Text {
                family: FontFamily::Barcode,
                lines,
                ..
            } => Some(lines.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        barcodes,
        vec![vec!["*A7P3*"], vec!["*A7P1*"], vec!["*A7P2*"]]
    );
}

#[test]
fn barcode_agrees_with_the_artist_label() {
    let mut owner = artist(1, 1);
    owner.pieces[0].artist_id = 99;

    let mut surface = RecordingSurface::default();
    compose(&mut surface, &SheetLayout::barcoded(), [(&owner, &owner.pieces[0])])
        .expect("sheet fits");

    let texts = RecordingSurface::texts(&surface.ops);
    assert_eq!(&texts[..2], &["*A1P1*", "Artist 1"]);
}

#[test]
fn plain_sheets_have_no_mask_or_barcode() {
    let artists = [artist(3, 1)];
    let sheets = bid_sheets_for_artists(&artists);
    let mut surface = RecordingSurface::default();
    compose(&mut surface, &SheetLayout::plain(), sheets.iter().copied()).expect("sheets fit");

    assert!(!surface.ops.iter().any(|op| matches!(op, Op::Mask(..))));
    let texts = RecordingSurface::texts(&surface.ops);
    assert_eq!(
        texts,
        vec!["3", "1", "Studio 3", "Piece number 1", "Acrylic", "25", "N/A"]
    );
}

#[test]
fn overflowing_field_names_the_field() {
    let mut long = piece(1, 1);
    long.name = "enormous ".repeat(60);
    let owner = artist(1, 0);

    let mut surface = RecordingSurface::default();
    let err = compose(&mut surface, &SheetLayout::barcoded(), [(&owner, &long)])
        .expect_err("name cannot fit");
    match err {
        RenderError::Field { field, source } => {
            assert_eq!(field, "piece name");
            assert_eq!(source.sizes.min(), 6);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(surface.page_breaks(), 0);
}

#[test]
fn control_forms_break_after_every_page() {
    for (pieces, pages) in [(0, 1), (20, 1), (21, 2)] {
        let artists = [artist(4, pieces)];
        let mut surface = RecordingSurface::default();
        let composed = compose(&mut surface, &ControlForm::new("2024"), control_pages(&artists))
            .expect("forms fit");
        assert_eq!(composed.pages, pages, "{pieces} pieces");
        assert_eq!(surface.page_breaks(), pages);
        for page in surface.pages() {
            assert_eq!(RecordingSurface::stamps(&page), vec![(Pt(0.0), Pt(0.0))]);
        }
    }
}

#[test]
fn empty_control_form_has_header_only() {
    let artists = [artist(4, 0)];
    let mut surface = RecordingSurface::default();
    compose(&mut surface, &ControlForm::new("2024"), control_pages(&artists)).expect("forms fit");

    let texts = RecordingSurface::texts(&surface.ops);
    assert_eq!(
        texts,
        vec![
            "2024",
            "4",
            "Sam Sample",
            "Studio 4",
            "12 Gallery Row Unit 4",
            "Vancouver",
            "BC",
            "V5K 0A1",
            "Canada",
            "604 555 0199",
            "sam@example.org",
            "Alex Agent",
        ]
    );
}

#[test]
fn control_form_rows_follow_piece_order() {
    let mut owner = artist(5, 0);
    owner.pieces = vec![piece(5, 22), piece(5, 2), piece(5, 9)];
    owner.pieces[1].not_for_sale = true;
    owner.pieces[2].adult = true;
    owner.pieces[2].buy_now = Some(300);
    let artists = [owner];

    let mut surface = RecordingSurface::default();
    compose(&mut surface, &ControlForm::new("2024"), control_pages(&artists)).expect("forms fit");

    let texts = RecordingSurface::texts(&surface.ops);
    // header takes the first twelve fields
    assert_eq!(
        texts[12..],
        [
            "2", "Piece number 2", "N", "NFS", "N/A",
            "9", "Piece number 9", "Y", "25", "300",
            "22", "Piece number 22", "N", "25", "N/A",
        ]
    );
    assert_eq!(PIECES_PER_CONTROL_FORM, 20);
}

struct Nowhere;

impl Form<u32> for Nowhere {
    fn offsets(&self) -> &[(In, In)] {
        &[]
    }

    fn paint<S: Surface + ?Sized>(&self, _surface: &mut S, _record: &u32) -> Result<(), RenderError> {
        Ok(())
    }
}

#[test]
fn form_without_slots_is_an_error() {
    let mut surface = RecordingSurface::default();
    let err = compose(&mut surface, &Nowhere, [1, 2]).expect_err("nowhere to put the forms");
    assert!(matches!(err, RenderError::NoSlots));
    assert!(surface.ops.is_empty());
}
