//! Bid sheets: one per piece, four to a letter page.

use super::{compose, Composed, Field, Form, Placement};
use crate::colour::colours;
use crate::info::Info;
use crate::layout::{BARCODE, LEFT_ALIGNED};
use crate::records::{Artist, Piece};
use crate::rect::Rect;
use crate::surface::{FontSet, Mask, PdfSurface, Surface};
use crate::template::Template;
use crate::units::{In, Pt};
use crate::RenderError;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// The four quadrants of a letter page, top row first
pub const QUADRANTS: [(In, In); 4] = [
    (In(0.0), In(5.5)),
    (In(4.25), In(5.5)),
    (In(0.0), In(0.0)),
    (In(4.25), In(0.0)),
];

/// Pulls a field's text out of a piece and its artist
pub type SheetValue = fn(&Artist, &Piece) -> String;

/// Which bid sheet template a show uses
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetKind {
    /// Piece barcode over a blanked-out strip, with price and buy-now boxes
    #[default]
    Barcoded,
    /// Ids in the top corner, no barcode
    Plain,
}

/// Where each field of a bid sheet goes, and what's in it
#[derive(Debug, Clone)]
pub struct SheetLayout {
    /// Drawn over the template before any field
    pub mask: Option<Mask>,
    pub fields: Vec<Field<SheetValue>>,
}

fn field(placement: Placement, value: SheetValue) -> Field<SheetValue> {
    Field::new(placement, value)
}

impl SheetLayout {
    pub fn for_kind(kind: SheetKind) -> SheetLayout {
        match kind {
            SheetKind::Barcoded => SheetLayout::barcoded(),
            SheetKind::Plain => SheetLayout::plain(),
        }
    }

    /// The barcoded sheet. The template's pre-printed barcode strip is painted over in
    /// white and replaced by the piece's own code.
    pub fn barcoded() -> SheetLayout {
        let mask = Mask {
            rect: Rect::from_inches(1.1875, 4.4375, 1.1875 + 1.75, 4.4375 + 0.5),
            radius: In(0.0675).into(),
            line_width: Pt(4.0),
            fill: colours::WHITE,
            stroke: colours::WHITE,
        };

        let fields = vec![
            field(
                Placement::new("barcode", Rect::from_inches(1.3125, 4.6, 2.8125, 4.875))
                    .style(BARCODE)
                    .max_size(14),
                |artist, piece| artist.barcode(piece),
            ),
            field(
                Placement::new("artist label", Rect::from_inches(1.25, 4.4375, 2.0, 4.625)),
                |artist, _| format!("Artist {}", artist.artist_id),
            ),
            field(
                Placement::new("piece label", Rect::from_inches(2.125, 4.4375, 2.875, 4.625)),
                |_, piece| format!("Piece {}", piece.piece_id),
            ),
            field(
                Placement::new("artist name", Rect::from_inches(1.125, 4.125, 3.875, 4.375)),
                |artist, _| artist.display_name().to_string(),
            ),
            field(
                Placement::new("piece name", Rect::from_inches(0.75, 3.8125, 3.875, 4.0625)),
                |_, piece| piece.name.clone(),
            ),
            field(
                Placement::new("medium", Rect::from_inches(0.875, 3.5, 3.875, 3.75)),
                |_, piece| piece.media.clone(),
            ),
            field(
                Placement::new("price", Rect::from_inches(3.25, 2.625, 3.75, 3.0)),
                |_, piece| piece.price_or_nfs(),
            ),
            field(
                Placement::new("buy now", Rect::from_inches(3.25, 1.9375, 3.75, 2.3125)),
                |_, piece| piece.buy_now_or_na(),
            ),
            field(
                Placement::new("checkbox", Rect::from_inches(3.375, 0.375, 3.5625, 0.675))
                    .style(LEFT_ALIGNED)
                    .max_size(16),
                |_, _| "X".to_string(),
            ),
        ];

        SheetLayout {
            mask: Some(mask),
            fields,
        }
    }

    pub fn plain() -> SheetLayout {
        let fields = vec![
            field(
                Placement::new("artist id", Rect::from_inches(2.6, 4.9, 3.2, 5.2)),
                |artist, _| artist.artist_id.to_string(),
            ),
            field(
                Placement::new("piece id", Rect::from_inches(3.3, 4.9, 3.9, 5.2)),
                |_, piece| piece.piece_id.to_string(),
            ),
            field(
                Placement::new("artist name", Rect::from_inches(0.65, 4.1, 2.95, 4.5)),
                |artist, _| artist.display_name().to_string(),
            ),
            field(
                Placement::new("piece name", Rect::from_inches(0.65, 3.7, 2.95, 4.1)),
                |_, piece| piece.name.clone(),
            ),
            field(
                Placement::new("medium", Rect::from_inches(0.65, 3.32, 2.95, 3.7)),
                |_, piece| piece.media.clone(),
            ),
            field(
                Placement::new("price", Rect::from_inches(3.1, 4.1, 3.9, 4.35)),
                |_, piece| piece.price_or_nfs(),
            ),
            field(
                Placement::new("buy now", Rect::from_inches(3.1, 3.7, 3.9, 3.95)),
                |_, piece| piece.buy_now_or_na(),
            ),
        ];

        SheetLayout {
            mask: None,
            fields,
        }
    }
}

impl<'a> Form<(&'a Artist, &'a Piece)> for SheetLayout {
    fn offsets(&self) -> &[(In, In)] {
        &QUADRANTS
    }

    fn paint<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        &(artist, piece): &(&'a Artist, &'a Piece),
    ) -> Result<(), RenderError> {
        if let Some(mask) = &self.mask {
            surface.mask(mask);
        }
        for field in self.fields.iter() {
            field.placement.draw(surface, &(field.value)(artist, piece))?;
        }
        Ok(())
    }
}

/// Renders one bid sheet per `(artist, piece)` pair, in the order given, and writes
/// the finished PDF to `output`. Nothing is written if any sheet fails.
pub fn render_bid_sheets<W: Write>(
    template: Template,
    fonts: FontSet,
    layout: &SheetLayout,
    sheets: &[(&Artist, &Piece)],
    output: W,
) -> Result<Composed, RenderError> {
    let mut surface = PdfSurface::new(template, fonts);
    let mut info = Info::new();
    info.title("Bid Sheets");
    surface.set_info(info);

    let composed = compose(&mut surface, layout, sheets.iter().copied())?;
    surface.into_document().write(output)?;

    tracing::info!(
        sheets = composed.forms,
        pages = composed.pages,
        "rendered bid sheets"
    );
    Ok(composed)
}

/// Every piece of `artists`, ordered by artist id then piece id
pub fn bid_sheets_for_artists(artists: &[Artist]) -> Vec<(&Artist, &Piece)> {
    let mut sheets: Vec<(&Artist, &Piece)> = artists
        .iter()
        .flat_map(|artist| artist.pieces.iter().map(move |piece| (artist, piece)))
        .collect();
    sheets.sort_by_key(|(artist, piece)| (artist.artist_id, piece.piece_id));
    sheets
}

/// Renders bid sheets for every piece of `artists`, see [bid_sheets_for_artists]
pub fn render_bid_sheets_for_artists<W: Write>(
    template: Template,
    fonts: FontSet,
    layout: &SheetLayout,
    artists: &[Artist],
    output: W,
) -> Result<Composed, RenderError> {
    let sheets = bid_sheets_for_artists(artists);
    tracing::debug!(artists = artists.len(), pieces = sheets.len(), "collected bid sheets");
    render_bid_sheets(template, fonts, layout, &sheets, output)
}
