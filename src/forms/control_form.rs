//! Control forms: the per-artist check-in sheet listing every piece the artist entered,
//! twenty to a page.

use super::{compose, Composed, Field, Form, Placement};
use crate::info::Info;
use crate::layout::LEFT_ALIGNED;
use crate::records::{yes_no, Artist, Piece};
use crate::rect::Rect;
use crate::surface::{FontSet, PdfSurface, Surface};
use crate::template::Template;
use crate::units::{In, Pt};
use crate::RenderError;
use std::io::Write;

/// Rows on one control form page
pub const PIECES_PER_CONTROL_FORM: usize = 20;

/// Vertical distance between piece rows
pub const ROW_STRIDE: In = In(0.25);

/// Control forms take up the whole page
const PAGE_ORIGIN: [(In, In); 1] = [(In(0.0), In(0.0))];

pub type HeaderValue = fn(&Artist) -> String;
pub type RowValue = fn(&Piece) -> String;

/// One page of an artist's control form
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPage<'a> {
    pub artist: &'a Artist,
    /// Always [PIECES_PER_CONTROL_FORM] long; rows past the artist's last piece are empty
    pub rows: Vec<Option<&'a Piece>>,
}

/// Splits each artist's pieces, in piece id order, into pages of
/// [PIECES_PER_CONTROL_FORM] rows. An artist without pieces still gets one empty page.
pub fn control_pages(artists: &[Artist]) -> Vec<ControlPage<'_>> {
    let mut pages = Vec::new();
    for artist in artists {
        let pieces = artist.pieces_by_id();
        if pieces.is_empty() {
            pages.push(ControlPage {
                artist,
                rows: vec![None; PIECES_PER_CONTROL_FORM],
            });
            continue;
        }

        for chunk in pieces.chunks(PIECES_PER_CONTROL_FORM) {
            let mut rows: Vec<Option<&Piece>> = chunk.iter().copied().map(Some).collect();
            rows.resize(PIECES_PER_CONTROL_FORM, None);
            pages.push(ControlPage { artist, rows });
        }
    }
    pages
}

/// The control form layout: a header about the artist, then a row per piece
#[derive(Debug, Clone)]
pub struct ControlForm {
    pub show_year: String,
    year: Placement,
    header: Vec<Field<HeaderValue>>,
    /// Placed for the first row; later rows move down by [ROW_STRIDE]
    columns: Vec<Field<RowValue>>,
}

fn header(placement: Placement, value: HeaderValue) -> Field<HeaderValue> {
    Field::new(placement, value)
}

fn column(placement: Placement, value: RowValue) -> Field<RowValue> {
    Field::new(placement, value)
}

/// The row's placement, `row` strides below the first
fn row_placement(first: &Placement, row: usize) -> Placement {
    let dy: Pt = (ROW_STRIDE * row as f32).into();
    Placement {
        rect: first.rect.offset(Pt(0.0), -dy),
        ..*first
    }
}

impl ControlForm {
    pub fn new<S: ToString>(show_year: S) -> ControlForm {
        let left = |name, x0, y0, x1, y1| {
            Placement::new(name, Rect::from_inches(x0, y0, x1, y1)).style(LEFT_ALIGNED)
        };

        let header = vec![
            header(
                Placement::new("artist id", Rect::from_inches(6.6, 10.25, 8.0, 10.5)),
                |artist| artist.artist_id.to_string(),
            ),
            header(left("person name", 1.7, 9.875, 4.1, 10.225), |artist| {
                artist.person.name.clone()
            }),
            header(left("artist name", 1.7, 9.5, 4.1, 9.85), |artist| {
                artist.display_name().to_string()
            }),
            header(left("address", 1.7, 9.125, 4.1, 9.475), |artist| {
                artist.person.address()
            }),
            header(left("city", 1.7, 8.75, 4.1, 9.1), |artist| {
                artist.person.city.clone()
            }),
            header(left("state", 1.7, 8.375, 4.1, 8.725), |artist| {
                artist.person.state.clone()
            }),
            header(left("postcode", 1.7, 8.0, 4.1, 8.35), |artist| {
                artist.person.postcode.clone()
            }),
            header(left("country", 1.7, 7.625, 4.1, 7.975), |artist| {
                artist.person.country.clone()
            }),
            header(left("phone", 1.7, 7.25, 4.1, 7.6), |artist| {
                artist.person.phone.clone()
            }),
            header(left("email", 4.9, 9.875, 8.0, 10.225).max_size(16), |artist| {
                artist.person.email.clone()
            }),
            header(left("agents", 5.9, 7.625, 8.0, 7.975), |artist| {
                artist.agent_names()
            }),
        ];

        let first_row = |name, x0, x1| Placement::new(name, Rect::from_inches(x0, 6.45, x1, 6.675));

        let columns = vec![
            column(first_row("row piece id", 0.5, 1.0), |piece| {
                piece.piece_id.to_string()
            }),
            column(first_row("row piece name", 1.0, 4.0).style(LEFT_ALIGNED), |piece| {
                piece.name.clone()
            }),
            column(first_row("row adult", 4.0, 4.5), |piece| {
                yes_no(piece.adult).to_string()
            }),
            column(first_row("row price", 4.5, 5.25), |piece| piece.price_or_nfs()),
            column(first_row("row buy now", 5.25, 6.0), |piece| piece.buy_now_or_na()),
        ];

        ControlForm {
            show_year: show_year.to_string(),
            year: Placement::new("show year", Rect::from_inches(2.4, 10.3, 3.05, 10.6)),
            header,
            columns,
        }
    }
}

impl<'a> Form<ControlPage<'a>> for ControlForm {
    fn offsets(&self) -> &[(In, In)] {
        &PAGE_ORIGIN
    }

    fn paint<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        page: &ControlPage<'a>,
    ) -> Result<(), RenderError> {
        self.year.draw(surface, &self.show_year)?;
        for field in self.header.iter() {
            field.placement.draw(surface, &(field.value)(page.artist))?;
        }

        for (row, piece) in page.rows.iter().enumerate() {
            let Some(piece) = piece else {
                continue;
            };
            for column in self.columns.iter() {
                row_placement(&column.placement, row).draw(surface, &(column.value)(piece))?;
            }
        }
        Ok(())
    }
}

/// Renders control forms for `artists`, in the order given, and writes the finished PDF
/// to `output`. Each artist starts on a new page. Nothing is written if any page fails.
pub fn render_control_forms<W: Write>(
    template: Template,
    fonts: FontSet,
    show_year: &str,
    artists: &[Artist],
    output: W,
) -> Result<Composed, RenderError> {
    let mut surface = PdfSurface::new(template, fonts);
    let mut info = Info::new();
    info.title(format!("{show_year} Control Forms"));
    surface.set_info(info);

    let pages = control_pages(artists);
    tracing::debug!(artists = artists.len(), pages = pages.len(), "split control forms");

    let composed = compose(&mut surface, &ControlForm::new(show_year), pages)?;
    surface.into_document().write(output)?;

    tracing::info!(pages = composed.pages, "rendered control forms");
    Ok(composed)
}
