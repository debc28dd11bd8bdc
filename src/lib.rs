//! Bid sheets and control forms for an art show, rendered as PDF.
//!
//! Every document is a fixed template (a PDF page or a scanned image) stamped one or
//! more times per page, with per-piece or per-artist text flowed into fixed boxes on
//! top. Text is shrunk until it fits its box; it is never clipped.
//!
//! ```no_run
//! use artshow_forms::forms::{render_bid_sheets_for_artists, SheetLayout};
//! use artshow_forms::{Artist, Font, FontSet, Template};
//!
//! # fn main() -> Result<(), artshow_forms::RenderError> {
//! let artists: Vec<Artist> = Vec::new();
//! let template = Template::from_pdf_file("templates/bidsheet.pdf")?;
//! let fonts = FontSet::new(Font::load_from_disk("fonts/texgyreheros-regular.otf")?)
//!     .with_barcode(Font::load_from_disk("fonts/free3of9.ttf")?);
//! let output = std::fs::File::create("bidsheets.pdf")?;
//! render_bid_sheets_for_artists(template, fonts, &SheetLayout::barcoded(), &artists, output)?;
//! # Ok(())
//! # }
//! ```

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod form_xobject;
pub use form_xobject::*;

/// The bid sheet and control form layouts, and the composer they share
pub mod forms;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Utility functions and structures to fit text into boxes
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

mod records;
pub use records::*;

pub(crate) mod refs;

mod surface;
pub use surface::*;

mod template;
pub use template::*;

mod transform;
pub use transform::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
