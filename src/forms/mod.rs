//! Composing forms onto pages.
//!
//! A form layout is a list of offsets (where on a page each copy of the form goes) and
//! a set of [Field]s to fill per record. [compose] walks the records, stamping the
//! template and filling fields at each offset in turn, and moves on to a new page once
//! every offset on the current one is used.

mod bid_sheet;
mod control_form;

pub use bid_sheet::*;
pub use control_form::*;

use crate::layout::{fit_and_draw, FontSizes, TextStyle, CENTERED};
use crate::rect::Rect;
use crate::surface::Surface;
use crate::units::In;
use crate::RenderError;

/// A printable form, filled from records of type `R`
pub trait Form<R> {
    /// Where each copy of the form goes on a page, relative to the bottom-left corner.
    /// There is one slot per offset; must not be empty.
    fn offsets(&self) -> &[(In, In)];

    /// Fills in one copy of the form. The surface is already translated to the copy's
    /// offset and the template has been stamped.
    fn paint<S: Surface + ?Sized>(&self, surface: &mut S, record: &R) -> Result<(), RenderError>;
}

/// Where, and how, a field's text is set
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    /// Identifies the field when its text doesn't fit
    pub name: &'static str,
    pub rect: Rect,
    pub style: TextStyle,
    pub sizes: FontSizes,
}

impl Placement {
    /// A centered field, 24pt shrinking to 6pt
    pub fn new(name: &'static str, rect: Rect) -> Placement {
        Placement {
            name,
            rect,
            style: CENTERED,
            sizes: FontSizes::DEFAULT,
        }
    }

    pub fn style(mut self, style: TextStyle) -> Placement {
        self.style = style;
        self
    }

    /// Start shrinking from `max` points instead of 24
    pub fn max_size(mut self, max: u8) -> Placement {
        self.sizes = FontSizes::up_to(max);
        self
    }

    /// Fits `message` into this placement and draws it
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, message: &str) -> Result<(), RenderError> {
        let fitted = fit_and_draw(surface, message, self.rect, self.style, self.sizes)
            .map_err(RenderError::field(self.name))?;
        tracing::trace!(field = self.name, size = *fitted.size, "placed field");
        Ok(())
    }
}

/// A placement together with how its text is pulled out of a record
#[derive(Debug, Copy, Clone)]
pub struct Field<F> {
    pub placement: Placement,
    pub value: F,
}

impl<F> Field<F> {
    pub fn new(placement: Placement, value: F) -> Field<F> {
        Field { placement, value }
    }
}

/// Tracks which slot of the current page the next form goes in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlots {
    per_page: usize,
    slot: usize,
    pages: usize,
}

impl PageSlots {
    /// Panics if `per_page` is zero
    pub fn new(per_page: usize) -> PageSlots {
        assert!(per_page > 0, "a page needs at least one slot");
        PageSlots {
            per_page,
            slot: 0,
            pages: 0,
        }
    }

    /// The slot the next form goes in, always below `per_page`
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Marks the current slot used. Returns true when that filled the page, in which case
    /// the page should be shown and the slots start over.
    pub fn advance(&mut self) -> bool {
        self.slot += 1;
        if self.slot == self.per_page {
            self.slot = 0;
            self.pages += 1;
            true
        } else {
            false
        }
    }

    /// Returns true if a partly filled page is still pending and should be shown
    pub fn finish(&mut self) -> bool {
        if self.slot == 0 {
            return false;
        }
        self.slot = 0;
        self.pages += 1;
        true
    }

    /// Pages filled so far
    pub fn pages(&self) -> usize {
        self.pages
    }
}

/// What a render produced
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Composed {
    /// Copies of the form filled in
    pub forms: usize,
    pub pages: usize,
}

/// Fills one copy of `form` per record, in order, moving to a new page whenever the
/// current page's slots are used up. A partly filled last page is shown too, so no
/// page is ever left blank.
pub fn compose<S, F, R, I>(surface: &mut S, form: &F, records: I) -> Result<Composed, RenderError>
where
    S: Surface + ?Sized,
    F: Form<R>,
    I: IntoIterator<Item = R>,
{
    let offsets = form.offsets();
    if offsets.is_empty() {
        return Err(RenderError::NoSlots);
    }
    let mut slots = PageSlots::new(offsets.len());
    let mut forms = 0;

    for record in records {
        let (dx, dy) = offsets[slots.slot()];

        surface.save_state();
        surface.translate(dx.into(), dy.into());
        surface.stamp_template();
        let painted = form.paint(surface, &record);
        surface.restore_state();
        painted?;

        forms += 1;
        if slots.advance() {
            surface.show_page();
        }
    }

    if slots.finish() {
        surface.show_page();
    }

    Ok(Composed {
        forms,
        pages: slots.pages(),
    })
}
