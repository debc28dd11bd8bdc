//! Text measurement and fitting.
//!
//! Every dynamic field on a form is a fixed rectangle measured off the template. Text is
//! flowed into it word by word, and the font size is stepped down one point at a time
//! until the whole message fits:
//!
//! - [`wrap_words`](crate::layout::wrap_words) greedily breaks a message into lines no wider than a limit
//! - [`fit_text`](crate::layout::fit_text) picks the largest size at which the wrapped lines fit a box,
//!   without drawing anything
//! - [`fit_and_draw`](crate::layout::fit_and_draw) does the same and commits the result to a
//!   [`Surface`](crate::Surface)
//!
//! # Example
//!
//! ```
//! use artshow_forms::layout::{fit_text, Alignment, FontSizes, TextMetrics};
//! use artshow_forms::{Pt, Rect};
//!
//! // every glyph is half an em wide
//! struct Mono;
//! impl TextMetrics for Mono {
//!     fn width_of(&self, text: &str, size: Pt) -> Pt {
//!         Pt(text.chars().count() as f32 * size.0 * 0.5)
//!     }
//! }
//!
//! let rect = Rect::from_inches(0.0, 0.0, 1.0, 0.25);
//! let fitted = fit_text(&Mono, "Watercolour", rect, Alignment::Center, FontSizes::DEFAULT)
//!     .expect("fits at some size");
//! assert_eq!(fitted.size, Pt(12.0));
//! assert_eq!(fitted.lines.len(), 1);
//! ```

mod fit;
mod text;

pub use fit::*;
pub use text::*;
