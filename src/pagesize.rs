//! Page sizes. Every form this crate prints goes on US Letter.

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

/// 8.5 x 11 inches, portrait
pub const LETTER: PageSize = (Pt(8.5 * PT_PER_IN), Pt(11.0 * PT_PER_IN));
