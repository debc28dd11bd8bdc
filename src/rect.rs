use crate::units::*;

/// A rectangle, specified by two opposite corners.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (typically, lower-left) corner.
    pub x1: Pt,
    /// The y-coordinate of the first (typically, lower-left) corner.
    pub y1: Pt,
    /// The x-coordinate of the second (typically, upper-right) corner.
    pub x2: Pt,
    /// The y-coordinate of the second (typically, upper-right) corner.
    pub y2: Pt,
}

impl Rect {
    /// Build a rectangle from lower-left `(x0, y0)` and upper-right `(x1, y1)` corners
    /// given in inches, which is how form layouts are measured off their templates.
    pub fn from_inches(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
        Rect {
            x1: In(x0).into(),
            y1: In(y0).into(),
            x2: In(x1).into(),
            y2: In(y1).into(),
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// Shrink the rectangle by the given amount on each side
    pub fn inset(&self, left: Pt, right: Pt, top: Pt, bottom: Pt) -> Rect {
        Rect {
            x1: self.x1 + left,
            y1: self.y1 + bottom,
            x2: self.x2 - right,
            y2: self.y2 - top,
        }
    }

    /// Move the rectangle without changing its size
    pub fn offset(&self, dx: Pt, dy: Pt) -> Rect {
        Rect {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}

impl From<pdf_writer::Rect> for Rect {
    fn from(r: pdf_writer::Rect) -> Self {
        Rect {
            x1: Pt(r.x1),
            y1: Pt(r.y1),
            x2: Pt(r.x2),
            y2: Pt(r.y2),
        }
    }
}
