use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul, Neg};

/// PostScript points, 1/72 of an inch. All geometry inside a PDF is expressed in points.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

/// Inches. Form layouts are declared in inches and converted to [Pt] when drawn.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
)]
pub struct In(pub f32);

/// Points per inch
pub const PT_PER_IN: f32 = 72.0;

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * PT_PER_IN)
    }
}

impl From<Pt> for In {
    fn from(value: Pt) -> Self {
        In(value.0 / PT_PER_IN)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}

impl Mul<f32> for In {
    type Output = In;

    fn mul(self, rhs: f32) -> In {
        In(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inches_convert_to_points() {
        let pt: Pt = In(0.25).into();
        assert_eq!(pt, Pt(18.0));
        let back: In = Pt(612.0).into();
        assert_eq!(back, In(8.5));
    }

    #[test]
    fn points_sum_and_scale() {
        let total: Pt = [Pt(1.0), Pt(2.5), Pt(0.5)].into_iter().sum();
        assert_eq!(total, Pt(4.0));
        assert_eq!(total * 2.0, Pt(8.0));
        assert_eq!(total / 4.0, Pt(1.0));
        assert_eq!(-total, Pt(-4.0));
    }
}
