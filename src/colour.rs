/// A DeviceGray colour; `grey` ranges from 0.0 (black) to 1.0 (white)
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Colour {
    pub grey: f32,
}

impl Colour {
    /// Set this colour as the fill colour of a content stream
    pub fn set_fill(&self, content: &mut pdf_writer::Content) {
        content.set_fill_gray(self.grey);
    }

    /// Set this colour as the stroke colour of a content stream
    pub fn set_stroke(&self, content: &mut pdf_writer::Content) {
        content.set_stroke_gray(self.grey);
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour { grey: 0.0 };
    pub const WHITE: Colour = Colour { grey: 1.0 };
}
