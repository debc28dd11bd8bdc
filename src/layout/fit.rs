use super::text::{wrap_words, TextMetrics, FUZZ};
use crate::rect::Rect;
use crate::surface::Surface;
use crate::units::Pt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Padding between a field's rectangle and the text flowed into it. The extra room at
/// the bottom keeps descenders off the template's rule lines.
pub const PADDING_LEFT: Pt = Pt(2.0);
pub const PADDING_RIGHT: Pt = Pt(2.0);
pub const PADDING_TOP: Pt = Pt(0.0);
pub const PADDING_BOTTOM: Pt = Pt(4.0);

/// Which of the loaded fonts a field is set in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// The regular text face
    Text,
    /// A Code 39 barcode face
    Barcode,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

/// How a field's text is set
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub family: FontFamily,
    pub alignment: Alignment,
}

pub const CENTERED: TextStyle = TextStyle {
    family: FontFamily::Text,
    alignment: Alignment::Center,
};

pub const LEFT_ALIGNED: TextStyle = TextStyle {
    family: FontFamily::Text,
    alignment: Alignment::Left,
};

pub const BARCODE: TextStyle = TextStyle {
    family: FontFamily::Barcode,
    alignment: Alignment::Center,
};

/// The inclusive range of whole point sizes a field may be set at, largest first
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FontSizes {
    max: u8,
    min: u8,
}

impl FontSizes {
    /// Most fields start at 24pt and may shrink down to 6pt
    pub const DEFAULT: FontSizes = FontSizes::new(24, 6);

    /// Panics unless `max >= min >= 1`
    pub const fn new(max: u8, min: u8) -> FontSizes {
        assert!(min >= 1, "minimum font size must be at least 1pt");
        assert!(max >= min, "maximum font size must not be below the minimum");
        FontSizes { max, min }
    }

    /// Same minimum as [FontSizes::DEFAULT], different starting size
    pub const fn up_to(max: u8) -> FontSizes {
        FontSizes::new(max, FontSizes::DEFAULT.min)
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    /// Every size in the range, from largest to smallest
    pub fn descending(&self) -> impl Iterator<Item = u8> {
        (self.min..=self.max).rev()
    }
}

/// The message can't be set inside its box, even at the smallest allowed size
#[derive(Error, Debug, Clone, PartialEq)]
#[error(
    "could not flow {message:?} into a {width}pt x {height}pt box at any size from {}pt down to {}pt",
    .sizes.max,
    .sizes.min
)]
pub struct TextOverflow {
    pub message: String,
    pub sizes: FontSizes,
    pub width: Pt,
    pub height: Pt,
}

/// One line of fitted text and the baseline origin it is drawn from
#[derive(Debug, Clone, PartialEq)]
pub struct FittedLine {
    pub text: String,
    pub origin: (Pt, Pt),
}

/// The outcome of fitting a message into a box: the chosen size and where each line goes
#[derive(Debug, Clone, PartialEq)]
pub struct FittedText {
    pub size: Pt,
    pub lines: Vec<FittedLine>,
}

/// Picks the largest size in `sizes` at which `message` wraps to fit within `rect`
/// (less padding), with the leading equal to the size. Lines are positioned from the
/// top of the box downwards. Nothing is drawn.
pub fn fit_text(
    metrics: &dyn TextMetrics,
    message: &str,
    rect: Rect,
    alignment: Alignment,
    sizes: FontSizes,
) -> Result<FittedText, TextOverflow> {
    let frame = rect.inset(PADDING_LEFT, PADDING_RIGHT, PADDING_TOP, PADDING_BOTTOM);
    let width = frame.width();
    let height = frame.height();

    for size in sizes.descending() {
        let size = Pt(size as f32);
        let Some(lines) = wrap_words(metrics, message, size, width) else {
            continue;
        };
        if !lines.is_empty() && size * lines.len() as f32 > height + Pt(FUZZ) {
            continue;
        }

        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let x = match alignment {
                    Alignment::Left => frame.x1,
                    Alignment::Center => frame.x1 + (width - line.width) / 2.0,
                };
                let y = frame.y2 - size * (i + 1) as f32;
                FittedLine {
                    text: line.text,
                    origin: (x, y),
                }
            })
            .collect();

        return Ok(FittedText { size, lines });
    }

    Err(TextOverflow {
        message: message.to_string(),
        sizes,
        width,
        height,
    })
}

/// Fits `message` into `rect` using the metrics of the style's font family, then draws
/// it on the surface at the chosen size.
pub fn fit_and_draw<S: Surface + ?Sized>(
    surface: &mut S,
    message: &str,
    rect: Rect,
    style: TextStyle,
    sizes: FontSizes,
) -> Result<FittedText, TextOverflow> {
    let fitted = fit_text(
        surface.metrics(style.family),
        message,
        rect,
        style.alignment,
        sizes,
    )?;
    surface.draw_text(style.family, &fitted);
    Ok(fitted)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// every glyph is half an em wide
    struct HalfEm;

    impl TextMetrics for HalfEm {
        fn width_of(&self, text: &str, size: Pt) -> Pt {
            Pt(text.chars().count() as f32 * size.0 * 0.5)
        }
    }

    fn box_of(width: f32, height: f32) -> Rect {
        Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: Pt(width),
            y2: Pt(height),
        }
    }

    #[test]
    fn picks_the_largest_size_that_fits() {
        // padded box is 100 x 20; "NFS" is 1.5em wide so height is the limit
        let fitted = fit_text(&HalfEm, "NFS", box_of(104.0, 24.0), Alignment::Center, FontSizes::DEFAULT)
            .expect("fits");
        assert_eq!(fitted.size, Pt(20.0));
        assert_eq!(fitted.lines.len(), 1);
    }

    #[test]
    fn chosen_size_is_maximal_and_smaller_sizes_fit() {
        let rect = box_of(64.0, 40.0);
        let message = "Portrait of a dragon in repose";
        let fitted = fit_text(&HalfEm, message, rect, Alignment::Left, FontSizes::DEFAULT)
            .expect("fits");
        let chosen = fitted.size.0 as u8;
        assert!(chosen < 24);

        let larger = FontSizes::new(24, chosen + 1);
        assert!(fit_text(&HalfEm, message, rect, Alignment::Left, larger).is_err());

        for size in FontSizes::DEFAULT.min()..=chosen {
            let exact = FontSizes::new(size, size);
            assert!(fit_text(&HalfEm, message, rect, Alignment::Left, exact).is_ok());
        }
    }

    #[test]
    fn wraps_onto_several_lines_before_shrinking_further() {
        // 60pt wide padded frame, 40pt tall: "canvas" alone needs the size at or below 20pt
        let fitted = fit_text(&HalfEm, "Oil on canvas", box_of(64.0, 44.0), Alignment::Left, FontSizes::DEFAULT)
            .expect("fits");
        assert_eq!(fitted.size, Pt(20.0));
        let texts: Vec<&str> = fitted.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Oil on", "canvas"]);
    }

    #[test]
    fn too_much_text_overflows() {
        let message = "a ".repeat(200);
        let err = fit_text(&HalfEm, &message, box_of(40.0, 14.0), Alignment::Center, FontSizes::DEFAULT)
            .expect_err("cannot fit");
        assert_eq!(err.sizes, FontSizes::DEFAULT);
        assert_eq!(err.width, Pt(36.0));
        assert_eq!(err.height, Pt(10.0));
    }

    #[test]
    fn lines_are_placed_from_the_top_with_padding() {
        let fitted = fit_text(&HalfEm, "X", box_of(20.0, 20.0), Alignment::Left, FontSizes::new(16, 6))
            .expect("fits");
        assert_eq!(fitted.size, Pt(16.0));
        assert_eq!(fitted.lines[0].origin, (Pt(2.0), Pt(4.0)));
    }

    #[test]
    fn centered_lines_share_the_slack() {
        let fitted = fit_text(&HalfEm, "ab", box_of(24.0, 14.0), Alignment::Center, FontSizes::new(10, 10))
            .expect("fits");
        // frame is 2..22, line is 10 wide
        assert_eq!(fitted.lines[0].origin.0, Pt(7.0));
    }

    #[test]
    fn empty_message_fits_at_the_largest_size() {
        let fitted = fit_text(&HalfEm, "", box_of(4.0, 4.0), Alignment::Center, FontSizes::DEFAULT)
            .expect("fits");
        assert_eq!(fitted.size, Pt(24.0));
        assert!(fitted.lines.is_empty());
    }

    #[test]
    #[should_panic]
    fn inverted_size_range_is_rejected() {
        let _ = FontSizes::new(6, 24);
    }
}
