#![allow(dead_code)]

use artshow_forms::layout::{FittedText, FontFamily, TextMetrics};
use artshow_forms::{Agent, Artist, Mask, Person, Piece, Pt, Surface, Transform};

/// every glyph is half an em wide
pub struct HalfEm;

impl TextMetrics for HalfEm {
    fn width_of(&self, text: &str, size: Pt) -> Pt {
        Pt(text.chars().count() as f32 * size.0 * 0.5)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// template stamped with its origin at this page position
    Stamp(Pt, Pt),
    Mask(Pt, Pt),
    Text {
        family: FontFamily,
        size: Pt,
        lines: Vec<String>,
    },
    ShowPage,
}

/// Records what a composer draws, with translations already applied
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
    transform: Transform,
    saved: Vec<Transform>,
}

impl RecordingSurface {
    pub fn pages(&self) -> Vec<Vec<Op>> {
        self.ops
            .split(|op| *op == Op::ShowPage)
            .filter(|page| !page.is_empty())
            .map(|page| page.to_vec())
            .collect()
    }

    pub fn page_breaks(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::ShowPage).count()
    }

    pub fn stamps(ops: &[Op]) -> Vec<(Pt, Pt)> {
        ops.iter()
            .filter_map(|op| match op {
                Op::Stamp(x, y) => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(ops: &[Op]) -> Vec<String> {
        ops.iter()
            .filter_map(|op| match op {
                Op::Text { lines, .. } if !lines.is_empty() => Some(lines.join(" ")),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn metrics(&self, _family: FontFamily) -> &dyn TextMetrics {
        &HalfEm
    }

    fn save_state(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore_state(&mut self) {
        self.transform = self.saved.pop().expect("restore without save");
    }

    fn translate(&mut self, dx: Pt, dy: Pt) {
        self.transform = Transform::translate(dx, dy).then(self.transform);
    }

    fn stamp_template(&mut self) {
        let (x, y) = self.transform.apply(Pt(0.0), Pt(0.0));
        self.ops.push(Op::Stamp(x, y));
    }

    fn mask(&mut self, mask: &Mask) {
        let (x, y) = self.transform.apply(mask.rect.x1, mask.rect.y1);
        self.ops.push(Op::Mask(x, y));
    }

    fn draw_text(&mut self, family: FontFamily, text: &FittedText) {
        self.ops.push(Op::Text {
            family,
            size: text.size,
            lines: text.lines.iter().map(|line| line.text.clone()).collect(),
        });
    }

    fn show_page(&mut self) {
        assert!(self.saved.is_empty(), "page shown with a translation in effect");
        self.ops.push(Op::ShowPage);
    }
}

pub fn piece(artist_id: u32, piece_id: u32) -> Piece {
    Piece {
        piece_id,
        artist_id,
        name: format!("Piece number {piece_id}"),
        media: "Acrylic".to_string(),
        min_bid: Some(25),
        buy_now: None,
        not_for_sale: false,
        adult: false,
    }
}

pub fn artist(artist_id: u32, pieces: u32) -> Artist {
    Artist {
        artist_id,
        public_name: Some(format!("Studio {artist_id}")),
        person: Person {
            name: "Sam Sample".to_string(),
            address1: "12 Gallery Row".to_string(),
            address2: "Unit 4".to_string(),
            city: "Vancouver".to_string(),
            state: "BC".to_string(),
            postcode: "V5K 0A1".to_string(),
            country: "Canada".to_string(),
            phone: "604 555 0199".to_string(),
            email: "sam@example.org".to_string(),
        },
        agents: vec![Agent {
            name: "Alex Agent".to_string(),
        }],
        pieces: (1..=pieces).map(|id| piece(artist_id, id)).collect(),
    }
}
