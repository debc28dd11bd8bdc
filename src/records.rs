//! The art show records forms are printed from. These are read-only inputs; callers
//! load them from wherever the show keeps them.

use serde::{Deserialize, Serialize};

/// A piece of art entered into the show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    /// Unique within the artist
    pub piece_id: u32,
    pub artist_id: u32,
    pub name: String,
    #[serde(default)]
    pub media: String,
    /// Opening bid, in whole currency units
    #[serde(default)]
    pub min_bid: Option<u32>,
    /// Price to buy the piece outright, skipping the auction
    #[serde(default)]
    pub buy_now: Option<u32>,
    #[serde(default)]
    pub not_for_sale: bool,
    #[serde(default)]
    pub adult: bool,
}

impl Piece {
    /// "NFS" for pieces not for sale, otherwise the minimum bid (blank if there isn't one)
    pub fn price_or_nfs(&self) -> String {
        match (self.not_for_sale, self.min_bid) {
            (true, _) => "NFS".to_string(),
            (false, Some(min_bid)) => min_bid.to_string(),
            (false, None) => String::new(),
        }
    }

    /// The buy-now price, or "N/A" if the piece can't be bought outright
    pub fn buy_now_or_na(&self) -> String {
        self.buy_now
            .map(|price| price.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// "Y" or "N"
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Y"
    } else {
        "N"
    }
}

/// Contact details of the person behind an artist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
    pub phone: String,
    pub email: String,
}

impl Person {
    /// Both address lines on one line
    pub fn address(&self) -> String {
        format!("{} {}", self.address1, self.address2)
    }
}

/// Someone handling an artist's pieces at the show on their behalf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub artist_id: u32,
    /// The name the artist shows under, if different from their own
    #[serde(default)]
    pub public_name: Option<String>,
    pub person: Person,
    #[serde(default)]
    pub agents: Vec<Agent>,
    #[serde(default)]
    pub pieces: Vec<Piece>,
}

impl Artist {
    /// The public name, falling back to the person's name when it is missing or blank
    pub fn display_name(&self) -> &str {
        match self.public_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.person.name,
        }
    }

    /// Agent names, comma separated
    pub fn agent_names(&self) -> String {
        self.agents
            .iter()
            .map(|agent| agent.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Code 39 barcode text for one of the artist's pieces, `*` being the start / stop
    /// symbol
    pub fn barcode(&self, piece: &Piece) -> String {
        format!("*A{}P{}*", self.artist_id, piece.piece_id)
    }

    /// The artist's pieces in piece id order
    pub fn pieces_by_id(&self) -> Vec<&Piece> {
        let mut pieces: Vec<&Piece> = self.pieces.iter().collect();
        pieces.sort_by_key(|piece| piece.piece_id);
        pieces
    }
}
