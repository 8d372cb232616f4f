use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::error::ParseError;
use crate::error::ParseError::BadChar;
use crate::pieces::Side::{Black, Red};
use crate::tiles::Tile;

/// The two sides of the game. Hasami Shogi has a single kind of piece, so a side is all there is
/// to know about a piece.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Side {
    Black,
    Red
}

impl Side {

    /// Return the other side.
    pub fn other(&self) -> Self {
        match self {
            Black => Red,
            Red => Black
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Black => write!(f, "BLACK"),
            Red => write!(f, "RED")
        }
    }
}

impl From<Side> for char {
    /// A single-character representation of a given side's piece.
    fn from(value: Side) -> Self {
        match value {
            Black => 'B',
            Red => 'R'
        }
    }
}

impl TryFrom<char> for Side {

    type Error = ParseError;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'B' => Ok(Black),
            'R' => Ok(Red),
            other => Err(BadChar(other))
        }
    }
}

/// A struct representing a combination of a tile and the side whose piece sits on it.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct PlacedPiece {
    pub tile: Tile,
    pub side: Side
}

impl PlacedPiece {
    pub fn new(tile: Tile, side: Side) -> Self {
        Self { tile, side }
    }
}
