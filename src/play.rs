use crate::tiles::{AxisOffset, Coords, Tile};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::error::{ParseError, PlayError};
use crate::error::ParseError::{BadPlay, BadString};
use crate::error::PlayError::{DisjointTiles, SameTile, TooFar};
use crate::game::PlayEffects;
use crate::pieces::Side;
use crate::tiles::Axis::{Horizontal, Vertical};

/// A single move of a piece from one tile to another, stored as the source tile plus an offset
/// along one axis. A `Play` is therefore always along a row or column, but may still leave the
/// board or be illegal for other reasons. (Named "Play" because `move` is a Rust keyword.)
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct Play {
    pub from: Tile,
    pub movement: AxisOffset,
}

impl Play {

    pub fn new(from: Tile, movement: AxisOffset) -> Self {
        Self { from, movement }
    }

    /// The play taking the piece on `src` to `dst`. Fails if the tiles are equal, share neither
    /// a row nor a column, or are too far apart for an `i8` displacement.
    pub fn from_tiles(src: Tile, dst: Tile) -> Result<Self, PlayError> {
        let (axis, a, b) = match (src.row == dst.row, src.col == dst.col) {
            (true, true) => return Err(SameTile),
            (true, false) => (Horizontal, src.col, dst.col),
            (false, true) => (Vertical, src.row, dst.row),
            (false, false) => return Err(DisjointTiles)
        };
        let displacement = i8::try_from(i16::from(b) - i16::from(a)).map_err(|_| TooFar)?;
        Ok(Self::new(src, AxisOffset::new(axis, displacement)))
    }

    /// Number of tiles travelled.
    pub fn distance(&self) -> u8 {
        self.movement.manhattan_dist()
    }

    /// The destination tile. Not bounds checked, so only use this once [`Self::to_coords`] is
    /// known to be on the board.
    pub fn to(&self) -> Tile {
        let Coords { row, col } = self.to_coords();
        Tile::new(row as u8, col as u8)
    }

    pub fn to_coords(&self) -> Coords {
        Coords::from(self.from) + self.movement
    }
}

impl FromStr for Play {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((src, dst)) = s.trim().split_once('-') else {
            return Err(BadString(String::from(s)))
        };
        if dst.contains('-') {
            return Err(BadString(String::from(s)))
        }
        Play::from_tiles(Tile::from_str(src)?, Tile::from_str(dst)?).map_err(BadPlay)
    }
}

impl Display for Play {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to())
    }
}

/// A [`Play`] that has passed
/// [`GameLogic::validate_play`](crate::game::logic::GameLogic::validate_play) against the current
/// state. Construct one by hand only when the play is known to be legal.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct ValidPlay { pub play: Play }

/// An applied play, as kept in [`Game::play_history`](crate::game::Game::play_history). Displays
/// as `f3-c3`, or `f3-c3xb3/c2` when pieces were captured.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PlayRecord {
    pub side: Side,
    pub play: Play,
    pub effects: PlayEffects
}

impl Display for PlayRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut captured: Vec<Tile> = self.effects.captures.iter().map(|p| p.tile).collect();
        if captured.is_empty() {
            return write!(f, "{}", self.play)
        }
        captured.sort();
        let names: Vec<String> = captured.iter().map(Tile::to_string).collect();
        write!(f, "{}x{}", self.play, names.join("/"))
    }
}
