use crate::error::BoardError;
use crate::tiles::Axis::{Horizontal, Vertical};
use crate::tiles::{AxisOffset, Coords, Tile, DIRECTIONS};

/// Size of the board and the positions of its corners. Nothing here changes over the course of a
/// game.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BoardGeometry {
    pub side_len: u8,
    /// The corner tiles, in the order in which corner captures are checked: `a1`, then the first
    /// column of the last row, then the last column of row `a`, then the far corner.
    pub corners: [Tile; 4]
}

impl BoardGeometry {

    pub fn new(side_len: u8) -> Self {
        let last = side_len.saturating_sub(1);
        Self {
            side_len,
            corners: [(0, 0), (last, 0), (0, last), (last, last)].map(|(r, c)| Tile::new(r, c))
        }
    }

    /// Whether a tile is on the board. Tiles parsed from user input must be checked with this
    /// before use.
    pub fn tile_in_bounds(&self, tile: Tile) -> bool {
        tile.row < self.side_len && tile.col < self.side_len
    }

    /// Whether the coords refer to a position on the board.
    pub fn coords_in_bounds(&self, coords: Coords) -> bool {
        let len = i8::try_from(self.side_len).unwrap_or(i8::MAX);
        (0..len).contains(&coords.row) && (0..len).contains(&coords.col)
    }

    /// The tile at the given coords, or [`BoardError::OutOfBounds`] if they are off the board.
    pub fn coords_to_tile(&self, coords: Coords) -> Result<Tile, BoardError> {
        if !self.coords_in_bounds(coords) {
            return Err(BoardError::OutOfBounds)
        }
        Ok(Tile::new(coords.row as u8, coords.col as u8))
    }

    /// The tiles orthogonally adjacent to `tile` that lie on the board.
    pub fn neighbors(&self, tile: Tile) -> Vec<Tile> {
        DIRECTIONS.iter()
            .filter_map(|d| self.coords_to_tile(Coords::from(tile) + *d).ok())
            .collect()
    }

    /// The tiles strictly between `t1` and `t2`, walking from `t1`. Empty if the tiles are equal,
    /// adjacent, or do not share a row or column.
    pub fn tiles_between(&self, t1: Tile, t2: Tile) -> Vec<Tile> {
        let step = match (t1.row == t2.row, t1.col == t2.col) {
            (true, false) => AxisOffset::new(Horizontal, if t2.col > t1.col { 1 } else { -1 }),
            (false, true) => AxisOffset::new(Vertical, if t2.row > t1.row { 1 } else { -1 }),
            _ => return vec![]
        };
        let end = Coords::from(t2);
        let mut tiles = vec![];
        let mut coords = Coords::from(t1) + step;
        while coords != end {
            match self.coords_to_tile(coords) {
                Ok(t) => tiles.push(t),
                Err(_) => break
            }
            coords = coords + step;
        }
        tiles
    }
}
