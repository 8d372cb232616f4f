use crate::error::ParseError;
use crate::error::ParseError::{BadChar, BadString, EmptyString};
use crate::tiles::Axis::{Horizontal, Vertical};
use std::fmt::{Debug, Display, Formatter};
use std::ops::Add;
use std::str::FromStr;

/// Vertical (along a column, changing the row) or horizontal (along a row, changing the column).
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Axis {
    Vertical,
    Horizontal
}

/// A signed number of tiles along one axis. Negative displacements go towards row `a` or
/// column `1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AxisOffset {
    pub axis: Axis,
    pub displacement: i8,
}

impl AxisOffset {
    pub fn new(axis: Axis, displacement: i8) -> Self {
        Self { axis, displacement }
    }

    pub fn manhattan_dist(&self) -> u8 {
        self.displacement.unsigned_abs()
    }
}

/// Unit steps up, down, left and right, in that order.
pub const DIRECTIONS: [AxisOffset; 4] = [
    AxisOffset { axis: Vertical, displacement: -1 },
    AxisOffset { axis: Vertical, displacement: 1 },
    AxisOffset { axis: Horizontal, displacement: -1 },
    AxisOffset { axis: Horizontal, displacement: 1 },
];

/// A signed row and column which need not be on the board. Used while walking away from a tile,
/// where the walk may step off an edge.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Coords {
    pub row: i8,
    pub col: i8
}

impl Coords {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

impl From<Tile> for Coords {
    fn from(t: Tile) -> Self {
        Self::new(t.row as i8, t.col as i8)
    }
}

impl Add<AxisOffset> for Coords {
    type Output = Self;
    fn add(self, rhs: AxisOffset) -> Self {
        let Coords { row, col } = self;
        match rhs.axis {
            Vertical => Coords::new(row.saturating_add(rhs.displacement), col),
            Horizontal => Coords::new(row, col.saturating_add(rhs.displacement)),
        }
    }
}

/// A tile, as a zero-based row and column. Row 0 is written `a` and column 0 is written `1`, so
/// `Tile::new(8, 0)` is `i1`.
///
/// Tiles are only meaningful on the board; use [`Coords`] for positions that may be off it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Tile {
    pub row: u8,
    pub col: u8
}

impl Tile {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl Debug for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({self})")
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row.wrapping_add(b'a') as char, u16::from(self.col) + 1)
    }
}

impl FromStr for Tile {
    type Err = ParseError;

    /// Parse a tile written as a row letter followed by a one-based column number, eg `"a1"` or
    /// `"i9"`. Whether the tile is actually on a given board is not checked here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(&letter) = s.as_bytes().first() else {
            return Err(EmptyString)
        };
        if !letter.is_ascii_lowercase() {
            return Err(BadChar(char::from(letter)))
        }
        // Columns must fit in the signed offsets used for moves.
        let col = s[1..].parse::<u8>()?
            .checked_sub(1)
            .filter(|c| i8::try_from(*c).is_ok())
            .ok_or_else(|| BadString(String::from(s)))?;
        Ok(Tile::new(letter - b'a', col))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseError::{BadChar, BadInt, BadString, EmptyString};
    use crate::tiles::Axis::{Horizontal, Vertical};
    use crate::tiles::{AxisOffset, Coords, Tile, DIRECTIONS};
    use std::str::FromStr;

    #[test]
    fn test_parsing_tiles() {
        for (s, row, col) in [("a1", 0, 0), ("i9", 8, 8), ("b7", 1, 6), ("e5", 4, 4), ("o15", 14, 14)] {
            let t = Tile::new(row, col);
            assert_eq!(Tile::from_str(s), Ok(t));
            assert_eq!(t.to_string(), s);
        }
        assert_eq!(format!("{:?}", Tile::new(2, 3)), "Tile(c4)");

        assert_eq!(Tile::from_str(""), Err(EmptyString));
        assert_eq!(Tile::from_str("A1"), Err(BadChar('A')));
        assert_eq!(Tile::from_str("1a"), Err(BadChar('1')));
        assert_eq!(Tile::from_str("a0"), Err(BadString(String::from("a0"))));
        assert!(matches!(Tile::from_str("a!"), Err(BadInt(_))));
        assert!(matches!(Tile::from_str("a"), Err(BadInt(_))));
        assert!(matches!(Tile::from_str("a-1"), Err(BadInt(_))));
        assert_eq!(Tile::from_str("a128"), Ok(Tile::new(0, 127)));
        assert_eq!(Tile::from_str("a129"), Err(BadString(String::from("a129"))));
        assert_eq!(Tile::from_str("a255"), Err(BadString(String::from("a255"))));
    }

    #[test]
    fn test_directions() {
        let origin = Coords::from(Tile::new(4, 4));
        let stepped: Vec<Coords> = DIRECTIONS.iter().map(|d| origin + *d).collect();
        assert_eq!(stepped, vec![
            Coords::new(3, 4),
            Coords::new(5, 4),
            Coords::new(4, 3),
            Coords::new(4, 5),
        ]);
        assert!(DIRECTIONS.iter().all(|d| d.manhattan_dist() == 1));
    }

    #[test]
    fn test_offsets() {
        let corner = Coords::from(Tile::new(0, 0));
        assert_eq!(corner + AxisOffset::new(Vertical, -1), Coords::new(-1, 0));
        assert_eq!(corner + AxisOffset::new(Horizontal, 8), Coords::new(0, 8));
        assert_eq!(AxisOffset::new(Vertical, -7).manhattan_dist(), 7);
        // Walking far off the board saturates rather than wrapping round.
        assert_eq!(Coords::new(120, 0) + AxisOffset::new(Vertical, 120), Coords::new(i8::MAX, 0));
    }
}
