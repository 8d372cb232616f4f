use primitive_types::U256;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;
use crate::bitfield::BitField;
use crate::error::{BoardError, ParseError};
use crate::error::ParseError::{BadLineLen, BadRowCount};
use crate::pieces::Side;
use crate::tiles::Tile;

/// The side length of a standard Hasami Shogi board.
pub const STANDARD_SIDE_LEN: u8 = 9;

/// Store information on the current board state (ie, pieces).
pub trait BoardState: Default + Clone + Copy + Display + FromStr + Debug + PartialEq {

    type Iter: Iterator<Item=Tile>;

    /// Create an empty board with the given side length.
    fn empty(side_len: u8) -> Self;

    /// Place a piece of the given side at the given position, replacing whatever was there.
    fn set_piece(&mut self, t: Tile, side: Side);

    /// Clear a tile.
    fn clear_tile(&mut self, t: Tile);

    /// Get the side whose piece occupies the given tile, if any.
    fn get_piece(&self, t: Tile) -> Option<Side>;

    /// Check if there is any piece occupying a tile.
    fn tile_occupied(&self, t: Tile) -> bool;

    /// Count the number of pieces of the given side left on the board.
    fn count_pieces(&self, side: Side) -> u8;

    /// Return an iterator over the tiles that are occupied by pieces of the given side, in
    /// row-major order.
    fn iter_occupied(&self, side: Side) -> Self::Iter;

    /// Parse board state from a string in FEN format.
    fn from_fen(s: &str) -> Result<Self, ParseError>;

    /// Parse board state from a string in the format output by [`Self::to_display_str`].
    fn from_display_str(s: &str) -> Result<Self, ParseError>;

    /// Return the length of the board's side.
    fn side_len(&self) -> u8;

    /// The standard starting position: Red fills row `a`, Black fills the last row.
    fn standard() -> Self {
        let mut board = Self::empty(STANDARD_SIDE_LEN);
        let last = STANDARD_SIDE_LEN - 1;
        for col in 0..STANDARD_SIDE_LEN {
            board.set_piece(Tile::new(0, col), Side::Red);
            board.set_piece(Tile::new(last, col), Side::Black);
        }
        board
    }

    /// Whether the given row and column lie on the board.
    fn in_bounds(&self, row: u8, col: u8) -> bool {
        row < self.side_len() && col < self.side_len()
    }

    /// Get the contents of the cell at the given (zero-based) row and column.
    fn get(&self, row: u8, col: u8) -> Result<Option<Side>, BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds)
        }
        Ok(self.get_piece(Tile::new(row, col)))
    }

    /// Overwrite the cell at the given (zero-based) row and column.
    fn set(&mut self, row: u8, col: u8, value: Option<Side>) -> Result<(), BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds)
        }
        let t = Tile::new(row, col);
        match value {
            Some(side) => self.set_piece(t, side),
            None => self.clear_tile(t)
        }
        Ok(())
    }

    /// Move a piece from one position to another. This does not check whether a move is valid; it
    /// just clears `from` and places the piece at `to`. Returns the side of the moved piece, or
    /// an error if there is no piece at `from`.
    fn move_piece(&mut self, from: Tile, to: Tile) -> Result<Side, BoardError> {
        let side = self.get_piece(from).ok_or(BoardError::NoPiece)?;
        self.clear_tile(from);
        self.set_piece(to, side);
        Ok(side)
    }

    /// Return a string in FEN format representing the board state.
    fn to_fen(&self) -> String {
        let mut s = String::new();
        for row in 0..self.side_len() {
            let mut n_empty = 0;
            for col in 0..self.side_len() {
                if let Some(side) = self.get_piece(Tile::new(row, col)) {
                    if n_empty > 0 {
                        s.push_str(n_empty.to_string().as_str());
                        n_empty = 0;
                    }
                    s.push(side.into());
                } else {
                    n_empty += 1;
                }
            }
            if n_empty > 0 {
                s.push_str(n_empty.to_string().as_str());
            }
            if row < self.side_len() - 1 {
                s.push('/');
            }
        }
        s
    }

    /// Return a string representing the board state, one line per row with `.` for empty tiles.
    fn to_display_str(&self) -> String {
        let mut s = String::new();
        for row in 0..self.side_len() {
            for col in 0..self.side_len() {
                match self.get_piece(Tile::new(row, col)) {
                    Some(side) => s.push(side.into()),
                    None => s.push('.'),
                }
            }
            s.push('\n');
        }
        s
    }

    /// Return the board as printed for a human: a header line of column numbers, then each row
    /// prefixed by its letter.
    fn render(&self) -> String {
        let mut s = String::from(" ");
        for col in 0..self.side_len() {
            s.push_str((col + 1).to_string().as_str());
        }
        s.push('\n');
        for (row, line) in self.to_display_str().lines().enumerate() {
            s.push((b'a' + row as u8) as char);
            s.push_str(line);
            s.push('\n');
        }
        s
    }
}

/// Iterator over the tiles whose bits are set in a bitfield, lowest bit (ie, row-major order)
/// first. Returned by [`BoardState::iter_occupied`].
pub struct BitfieldIter<T: BitField> {
    /// Bitfield representing board state.
    state: T,
    /// Keeps track of current position in the bitfield.
    i: u32,
}

impl<T: BitField> Iterator for BitfieldIter<T> {
    type Item = Tile;

    fn next(&mut self) -> Option<Self::Item> {
        let skipped = self.state >> self.i;
        if skipped.is_empty()  {
            return None
        }
        self.i += skipped.trailing_zeros() + 1;
        Some(T::bit_to_tile(self.i - 1))
    }
}

/// Store information on the current board state (ie, pieces) using bitfields.
///
/// The parameter `T` is a type that implements the [`BitField`] trait, ensuring that it supports
/// the relevant bitwise operations. A single integer of type `T` is used to record the positions
/// of all black pieces, and another integer is used to record the positions of the red pieces.
/// A tile is never set in both.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Default, Debug)]
pub struct BitfieldBoardState<T: BitField> {
    black: T,
    red: T,
    side_len: u8
}

impl<T: BitField> BitfieldBoardState<T> {
    fn bits(&self, side: Side) -> T {
        match side {
            Side::Black => self.black,
            Side::Red => self.red
        }
    }

    fn check_side_len(side_len: usize) -> Result<u8, ParseError> {
        if side_len == 0 || side_len > T::ROW_WIDTH as usize {
            Err(BadRowCount(side_len))
        } else {
            Ok(side_len as u8)
        }
    }
}

impl<T: BitField> BoardState for BitfieldBoardState<T> {

    type Iter = BitfieldIter<T>;

    fn empty(side_len: u8) -> Self {
        Self { side_len, ..Self::default() }
    }

    fn set_piece(&mut self, t: Tile, side: Side) {
        let mask = T::tile_mask(t);
        match side {
            Side::Black => {
                self.black |= mask;
                self.red &= !mask;
            },
            Side::Red => {
                self.red |= mask;
                self.black &= !mask;
            }
        }
    }

    fn clear_tile(&mut self, t: Tile) {
        let mask = !T::tile_mask(t);
        self.black &= mask;
        self.red &= mask;
    }

    fn get_piece(&self, t: Tile) -> Option<Side> {
        let mask = T::tile_mask(t);
        if !(self.black & mask).is_empty() {
            Some(Side::Black)
        } else if !(self.red & mask).is_empty() {
            Some(Side::Red)
        } else {
            None
        }
    }

    fn tile_occupied(&self, t: Tile) -> bool {
        !((self.black | self.red) & T::tile_mask(t)).is_empty()
    }

    fn count_pieces(&self, side: Side) -> u8 {
        self.bits(side).count_ones() as u8
    }

    fn iter_occupied(&self, side: Side) -> Self::Iter {
        Self::Iter {
            state: self.bits(side),
            i: 0
        }
    }

    fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let rows: Vec<&str> = fen.trim().split('/').collect();
        let side_len = Self::check_side_len(rows.len())?;
        let mut state = Self::empty(side_len);
        for (r, line) in rows.into_iter().enumerate() {
            let mut n_empty = 0usize;
            let mut c = 0usize;
            for chr in line.chars() {
                if let Some(d) = chr.to_digit(10) {
                    n_empty = (n_empty * 10) + d as usize;
                    // Bail out before a long run of digits can overflow.
                    if c + n_empty > side_len as usize {
                        return Err(BadLineLen(c + n_empty))
                    }
                } else {
                    c += n_empty;
                    n_empty = 0;
                    let side = Side::try_from(chr)?;
                    if c >= side_len as usize {
                        return Err(BadLineLen(c + 1))
                    }
                    state.set_piece(Tile::new(r as u8, c as u8), side);
                    c += 1;
                }
            }
            c += n_empty;
            if c != side_len as usize {
                return Err(BadLineLen(c))
            }
        }
        Ok(state)
    }

    fn from_display_str(display_str: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = display_str.trim().lines().collect();
        let side_len = Self::check_side_len(lines.len())?;
        let mut state = Self::empty(side_len);
        for (r, line) in lines.into_iter().enumerate() {
            if line.chars().count() != side_len as usize {
                return Err(BadLineLen(line.chars().count()))
            }
            for (c, chr) in line.chars().enumerate() {
                if chr != '.' {
                    state.set_piece(Tile::new(r as u8, c as u8), Side::try_from(chr)?)
                }
            }
        }
        Ok(state)
    }

    fn side_len(&self) -> u8 {
        self.side_len
    }
}

impl<T: BitField> FromStr for BitfieldBoardState<T> {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl <T: BitField> Display for BitfieldBoardState<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Board state for boards up to 11x11, which includes the standard 9x9 board.
pub type StandardBoardState = BitfieldBoardState<u128>;

/// Board state for boards up to 15x15.
pub type WideBoardState = BitfieldBoardState<U256>;
