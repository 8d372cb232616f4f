use std::num::ParseIntError;
use thiserror::Error;
use crate::error::ParseError::BadInt;
use crate::tiles::Tile;

/// Errors that may be encountered when parsing a string.
#[derive(Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// Tried to parse a multi-line or multi-row string but it did not contain the expected number
    /// of rows. The given `usize` is the actual number of rows.
    #[error("expected a square board, found {0} rows")]
    BadRowCount(usize),
    /// Tried to parse a multi-line string but encountered a line that was not the expected length.
    /// The given `usize` is the actual length.
    #[error("unexpected line length {0}")]
    BadLineLen(usize),
    /// Encountered an unexpected character in a string.
    #[error("unexpected character {0:?}")]
    BadChar(char),
    /// Tried to parse an empty string.
    #[error("empty string")]
    EmptyString,
    /// Could not parse an integer from a string. This variant wraps the [`ParseIntError`] that was
    /// returned when trying to parse.
    #[error("bad integer: {0}")]
    BadInt(ParseIntError),
    /// Tried to parse a string which represents an invalid [`Play`](crate::play::Play).
    #[error("bad play: {0}")]
    BadPlay(PlayError),
    /// Parsed a tile which does not lie on the board.
    #[error("{0} is not on the board")]
    OffBoard(Tile),
    /// A generic error type where the given string could not be parsed for some reason.
    #[error("could not parse {0:?}")]
    BadString(String)
}

impl From<ParseIntError> for ParseError {
    fn from(value: ParseIntError) -> Self {
        BadInt(value)
    }
}

/// Errors that may be encountered when constructing a [`Play`](crate::play::Play).
#[derive(Debug, Eq, PartialEq, Copy, Clone, Error)]
pub enum PlayError {
    /// The tiles share neither a row nor a column.
    #[error("tiles are not on a common row or column")]
    DisjointTiles,
    /// Source and destination are the same tile.
    #[error("source and destination are the same tile")]
    SameTile,
    /// The tiles are further apart than any board allows.
    #[error("tiles are too far apart")]
    TooFar
}

/// Errors relating to the board.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Error)]
pub enum BoardError {
    /// Coordinates are out of bounds, ie, not on board.
    #[error("coordinates are not on the board")]
    OutOfBounds,
    /// There is no piece at the given tile, where one is expected.
    #[error("no piece at the given tile")]
    NoPiece
}

/// Different ways a [`Play`](crate::play::Play) can be invalid.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Error)]
pub enum PlayInvalid {
    /// Game is already over.
    #[error("the game is over")]
    GameOver,
    /// The source or destination tile is outside the board.
    #[error("move leaves the board")]
    OutOfBounds,
    /// The start and end tiles do not share an axis (ie, they are not on the same row or column).
    #[error("move is not along a row or column")]
    NoCommonAxis,
    /// The start and end tiles are the same.
    #[error("piece does not move")]
    NoMovement,
    /// Another piece is blocking the move, or occupies the destination.
    #[error("path is not clear")]
    BlockedByPiece,
    /// There is no piece to move at the given tile.
    #[error("no piece to move")]
    NoPiece,
    /// The piece being moved does not belong to the player whose turn it is.
    #[error("piece belongs to the other player")]
    WrongPlayer
}

impl From<PlayError> for PlayInvalid {
    fn from(value: PlayError) -> Self {
        match value {
            PlayError::DisjointTiles => PlayInvalid::NoCommonAxis,
            PlayError::SameTile => PlayInvalid::NoMovement,
            PlayError::TooFar => PlayInvalid::OutOfBounds
        }
    }
}

/// Why a move given in square notation (eg, `"i1"` to `"e1"`) was rejected.
#[derive(Debug, Eq, PartialEq, Error)]
pub enum MoveError {
    /// One of the squares could not be parsed or is not on the board.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] ParseError),
    /// The squares were fine but the move breaks the rules.
    #[error("illegal move: {0}")]
    Illegal(#[from] PlayInvalid)
}
