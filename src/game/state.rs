use crate::board::state::{BoardState, StandardBoardState, WideBoardState};
use crate::error::ParseError;
use crate::game::GameStatus;
use crate::game::GameStatus::Ongoing;
use crate::pieces::Side;

/// Keeps count of how many pieces of each side have been removed from the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CaptureTally {
    black: u8,
    red: u8
}

impl CaptureTally {

    /// The number of the given side's pieces that have been captured.
    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Black => self.black,
            Side::Red => self.red
        }
    }

    /// Record that `n` more of the given side's pieces have been captured.
    pub fn add(&mut self, side: Side, n: u8) {
        match side {
            Side::Black => self.black = self.black.saturating_add(n),
            Side::Red => self.red = self.red.saturating_add(n)
        }
    }
}

/// This struct contains all state that changes over the course of a game: piece placement,
/// whose turn it is, captures so far and whether the game is over. It is `Copy`, so a snapshot
/// can be taken by assignment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GameState<T: BoardState> {
    /// Board state, ie, the current pieces on the board.
    pub board: T,
    /// The side whose turn it is. Once the game is over this is the side that would have played
    /// next, and [`Self::active_player`] returns `None`.
    pub side_to_play: Side,
    /// Pieces captured so far, by the side they belonged to.
    pub captured: CaptureTally,
    /// Current status of the game.
    pub status: GameStatus,
    /// Number of plays that have been taken by either side.
    pub turn: usize
}

impl <T: BoardState> GameState<T> {

    /// Create a new game state from a FEN string describing the starting board.
    pub fn new(fen_str: &str, side_to_play: Side) -> Result<Self, ParseError> {
        Ok(Self::from_board(T::from_fen(fen_str)?, side_to_play))
    }

    /// Create a new game state from an existing board.
    pub fn from_board(board: T, side_to_play: Side) -> Self {
        Self {
            board,
            side_to_play,
            captured: CaptureTally::default(),
            status: Ongoing,
            turn: 0
        }
    }

    /// The side whose turn it is, or `None` if the game is over.
    pub fn active_player(&self) -> Option<Side> {
        match self.status {
            Ongoing => Some(self.side_to_play),
            GameStatus::Won(_) => None
        }
    }
}

/// Game state on boards up to 11x11, including the standard board.
pub type StandardGameState = GameState<StandardBoardState>;
/// Game state on boards up to 15x15.
pub type WideGameState = GameState<WideBoardState>;
