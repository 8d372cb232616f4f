pub mod logic;
pub mod state;

use crate::board::state::{BoardState, StandardBoardState, WideBoardState, STANDARD_SIDE_LEN};
use crate::error::{MoveError, ParseError, PlayInvalid};
use crate::game::logic::GameLogic;
use crate::game::state::GameState;
use crate::pieces::{PlacedPiece, Side};
use crate::play::{Play, PlayRecord};
use crate::preset;
use crate::rules::Ruleset;
use crate::tiles::Tile;
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The effects of a single play, including captures and the winner of the game, if the play
/// ended it.
#[derive(Eq, PartialEq, Debug, Default, Clone)]
pub struct PlayEffects {
    /// Pieces that have been captured by the move.
    pub captures: HashSet<PlacedPiece>,
    /// The side that won the game with this move, if any.
    pub winner: Option<Side>
}

/// The current status of the game.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum GameStatus {
    /// Game is still ongoing.
    Ongoing,
    /// Game has been won by the given side.
    Won(Side)
}

impl Display for GameStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "UNFINISHED"),
            GameStatus::Won(side) => write!(f, "{side}_WON")
        }
    }
}

/// A struct representing a single game, including all state and associated information (such as
/// rules) needed to play. This struct also keeps a record of all previous plays.
#[derive(Clone, Debug)]
pub struct Game<T: BoardState> {
    pub logic: GameLogic,
    pub state: GameState<T>,
    pub play_history: Vec<PlayRecord>
}

impl<T: BoardState> Game<T> {

    /// Create a new [`Game`] from the given rules and starting positions.
    pub fn new(rules: Ruleset, starting_board: &str) -> Result<Self, ParseError> {
        let state: GameState<T> = GameState::new(starting_board, rules.starting_side)?;
        let logic = GameLogic::new(rules, state.board.side_len());
        Ok(Self { state, logic, play_history: vec![] })
    }

    /// Actually "do" a play, checking validity, getting outcome, applying outcome to board state,
    /// switching side to play and returning a description of the game status following the move.
    /// On failure nothing changes.
    pub fn do_play(&mut self, play: Play) -> Result<GameStatus, PlayInvalid> {
        let (state, play_record) = self.logic.do_play(play, self.state)?.into();
        self.state = state;
        self.play_history.push(play_record);
        Ok(self.state.status)
    }

    /// Move the piece on `start` to `end`, both given in square notation (eg, `"i1"`, `"e1"`),
    /// and return the effects of the move.
    pub fn try_move(&mut self, start: &str, end: &str) -> Result<PlayEffects, MoveError> {
        if self.state.status != GameStatus::Ongoing {
            return Err(PlayInvalid::GameOver.into())
        }
        let from = self.parse_square(start)?;
        let to = self.parse_square(end)?;
        let play = Play::from_tiles(from, to).map_err(PlayInvalid::from)?;
        self.do_play(play)?;
        Ok(self.play_history.last().map(|r| r.effects.clone()).unwrap_or_default())
    }

    /// Like [`Self::try_move`], but only reports whether the move was made.
    pub fn make_move(&mut self, start: &str, end: &str) -> bool {
        self.try_move(start, end).is_ok()
    }

    /// The current status of the game.
    pub fn game_state(&self) -> GameStatus {
        self.state.status
    }

    /// The side whose turn it is, or `None` once the game is over.
    pub fn active_player(&self) -> Option<Side> {
        self.state.active_player()
    }

    /// How many of the given side's pieces have been captured.
    pub fn captured_count(&self, side: Side) -> u8 {
        self.state.captured.get(side)
    }

    /// The side occupying the given square, if any.
    pub fn square_occupant(&self, square: &str) -> Result<Option<Side>, ParseError> {
        let tile = self.parse_square(square)?;
        Ok(self.state.board.get_piece(tile))
    }

    fn parse_square(&self, square: &str) -> Result<Tile, ParseError> {
        let tile = Tile::from_str(square)?;
        if self.logic.board_geo.tile_in_bounds(tile) {
            Ok(tile)
        } else {
            Err(ParseError::OffBoard(tile))
        }
    }
}

impl<T: BoardState> Default for Game<T> {
    /// Standard rules and starting position.
    fn default() -> Self {
        let rules = preset::rules::HASAMI_SHOGI;
        Self {
            logic: GameLogic::new(rules, STANDARD_SIDE_LEN),
            state: GameState::from_board(T::standard(), rules.starting_side),
            play_history: vec![]
        }
    }
}

impl<T: BoardState> Display for Game<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.state.board.render())
    }
}

/// Game on boards up to 11x11, including the standard board.
pub type StandardGame = Game<StandardBoardState>;
/// Game on boards up to 15x15.
pub type WideGame = Game<WideBoardState>;
