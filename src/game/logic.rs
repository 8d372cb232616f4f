use crate::board::geometry::BoardGeometry;
use crate::board::state::BoardState;
use crate::error::PlayInvalid;
use crate::error::PlayInvalid::{BlockedByPiece, GameOver, NoMovement, NoPiece, OutOfBounds, WrongPlayer};
use crate::game::state::GameState;
use crate::game::GameStatus::{Ongoing, Won};
use crate::game::PlayEffects;
use crate::pieces::{PlacedPiece, Side};
use crate::play::{Play, PlayRecord, ValidPlay};
use crate::rules::{CornerCapture, Ruleset};
use crate::tiles::{AxisOffset, Coords, Tile, DIRECTIONS};
use log::{debug, info, trace};
use std::collections::HashSet;

/// The result of making a play.
pub struct DoPlayResult<T: BoardState> {
    /// The game state following the play.
    pub new_state: GameState<T>,
    /// A record of the play and its effect.
    pub record: PlayRecord
}

impl<T: BoardState> From<DoPlayResult<T>> for (GameState<T>, PlayRecord) {
    fn from(result: DoPlayResult<T>) -> (GameState<T>, PlayRecord) {
        (result.new_state, result.record)
    }
}

/// This struct contains the information necessary to implement the game logic, including the game
/// rules and information about the geometry of the board (size, positions of the corners). It
/// provides methods for evaluating a given play based on that logic.
///
/// The information stored in this struct is not expected to change over the course of a game. It
/// does not contain the current game state (piece placement, captures so far, etc), but rather,
/// its methods take references to such state where necessary.
#[derive(Clone, Copy, Debug)]
pub struct GameLogic {
    pub rules: Ruleset,
    pub board_geo: BoardGeometry
}

impl GameLogic {

    /// Create a new [`GameLogic`] struct from the given rules and board size.
    pub fn new(rules: Ruleset, board_length: u8) -> Self {
        Self { rules, board_geo: BoardGeometry::new(board_length) }
    }

    /// Check whether a play is valid. Returns a `Result` which contains a [`ValidPlay`] wrapping
    /// the given `Play` if it is valid, and a [`PlayInvalid`] describing the reason for the
    /// invalidity otherwise.
    ///
    /// Checks are made in a fixed order and the first failure is reported: game over, off the
    /// board, no movement, blocked path (including an occupied destination), and finally whether
    /// the piece being moved belongs to the side to play.
    pub fn validate_play<T: BoardState>(
        &self,
        play: Play,
        state: &GameState<T>
    ) -> Result<ValidPlay, PlayInvalid> {
        if state.status != Ongoing {
            return Err(GameOver)
        }
        let from = play.from;
        if !(self.board_geo.tile_in_bounds(from) && self.board_geo.coords_in_bounds(play.to_coords())) {
            return Err(OutOfBounds)
        }
        if play.distance() == 0 {
            return Err(NoMovement)
        }
        let to = play.to();
        if state.board.tile_occupied(to) {
            return Err(BlockedByPiece)
        }
        if self.board_geo.tiles_between(from, to).iter().any(|t| state.board.tile_occupied(*t)) {
            return Err(BlockedByPiece)
        }
        match state.board.get_piece(from) {
            None => Err(NoPiece),
            Some(side) if side != state.side_to_play => Err(WrongPlayer),
            Some(_) => Ok(ValidPlay { play })
        }
    }

    /// Walk outward from `to` one step at a time in the direction given by `step`, collecting the
    /// tiles of any unbroken run of pieces not belonging to `side`. If the run is closed by a piece
    /// belonging to `side`, the tiles of the run are returned (they are captured). If the walk
    /// reaches an empty tile or the edge of the board first, nothing is captured.
    pub fn line_captures<T: BoardState>(
        &self,
        to: Tile,
        step: AxisOffset,
        side: Side,
        board: &T
    ) -> Vec<Tile> {
        let mut run: Vec<Tile> = vec![];
        let mut coords = Coords::from(to) + step;
        while let Ok(tile) = self.board_geo.coords_to_tile(coords) {
            match board.get_piece(tile) {
                Some(s) if s == side => return run,
                Some(_) => run.push(tile),
                None => break
            }
            coords = coords + step;
        }
        vec![]
    }

    /// Find the corner pieces captured by `side` having just moved to `to`. A corner holding an
    /// enemy piece is captured when both of its neighbours are held by `side` and `to` is one of
    /// them. Corners are checked in the order given by [`BoardGeometry::corners`].
    pub fn corner_captures<T: BoardState>(&self, to: Tile, side: Side, board: &T) -> Vec<Tile> {
        let mut captured: Vec<Tile> = vec![];
        if self.rules.corner_capture == CornerCapture::Disabled {
            return captured
        }
        for corner in self.board_geo.corners {
            if board.get_piece(corner) != Some(side.other()) {
                continue
            }
            let flanks = self.board_geo.neighbors(corner);
            if flanks.contains(&to) && flanks.iter().all(|t| board.get_piece(*t) == Some(side)) {
                captured.push(corner);
                if self.rules.corner_capture == CornerCapture::FirstMatch {
                    break
                }
            }
        }
        captured
    }

    /// Get the pieces captured by the given play. The piece is expected to have been moved
    /// already, so that the destination tile holds a piece of the moving side.
    pub fn get_captures<T: BoardState>(
        &self,
        play: Play,
        side: Side,
        state: &GameState<T>
    ) -> HashSet<PlacedPiece> {
        let to = play.to();
        let enemy = side.other();
        let mut captures: HashSet<PlacedPiece> = HashSet::new();
        for step in DIRECTIONS {
            captures.extend(
                self.line_captures(to, step, side, &state.board).into_iter()
                    .map(|t| PlacedPiece::new(t, enemy))
            );
        }
        captures.extend(
            self.corner_captures(to, side, &state.board).into_iter()
                .map(|t| PlacedPiece::new(t, enemy))
        );
        captures
    }

    /// Get the winner of the game, if any, given the captures made so far. Only the side that has
    /// just played can win.
    pub fn get_winner<T: BoardState>(&self, side: Side, state: &GameState<T>) -> Option<Side> {
        if state.captured.get(side.other()) >= self.rules.captures_to_win {
            Some(side)
        } else {
            None
        }
    }

    /// Execute a known valid play. Moves the piece, removes captured pieces, updates the capture
    /// tally, checks whether the game has been won, and returns the modified copy of the game
    /// state plus a record of the play (including its effects).
    ///
    /// **NOTE**: This method assumes that the given play is valid, and should only ever be called
    /// with a known valid play. If in any doubt as to the validity of a play, call
    /// [`Self::validate_play`] first or use [`Self::do_play`] instead (which performs that check).
    pub fn do_valid_play<T: BoardState>(
        &self,
        valid_play: ValidPlay,
        mut state: GameState<T>
    ) -> DoPlayResult<T> {
        let play = valid_play.play;
        let side = state.side_to_play;
        trace!("{side} plays {play}");

        // First move the piece on the board
        state.board.clear_tile(play.from);
        state.board.set_piece(play.to(), side);

        // Then remove captured pieces
        let captures = self.get_captures(play, side, &state);
        for c in &captures {
            state.board.clear_tile(c.tile);
        }
        if !captures.is_empty() {
            debug!("{play} by {side} captures {} piece(s)", captures.len());
            state.captured.add(side.other(), captures.len() as u8);
        }

        // Then assess the game outcome
        let winner = self.get_winner(side, &state);
        state.turn += 1;
        if let Some(w) = winner {
            info!("{w} wins after {} plays with {} captures", state.turn, state.captured.get(w.other()));
            state.status = Won(w);
        }

        let record = PlayRecord {
            side,
            play,
            effects: PlayEffects { captures, winner }
        };
        state.side_to_play = side.other();

        DoPlayResult { new_state: state, record }
    }

    /// Execute a play. Checks the play is valid, then applies it to a copy of the current game
    /// state (see [`Self::do_valid_play`]). On failure the given state is left untouched.
    pub fn do_play<T: BoardState>(
        &self,
        play: Play,
        state: GameState<T>
    ) -> Result<DoPlayResult<T>, PlayInvalid> {
        match self.validate_play(play, &state) {
            Ok(valid_play) => Ok(self.do_valid_play(valid_play, state)),
            Err(e) => {
                debug!("rejected {play}: {e}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::state::{BoardState, StandardBoardState, WideBoardState};
    use crate::error::PlayInvalid;
    use crate::error::PlayInvalid::{BlockedByPiece, GameOver, NoMovement, NoPiece, OutOfBounds, WrongPlayer};
    use crate::game::logic::GameLogic;
    use crate::game::state::GameState;
    use crate::game::GameStatus::{Ongoing, Won};
    use crate::pieces::PlacedPiece;
    use crate::pieces::Side::{Black, Red};
    use crate::play::{Play, ValidPlay};
    use crate::preset::{boards, rules};
    use crate::rules::{CornerCapture, Ruleset};
    use crate::tiles::{AxisOffset, Axis, Tile, DIRECTIONS};
    use std::collections::HashSet;
    use std::str::FromStr;

    fn play(s: &str) -> Play {
        Play::from_str(s).unwrap()
    }

    fn setup<T: BoardState>(rules: Ruleset, fen: &str) -> (GameLogic, GameState<T>) {
        let state: GameState<T> = GameState::new(fen, rules.starting_side).unwrap();
        (GameLogic::new(rules, state.board.side_len()), state)
    }

    fn assert_invalid_play<T: BoardState>(
        logic: GameLogic,
        play: Play,
        state: &GameState<T>,
        reason: PlayInvalid
    ) {
        assert_eq!(logic.validate_play(play, state), Err(reason));
    }

    fn pieces(side: crate::pieces::Side, tiles: &[&str]) -> HashSet<PlacedPiece> {
        tiles.iter().map(|t| PlacedPiece::new(Tile::from_str(t).unwrap(), side)).collect()
    }

    fn generic_test_play_validity<T: BoardState>() {
        let (logic, mut state) = setup::<T>(rules::HASAMI_SHOGI, boards::STANDARD);

        assert_eq!(logic.validate_play(play("i1-e1"), &state), Ok(ValidPlay { play: play("i1-e1") }));
        assert_eq!(logic.validate_play(play("i5-b5"), &state), Ok(ValidPlay { play: play("i5-b5") }));
        assert_invalid_play(logic, play("a1-e1"), &state, WrongPlayer);
        assert_invalid_play(logic, play("e1-e5"), &state, NoPiece);
        assert_invalid_play(logic, play("i1-i2"), &state, BlockedByPiece);
        // Destination occupied by the opponent
        assert_invalid_play(logic, play("i1-a1"), &state, BlockedByPiece);
        assert_invalid_play(logic, play("i9-i10"), &state, OutOfBounds);
        assert_invalid_play(
            logic,
            Play::new(Tile::new(8, 0), AxisOffset::new(Axis::Vertical, 0)),
            &state,
            NoMovement
        );
        assert_invalid_play(
            logic,
            Play::new(Tile::new(8, 0), AxisOffset::new(Axis::Vertical, 1)),
            &state,
            OutOfBounds
        );
        assert_invalid_play(
            logic,
            Play::new(Tile::new(8, 8), AxisOffset::new(Axis::Horizontal, 120)),
            &state,
            OutOfBounds
        );

        // A blocked path is reported before ownership is considered.
        assert_invalid_play(logic, play("a1-c1"), &state, WrongPlayer);
        state.board.set_piece(Tile::new(1, 0), Black);
        assert_invalid_play(logic, play("a1-c1"), &state, BlockedByPiece);
        assert_invalid_play(logic, play("c1-a1"), &state, BlockedByPiece);

        state.status = Won(Black);
        assert_invalid_play(logic, play("i1-e1"), &state, GameOver);
        assert_invalid_play(logic, play("i9-i10"), &state, GameOver);
    }

    #[test]
    fn test_play_validity() {
        generic_test_play_validity::<StandardBoardState>();
        generic_test_play_validity::<WideBoardState>();
    }

    fn generic_test_line_captures<T: BoardState>() {
        let (logic, state) = setup::<T>(
            rules::HASAMI_SHOGI,
            "9/9/2B6/2R6/2R6/BRB3RRR/2R6/9/9"
        );
        let to = Tile::from_str("f3").unwrap();
        let board = state.board;
        let [up, down, left, right] = DIRECTIONS;
        // Two red pieces closed by black on c3.
        assert_eq!(logic.line_captures(to, up, Black, &board), vec![
            Tile::from_str("e3").unwrap(),
            Tile::from_str("d3").unwrap()
        ]);
        // Red on g3 followed by an empty tile.
        assert!(logic.line_captures(to, down, Black, &board).is_empty());
        // Red on f2 closed by black on f1.
        assert_eq!(logic.line_captures(to, left, Black, &board), vec![Tile::from_str("f2").unwrap()]);
        // Empty tile next to the destination.
        assert!(logic.line_captures(to, right, Black, &board).is_empty());
        // Friendly piece next to the destination.
        assert!(logic.line_captures(Tile::from_str("f4").unwrap(), left, Black, &board).is_empty());
        // Run of red reaching the edge of the board.
        assert!(logic.line_captures(Tile::from_str("f6").unwrap(), right, Black, &board).is_empty());
        // Red can close a line too.
        assert_eq!(
            logic.line_captures(Tile::from_str("f4").unwrap(), left, Red, &board),
            vec![Tile::from_str("f3").unwrap()]
        );
    }

    #[test]
    fn test_line_captures() {
        generic_test_line_captures::<StandardBoardState>();
        generic_test_line_captures::<WideBoardState>();
    }

    fn generic_test_play_outcome<T: BoardState>() {
        // Black moves i5 to e5, closing lines upwards and to the left at once. The red piece on
        // e6 is followed by an empty tile and survives.
        let (logic, state) = setup::<T>(
            rules::HASAMI_SHOGI,
            "9/9/4B4/4R4/1BRR1R3/9/9/9/4B4"
        );
        let (new_state, record) = logic.do_play(play("i5-e5"), state).unwrap().into();
        assert_eq!(record.side, Black);
        assert_eq!(record.effects.captures, pieces(Red, &["d5", "e4", "e3"]));
        assert_eq!(record.effects.winner, None);
        assert_eq!(record.to_string(), "i5-e5xd5/e3/e4");
        assert_eq!(new_state.board.to_fen(), "9/9/4B4/9/1B2BR3/9/9/9/9");
        assert_eq!(new_state.captured.get(Red), 3);
        assert_eq!(new_state.captured.get(Black), 0);
        assert_eq!(new_state.side_to_play, Red);
        assert_eq!(new_state.status, Ongoing);
        assert_eq!(new_state.turn, 1);
        // The input state is untouched.
        assert_eq!(state.board.to_fen(), "9/9/4B4/4R4/1BRR1R3/9/9/9/4B4");

        // Without the black piece on c5, the red piece on d5 is not closed in.
        let (logic, state) = setup::<T>(
            rules::HASAMI_SHOGI,
            "9/9/9/4R4/1BRR1R3/9/9/9/4B4"
        );
        let (new_state, record) = logic.do_play(play("i5-e5"), state).unwrap().into();
        assert_eq!(record.effects.captures, pieces(Red, &["e4", "e3"]));
        assert_eq!(new_state.captured.get(Red), 2);

        // A move that captures nothing.
        let (logic, state) = setup::<T>(rules::HASAMI_SHOGI, boards::STANDARD);
        let (new_state, record) = logic.do_play(play("i1-e1"), state).unwrap().into();
        assert!(record.effects.captures.is_empty());
        assert_eq!(record.to_string(), "i1-e1");
        assert_eq!(new_state.board.get(4, 0), Ok(Some(Black)));
        assert_eq!(new_state.board.get(8, 0), Ok(None));
        assert_eq!(new_state.side_to_play, Red);
        let (new_state, _) = logic.do_play(play("a9-d9"), new_state).unwrap().into();
        assert_eq!(new_state.side_to_play, Black);
        assert_eq!(new_state.turn, 2);
    }

    #[test]
    fn test_play_outcome() {
        generic_test_play_outcome::<StandardBoardState>();
        generic_test_play_outcome::<WideBoardState>();
    }

    fn generic_test_corner_captures<T: BoardState>() {
        let fen = "R8/B8/9/9/1B7/9/9/9/9";
        let (logic, state) = setup::<T>(rules::HASAMI_SHOGI, fen);
        let (new_state, record) = logic.do_play(play("e2-a2"), state).unwrap().into();
        assert_eq!(record.effects.captures, pieces(Red, &["a1"]));
        assert_eq!(new_state.board.get(0, 0), Ok(None));
        assert_eq!(new_state.captured.get(Red), 1);

        // Landing on the other flank works the same way.
        let (logic, state) = setup::<T>(rules::HASAMI_SHOGI, "RB7/9/9/9/B8/9/9/9/9");
        let (_, record) = logic.do_play(play("e1-b1"), state).unwrap().into();
        assert_eq!(record.effects.captures, pieces(Red, &["a1"]));

        // The remaining corners, in evaluation order.
        let (logic, state) = setup::<T>(rules::HASAMI_SHOGI, "9/9/9/9/1B7/9/9/B8/R8");
        let (new_state, record) = logic.do_play(play("e2-i2"), state).unwrap().into();
        assert_eq!(record.effects.captures, pieces(Red, &["i1"]));
        assert_eq!(new_state.board.get(8, 0), Ok(None));
        let red_first = Ruleset { starting_side: Red, ..rules::HASAMI_SHOGI };
        let (logic, state) = setup::<T>(red_first, "7RB/9/9/9/9/8R/9/9/9");
        let (new_state, record) = logic.do_play(play("f9-b9"), state).unwrap().into();
        assert_eq!(record.effects.captures, pieces(Black, &["a9"]));
        assert_eq!(new_state.captured.get(Black), 1);

        // The far corner, captured by red.
        let (logic, state) = setup::<T>(red_first, "9/9/9/9/9/9/9/7R1/7RB");
        let (_, record) = logic.do_play(play("h8-h9"), state).unwrap().into();
        assert_eq!(record.effects.captures, pieces(Black, &["i9"]));

        // Only one flank held.
        let (logic, state) = setup::<T>(rules::HASAMI_SHOGI, "R8/9/9/9/1B7/9/9/9/9");
        let (_, record) = logic.do_play(play("e2-a2"), state).unwrap().into();
        assert!(record.effects.captures.is_empty());

        // Corner held by a friendly piece.
        let (logic, state) = setup::<T>(rules::HASAMI_SHOGI, "B8/B8/9/9/1B7/9/9/9/9");
        let (_, record) = logic.do_play(play("e2-a2"), state).unwrap().into();
        assert!(record.effects.captures.is_empty());

        let disabled = Ruleset { corner_capture: CornerCapture::Disabled, ..rules::HASAMI_SHOGI };
        let (logic, state) = setup::<T>(disabled, fen);
        let (new_state, record) = logic.do_play(play("e2-a2"), state).unwrap().into();
        assert!(record.effects.captures.is_empty());
        assert_eq!(new_state.board.get(0, 0), Ok(Some(Red)));

        // On a 3x3 board one tile flanks two corners at once.
        let (logic, state) = setup::<T>(rules::HASAMI_SHOGI, "R1R/B1B/1B1");
        let (_, record) = logic.do_play(play("c2-a2"), state).unwrap().into();
        assert_eq!(record.effects.captures, pieces(Red, &["a1"]));
        let (logic, state) = setup::<T>(rules::EVERY_CORNER, "R1R/B1B/1B1");
        let (new_state, record) = logic.do_play(play("c2-a2"), state).unwrap().into();
        assert_eq!(record.effects.captures, pieces(Red, &["a1", "a3"]));
        assert_eq!(new_state.captured.get(Red), 2);
    }

    #[test]
    fn test_corner_captures() {
        generic_test_corner_captures::<StandardBoardState>();
        generic_test_corner_captures::<WideBoardState>();
    }

    fn generic_test_win<T: BoardState>() {
        let (logic, mut state) = setup::<T>(rules::HASAMI_SHOGI, "9/9/4B4/4R4/9/9/9/9/4B4");
        state.captured.add(Red, 7);
        let (new_state, record) = logic.do_play(play("i5-e5"), state).unwrap().into();
        assert_eq!(record.effects.winner, Some(Black));
        assert_eq!(new_state.status, Won(Black));
        assert_eq!(new_state.active_player(), None);
        assert_eq!(new_state.captured.get(Red), 8);
        assert_invalid_play(logic, play("c5-c1"), &new_state, GameOver);
        assert!(logic.do_play(play("c5-c1"), new_state).is_err());

        let red_first = Ruleset { starting_side: Red, ..rules::HASAMI_SHOGI };
        let (logic, mut state) = setup::<T>(red_first, "4R4/9/9/9/9/4B4/4R4/9/9");
        state.captured.add(Black, 7);
        let (new_state, _) = logic.do_play(play("a5-e5"), state).unwrap().into();
        assert_eq!(new_state.status, Won(Red));
        assert_eq!(new_state.active_player(), None);

        // Seven captures are not enough.
        let (logic, mut state) = setup::<T>(rules::HASAMI_SHOGI, "9/9/4B4/4R4/9/9/9/9/4B4");
        state.captured.add(Red, 6);
        let (new_state, _) = logic.do_play(play("i5-e5"), state).unwrap().into();
        assert_eq!(new_state.status, Ongoing);
        assert_eq!(new_state.active_player(), Some(Red));

        let quick = Ruleset { captures_to_win: 1, ..rules::HASAMI_SHOGI };
        let (logic, state) = setup::<T>(quick, "9/9/4B4/4R4/9/9/9/9/4B4");
        let (new_state, _) = logic.do_play(play("i5-e5"), state).unwrap().into();
        assert_eq!(new_state.status, Won(Black));
    }

    #[test]
    fn test_win() {
        generic_test_win::<StandardBoardState>();
        generic_test_win::<WideBoardState>();
    }
}
