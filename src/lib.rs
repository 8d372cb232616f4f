//! This crate provides a rules engine for [Hasami Shogi](https://en.wikipedia.org/wiki/Hasami_shogi),
//! a two-player game played on a 9x9 board where pieces move like rooks and capture by enclosing
//! runs of enemy pieces. It includes structs, enums and traits that encapsulate game data and
//! logic. Rendering and input handling are left to the caller (a small terminal demo is included
//! behind the `demo` feature).
//!
//! # Getting started
//!
//! If you just want to play a standard game, [`game::StandardGame::default`] gives you one, and
//! [`game::Game::try_move`] takes moves written in square notation:
//!
//! ```
//! use hasami_shogi::game::StandardGame;
//! use hasami_shogi::pieces::Side;
//!
//! let mut game = StandardGame::default();
//! assert!(game.try_move("i1", "e1").is_ok());
//! assert_eq!(game.active_player(), Some(Side::Red));
//! ```
//!
//! The main building blocks are:
//!
//! - [`rules::Ruleset`]: Specifies the variable rules of the game (who starts, how many captures
//!   win, how corner captures work).
//! - [`game::logic::GameLogic`]: Keeps a copy of the game rules and the board geometry, and
//!   implements the logic required to assess the validity and outcome of a given move. It does not
//!   keep information about the current game state, but rather, its methods take that state as
//!   necessary.
//! - [`game::state::GameState`]: Keeps track of the current state of the game, ie, everything that
//!   changes from move to move. It is `Copy`, so snapshots are cheap.
//! - [`game::Game`]: Contains a `GameLogic` and a `GameState`, plus a record of previous plays.
//!
//! Rulesets and starting positions can be built by hand, or taken from the [`preset::rules`] and
//! [`preset::boards`] modules.
//!
//! # Board state
//!
//! The default representation of the board uses one bitfield per side (see
//! [`board::state::BitfieldBoardState`]). `u128` holds boards up to 11x11, which covers the
//! standard board; `U256` holds boards up to 15x15. `GameState` and `Game` are generic over the
//! board representation, and type aliases are provided for both:
//!
//! - [`game::StandardGame`] / [`game::state::StandardGameState`]
//! - [`game::WideGame`] / [`game::state::WideGameState`]
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade: rejected plays and captures at `debug` level, game
//! results at `info` level and every applied play at `trace` level. No logger is installed.

/// Miscellaneous utilities used elsewhere in the crate.
#[macro_use]
mod utils;

/// Code for defining game rules.
pub mod rules;

/// Code relating to game pieces.
pub mod pieces;

/// Errors used elsewhere in the crate.
pub mod error;

/// Code for implementing a game, including game logic and state.
pub mod game;

/// Code relating to board tiles and coordinates.
pub mod tiles;

/// An implementation of a bitfield, used to hold board state.
pub mod bitfield;

/// Code relating to "plays" (ie, game moves).
pub mod play;

/// Pre-defined rulesets and board positions.
pub mod preset;

/// Code relating to the board, including board state and geometry.
pub mod board;
