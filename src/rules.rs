use serde::{Deserialize, Serialize};
use crate::pieces::Side;

/// Rules relating to the capture of a lone piece sitting in a corner.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Serialize, Deserialize)]
pub enum CornerCapture {
    /// Corner pieces can only be captured in the ordinary way.
    Disabled,
    /// Corners are checked in a fixed order and at most one corner piece is captured per play.
    FirstMatch,
    /// Every corner is checked on every play.
    Every
}

/// A set of rules for a game of Hasami Shogi.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    /// Which side goes first.
    pub starting_side: Side,
    /// How many of the opponent's pieces a side must capture to win.
    pub captures_to_win: u8,
    /// Whether and how a piece in a corner can be captured by occupying both tiles next to it.
    pub corner_capture: CornerCapture,
}

impl Default for Ruleset {
    fn default() -> Self {
        crate::preset::rules::HASAMI_SHOGI
    }
}
