pub mod rules {
    use crate::pieces::Side::Black;
    use crate::rules::CornerCapture::{Every, FirstMatch};
    use crate::rules::Ruleset;

    /// Standard Hasami Shogi: Black moves first, eight captures win, and at most one corner piece
    /// is taken per play.
    pub const HASAMI_SHOGI: Ruleset = Ruleset {
        starting_side: Black,
        captures_to_win: 8,
        corner_capture: FirstMatch,
    };

    /// Standard rules, except that every corner is checked for a corner capture on each play.
    pub const EVERY_CORNER: Ruleset = Ruleset {
        corner_capture: Every,
        ..HASAMI_SHOGI
    };
}

pub mod boards {
    /// Red along row `a`, Black along row `i`.
    pub const STANDARD: &str = "RRRRRRRRR/9/9/9/9/9/9/9/BBBBBBBBB";
}
