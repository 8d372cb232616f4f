/// Piece placement, ie, which side (if any) occupies each tile.
pub mod state;

/// Size of the board and the positions of special tiles.
pub mod geometry;
