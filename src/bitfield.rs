use crate::tiles::Tile;
use primitive_types::U256;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Shl, Shr};

/// An integer type wide enough to hold one bit per tile of a board. Tile `(row, col)` maps to bit
/// `row * ROW_WIDTH + col`. Implement it with [`crate::impl_bitfield!`].
pub trait BitField:
    Copy
    + From<u8>
    + BitAnd<Output=Self>
    + BitAndAssign
    + BitOr<Output=Self>
    + BitOrAssign
    + Not<Output=Self>
    + Shr<u32, Output=Self>
    + Shl<u32, Output=Self>
    + Eq
    + Hash
    + Default
    + Debug
{
    /// Bits per board row, and so the longest side a board stored in this type may have.
    const ROW_WIDTH: u8;

    fn count_ones(&self) -> u32;

    fn trailing_zeros(&self) -> u32;

    /// No bits set.
    fn is_empty(&self) -> bool;

    /// A value with only the given tile's bit set.
    fn tile_mask(t: Tile) -> Self {
        Self::from(1) << (u32::from(t.row) * u32::from(Self::ROW_WIDTH) + u32::from(t.col))
    }

    /// The tile represented by the given bit index.
    fn bit_to_tile(bit: u32) -> Tile {
        let width = u32::from(Self::ROW_WIDTH);
        Tile::new((bit / width) as u8, (bit % width) as u8)
    }
}

/// Implement [`BitField`] for an integer type with the given row width. Use the `prim` form for
/// built-in integers and the `wide` form for the `primitive_types` integers, which keep their
/// value in an array of `u64` limbs.
#[macro_export] macro_rules! impl_bitfield {
    (prim $t:ty, $row_width:expr) => {
        impl BitField for $t {
            const ROW_WIDTH: u8 = $row_width;

            fn count_ones(&self) -> u32 {
                <$t>::count_ones(*self)
            }

            fn trailing_zeros(&self) -> u32 {
                <$t>::trailing_zeros(*self)
            }

            fn is_empty(&self) -> bool {
                *self == 0
            }
        }
    };
    (wide $t:ty, $row_width:expr) => {
        impl BitField for $t {
            const ROW_WIDTH: u8 = $row_width;

            fn count_ones(&self) -> u32 {
                self.0.iter().map(|limb| limb.count_ones()).sum()
            }

            fn trailing_zeros(&self) -> u32 {
                <$t>::trailing_zeros(self)
            }

            fn is_empty(&self) -> bool {
                self.is_zero()
            }
        }
    };
}

// 11 * 11 = 121 bits, 15 * 15 = 225 bits.
impl_bitfield!(prim u128, 11);
impl_bitfield!(wide U256, 15);
