#[cfg(test)]
use crate::tiles::Tile;

/// Build a [`std::collections::HashSet`] from a list of expressions, like [`vec!`].
#[cfg(test)]
macro_rules! hashset {
    ($( $x: expr ),* $(,)?) => {
        std::collections::HashSet::from([$( $x ),*])
    };
}

/// Assert that `actual` holds the same tiles as `expected`, in any order and without repeats.
#[cfg(test)]
pub(crate) fn check_tile_vec(mut actual: Vec<Tile>, mut expected: Vec<Tile>) {
    let n = actual.len();
    actual.sort();
    actual.dedup();
    assert_eq!(actual.len(), n, "duplicate tiles");
    expected.sort();
    assert_eq!(actual, expected);
}
