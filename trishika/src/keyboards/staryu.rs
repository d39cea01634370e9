//! Staryu: a five key macro pad, wired as a single matrix row.
pub const ROW: usize = 1;
pub const COL: usize = 5;

/// Build a Staryu layer from its keys in physical order: the top pair, then the bottom three.
///
/// The bottom row is wired right to left, so `K10` lands in the last matrix column.
#[macro_export]
macro_rules! staryu_layout {
    (
        $k00:expr, $k01:expr,
        $k10:expr, $k11:expr, $k12:expr $(,)?
    ) => {
        [[$k00, $k01, $k12, $k11, $k10]]
    };
}

#[cfg(test)]
mod test {
    use trishika_types::action::KeyAction;

    use super::{COL, ROW};
    use crate::{k, staryu_layout};

    #[test]
    fn test_staryu_matrix_order() {
        let layer: [[KeyAction; COL]; ROW] = staryu_layout!(k!(A), k!(B), k!(C), k!(D), k!(E));
        assert_eq!(layer, [[k!(A), k!(B), k!(E), k!(D), k!(C)]]);
    }
}
