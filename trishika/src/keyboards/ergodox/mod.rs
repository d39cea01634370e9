//! ErgoDox: a split keyboard with a 14x6 matrix, the left half on rows 0..7, the right half on rows 7..14.
pub mod trishika;

pub const ROW: usize = 14;
pub const COL: usize = 6;

/// Build an ErgoDox layer from the 76 keys in physical order.
///
/// Keys are listed hand by hand: the five rows of a hand from top to bottom, then its thumb cluster
/// (the two top keys, the single key below them, then the bottom keys from the outside in).
/// Matrix slots without a switch are filled with `KeyAction::No`.
#[macro_export]
macro_rules! ergodox_layout {
    (
        // left hand
        $k00:expr, $k01:expr, $k02:expr, $k03:expr, $k04:expr, $k05:expr, $k06:expr,
        $k10:expr, $k11:expr, $k12:expr, $k13:expr, $k14:expr, $k15:expr, $k16:expr,
        $k20:expr, $k21:expr, $k22:expr, $k23:expr, $k24:expr, $k25:expr,
        $k30:expr, $k31:expr, $k32:expr, $k33:expr, $k34:expr, $k35:expr, $k36:expr,
        $k40:expr, $k41:expr, $k42:expr, $k43:expr, $k44:expr,
        $k55:expr, $k56:expr,
        $k54:expr,
        $k53:expr, $k52:expr, $k51:expr,
        // right hand
        $k07:expr, $k08:expr, $k09:expr, $k0A:expr, $k0B:expr, $k0C:expr, $k0D:expr,
        $k17:expr, $k18:expr, $k19:expr, $k1A:expr, $k1B:expr, $k1C:expr, $k1D:expr,
        $k28:expr, $k29:expr, $k2A:expr, $k2B:expr, $k2C:expr, $k2D:expr,
        $k37:expr, $k38:expr, $k39:expr, $k3A:expr, $k3B:expr, $k3C:expr, $k3D:expr,
        $k49:expr, $k4A:expr, $k4B:expr, $k4C:expr, $k4D:expr,
        $k57:expr, $k58:expr,
        $k59:expr,
        $k5C:expr, $k5B:expr, $k5A:expr $(,)?
    ) => {
        [
            [$k00, $k10, $k20, $k30, $k40, $crate::a!(No)],
            [$k01, $k11, $k21, $k31, $k41, $k51],
            [$k02, $k12, $k22, $k32, $k42, $k52],
            [$k03, $k13, $k23, $k33, $k43, $k53],
            [$k04, $k14, $k24, $k34, $k44, $k54],
            [$k05, $k15, $k25, $k35, $crate::a!(No), $k55],
            [$k06, $k16, $crate::a!(No), $k36, $crate::a!(No), $k56],

            [$k07, $k17, $crate::a!(No), $k37, $crate::a!(No), $k57],
            [$k08, $k18, $k28, $k38, $crate::a!(No), $k58],
            [$k09, $k19, $k29, $k39, $k49, $k59],
            [$k0A, $k1A, $k2A, $k3A, $k4A, $k5A],
            [$k0B, $k1B, $k2B, $k3B, $k4B, $k5B],
            [$k0C, $k1C, $k2C, $k3C, $k4C, $k5C],
            [$k0D, $k1D, $k2D, $k3D, $k4D, $crate::a!(No)],
        ]
    };
}

#[cfg(test)]
mod test {
    use trishika_types::action::KeyAction;

    use super::{COL, ROW};
    use crate::ergodox_layout;

    #[test]
    fn test_physical_to_matrix() {
        use KeyAction::Function as F;
        let layer: [[KeyAction; COL]; ROW] = ergodox_layout!(
            F(0), F(1), F(2), F(3), F(4), F(5), F(6),
            F(7), F(8), F(9), F(10), F(11), F(12), F(13),
            F(14), F(15), F(16), F(17), F(18), F(19),
            F(20), F(21), F(22), F(23), F(24), F(25), F(26),
            F(27), F(28), F(29), F(30), F(31),
            F(32), F(33),
            F(34),
            F(35), F(36), F(37),
            F(38), F(39), F(40), F(41), F(42), F(43), F(44),
            F(45), F(46), F(47), F(48), F(49), F(50), F(51),
            F(52), F(53), F(54), F(55), F(56), F(57),
            F(58), F(59), F(60), F(61), F(62), F(63), F(64),
            F(65), F(66), F(67), F(68), F(69),
            F(70), F(71),
            F(72),
            F(73), F(74), F(75),
        );
        assert_eq!(layer[0][0], F(0));
        assert_eq!(layer[6][1], F(13));
        // left thumb cluster
        assert_eq!(layer[5][5], F(32));
        assert_eq!(layer[4][5], F(34));
        assert_eq!(layer[1][5], F(37));
        // right hand starts at matrix row 7
        assert_eq!(layer[7][0], F(38));
        assert_eq!(layer[9][4], F(65));
        assert_eq!(layer[7][5], F(70));
        assert_eq!(layer[12][5], F(73));
        assert_eq!(layer[10][5], F(75));
        assert_eq!(layer[13][5], KeyAction::No);
    }
}
