use core::ops::BitOr;

use bitfield_struct::bitfield;
use serde::{Deserialize, Serialize};

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl ModifierCombination {
    pub const LCTRL: Self = Self::new().with_ctrl(true);
    pub const LSHIFT: Self = Self::new().with_shift(true);
    pub const LALT: Self = Self::new().with_alt(true);
    pub const LGUI: Self = Self::new().with_gui(true);
    pub const RCTRL: Self = Self::LCTRL.with_right(true);
    pub const RSHIFT: Self = Self::LSHIFT.with_right(true);
    pub const RALT: Self = Self::LALT.with_right(true);
    pub const RGUI: Self = Self::LGUI.with_right(true);

    /// Convert to the modifier byte of a HID keyboard report.
    ///
    /// Left modifiers occupy bits 0..4, right modifiers bits 4..8.
    pub const fn to_hid_modifier_bits(self) -> u8 {
        let bits = (self.ctrl() as u8) | (self.shift() as u8) << 1 | (self.alt() as u8) << 2 | (self.gui() as u8) << 3;
        if self.right() { bits << 4 } else { bits }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hid_modifier_bits() {
        assert_eq!(ModifierCombination::LCTRL.to_hid_modifier_bits(), 0x01);
        assert_eq!(ModifierCombination::LSHIFT.to_hid_modifier_bits(), 0x02);
        assert_eq!(ModifierCombination::RALT.to_hid_modifier_bits(), 0x40);
        assert_eq!(
            (ModifierCombination::LCTRL | ModifierCombination::LSHIFT).to_hid_modifier_bits(),
            0x03
        );
    }
}
