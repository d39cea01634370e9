//! The "trishika" keymap for the ErgoDox.
//!
//! ```text
//! Keymap 0: Base layer
//!
//! ,--------------------------------------------------.         ,--------------------------------------------------.
//! |   `~   |  1!  |  2@  |  3#  |  4$  |  5%  |  -_  |         |  +=  |  6^  |  7&  |  8*  |  9(  |  0)  | Vol Up |
//! |--------+------+------+------+------+-------------|         |------+------+------+------+------+------+--------|
//! | Tab    |   Q  |   W  |   E  |   R  |   T  |  {   |         |   }  |   Y  |   U  |   I  |   O  |   P  |Vol Down|
//! |--------+------+------+------+------+------|  [   |         |   ]  |------+------+------+------+------+--------|
//! | Esc    |   A  |   S  |   D  |   F  |   G  |------|         |------|   H  |   J  |   K  |   L  |  :;  |  '"    |
//! |--------+------+------+------+------+------| Del  |         | BkSp |------+------+------+------+------+--------|
//! | M(Caps)|Z/Alt |   X  |   C  |   V  |   B  |      |         |      |   N  |   M  |   ,  |   .  |  /?  |  |\    |
//! `--------+------+------+------+------+-------------'         `-------------+------+------+------+------+--------'
//!   |LCtrl | COPY | PASTE| Super| LAlt |                                     | Left |  Up  | Down | Right| RAlt |
//!   `----------------------------------'                                     `----------------------------------'
//!                                        ,-------------.     ,-------------.
//!                                        | Esc  | Play |     | Prev | Next |
//!                                 ,------|------|------|     |------+------+------.
//!                                 |      |      | Home |     | PgUp |      |      |
//!                                 | Space| Super|------|     |------| ~L1  |Enter |
//!                                 |      |      | End  |     | PgDn |      |      |
//!                                 `--------------------'     `--------------------'
//!
//! Keymap 1: Alt layer
//!
//! ,--------------------------------------------------.         ,--------------------------------------------------.
//! |  BOOT  |  F1  |  F2  |  F3  |  F4  |  F5  |  F6  |         |  F7  |  F8  |  F9  |  F10 |  F11 |  F12 | Mute   |
//! |--------+------+------+------+------+-------------|         |------+------+------+------+------+------+--------|
//! |        |      |      |      |      |      |Scroll|         |      |      |      |      |      |      | Mute   |
//! |--------+------+------+------+------+------|  Up  |         |      |------+------+------+------+------+--------|
//! |        |      |      | MsU  |      |      |------|         |------|      |      |      |      |      |PrintScr|
//! |--------+------+------+------+------+------|Scroll|         |      |------+------+------+------+------+--------|
//! |        |      | MsL  | MsD  | MsR  |      | Down |         |      | LClk | MClk | RClk |      |      | Sleep  |
//! `--------+------+------+------+------+-------------'         `-------------+------+------+------+------+--------'
//! ```
//! Blank keys of the alt layer are transparent.
use trishika_types::action::{Action, KeyAction};

use super::{COL, ROW};
use crate::keyboard_macros::CAPS_SHIFT_MACRO_ID;
use crate::keymap::KeyMap;
use crate::{a, boot, ergodox_layout, fnk, k, lctl, lsft, th};

pub const BASE: u8 = 0;
pub const ALT: u8 = 1;
pub const NUM_LAYER: usize = 2;

/// Function key bound to the alt layer tap-toggle
pub const FN_ALT: u8 = 1;
/// Function key bound to the caps-shift macro
pub const FN_CAPS: u8 = CAPS_SHIFT_MACRO_ID;

const TRNS: KeyAction = a!(Transparent);

/// Actions of the function keys
pub static FN_ACTIONS: [Option<Action>; 11] = {
    let mut functions = [None; 11];
    functions[FN_ALT as usize] = Some(Action::LayerTapToggle(ALT));
    functions[FN_CAPS as usize] = Some(Action::MacroTap(CAPS_SHIFT_MACRO_ID));
    functions
};

#[rustfmt::skip]
pub static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    // Base layer
    ergodox_layout!(
        // left hand
        k!(Grave),    k!(Kc1),          k!(Kc2),          k!(Kc3),   k!(Kc4),  k!(Kc5), k!(Minus),
        k!(Tab),      k!(Q),            k!(W),            k!(E),     k!(R),    k!(T),   k!(LeftBracket),
        k!(Escape),   k!(A),            k!(S),            k!(D),     k!(F),    k!(G),
        fnk!(FN_CAPS), th!(Z, LAlt),    k!(X),            k!(C),     k!(V),    k!(B),   k!(Delete),
        k!(LCtrl),    lctl!(Insert),    lsft!(Insert),    k!(LGui),  k!(LAlt),
                                                                     k!(Escape), k!(MediaPlayPause),
                                                                                 k!(Home),
                                                          k!(Space), k!(LGui),   k!(End),
        // right hand
        k!(Equal),        k!(Kc6),  k!(Kc7),  k!(Kc8),     k!(Kc9),   k!(Kc0),       k!(AudioVolUp),
        k!(RightBracket), k!(Y),    k!(U),    k!(I),       k!(O),     k!(P),         k!(AudioVolDown),
                          k!(H),    k!(J),    k!(K),       k!(L),     k!(Semicolon), k!(Quote),
        k!(Backspace),    k!(N),    k!(M),    k!(Comma),   k!(Dot),   k!(Slash),     k!(Backslash),
                                    k!(Left), k!(Up),      k!(Down),  k!(Right),     k!(RAlt),
        k!(MediaPrevTrack), k!(MediaNextTrack),
        k!(PageUp),
        k!(PageDown), fnk!(FN_ALT), k!(Enter)
    ),
    // Alt layer
    ergodox_layout!(
        // left hand
        boot!(), k!(F1), k!(F2),         k!(F3),        k!(F4),         k!(F5), k!(F6),
        TRNS,    TRNS,   TRNS,           TRNS,          TRNS,           TRNS,   k!(MouseWheelUp),
        TRNS,    TRNS,   TRNS,           k!(MouseUp),   TRNS,           TRNS,
        TRNS,    TRNS,   k!(MouseLeft),  k!(MouseDown), k!(MouseRight), TRNS,   k!(MouseWheelDown),
        TRNS,    TRNS,   TRNS,           TRNS,          TRNS,
                                                                        TRNS,   TRNS,
                                                                                TRNS,
                                                        TRNS,           TRNS,   TRNS,
        // right hand
        k!(F7),  k!(F8),         k!(F9),         k!(F10),        k!(F11), k!(F12), k!(AudioMute),
        TRNS,    TRNS,           TRNS,           TRNS,           TRNS,    TRNS,    k!(AudioMute),
                 TRNS,           TRNS,           TRNS,           TRNS,    TRNS,    k!(PrintScreen),
        TRNS,    k!(MouseBtn1),  k!(MouseBtn3),  k!(MouseBtn2),  TRNS,    TRNS,    k!(SystemSleep),
                                 TRNS,           TRNS,           TRNS,    TRNS,    TRNS,
        TRNS,    TRNS,
        TRNS,
        TRNS,    TRNS,           TRNS
    ),
];

/// The keymap with its function table
pub fn keymap() -> KeyMap<'static, ROW, COL, NUM_LAYER> {
    KeyMap::new(&KEYMAP, &FN_ACTIONS)
}

#[cfg(test)]
mod test {
    use trishika_types::keycode::KeyCode;

    use super::*;
    use crate::keyboard_macros::MacroId;

    #[test]
    fn test_unwired_slots_are_empty() {
        for layer in KEYMAP.iter() {
            for (row, col) in [(0, 5), (5, 4), (6, 2), (6, 4), (7, 2), (7, 4), (8, 4), (13, 5)] {
                assert_eq!(layer[row][col], KeyAction::No);
            }
        }
    }

    #[test]
    fn test_every_switch_is_mapped_on_base() {
        let mapped = KEYMAP[BASE as usize]
            .iter()
            .flat_map(|r| r.iter())
            .filter(|a| !a.is_empty())
            .count();
        assert_eq!(mapped, 76);
    }

    #[test]
    fn test_special_keys() {
        let keymap = keymap();
        assert_eq!(keymap.action_at(ALT as usize, 0, 0), boot!());
        assert_eq!(keymap.action_at(BASE as usize, 0, 0), k!(Grave));
        // right thumb, middle bottom key
        assert_eq!(keymap.action_at(BASE as usize, 11, 5), fnk!(FN_ALT));
        assert_eq!(keymap.function(FN_ALT), Some(Action::LayerTapToggle(ALT)));
        assert_eq!(keymap.action_at(BASE as usize, 1, 3), th!(Z, LAlt));
        assert_eq!(keymap.action_at(BASE as usize, 3, 5), k!(Space));
        assert_eq!(keymap.action_at(ALT as usize, 13, 3), k!(SystemSleep));
    }

    #[test]
    fn test_caps_key_triggers_caps_shift() {
        let keymap = keymap();
        assert_eq!(keymap.macro_at(BASE as usize, 0, 3), Some(MacroId::CapsShift));
        assert!(keymap.action_at(ALT as usize, 0, 3).is_transparent());
        assert_eq!(
            keymap.position_of(BASE as usize, KeyAction::Single(Action::Key(KeyCode::Enter))),
            Some((10, 5))
        );
    }
}
