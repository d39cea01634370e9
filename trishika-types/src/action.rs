use serde::{Deserialize, Serialize};

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
/// It can be a single action like triggering a key, or a composite keyboard action like tap/hold
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    #[default]
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, such as triggering a key. Action is triggered when pressed and cancelled when released.
    Single(Action),
    /// General tap/hold action: (tap_action, hold_action)
    TapHold(Action, Action),
    /// A function key `FNn`, resolved through the function table of the keymap.
    Function(u8),
}

impl KeyAction {
    /// Returns `true` if this position falls through to the lower layer
    pub fn is_transparent(&self) -> bool {
        matches!(self, KeyAction::Transparent)
    }

    /// Returns `true` if this position does nothing
    pub fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke, also used for mouse, media and system keys
    Key(KeyCode),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Momentary layer while held, toggles the layer after a number of taps
    LayerTapToggle(u8),
    /// Invoke the user macro with the given id, with tap information attached to the record.
    MacroTap(u8),
    /// Reboot into the bootloader
    Bootloader,
}
