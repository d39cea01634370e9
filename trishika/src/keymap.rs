use trishika_types::action::{Action, KeyAction};

use crate::keyboard_macros::MacroId;

/// Keymap represents the layers of a keyboard together with its function table.
///
/// The keymap is read-only data flashed with the firmware. Resolving which layer is active, and
/// falling through transparent keys, is left to the layer stack of the host firmware.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Actions of the `FNn` keys, indexed by `n`
    functions: &'a [Option<Action>],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub const fn new(layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER], functions: &'a [Option<Action>]) -> Self {
        Self { layers, functions }
    }

    pub fn layers(&self) -> &'a [[[KeyAction; COL]; ROW]; NUM_LAYER] {
        self.layers
    }

    /// Action at the given matrix position, `KeyAction::No` if the position is out of range
    pub fn action_at(&self, layer: usize, row: usize, col: usize) -> KeyAction {
        self.layers
            .get(layer)
            .and_then(|l| l.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(KeyAction::No)
    }

    /// Action bound to the function key `FNn`
    pub fn function(&self, index: u8) -> Option<Action> {
        self.functions.get(index as usize).copied().flatten()
    }

    /// The macro triggered at the given position, if the key is a function key bound to a macro
    pub fn macro_at(&self, layer: usize, row: usize, col: usize) -> Option<MacroId> {
        match self.action_at(layer, row, col) {
            KeyAction::Function(n) => match self.function(n)? {
                Action::MacroTap(id) => Some(MacroId::from(id)),
                _ => None,
            },
            KeyAction::Single(Action::MacroTap(id)) => Some(MacroId::from(id)),
            _ => None,
        }
    }

    /// Find the first position of `action` in `layer`, as `(row, col)`
    pub fn position_of(&self, layer: usize, action: KeyAction) -> Option<(usize, usize)> {
        let layer = self.layers.get(layer)?;
        layer.iter().enumerate().find_map(|(row, keys)| {
            keys.iter().position(|a| *a == action).map(|col| (row, col))
        })
    }
}
