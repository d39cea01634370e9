use crate::caps_shift::CapsShift;
use crate::event::KeyRecord;
use crate::hid::KeySink;

/// Raw id of the caps-shift macro, referenced from the function table
pub const CAPS_SHIFT_MACRO_ID: u8 = 10;

/// Macros known by this keymap
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroId {
    /// Shift on hold, caps lock on second press
    CapsShift,
    /// Any id without a handler
    Unknown(u8),
}

impl From<u8> for MacroId {
    fn from(id: u8) -> Self {
        match id {
            CAPS_SHIFT_MACRO_ID => MacroId::CapsShift,
            _ => MacroId::Unknown(id),
        }
    }
}

impl From<MacroId> for u8 {
    fn from(id: MacroId) -> Self {
        match id {
            MacroId::CapsShift => CAPS_SHIFT_MACRO_ID,
            MacroId::Unknown(id) => id,
        }
    }
}

/// Outcome of a macro dispatch
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroResult {
    /// The macro was handled, its side effects went to the key sink
    Consumed,
    /// No handler for this id, nothing happened
    NoOp,
}

/// Dispatches macro invocations to their handlers, owning the handlers' state
#[derive(Debug, Default, Clone)]
pub struct MacroDispatcher {
    caps_shift: CapsShift,
}

impl MacroDispatcher {
    pub fn new(caps_shift: CapsShift) -> Self {
        Self { caps_shift }
    }

    pub fn caps_shift(&self) -> &CapsShift {
        &self.caps_shift
    }

    pub fn dispatch<S: KeySink>(&mut self, id: MacroId, record: &KeyRecord, sink: &mut S) -> MacroResult {
        match id {
            MacroId::CapsShift => {
                self.caps_shift.process(record, sink);
                MacroResult::Consumed
            }
            MacroId::Unknown(raw) => {
                trace!("No handler for macro {}", raw);
                MacroResult::NoOp
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_macro_id_from_raw() {
        assert_eq!(MacroId::from(10), MacroId::CapsShift);
        assert_eq!(MacroId::from(20), MacroId::Unknown(20));
        assert_eq!(u8::from(MacroId::CapsShift), 10);
        assert_eq!(u8::from(MacroId::Unknown(23)), 23);
    }
}
