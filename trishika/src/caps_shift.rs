//! The "Caps" dual-role key.
//!
//! Pressing it holds shift. Pressing it a second time while still held sends a caps lock tap,
//! the shift stays held until every press has been released.
use trishika_types::keycode::KeyCode;

use crate::event::KeyRecord;
use crate::hid::KeySink;

/// Level reached by the caps-shift counter
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CapsShiftLevel {
    Idle,
    ShiftHeld,
    LockAsserted,
}

/// State of the caps-shift key.
///
/// Owned by the single dispatch context of the firmware and passed around by `&mut`,
/// so it's never shared between execution contexts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapsShift {
    /// Unreleased presses, in `0..=MAX_COUNT`
    count: u8,
    shift: KeyCode,
    lock: KeyCode,
}

impl Default for CapsShift {
    fn default() -> Self {
        Self::new()
    }
}

impl CapsShift {
    pub const MAX_COUNT: u8 = 2;

    /// Caps-shift key holding left shift and tapping caps lock
    pub const fn new() -> Self {
        Self::with_keys(KeyCode::LShift, KeyCode::CapsLock)
    }

    pub const fn with_keys(shift: KeyCode, lock: KeyCode) -> Self {
        Self { count: 0, shift, lock }
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn level(&self) -> CapsShiftLevel {
        match self.count {
            0 => CapsShiftLevel::Idle,
            1 => CapsShiftLevel::ShiftHeld,
            _ => CapsShiftLevel::LockAsserted,
        }
    }

    pub fn shift_key(&self) -> KeyCode {
        self.shift
    }

    pub fn lock_key(&self) -> KeyCode {
        self.lock
    }

    /// Feed a record of the caps-shift key.
    ///
    /// Only a plain press counts up. A release, or a press the host already resolved as a tap,
    /// counts down.
    pub fn process<S: KeySink>(&mut self, record: &KeyRecord, sink: &mut S) {
        if record.is_plain_press() {
            self.press(sink);
        } else {
            self.release(sink);
        }
    }

    fn press<S: KeySink>(&mut self, sink: &mut S) {
        self.count = (self.count + 1).min(Self::MAX_COUNT);
        match self.count {
            1 => {
                debug!("Caps-shift: hold {:?}", self.shift);
                sink.register(self.shift);
            }
            Self::MAX_COUNT => {
                debug!("Caps-shift: tap {:?}", self.lock);
                sink.pulse(self.lock);
            }
            _ => (),
        }
    }

    fn release<S: KeySink>(&mut self, sink: &mut S) {
        if self.count == 0 {
            trace!("Caps-shift: release without press");
            return;
        }
        self.count -= 1;
        if self.count == 0 {
            debug!("Caps-shift: release {:?}", self.shift);
            sink.unregister(self.shift);
        }
    }
}
