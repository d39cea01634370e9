use serde::{Deserialize, Serialize};

/// Raw key event from the matrix scanner of the host firmware
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

/// A key event together with the tap state the host computed for it.
///
/// `tap_count` is non-zero when the host recognised the event as part of a tap sequence.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyRecord {
    pub event: KeyEvent,
    pub tap_count: u8,
}

impl KeyRecord {
    pub const fn new(event: KeyEvent, tap_count: u8) -> Self {
        Self { event, tap_count }
    }

    /// A press at `(row, col)` without tap information
    pub const fn press(row: u8, col: u8) -> Self {
        Self::new(KeyEvent { row, col, pressed: true }, 0)
    }

    /// A release at `(row, col)` without tap information
    pub const fn release(row: u8, col: u8) -> Self {
        Self::new(KeyEvent { row, col, pressed: false }, 0)
    }

    pub const fn with_tap_count(mut self, tap_count: u8) -> Self {
        self.tap_count = tap_count;
        self
    }

    pub const fn pressed(&self) -> bool {
        self.event.pressed
    }

    /// Returns `true` for a press the host hasn't qualified as a tap
    pub const fn is_plain_press(&self) -> bool {
        self.pressed() && self.tap_count == 0
    }
}
