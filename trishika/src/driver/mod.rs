//! Drivers for the board peripherals used by the keymap
pub mod gpio;
