//! Keyboard-specific logic of the trishika keymap.
//!
//! The host firmware scans the matrix, debounces, resolves layers and sends HID reports. This crate
//! provides what's specific to the keymap:
//!
//! - [`caps_shift`]: the "Caps" key, shift on hold and caps lock on a second press
//! - [`layer_indicator`]: the LEDs showing the topmost active layer
//! - [`keyboard_macros`]: dispatch of macro ids to their handlers
//! - [`hooks`]: the callbacks the host calls on init, on every scan and on macro keys
//! - [`keyboards`]: keymaps and physical layouts
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod caps_shift;
pub mod config;
pub mod driver;
pub mod event;
pub mod hid;
pub mod hooks;
pub mod keyboard_macros;
pub mod keyboards;
pub mod keymap;
pub mod layer_indicator;
pub mod layout_macro;

pub use trishika_types as types;
