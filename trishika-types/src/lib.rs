//! # Trishika Types
//!
//! Type definitions shared by the trishika firmware crate and its build-time config crate.
//!
//! - [`action`] - Key actions stored in keymaps
//! - [`keycode`] - Key codes, numbered after the HID usage tables
//! - [`modifier`] - Modifier key combinations
//! - [`indicator`] - Status LEDs and the layer -> LED table
//! - [`layer`] - The bit-packed layer state read from the host layer stack

#![cfg_attr(not(test), no_std)]

pub mod action;
pub mod indicator;
pub mod keycode;
pub mod layer;
pub mod modifier;
