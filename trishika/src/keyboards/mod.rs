//! Keyboards supported by this repository: layouts and keymaps
pub mod ergodox;
pub mod staryu;
