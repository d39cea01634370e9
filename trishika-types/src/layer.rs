use serde::{Deserialize, Serialize};

/// Bit-packed layer state, as kept by the layer stack of the host firmware.
///
/// Bit `n` is set when layer `n` is active. Only read by this crate.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerState(u32);

impl LayerState {
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// State where only `layer` is active, empty when `layer` is out of the 32 layers
    pub const fn single(layer: u8) -> Self {
        Self::from_bits(0).with_layer(layer)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Activate `layer` as well. Layers beyond 31 leave the state unchanged.
    pub const fn with_layer(self, layer: u8) -> Self {
        if layer < 32 { Self(self.0 | 1 << layer) } else { self }
    }

    pub const fn is_active(&self, layer: u8) -> bool {
        layer < 32 && self.0 & (1 << layer) != 0
    }

    /// The topmost active layer: index of the highest bit set, `0` when no bit is set.
    pub const fn highest_layer(&self) -> u8 {
        if self.0 == 0 { 0 } else { 31 - self.0.leading_zeros() as u8 }
    }
}
