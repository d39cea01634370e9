use bitfield_struct::bitfield;
use heapless::Vec;
use serde::{Deserialize, Serialize};

/// Max number of layer -> indicator entries a keymap can define
pub const MAX_INDICATOR_ENTRIES: usize = 8;

/// Status LEDs of the keyboard.
///
/// The ErgoDox has one LED on the left board (the teensy LED) and three on the right half.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    Board,
    Right1,
    Right2,
    Right3,
}

impl Indicator {
    /// All indicators, in the order they're cleared on every scan
    pub const ALL: [Indicator; 4] = [Indicator::Board, Indicator::Right1, Indicator::Right2, Indicator::Right3];

    /// Position of the indicator, used to index pin arrays
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Levels of all indicators at once
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq, Serialize, Deserialize)]
pub struct IndicatorState {
    #[bits(1)]
    pub board: bool,
    #[bits(1)]
    pub right_1: bool,
    #[bits(1)]
    pub right_2: bool,
    #[bits(1)]
    pub right_3: bool,
    #[bits(4)]
    _reserved: u8,
}

impl IndicatorState {
    /// State with exactly one indicator on
    pub fn only(indicator: Indicator) -> Self {
        let mut state = Self::new();
        state.set_indicator(indicator, true);
        state
    }

    pub fn is_on(&self, indicator: Indicator) -> bool {
        match indicator {
            Indicator::Board => self.board(),
            Indicator::Right1 => self.right_1(),
            Indicator::Right2 => self.right_2(),
            Indicator::Right3 => self.right_3(),
        }
    }

    pub fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        match indicator {
            Indicator::Board => self.set_board(on),
            Indicator::Right1 => self.set_right_1(on),
            Indicator::Right2 => self.set_right_2(on),
            Indicator::Right3 => self.set_right_3(on),
        }
    }

    /// Returns `true` if every indicator is off
    pub fn is_dark(&self) -> bool {
        self.into_bits() == 0
    }
}

/// Maps a layer to the indicator which is lit while that layer is the highest active one
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerIndicatorEntry {
    pub layer: u8,
    pub indicator: Indicator,
}

/// Ordered layer -> indicator table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerIndicatorMap {
    entries: Vec<LayerIndicatorEntry, MAX_INDICATOR_ENTRIES>,
}

impl Default for LayerIndicatorMap {
    /// Layer 1 lights the first right LED, layer 2 the second one
    fn default() -> Self {
        let mut map = Self::empty();
        map.insert(1, Indicator::Right1).ok();
        map.insert(2, Indicator::Right2).ok();
        map
    }
}

impl LayerIndicatorMap {
    /// A map without any entry, every layer keeps the indicators dark
    pub const fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Bind `layer` to `indicator`, replacing a previous binding of the same layer.
    ///
    /// Returns the rejected entry when the map is full.
    pub fn insert(&mut self, layer: u8, indicator: Indicator) -> Result<(), LayerIndicatorEntry> {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.layer == layer) {
            entry.indicator = indicator;
            return Ok(());
        }
        self.entries.push(LayerIndicatorEntry { layer, indicator })
    }

    pub fn get(&self, layer: u8) -> Option<Indicator> {
        self.entries.iter().find(|e| e.layer == layer).map(|e| e.indicator)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayerIndicatorEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_map() {
        let map = LayerIndicatorMap::default();
        assert_eq!(map.get(0), None);
        assert_eq!(map.get(1), Some(Indicator::Right1));
        assert_eq!(map.get(2), Some(Indicator::Right2));
        assert_eq!(map.get(3), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_insert_replaces_layer() {
        let mut map = LayerIndicatorMap::default();
        map.insert(1, Indicator::Right3).unwrap();
        assert_eq!(map.get(1), Some(Indicator::Right3));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_insert_full() {
        let mut map = LayerIndicatorMap::empty();
        for layer in 0..MAX_INDICATOR_ENTRIES as u8 {
            map.insert(layer, Indicator::Board).unwrap();
        }
        let rejected = map.insert(20, Indicator::Right1).unwrap_err();
        assert_eq!(rejected.layer, 20);
        // Rebinding an existing layer still works on a full map
        assert!(map.insert(0, Indicator::Right2).is_ok());
    }

    #[test]
    fn test_indicator_state() {
        let state = IndicatorState::only(Indicator::Right2);
        assert!(state.is_on(Indicator::Right2));
        assert!(!state.is_on(Indicator::Right1));
        assert!(!state.is_dark());
        assert!(IndicatorState::new().is_dark());
    }
}
