//! Layer indicator: lights one LED per layer of interest, recomputed on every scan tick.
use trishika_types::indicator::{Indicator, IndicatorState, LayerIndicatorMap};
use trishika_types::layer::LayerState;

/// Source of the current layer state, implemented by the layer stack of the host firmware
pub trait LayerStateProvider {
    fn layer_state(&self) -> LayerState;
}

impl LayerStateProvider for LayerState {
    fn layer_state(&self) -> LayerState {
        *self
    }
}

/// Sink of indicator levels
pub trait IndicatorOutput {
    fn set_indicator(&mut self, indicator: Indicator, on: bool);
}

impl IndicatorOutput for IndicatorState {
    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        IndicatorState::set_indicator(self, indicator, on)
    }
}

pub struct LayerIndicator {
    map: LayerIndicatorMap,
}

impl Default for LayerIndicator {
    fn default() -> Self {
        Self::new(LayerIndicatorMap::default())
    }
}

impl LayerIndicator {
    pub fn new(map: LayerIndicatorMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &LayerIndicatorMap {
        &self.map
    }

    /// Indicator levels for `layer` being the topmost active layer
    pub fn indicators_for(&self, layer: u8) -> IndicatorState {
        match self.map.get(layer) {
            Some(indicator) => IndicatorState::only(indicator),
            None => IndicatorState::new(),
        }
    }

    /// Run one scan tick: clear every indicator, then light the one mapped to the topmost layer.
    ///
    /// Returns the indicator that was turned on, if the layer is mapped.
    pub fn tick<P, O>(&self, provider: &P, output: &mut O) -> Option<Indicator>
    where
        P: LayerStateProvider + ?Sized,
        O: IndicatorOutput + ?Sized,
    {
        let layer = provider.layer_state().highest_layer();
        for indicator in Indicator::ALL {
            output.set_indicator(indicator, false);
        }
        let lit = self.map.get(layer);
        if let Some(indicator) = lit {
            output.set_indicator(indicator, true);
        }
        lit
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_indicators_for_layer() {
        let indicator = LayerIndicator::default();
        assert!(indicator.indicators_for(0).is_dark());
        assert_eq!(indicator.indicators_for(1), IndicatorState::only(Indicator::Right1));
        assert_eq!(indicator.indicators_for(2), IndicatorState::only(Indicator::Right2));
        assert!(indicator.indicators_for(7).is_dark());
    }

    #[test]
    fn test_tick_clears_previous_state() {
        let indicator = LayerIndicator::default();
        let mut state = IndicatorState::new().with_board(true).with_right_3(true);
        assert_eq!(indicator.tick(&LayerState::single(1), &mut state), Some(Indicator::Right1));
        assert_eq!(state, IndicatorState::only(Indicator::Right1));

        assert_eq!(indicator.tick(&LayerState::single(5), &mut state), None);
        assert!(state.is_dark());
    }

    #[test]
    fn test_highest_layer_wins() {
        let indicator = LayerIndicator::default();
        let mut state = IndicatorState::new();
        indicator.tick(&LayerState::single(1).with_layer(2), &mut state);
        assert_eq!(state, IndicatorState::only(Indicator::Right2));
    }
}
