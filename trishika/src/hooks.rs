//! User callbacks invoked by the host firmware.
use crate::caps_shift::CapsShift;
use crate::config::TrishikaConfig;
use crate::event::KeyRecord;
use crate::hid::KeySink;
use crate::keyboard_macros::{MacroDispatcher, MacroId, MacroResult};
use crate::layer_indicator::{IndicatorOutput, LayerIndicator, LayerStateProvider};

/// Callbacks the host firmware runs from its single scan loop.
///
/// All of them run to completion before the host continues.
pub trait KeyboardHooks {
    /// Runs once when the keyboard initializes
    fn on_init(&mut self) {}

    /// Runs on every matrix scan
    fn on_scan<P, O>(&mut self, _layers: &P, _indicators: &mut O)
    where
        P: LayerStateProvider + ?Sized,
        O: IndicatorOutput + ?Sized,
    {
    }

    /// Runs when a key bound to a macro is pressed or released
    fn on_macro<S: KeySink>(&mut self, _id: MacroId, _record: &KeyRecord, _sink: &mut S) -> MacroResult {
        MacroResult::NoOp
    }
}

/// Hooks of the trishika keymap: the caps-shift macro and the layer indicator LEDs
#[derive(Default)]
pub struct TrishikaHooks {
    macros: MacroDispatcher,
    layer_indicator: LayerIndicator,
}

impl TrishikaHooks {
    pub fn new(config: TrishikaConfig) -> Self {
        Self {
            macros: MacroDispatcher::new(CapsShift::with_keys(config.caps_shift.shift, config.caps_shift.lock)),
            layer_indicator: LayerIndicator::new(config.indicator.layers),
        }
    }

    pub fn caps_shift(&self) -> &CapsShift {
        self.macros.caps_shift()
    }

    pub fn layer_indicator(&self) -> &LayerIndicator {
        &self.layer_indicator
    }
}

impl KeyboardHooks for TrishikaHooks {
    fn on_init(&mut self) {
        info!(
            "Trishika keymap ready, {} layer indicator(s)",
            self.layer_indicator.map().len()
        );
    }

    fn on_scan<P, O>(&mut self, layers: &P, indicators: &mut O)
    where
        P: LayerStateProvider + ?Sized,
        O: IndicatorOutput + ?Sized,
    {
        self.layer_indicator.tick(layers, indicators);
    }

    fn on_macro<S: KeySink>(&mut self, id: MacroId, record: &KeyRecord, sink: &mut S) -> MacroResult {
        self.macros.dispatch(id, record, sink)
    }
}
