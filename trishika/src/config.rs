use trishika_types::indicator::LayerIndicatorMap;
use trishika_types::keycode::KeyCode;

/// The config struct of the keymap.
///
/// The defaults match the compiled-in behaviour of the trishika keymap. A `keyboard.toml` parsed by
/// `trishika-config` produces the same struct.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrishikaConfig {
    pub caps_shift: CapsShiftConfig,
    pub indicator: IndicatorConfig,
}

/// Keys driven by the caps-shift key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapsShiftConfig {
    /// Held while the caps-shift key is down
    pub shift: KeyCode,
    /// Tapped on the second press
    pub lock: KeyCode,
}

impl Default for CapsShiftConfig {
    fn default() -> Self {
        Self {
            shift: KeyCode::LShift,
            lock: KeyCode::CapsLock,
        }
    }
}

/// Layer indicator LEDs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndicatorConfig {
    /// Whether the LED pins are driven low to light the LEDs
    pub low_active: bool,
    pub layers: LayerIndicatorMap,
}
