//! Build-time configuration of the trishika keymap.
//!
//! A `keyboard.toml` overrides the keys of the caps-shift key and the layer indicator table:
//!
//! ```toml
//! [caps_shift]
//! shift = "LShift"
//! lock = "CapsLock"
//!
//! [indicator]
//! low_active = false
//! layers = [
//!     { layer = 1, indicator = "Right1" },
//!     { layer = 2, indicator = "Right2" },
//! ]
//! ```
//!
//! Missing sections fall back to the defaults compiled into the keymap.

use std::path::Path;

use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;
use trishika::config::{CapsShiftConfig, IndicatorConfig, TrishikaConfig};
use trishika_types::indicator::{Indicator, LayerIndicatorEntry, LayerIndicatorMap};
use trishika_types::keycode::KeyCode;

pub mod error;
pub mod validation;

pub use error::{ConfigError, ConfigResult};

/// Configurations for the keymap, as written in `keyboard.toml`
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyboardTomlConfig {
    #[serde(default)]
    pub caps_shift: CapsShiftToml,
    #[serde(default)]
    pub indicator: IndicatorToml,
}

/// The [caps_shift] section
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CapsShiftToml {
    #[serde_inline_default(KeyCode::LShift)]
    pub shift: KeyCode,
    #[serde_inline_default(KeyCode::CapsLock)]
    pub lock: KeyCode,
}

impl Default for CapsShiftToml {
    fn default() -> Self {
        Self {
            shift: KeyCode::LShift,
            lock: KeyCode::CapsLock,
        }
    }
}

/// The [indicator] section
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndicatorToml {
    #[serde_inline_default(false)]
    pub low_active: bool,
    #[serde(default = "default_layer_indicators")]
    pub layers: Vec<LayerIndicatorEntry>,
}

impl Default for IndicatorToml {
    fn default() -> Self {
        Self {
            low_active: false,
            layers: default_layer_indicators(),
        }
    }
}

fn default_layer_indicators() -> Vec<LayerIndicatorEntry> {
    LayerIndicatorMap::default().iter().copied().collect()
}

impl KeyboardTomlConfig {
    /// Parse and validate a config from a toml string. `origin` names the source in errors.
    pub fn from_toml_str(content: &str, origin: &str) -> ConfigResult<Self> {
        let config: KeyboardTomlConfig = toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            path: origin.to_string(),
            message: e.message().to_string(),
        })?;
        validation::validate_config(&config)?;
        Ok(config)
    }

    /// Load and validate the config at `path`
    pub fn new_from_toml_path<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Indicator table of the config
    pub fn layer_indicators(&self) -> ConfigResult<LayerIndicatorMap> {
        let mut map = LayerIndicatorMap::empty();
        for entry in &self.indicator.layers {
            map.insert(entry.layer, entry.indicator)
                .map_err(|rejected| ConfigError::InvalidValue {
                    field: "indicator.layers".to_string(),
                    value: format!("layer {}", rejected.layer),
                    expected: "fewer indicator entries".to_string(),
                })?;
        }
        Ok(map)
    }

    /// Indicator bound to `layer`, if any
    pub fn indicator_of(&self, layer: u8) -> Option<Indicator> {
        self.indicator.layers.iter().find(|e| e.layer == layer).map(|e| e.indicator)
    }

    /// Convert to the config struct used by the firmware
    pub fn to_trishika_config(&self) -> ConfigResult<TrishikaConfig> {
        Ok(TrishikaConfig {
            caps_shift: CapsShiftConfig {
                shift: self.caps_shift.shift,
                lock: self.caps_shift.lock,
            },
            indicator: IndicatorConfig {
                low_active: self.indicator.low_active,
                layers: self.layer_indicators()?,
            },
        })
    }
}
