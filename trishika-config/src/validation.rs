//! Validation of a parsed keyboard configuration

use std::collections::HashSet;

use trishika_types::indicator::MAX_INDICATOR_ENTRIES;

use crate::error::{ConfigError, ConfigResult};
use crate::{CapsShiftToml, IndicatorToml, KeyboardTomlConfig};

/// Number of layers the layer state can hold
const MAX_LAYERS: u8 = 32;

/// Validates the entire keyboard configuration
pub fn validate_config(config: &KeyboardTomlConfig) -> ConfigResult<()> {
    validate_caps_shift_section(&config.caps_shift)?;
    validate_indicator_section(&config.indicator)?;
    Ok(())
}

/// Validates the [caps_shift] section
fn validate_caps_shift_section(caps_shift: &CapsShiftToml) -> ConfigResult<()> {
    if !caps_shift.shift.is_modifier() {
        return Err(ConfigError::InvalidValue {
            field: "caps_shift.shift".to_string(),
            value: format!("{:?}", caps_shift.shift),
            expected: "a modifier key".to_string(),
        });
    }
    if !caps_shift.lock.is_basic() {
        return Err(ConfigError::InvalidValue {
            field: "caps_shift.lock".to_string(),
            value: format!("{:?}", caps_shift.lock),
            expected: "a keyboard key which isn't a modifier".to_string(),
        });
    }
    Ok(())
}

/// Validates the [indicator] section
fn validate_indicator_section(indicator: &IndicatorToml) -> ConfigResult<()> {
    if indicator.layers.len() > MAX_INDICATOR_ENTRIES {
        return Err(ConfigError::InvalidValue {
            field: "indicator.layers".to_string(),
            value: format!("{} entries", indicator.layers.len()),
            expected: format!("at most {} entries", MAX_INDICATOR_ENTRIES),
        });
    }

    let mut seen = HashSet::new();
    for entry in &indicator.layers {
        if entry.layer >= MAX_LAYERS {
            return Err(ConfigError::InvalidValue {
                field: "indicator.layers.layer".to_string(),
                value: entry.layer.to_string(),
                expected: format!("0 to {}", MAX_LAYERS - 1),
            });
        }
        if !seen.insert(entry.layer) {
            return Err(ConfigError::Validation {
                field: "indicator.layers".to_string(),
                message: format!("layer {} is bound to more than one indicator", entry.layer),
            });
        }
    }
    Ok(())
}
