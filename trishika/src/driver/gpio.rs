use embedded_hal::digital::OutputPin;
use trishika_types::indicator::Indicator;

use crate::config::IndicatorConfig;
use crate::layer_indicator::IndicatorOutput;

/// The gpio driver is a wrapper for the embedded-hal digital output pin trait.
/// It wraps the low-active and high-active pins, and provides a way to set the pin state
pub struct OutputController<P: OutputPin> {
    pin: P,
    low_active: bool,
}

impl<P: OutputPin> OutputController<P> {
    pub fn new(pin: P, low_active: bool) -> Self {
        Self { pin, low_active }
    }

    /// Activate the GPIO pin
    pub fn activate(&mut self) {
        if self.low_active {
            self.pin.set_low().ok();
        } else {
            self.pin.set_high().ok();
        }
    }

    /// Deactivate the GPIO pin
    pub fn deactivate(&mut self) {
        if self.low_active {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
    }

    pub fn set_active(&mut self, active: bool) {
        if active { self.activate() } else { self.deactivate() }
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}

/// Indicator LEDs wired to GPIO pins, indexed like [`Indicator::ALL`]
pub struct GpioIndicators<P: OutputPin> {
    pins: [OutputController<P>; 4],
}

impl<P: OutputPin> GpioIndicators<P> {
    /// Create the indicators from the board, right 1, right 2 and right 3 LED pins
    pub fn new(pins: [P; 4], low_active: bool) -> Self {
        Self {
            pins: pins.map(|pin| OutputController::new(pin, low_active)),
        }
    }

    pub fn with_config(pins: [P; 4], config: &IndicatorConfig) -> Self {
        Self::new(pins, config.low_active)
    }

    pub fn release(self) -> [P; 4] {
        self.pins.map(OutputController::release)
    }
}

impl<P: OutputPin> IndicatorOutput for GpioIndicators<P> {
    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        self.pins[indicator.index()].set_active(on);
    }
}
