//! Key event sink: the "register / unregister key" side of the host firmware.
use heapless::Vec;
use trishika_types::keycode::KeyCode;
use usbd_hid::descriptor::generator_prelude::*;

/// Receiver of key code assertions.
///
/// The host firmware implements it by adding and removing codes from the next HID report.
pub trait KeySink {
    /// Assert `key` in the output report until it's unregistered
    fn register(&mut self, key: KeyCode);

    /// Deassert `key`
    fn unregister(&mut self, key: KeyCode);

    /// Register then immediately unregister `key`, a single tap seen by the host
    fn pulse(&mut self, key: KeyCode) {
        self.register(key);
        self.unregister(key);
    }
}

impl<S: KeySink + ?Sized> KeySink for &mut S {
    fn register(&mut self, key: KeyCode) {
        (**self).register(key)
    }

    fn unregister(&mut self, key: KeyCode) {
        (**self).unregister(key)
    }

    fn pulse(&mut self, key: KeyCode) {
        (**self).pulse(key)
    }
}

/// KeyboardReport describes a report and its companion descriptor that can be
/// used to send keyboard button presses to a host and receive the status of the
/// keyboard LEDs.
#[gen_hid_descriptor(
    (collection = APPLICATION, usage_page = GENERIC_DESKTOP, usage = KEYBOARD) = {
        (usage_page = KEYBOARD, usage_min = 0xE0, usage_max = 0xE7) = {
            #[packed_bits = 8] #[item_settings(data,variable,absolute)] modifier=input;
        };
        (logical_min = 0,) = {
            #[item_settings(constant,variable,absolute)] reserved=input;
        };
        (usage_page = LEDS, usage_min = 0x01, usage_max = 0x05) = {
            #[packed_bits = 5] #[item_settings(data,variable,absolute)] leds=output;
        };
        (usage_page = KEYBOARD, usage_min = 0x00, usage_max = 0xDD) = {
            #[item_settings(data,array,absolute)] keycodes=input;
        };
    }
)]
#[allow(dead_code)]
#[derive(Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    pub modifier: u8,
    pub reserved: u8,
    pub leds: u8,
    pub keycodes: [u8; 6],
}

impl KeyboardReport {
    pub const fn new(modifier: u8, keycodes: [u8; 6]) -> Self {
        Self {
            modifier,
            reserved: 0,
            leds: 0,
            keycodes,
        }
    }
}

/// A [`KeySink`] which builds boot keyboard reports.
///
/// Every change of the report is recorded, up to `N` reports, in the order the host would send them.
/// Keys outside the boot keyboard page (media, mouse, system) are ignored.
pub struct HidReportSink<const N: usize = 16> {
    report: KeyboardReport,
    sent: Vec<KeyboardReport, N>,
}

impl<const N: usize> Default for HidReportSink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> HidReportSink<N> {
    pub const fn new() -> Self {
        Self {
            report: KeyboardReport::new(0, [0; 6]),
            sent: Vec::new(),
        }
    }

    /// The report that reflects the currently registered keys
    pub fn current(&self) -> &KeyboardReport {
        &self.report
    }

    /// All reports produced so far
    pub fn sent(&self) -> &[KeyboardReport] {
        &self.sent
    }

    /// Forget the recorded reports, keeping the current key state
    pub fn clear_sent(&mut self) {
        self.sent.clear();
    }

    /// Log a key that has no place in a boot keyboard report
    fn skip(key: KeyCode) {
        if key.is_consumer() || key.is_system() {
            debug!("{:?} belongs to the media report, skipped", key);
        } else if key.is_mouse_key() {
            debug!("{:?} belongs to the mouse report, skipped", key);
        } else {
            warn!("{:?} is not a boot keyboard key", key);
        }
    }

    fn send(&mut self) {
        if self.sent.push(self.report).is_err() {
            warn!("Report buffer is full, dropping report {:?}", self.report);
        }
    }
}

impl<const N: usize> KeySink for HidReportSink<N> {
    fn register(&mut self, key: KeyCode) {
        if key.is_modifier() {
            let bit = key.to_hid_modifier_bit();
            if self.report.modifier & bit != 0 {
                return;
            }
            self.report.modifier |= bit;
        } else if key.is_basic() {
            let code = key as u8;
            if self.report.keycodes.contains(&code) {
                return;
            }
            match self.report.keycodes.iter_mut().find(|k| **k == 0) {
                Some(slot) => *slot = code,
                None => {
                    warn!("Report is full, {:?} is not registered", key);
                    return;
                }
            }
        } else {
            Self::skip(key);
            return;
        }
        self.send();
    }

    fn unregister(&mut self, key: KeyCode) {
        if key.is_modifier() {
            let bit = key.to_hid_modifier_bit();
            if self.report.modifier & bit == 0 {
                return;
            }
            self.report.modifier &= !bit;
        } else if key.is_basic() {
            let code = key as u8;
            match self.report.keycodes.iter_mut().find(|k| **k == code) {
                Some(slot) => *slot = 0,
                None => return,
            }
        } else {
            return;
        }
        self.send();
    }
}
