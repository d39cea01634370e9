use trishika::hid::KeySink;
use trishika::layer_indicator::IndicatorOutput;
use trishika::types::indicator::Indicator;
use trishika::types::keycode::KeyCode;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// A side effect seen by a key sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkEvent {
    Register(KeyCode),
    Unregister(KeyCode),
    Pulse(KeyCode),
}

/// Key sink which records every call, pulses included as a single event
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn count(&self, event: SinkEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }
}

impl KeySink for RecordingSink {
    fn register(&mut self, key: KeyCode) {
        self.events.push(SinkEvent::Register(key));
    }

    fn unregister(&mut self, key: KeyCode) {
        self.events.push(SinkEvent::Unregister(key));
    }

    fn pulse(&mut self, key: KeyCode) {
        self.events.push(SinkEvent::Pulse(key));
    }
}

/// Indicator output which records every write
#[derive(Debug, Default)]
pub struct RecordingIndicators {
    pub writes: Vec<(Indicator, bool)>,
}

impl RecordingIndicators {
    /// Final level of every indicator, `false` if never written
    pub fn levels(&self) -> [bool; 4] {
        let mut levels = [false; 4];
        for (indicator, on) in &self.writes {
            levels[indicator.index()] = *on;
        }
        levels
    }
}

impl IndicatorOutput for RecordingIndicators {
    fn set_indicator(&mut self, indicator: Indicator, on: bool) {
        self.writes.push((indicator, on));
    }
}
