pub mod common;

use trishika::config::{CapsShiftConfig, IndicatorConfig, TrishikaConfig};
use trishika::event::KeyRecord;
use trishika::hid::{HidReportSink, KeyboardReport};
use trishika::hooks::{KeyboardHooks, TrishikaHooks};
use trishika::keyboard_macros::{MacroId, MacroResult};
use trishika::keyboards::ergodox::trishika::{keymap, ALT, BASE};
use trishika::types::indicator::{Indicator, IndicatorState, LayerIndicatorMap};
use trishika::types::keycode::KeyCode;
use trishika::types::layer::LayerState;

use crate::common::{RecordingSink, SinkEvent};

/// Feed a key event at `(row, col)` of the base layer to the hooks, the way the host does for macro keys
fn feed<S: trishika::hid::KeySink>(hooks: &mut TrishikaHooks, record: KeyRecord, sink: &mut S) -> MacroResult {
    let keymap = keymap();
    let row = record.event.row as usize;
    let col = record.event.col as usize;
    match keymap.macro_at(BASE as usize, row, col) {
        Some(id) => hooks.on_macro(id, &record, sink),
        None => MacroResult::NoOp,
    }
}

#[test]
fn test_caps_key_from_keymap() {
    let mut hooks = TrishikaHooks::default();
    hooks.on_init();
    let mut sink: HidReportSink<16> = HidReportSink::new();

    // Caps key sits at matrix (0, 3)
    assert_eq!(feed(&mut hooks, KeyRecord::press(0, 3), &mut sink), MacroResult::Consumed);
    assert_eq!(sink.current(), &KeyboardReport::new(0x02, [0; 6]));
    assert_eq!(feed(&mut hooks, KeyRecord::press(0, 3), &mut sink), MacroResult::Consumed);
    assert_eq!(feed(&mut hooks, KeyRecord::release(0, 3), &mut sink), MacroResult::Consumed);
    assert_eq!(feed(&mut hooks, KeyRecord::release(0, 3), &mut sink), MacroResult::Consumed);
    assert_eq!(hooks.caps_shift().count(), 0);
    assert_eq!(sink.sent().len(), 4);
    assert_eq!(sink.current(), &KeyboardReport::default());

    // A plain key isn't routed to the macro hook
    assert_eq!(feed(&mut hooks, KeyRecord::press(1, 1), &mut sink), MacroResult::NoOp);
    assert_eq!(sink.sent().len(), 4);
}

#[test]
fn test_scan_drives_indicators() {
    let mut hooks = TrishikaHooks::default();
    let mut leds = IndicatorState::new().with_board(true);

    hooks.on_scan(&LayerState::single(BASE), &mut leds);
    assert!(leds.is_dark());

    hooks.on_scan(&LayerState::single(BASE).with_layer(ALT), &mut leds);
    assert_eq!(leds, IndicatorState::only(Indicator::Right1));

    hooks.on_scan(&LayerState::single(BASE), &mut leds);
    assert!(leds.is_dark());
}

#[test]
fn test_hooks_from_config() {
    let mut layers = LayerIndicatorMap::empty();
    layers.insert(ALT, Indicator::Right3).unwrap();
    let config = TrishikaConfig {
        caps_shift: CapsShiftConfig {
            shift: KeyCode::RShift,
            lock: KeyCode::CapsLock,
        },
        indicator: IndicatorConfig {
            low_active: false,
            layers,
        },
    };
    let mut hooks = TrishikaHooks::new(config);

    let mut sink = RecordingSink::default();
    let press = KeyRecord::press(0, 3);
    hooks.on_macro(MacroId::CapsShift, &press, &mut sink);
    assert_eq!(sink.events, vec![SinkEvent::Register(KeyCode::RShift)]);
    assert_eq!(hooks.on_macro(MacroId::Unknown(21), &press, &mut sink), MacroResult::NoOp);
    assert_eq!(sink.events.len(), 1);

    let mut leds = IndicatorState::new();
    hooks.on_scan(&LayerState::single(ALT), &mut leds);
    assert_eq!(leds, IndicatorState::only(Indicator::Right3));
}
