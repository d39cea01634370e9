/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::A))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key($crate::types::keycode::KeyCode::$k))
    };
}

/// Create a normal action: `KeyAction`, such as `a!(No)` or `a!(Transparent)`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::types::action::KeyAction::$a
    };
}

/// Create a normal key with modifier action
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::KeyWithModifier(
            $crate::types::keycode::KeyCode::$x,
            $m,
        ))
    };
}

/// Create a key with left control held
#[macro_export]
macro_rules! lctl {
    ($x: ident) => {
        $crate::wm!($x, $crate::types::modifier::ModifierCombination::LCTRL)
    };
}

/// Create a key with left shift held
#[macro_export]
macro_rules! lsft {
    ($x: ident) => {
        $crate::wm!($x, $crate::types::modifier::ModifierCombination::LSHIFT)
    };
}

/// Create a tap-hold action, tapping `$t` and holding `$h`
#[macro_export]
macro_rules! th {
    ($t: ident, $h: ident) => {
        $crate::types::action::KeyAction::TapHold(
            $crate::types::action::Action::Key($crate::types::keycode::KeyCode::$t),
            $crate::types::action::Action::Key($crate::types::keycode::KeyCode::$h),
        )
    };
}

/// Create a function key `FNn`, which triggers the n-th entry of the function table
#[macro_export]
macro_rules! fnk {
    ($n: expr) => {
        $crate::types::action::KeyAction::Function($n)
    };
}

/// Create a reboot-into-bootloader key
#[macro_export]
macro_rules! boot {
    () => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Bootloader)
    };
}
