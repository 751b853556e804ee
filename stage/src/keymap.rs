//! Key bindings.
//!
//! The bindings are fixed. Note that `h`/Left move to the *next* client and
//! `l`/Right to the *previous* one.

use crate::navigation::Action;

/// A key as the stage sees it, independent of the windowing toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { ctrl: false };
    pub const CTRL: Modifiers = Modifiers { ctrl: true };
}

/// Action bound to a key press, if any.
///
/// With ctrl held only `ctrl+s` is bound; every other ctrl chord is left to
/// the platform.
pub fn action_for(key: Key, modifiers: Modifiers) -> Option<Action> {
    if modifiers.ctrl {
        return match key {
            Key::Char('s') => Some(Action::OpenSettings),
            _ => None,
        };
    }

    let action = match key {
        Key::Char('s') => Action::TogglePresentation,
        Key::Char('f') => Action::RequestFullscreen,
        Key::Char('c') => Action::CopyLink,
        Key::Char('h') | Key::ArrowLeft => Action::CycleNext,
        Key::Char('l') | Key::ArrowRight => Action::CyclePrevious,
        Key::Char('m') => Action::ToggleMuteFocused,
        Key::ArrowUp => Action::VolumeUpFocused,
        Key::ArrowDown => Action::VolumeDownFocused,
        Key::Char(_) => return None,
    };
    Some(action)
}
