//! Raw egui input to UI commands.

use crate::events::UiCommand;
use stage::{Key, Modifiers, action_for};

/// Commands for this frame's pointer movement and key presses.
///
/// Key presses are skipped while a text field has keyboard focus so typing
/// a display name never triggers stage shortcuts.
pub(super) fn collect_commands(ctx: &egui::Context) -> Vec<UiCommand> {
    let typing = ctx.wants_keyboard_input();

    ctx.input(|i| {
        let mut commands = Vec::new();

        if i.pointer.is_moving() {
            commands.push(UiCommand::PointerMoved);
        }
        if typing {
            return commands;
        }

        for event in &i.events {
            let egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } = event
            else {
                continue;
            };

            if *key == egui::Key::Escape {
                commands.push(UiCommand::LeaveFullscreen);
                continue;
            }

            let modifiers_state = Modifiers {
                ctrl: modifiers.ctrl,
            };
            if let Some(action) =
                stage_key(*key, modifiers.shift).and_then(|k| action_for(k, modifiers_state))
            {
                commands.push(UiCommand::Stage(action));
            }
        }
        commands
    })
}

/// Stage key for an egui key. Letters keep their case, so shift+s is `S`.
fn stage_key(key: egui::Key, shift: bool) -> Option<Key> {
    match key {
        egui::Key::ArrowLeft => Some(Key::ArrowLeft),
        egui::Key::ArrowRight => Some(Key::ArrowRight),
        egui::Key::ArrowUp => Some(Key::ArrowUp),
        egui::Key::ArrowDown => Some(Key::ArrowDown),
        _ => {
            let mut chars = key.name().chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return None;
            };
            if !c.is_ascii_alphabetic() {
                return None;
            }
            let c = if shift {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            Some(Key::Char(c))
        }
    }
}
