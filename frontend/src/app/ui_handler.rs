//! UI Command Handler
//!
//! Entry point for every UI action. Stage actions go through the session;
//! whatever the session asks of the outside world is executed by
//! `command_handler`.

use super::platform;
use super::state::App;
use crate::events::UiCommand;
use stage::{DisplaySettings, Notification, SessionCommand};
use std::time::Instant;

impl App {
    /// Dispatches UI commands to appropriate handlers
    pub(super) fn handle_ui_command(&mut self, ctx: &egui::Context, command: UiCommand, now: Instant) {
        if !matches!(command, UiCommand::PointerMoved) {
            self.logger
                .debug(&format!("[UI] Handling command: {:?}", command));
        }
        match command {
            UiCommand::Stage(action) => {
                if let Some(command) = self.session.dispatch(action) {
                    self.handle_session_command(command);
                }
            }
            UiCommand::PointerMoved => {
                self.visibility.on_pointer_move(now);
            }
            UiCommand::LeaveFullscreen => {
                if let Some(entry) = self.fullscreen_entry.take()
                    && platform::leave_fullscreen(ctx, entry)
                {
                    self.logger.debug(&format!("[UI] Left fullscreen via {}", entry));
                }
            }
            UiCommand::ToggleMicrophone => {
                self.handle_session_command(SessionCommand::ToggleMicrophone)
            }
            UiCommand::SaveSettings(settings) => self.handle_save_settings(settings),
            UiCommand::CloseSettings => self.settings_draft = None,
        }
    }

    fn handle_save_settings(&mut self, settings: DisplaySettings) {
        self.settings_draft = None;

        if settings.display_name != self.display_settings.display_name {
            self.handle_session_command(SessionCommand::UpdateDisplayName(
                settings.display_name.clone(),
            ));
        }
        self.handle_session_command(SessionCommand::SaveDisplaySettings(settings.clone()));

        self.display_settings = settings;
        self.show_notification(Notification::success("Settings saved"));
    }
}
