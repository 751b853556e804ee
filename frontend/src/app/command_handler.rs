//! Executes the requests a session makes of its collaborators.

use super::state::App;
use crate::events::FeedCommand;
use stage::{SessionCommand, copy_link, request_fullscreen};

impl App {
    pub(super) fn handle_session_command(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::StartPresenting => self.send_feed(FeedCommand::StartPresenting),
            SessionCommand::StopPresenting => self.send_feed(FeedCommand::StopPresenting),
            SessionCommand::ToggleMicrophone => self.send_feed(FeedCommand::ToggleMicrophone),
            SessionCommand::UpdateDisplayName(name) => {
                self.send_feed(FeedCommand::UpdateDisplayName(name))
            }
            SessionCommand::SaveDisplaySettings(settings) => {
                self.send_feed(FeedCommand::SaveDisplaySettings(settings))
            }
            SessionCommand::RequestFullscreen(target) => {
                match request_fullscreen(&mut self.fullscreen, Some(&target)) {
                    Some(entry) => {
                        self.fullscreen_entry = Some(entry);
                        self.logger
                            .debug(&format!("[UI] Fullscreen for {} via {}", target, entry));
                    }
                    None => self.logger.debug("[UI] Fullscreen is not supported here"),
                }
            }
            SessionCommand::CopyLink => {
                let link = self.config.invite_link();
                let notification = copy_link(&mut self.clipboard, &link, &self.logger);
                self.show_notification(notification);
            }
            SessionCommand::OpenSettings => {
                if self.settings_draft.is_none() {
                    self.settings_draft = Some(self.display_settings.clone());
                }
            }
        }
    }

    fn send_feed(&self, command: FeedCommand) {
        if let Err(e) = self.feed_cmd_tx.send(command) {
            self.logger
                .error(&format!("[APP] Roster feed is gone, dropped {:?}", e.0));
        }
    }
}
