//! Feed Event Handler
//!
//! Processes events coming back from the roster feed thread.

use super::state::App;
use crate::events::FeedEvent;
use crate::models::StreamHandle;
use stage::{Notification, Roster};
use std::collections::HashSet;

impl App {
    /// Processes events from the roster feed thread
    pub(super) fn handle_feed_event(&mut self, ctx: &egui::Context, event: FeedEvent) {
        match event {
            FeedEvent::RosterChanged(roster) => self.handle_roster_changed(roster),
            FeedEvent::Frame {
                handle,
                image,
                level,
            } => self.handle_frame(ctx, handle, image, level),
            FeedEvent::MicrophoneChanged(on) => {
                self.microphone_on = on;
                let state = if on { "on" } else { "off" };
                self.show_notification(Notification::info(format!("Microphone {}", state)));
            }
            FeedEvent::Error(message) => {
                self.logger.error(&format!("[FEED] {}", message));
                self.show_notification(Notification::error(message));
            }
        }
    }

    fn handle_roster_changed(&mut self, roster: Roster<StreamHandle>) {
        let live: HashSet<StreamHandle> = roster.entries().map(|entry| entry.handle).collect();
        // Textures belong to stream instances; drop the ones that left.
        self.textures.retain(|handle, _| live.contains(handle));
        self.levels.retain(|handle, _| live.contains(handle));

        self.logger.debug(&format!(
            "[FEED] Roster: host={} clients={}",
            roster.has_host(),
            roster.clients().len()
        ));
        self.session.apply_roster(roster);
    }

    fn handle_frame(
        &mut self,
        ctx: &egui::Context,
        handle: StreamHandle,
        image: egui::ColorImage,
        level: f32,
    ) {
        // Late frame from a stream that already left
        if !self.session.roster().entries().any(|e| e.handle == handle) {
            return;
        }

        match self.textures.get_mut(&handle) {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                let texture = ctx.load_texture(handle.texture_name(), image, egui::TextureOptions::LINEAR);
                self.textures.insert(handle, texture);
            }
        }
        self.levels.insert(handle, level);
    }
}
