//! Stage Page
//!
//! One focused stream large in the middle, the other streams as a
//! thumbnail strip, and floating controls that hide when the pointer rests.
//! Rendering is a pure function of [`StageProps`]; interaction comes back
//! as at most one [`UiCommand`] per frame.

mod control_bar;
mod header;
mod main_view;
mod settings_dialog;
mod thumbnails;

pub use settings_dialog::render_settings_dialog;

use crate::events::UiCommand;
use crate::models::{StreamHandle, Surface};
use egui::TextureHandle;
use stage::{Roster, RosterEntry, StageView};
use std::collections::HashMap;

/// Everything the stage page reads for one frame
pub struct StageProps<'a> {
    pub room_id: &'a str,
    pub view: &'a StageView<StreamHandle>,
    pub roster: &'a Roster<StreamHandle>,
    pub textures: &'a HashMap<StreamHandle, TextureHandle>,
    pub levels: &'a HashMap<StreamHandle, f32>,
    pub surface: Surface,
    pub controls_visible: bool,
    pub show_thumbnails: bool,
    pub presenting: bool,
}

impl StageProps<'_> {
    /// Label under a stream: the owner's display name, marked for our own stream
    fn label_for(&self, entry: &RosterEntry<StreamHandle>) -> String {
        let name = self
            .roster
            .display_name_for(entry)
            .map_or_else(|| entry.identity.to_string(), str::to_string);
        if entry.identity.is_local() {
            format!("{} (you)", name)
        } else {
            name
        }
    }
}

pub struct StageOutput {
    pub command: Option<UiCommand>,
    /// The pointer is over the floating controls
    pub controls_hovered: bool,
}

pub struct Stage;

impl Stage {
    pub fn show(ctx: &egui::Context, props: &StageProps<'_>) -> StageOutput {
        let mut command = None;

        egui::TopBottomPanel::top("stage_header").show(ctx, |ui| {
            header::render_header(ui, props);
        });

        if props.show_thumbnails && !props.view.thumbnails.is_empty() {
            egui::SidePanel::right("stage_thumbnails")
                .resizable(false)
                .exact_width(thumbnails::STRIP_WIDTH)
                .show(ctx, |ui| {
                    command = thumbnails::render_thumbnails(ui, props);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            main_view::render_main_view(ui, props);
        });

        let mut controls_hovered = false;
        if props.controls_visible {
            let (bar_command, hovered) = control_bar::render_control_bar(ctx, props);
            command = bar_command.or(command);
            controls_hovered = hovered;
        }

        StageOutput {
            command,
            controls_hovered,
        }
    }
}
