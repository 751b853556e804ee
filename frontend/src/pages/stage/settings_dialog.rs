//! Settings Dialog
//!
//! Edits a draft of the display settings; nothing is applied until Save.
//! Clicking outside the dialog discards the draft.

use crate::components::{ButtonVariant, Dialog, action_button};
use crate::events::UiCommand;
use egui::{Color32, FontId, RichText};
use stage::DisplaySettings;

pub fn render_settings_dialog(
    ctx: &egui::Context,
    draft: &mut DisplaySettings,
    microphone_on: bool,
) -> Option<UiCommand> {
    let response = Dialog::new("Settings")
        .width(360.0)
        .height(260.0)
        .show(ctx, |ui| {
            let mut command = None;

            ui.label(
                RichText::new("Settings")
                    .font(FontId::proportional(22.0))
                    .color(Color32::WHITE),
            );
            ui.add_space(16.0);

            ui.label(RichText::new("Display name").color(Color32::LIGHT_GRAY));
            ui.add(egui::TextEdit::singleline(&mut draft.display_name).desired_width(f32::INFINITY));
            ui.add_space(10.0);

            ui.checkbox(&mut draft.show_thumbnails, "Show thumbnails");
            ui.add_space(10.0);

            let mic_label = if microphone_on {
                "🎤 Turn off microphone"
            } else {
                "🎤 Turn on microphone"
            };
            if ui.button(mic_label).clicked() {
                command = Some(UiCommand::ToggleMicrophone);
            }
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                let valid = !draft.display_name.trim().is_empty();
                let save = ui
                    .add_enabled_ui(valid, |ui| {
                        action_button(ui, "Save", ButtonVariant::Primary.color(), 150.0)
                    })
                    .inner;
                if save.clicked() {
                    let mut settings = draft.clone();
                    settings.display_name = settings.display_name.trim().to_string();
                    command = Some(UiCommand::SaveSettings(settings));
                }
                if action_button(ui, "Cancel", ButtonVariant::Secondary.color(), 150.0).clicked() {
                    command = Some(UiCommand::CloseSettings);
                }
            });

            command
        });

    if response.dismissed {
        return Some(UiCommand::CloseSettings);
    }
    response.inner.flatten()
}
