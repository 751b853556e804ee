//! Stage Header Component
//!
//! Room name, participant count and the presenting badge.

use super::StageProps;
use egui::{Color32, FontId, RichText};

pub(super) fn render_header(ui: &mut egui::Ui, props: &StageProps<'_>) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.add_space(20.0);
        ui.label(
            RichText::new(format!("Room: {}", props.room_id))
                .font(FontId::proportional(24.0))
                .color(Color32::WHITE),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(20.0);
            let count = props.roster.users().len();
            let noun = if count == 1 { "participant" } else { "participants" };
            ui.label(
                RichText::new(format!("{} {}", count, noun))
                    .font(FontId::proportional(16.0))
                    .color(Color32::LIGHT_GRAY),
            );

            if props.presenting {
                ui.add_space(12.0);
                ui.label(
                    RichText::new("● Presenting")
                        .font(FontId::proportional(16.0))
                        .color(Color32::from_rgb(239, 68, 68)),
                );
            }
        });
    });
    ui.add_space(8.0);
}
