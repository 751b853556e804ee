//! Placeholder Component
//!
//! Displays a box with a message where video is not available.

use egui::{Color32, FontId, RichText, Vec2};

/// Renders a placeholder box of `size` with a centered message
pub fn render_placeholder(ui: &mut egui::Ui, size: Vec2, text: &str) {
    egui::Frame::new()
        .fill(Color32::from_rgb(45, 55, 72))
        .corner_radius(8.0)
        .show(ui, |ui| {
            ui.set_min_size(size);
            ui.set_max_size(size);
            ui.vertical_centered(|ui| {
                ui.add_space((size.y / 2.0 - 12.0).max(0.0));
                ui.label(
                    RichText::new(text)
                        .font(FontId::proportional(if size.y > 200.0 { 20.0 } else { 13.0 }))
                        .color(Color32::GRAY),
                );
            });
        });
}
