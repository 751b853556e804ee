//! Thumbnail Strip Component
//!
//! Every stream except the focused one, host first, then clients in roster
//! order. Clicking a thumbnail puts it on stage.

use super::StageProps;
use crate::components::render_placeholder;
use crate::events::UiCommand;
use egui::{Color32, FontId, RichText, Sense, Vec2};
use stage::Action;

const THUMBNAIL_SIZE: Vec2 = Vec2::new(192.0, 108.0);
pub(super) const STRIP_WIDTH: f32 = THUMBNAIL_SIZE.x + 32.0;

pub(super) fn render_thumbnails(ui: &mut egui::Ui, props: &StageProps<'_>) -> Option<UiCommand> {
    let mut command = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(12.0);
        for entry in &props.view.thumbnails {
            let block = ui.vertical_centered(|ui| {
                match props.textures.get(&entry.handle) {
                    Some(texture) => {
                        ui.image((texture.id(), THUMBNAIL_SIZE));
                    }
                    None => render_placeholder(ui, THUMBNAIL_SIZE, "Connecting..."),
                }
                ui.label(
                    RichText::new(props.label_for(entry))
                        .font(FontId::proportional(13.0))
                        .color(Color32::WHITE),
                );
            });

            let response = ui
                .interact(
                    block.response.rect,
                    ui.id().with(("thumbnail", entry.handle)),
                    Sense::click(),
                )
                .on_hover_text("Show on stage");
            if response.hovered() {
                ui.painter().rect_stroke(
                    block.response.rect,
                    8.0,
                    egui::Stroke::new(2.0, Color32::from_rgb(59, 130, 246)),
                    egui::StrokeKind::Outside,
                );
            }
            if response.clicked() {
                command = Some(UiCommand::Stage(Action::SelectStream(
                    entry.identity.clone(),
                )));
            }
            ui.add_space(12.0);
        }
    });

    command
}
