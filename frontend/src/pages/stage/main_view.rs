//! Main View Component
//!
//! Draws the focused stream as large as the panel allows, keeping its
//! aspect ratio.

use super::StageProps;
use crate::components::render_placeholder;
use egui::{Color32, FontId, Vec2};

pub(super) fn render_main_view(ui: &mut egui::Ui, props: &StageProps<'_>) {
    let available = ui.available_size();

    let Some(entry) = props.view.focused.as_ref() else {
        let text = if props.presenting {
            "Presenting. Waiting for participants..."
        } else {
            "Waiting for participants..."
        };
        render_placeholder(ui, available, text);
        return;
    };

    let attached = props.surface.handle == Some(entry.handle);
    if attached && props.surface.failed {
        render_placeholder(ui, available, "Playback failed");
        return;
    }
    let texture = props.textures.get(&entry.handle).filter(|_| attached);
    let Some(texture) = texture else {
        render_placeholder(ui, available, "Connecting...");
        return;
    };

    let size = fit(texture.size_vec2(), available);
    ui.vertical_centered(|ui| {
        ui.add_space(((available.y - size.y) / 2.0).max(0.0));
        let response = ui.image((texture.id(), size));

        let mut label = props.label_for(entry);
        if props.view.settings.muted {
            label.push_str("  🔇");
        }
        let galley = ui.painter().layout_no_wrap(
            label,
            FontId::proportional(18.0),
            Color32::WHITE,
        );
        let corner = response.rect.left_top() + Vec2::new(12.0, 12.0);
        let background = egui::Rect::from_min_size(corner, galley.size()).expand(6.0);
        ui.painter()
            .rect_filled(background, 4.0, Color32::from_black_alpha(160));
        ui.painter().galley(corner, galley, Color32::WHITE);
    });
}

/// Largest size with the aspect ratio of `content` that fits in `bounds`
fn fit(content: Vec2, bounds: Vec2) -> Vec2 {
    if content.x <= 0.0 || content.y <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (bounds.x / content.x).min(bounds.y / content.y).max(0.0);
    content * scale
}
