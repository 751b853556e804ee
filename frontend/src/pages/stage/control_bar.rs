//! Floating Control Bar
//!
//! Presentation, fullscreen, invite link, navigation and the focused
//! stream's audio. Audio controls are disabled while our own stream is on
//! stage.

use super::StageProps;
use crate::components::{Button, ButtonVariant};
use crate::events::UiCommand;
use egui::{Align2, Color32, Vec2};
use stage::{Action, StreamIdentity};

const BUTTON_HEIGHT: f32 = 36.0;

/// Renders the bar. Returns the clicked action and whether the pointer is
/// over the bar.
pub(super) fn render_control_bar(
    ctx: &egui::Context,
    props: &StageProps<'_>,
) -> (Option<UiCommand>, bool) {
    let mut action = None;

    let area = egui::Area::new(egui::Id::new("stage_controls"))
        .anchor(Align2::CENTER_BOTTOM, [0.0, -24.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(Color32::from_rgba_premultiplied(15, 23, 42, 220))
                .corner_radius(12.0)
                .inner_margin(egui::Margin::same(10))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let stage_action = render_stage_buttons(ui, props);
                        let audio_action = render_audio_controls(ui, props);
                        action = stage_action.or(audio_action);
                    });
                });
        });

    let hovered = area.response.contains_pointer();
    (action.map(UiCommand::Stage), hovered)
}

fn control_button(
    ui: &mut egui::Ui,
    label: &str,
    hint: &str,
    variant: ButtonVariant,
    enabled: bool,
) -> bool {
    Button::new(label)
        .variant(variant)
        .hover_text(hint)
        .text_size(14.0)
        .min_size(Vec2::new(0.0, BUTTON_HEIGHT))
        .enabled(enabled)
        .show(ui)
        .clicked()
}

fn render_stage_buttons(ui: &mut egui::Ui, props: &StageProps<'_>) -> Option<Action> {
    let mut action = None;
    let has_focus = props.view.focused.is_some();

    let (label, variant) = if props.presenting {
        ("⏹ Stop presenting", ButtonVariant::Danger)
    } else {
        ("▶ Present", ButtonVariant::Primary)
    };
    if control_button(ui, label, "Shortcut: s", variant, true) {
        action = Some(Action::TogglePresentation);
    }
    if control_button(ui, "⛶ Fullscreen", "Shortcut: f", ButtonVariant::Overlay, has_focus) {
        action = Some(Action::RequestFullscreen);
    }
    if control_button(ui, "🔗 Copy link", "Shortcut: c", ButtonVariant::Overlay, true) {
        action = Some(Action::CopyLink);
    }

    ui.separator();

    let has_clients = !props.roster.clients().is_empty();
    if control_button(ui, "⏮", "Previous (l / →)", ButtonVariant::Overlay, has_clients) {
        action = Some(Action::CyclePrevious);
    }
    if control_button(ui, "⏭", "Next (h / ←)", ButtonVariant::Overlay, has_clients) {
        action = Some(Action::CycleNext);
    }

    ui.separator();

    if control_button(ui, "⚙", "Settings (ctrl+s)", ButtonVariant::Secondary, true) {
        action = Some(Action::OpenSettings);
    }
    action
}

fn render_audio_controls(ui: &mut egui::Ui, props: &StageProps<'_>) -> Option<Action> {
    let mut action = None;
    let focused = props.view.focused.as_ref();
    let audio_enabled = focused.is_some_and(|entry| matches!(entry.identity, StreamIdentity::Remote(_)));
    let settings = props.view.settings;

    ui.separator();

    let mute_label = if settings.muted { "🔇" } else { "🔊" };
    if control_button(ui, mute_label, "Mute (m)", ButtonVariant::Overlay, audio_enabled) {
        action = Some(Action::ToggleMuteFocused);
    }
    if control_button(ui, "−", "Volume down (↓)", ButtonVariant::Overlay, audio_enabled) {
        action = Some(Action::VolumeDownFocused);
    }

    let mut volume = i32::from(settings.volume);
    let slider = egui::Slider::new(&mut volume, 0..=100).show_value(false);
    if ui.add_enabled(audio_enabled, slider).changed() {
        action = Some(Action::SetVolumeFocused(volume));
    }

    if control_button(ui, "+", "Volume up (↑)", ButtonVariant::Overlay, audio_enabled) {
        action = Some(Action::VolumeUpFocused);
    }

    // What the attached stream currently sounds like after gain
    let level = focused
        .filter(|entry| props.surface.handle == Some(entry.handle))
        .and_then(|entry| props.levels.get(&entry.handle))
        .map_or(0.0, |level| level * props.surface.gain);
    ui.add(egui::ProgressBar::new(level).desired_width(80.0));

    action
}
