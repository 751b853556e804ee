//! Button Component
//!
//! Provides styled button variants for consistent UI, including the
//! translucent variant used by the floating stage controls.

use egui::{Color32, FontId, RichText, Vec2};

/// Button variant styles
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
    /// Dark translucent, for controls floating over video
    Overlay,
}

impl ButtonVariant {
    /// Returns the color for this button variant
    pub fn color(&self) -> Color32 {
        match self {
            ButtonVariant::Primary => Color32::from_rgb(59, 130, 246),
            ButtonVariant::Secondary => Color32::from_rgb(107, 114, 128),
            ButtonVariant::Danger => Color32::from_rgb(239, 68, 68),
            ButtonVariant::Overlay => Color32::from_rgba_premultiplied(15, 23, 42, 200),
        }
    }
}

/// A styled button component with configurable appearance
pub struct Button {
    text: String,
    text_size: f32,
    min_size: Option<Vec2>,
    variant: ButtonVariant,
    enabled: bool,
    hover_text: Option<String>,
}

impl Button {
    /// Creates a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            text: label.into(),
            text_size: 16.0,
            min_size: None,
            variant: ButtonVariant::Primary,
            enabled: true,
            hover_text: None,
        }
    }

    /// Sets the minimum size of the button
    pub fn min_size(mut self, size: Vec2) -> Self {
        self.min_size = Some(size);
        self
    }

    /// Sets the button variant (Primary, Secondary, or Danger)
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Disables the button when `enabled` is false
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Tooltip, mostly for icon-only buttons
    pub fn hover_text(mut self, text: impl Into<String>) -> Self {
        self.hover_text = Some(text.into());
        self
    }

    /// Sets the text size
    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    /// Renders the button and returns the response
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let mut button = egui::Button::new(
            RichText::new(&self.text)
                .font(FontId::proportional(self.text_size))
                .color(Color32::WHITE),
        )
        .fill(self.variant.color())
        .corner_radius(8.0);

        if let Some(size) = self.min_size {
            button = button.min_size(size);
        }

        let response = ui.add_enabled(self.enabled, button);
        match self.hover_text {
            Some(text) => response.on_hover_text(text),
            None => response,
        }
    }
}
