/// Toast notification component for displaying transient messages to users
///
/// Renders a stage [`Notification`] with a style per severity.
use stage::{Notification, NotificationLevel};
use std::time::Instant;

/// Visual style of each notification level
trait ToastStyle {
    fn icon(&self) -> &str;
    fn icon_color(&self) -> egui::Color32;
    fn background_color(&self) -> egui::Color32;
}

impl ToastStyle for NotificationLevel {
    /// Get the icon for this level
    fn icon(&self) -> &str {
        match self {
            NotificationLevel::Error => "❌",
            NotificationLevel::Warning => "!",
            NotificationLevel::Success => "✅",
            NotificationLevel::Info => "ℹ",
        }
    }

    /// Get the icon color for this level
    fn icon_color(&self) -> egui::Color32 {
        match self {
            NotificationLevel::Error => egui::Color32::from_rgb(255, 100, 100),
            NotificationLevel::Warning => egui::Color32::from_rgb(255, 200, 100),
            NotificationLevel::Success => egui::Color32::from_rgb(100, 255, 100),
            NotificationLevel::Info => egui::Color32::from_rgb(100, 150, 255),
        }
    }

    /// Get the background color for this level
    fn background_color(&self) -> egui::Color32 {
        match self {
            NotificationLevel::Error => egui::Color32::from_rgba_premultiplied(80, 30, 30, 230),
            NotificationLevel::Warning => egui::Color32::from_rgba_premultiplied(80, 70, 30, 230),
            NotificationLevel::Success => egui::Color32::from_rgba_premultiplied(30, 80, 30, 230),
            NotificationLevel::Info => egui::Color32::from_rgba_premultiplied(30, 50, 80, 230),
        }
    }
}

/// Toast notification for displaying messages to users
#[derive(Clone)]
pub struct Toast {
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: Instant,
    pub duration_secs: f32,
}

impl Toast {
    /// Errors stay longer than the rest
    fn duration_for(level: NotificationLevel) -> f32 {
        match level {
            NotificationLevel::Error | NotificationLevel::Warning => 5.0,
            NotificationLevel::Success | NotificationLevel::Info => 3.0,
        }
    }

    /// Checks if the toast has expired based on creation time
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs_f32() > self.duration_secs
    }

    /// Renders the toast at the top of the window, clear of the floating
    /// controls. Returns true once it expired or was clicked away.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        if self.is_expired() {
            return true;
        }

        let frame = egui::Frame::window(&ctx.style())
            .fill(self.level.background_color())
            .stroke(egui::Stroke::new(
                1.5,
                self.level.icon_color().linear_multiply(0.7),
            ))
            .corner_radius(8.0)
            .shadow(egui::epaint::Shadow {
                offset: [0, 4],
                blur: 16,
                spread: 0,
                color: egui::Color32::from_black_alpha(100),
            });

        let response = egui::Area::new(egui::Id::new("notification"))
            .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 64.0))
            .order(egui::Order::Tooltip)
            .show(ctx, |ui| {
                frame
                    .show(ui, |ui| {
                        ui.set_max_width(420.0);
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(self.level.icon())
                                    .size(22.0)
                                    .color(self.level.icon_color()),
                            );
                            ui.add_space(8.0);
                            ui.label(
                                egui::RichText::new(&self.message)
                                    .size(14.0)
                                    .color(egui::Color32::WHITE),
                            );
                        });
                    })
                    .response
                    .interact(egui::Sense::click())
            });

        // Keep repainting so expiry is noticed without input
        ctx.request_repaint();

        response.inner.clicked()
    }
}

impl From<Notification> for Toast {
    fn from(notification: Notification) -> Self {
        Self {
            duration_secs: Toast::duration_for(notification.level),
            message: notification.message,
            level: notification.level,
            created_at: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_notification() {
        let toast = Toast::from(Notification::warning("Playback failed"));
        assert_eq!(toast.level, NotificationLevel::Warning);
        assert_eq!(toast.message, "Playback failed");
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_errors_stay_longer() {
        let error = Toast::from(Notification::error("x"));
        let info = Toast::from(Notification::info("x"));
        assert!(error.duration_secs > info.duration_secs);
    }
}
