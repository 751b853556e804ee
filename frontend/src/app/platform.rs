//! egui implementations of the stage's platform boundaries.

use stage::{Clipboard, ClipboardError, FullscreenEntry, FullscreenOutcome, StreamIdentity};

const VIEWPORT_FULLSCREEN: &str = "viewport-fullscreen";
const MAXIMIZED: &str = "maximized";

/// Native fullscreen of the root viewport.
pub(super) struct ViewportFullscreen {
    ctx: egui::Context,
}

impl ViewportFullscreen {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl FullscreenEntry for ViewportFullscreen {
    fn name(&self) -> &'static str {
        VIEWPORT_FULLSCREEN
    }

    fn enter(&mut self, _target: &StreamIdentity) -> FullscreenOutcome {
        // Backends that cannot toggle fullscreen leave the flag unset.
        let supported = self.ctx.input(|i| i.viewport().fullscreen.is_some());
        if !supported {
            return FullscreenOutcome::Unsupported;
        }
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
        FullscreenOutcome::Entered
    }
}

/// Maximized window, for backends without fullscreen.
pub(super) struct MaximizedFallback {
    ctx: egui::Context,
}

impl MaximizedFallback {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl FullscreenEntry for MaximizedFallback {
    fn name(&self) -> &'static str {
        MAXIMIZED
    }

    fn enter(&mut self, _target: &StreamIdentity) -> FullscreenOutcome {
        let supported = self.ctx.input(|i| i.viewport().maximized.is_some());
        if !supported {
            return FullscreenOutcome::Unsupported;
        }
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Maximized(true));
        FullscreenOutcome::Entered
    }
}

/// Command that undoes the named entry point.
fn exit_command(entry: &str) -> Option<egui::ViewportCommand> {
    match entry {
        VIEWPORT_FULLSCREEN => Some(egui::ViewportCommand::Fullscreen(false)),
        MAXIMIZED => Some(egui::ViewportCommand::Maximized(false)),
        _ => None,
    }
}

/// Reverses whichever entry point put the window into fullscreen.
pub(super) fn leave_fullscreen(ctx: &egui::Context, entry: &str) -> bool {
    match exit_command(entry) {
        Some(command) => {
            ctx.send_viewport_cmd(command);
            true
        }
        None => false,
    }
}

/// System clipboard through egui's output.
pub(super) struct EguiClipboard {
    ctx: egui::Context,
}

impl EguiClipboard {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl Clipboard for EguiClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::Write("no invite link configured".to_string()));
        }
        self.ctx.copy_text(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_entry_point_is_undone_by_its_own_command() {
        assert!(matches!(
            exit_command(VIEWPORT_FULLSCREEN),
            Some(egui::ViewportCommand::Fullscreen(false))
        ));
        assert!(matches!(
            exit_command(MAXIMIZED),
            Some(egui::ViewportCommand::Maximized(false))
        ));
        assert!(exit_command("kiosk").is_none());
    }

    #[test]
    fn test_entry_names_match_exit_commands() {
        let ctx = egui::Context::default();
        let native = ViewportFullscreen::new(ctx.clone());
        let fallback = MaximizedFallback::new(ctx.clone());
        assert!(exit_command(native.name()).is_some());
        assert!(exit_command(fallback.name()).is_some());
        assert!(leave_fullscreen(&ctx, fallback.name()));
        assert!(!leave_fullscreen(&ctx, "kiosk"));
    }

    #[test]
    fn test_empty_link_is_refused() {
        let mut clipboard = EguiClipboard::new(egui::Context::default());
        assert!(matches!(
            clipboard.write_text(""),
            Err(ClipboardError::Write(_))
        ));
    }
}
