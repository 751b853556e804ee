//! Boundary to the playback layer.
//!
//! The binder attaches the focused stream to a visible surface and applies
//! its audio settings. Attaching can fail (for example when the platform
//! blocks autoplay); a failure is logged and reported but never undoes the
//! focus change that caused it.

use crate::controls::ControlStore;
use crate::error::PlaybackError;
use crate::identity::StreamIdentity;
use crate::notification::Notification;
use crate::roster::RosterEntry;
use crate::session::StageView;
use logging::Logger;

/// Audio settings to apply to the stream being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSettings {
    pub muted: bool,
    pub volume: u8,
}

impl PlaybackSettings {
    /// Effective settings for `id`.
    ///
    /// The presenter's own stream always plays muted to the presenter,
    /// whatever its stored entry says.
    pub fn for_stream(controls: &ControlStore, id: &StreamIdentity) -> Self {
        let entry = controls.entry(id);
        Self {
            muted: entry.muted || id.is_local(),
            volume: entry.volume,
        }
    }

    /// Linear gain in `0.0..=1.0`.
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            f32::from(self.volume) / 100.0
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            muted: false,
            volume: crate::controls::DEFAULT_VOLUME,
        }
    }
}

pub trait PlaybackBinder<H> {
    /// Shows `stream` (or clears the surface) with `settings` applied.
    fn bind(
        &mut self,
        stream: Option<&RosterEntry<H>>,
        settings: PlaybackSettings,
    ) -> Result<(), PlaybackError>;
}

/// Applies `view` through `binder`, turning a failure into a notification.
pub fn bind_playback<H, B>(binder: &mut B, view: &StageView<H>, logger: &Logger) -> Option<Notification>
where
    B: PlaybackBinder<H> + ?Sized,
{
    match binder.bind(view.focused.as_ref(), view.settings) {
        Ok(()) => None,
        Err(e) => {
            let target = view
                .focused
                .as_ref()
                .map_or_else(|| "nothing".to_string(), |entry| entry.identity.to_string());
            logger.warn(&format!("[PLAYBACK] Could not play {}: {}", target, e));
            Some(Notification::warning(format!("Playback failed: {}", e)))
        }
    }
}
