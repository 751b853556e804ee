//! The stage session: roster, focus and per-stream controls in one place.
//!
//! A [`Session`] is driven by two kinds of input, roster snapshots from the
//! signaling side ([`Session::apply_roster`]) and user actions
//! ([`Session::dispatch`]). Both run synchronously. Requests for the outside
//! world come back as [`SessionCommand`]s; what to draw comes from
//! [`Session::view`].

use crate::controls::ControlStore;
use crate::focus::{FocusEffect, FocusTransition, resolve_focus, select_focus};
use crate::identity::{RemoteId, StreamIdentity};
use crate::navigation::{Action, Direction, cycle_target};
use crate::playback::PlaybackSettings;
use crate::roster::{Roster, RosterEntry};
use logging::Logger;

pub const DEFAULT_VOLUME_STEP: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Volume change per volume-up/down action.
    pub volume_step: i32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            volume_step: DEFAULT_VOLUME_STEP,
        }
    }
}

/// Viewer preferences saved through the settings collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    pub display_name: String,
    pub show_thumbnails: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            show_thumbnails: true,
        }
    }
}

/// Requests from the stage to its collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    StartPresenting,
    StopPresenting,
    ToggleMicrophone,
    UpdateDisplayName(String),
    SaveDisplaySettings(DisplaySettings),
    RequestFullscreen(StreamIdentity),
    CopyLink,
    OpenSettings,
}

/// What the renderer needs for one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct StageView<H> {
    /// The stream to show large, if any.
    pub focused: Option<RosterEntry<H>>,
    /// Audio settings to apply to the focused stream.
    pub settings: PlaybackSettings,
    /// Every other stream, host first, then clients in roster order.
    pub thumbnails: Vec<RosterEntry<H>>,
}

pub struct Session<H> {
    roster: Roster<H>,
    focus: Option<StreamIdentity>,
    controls: ControlStore,
    options: SessionOptions,
    logger: Logger,
}

impl<H> Session<H> {
    pub fn new(logger: Logger) -> Self {
        Self::with_options(logger, SessionOptions::default())
    }

    pub fn with_options(logger: Logger, options: SessionOptions) -> Self {
        Self {
            roster: Roster::empty(),
            focus: None,
            controls: ControlStore::new(),
            options,
            logger,
        }
    }

    pub fn focus(&self) -> Option<&StreamIdentity> {
        self.focus.as_ref()
    }

    pub fn roster(&self) -> &Roster<H> {
        &self.roster
    }

    pub fn controls(&self) -> &ControlStore {
        &self.controls
    }

    pub fn is_presenting(&self) -> bool {
        self.roster.has_host()
    }

    /// Replaces the roster and re-resolves the focus.
    ///
    /// When the host stream has just appeared its monitor is muted. The
    /// stage switches to it only if the current focus is none or has left
    /// the roster; a client that is still present stays on stage. Returns
    /// whether the focus changed.
    pub fn apply_roster(&mut self, roster: Roster<H>) -> bool {
        let host_appeared = roster.has_host() && !self.roster.has_host();
        self.roster = roster;

        if host_appeared {
            self.logger.info("[FOCUS] Host stream appeared");
            self.controls.on_host_stream_appears();
        }

        let focus_valid = self
            .focus
            .as_ref()
            .is_some_and(|id| self.roster.contains(id));
        let previous = if host_appeared && !focus_valid {
            Some(StreamIdentity::Local)
        } else {
            self.focus.clone()
        };

        let transition = resolve_focus(previous.as_ref(), &self.roster);
        self.apply(transition)
    }

    /// Runs one user action. Returns a command for the collaborators when
    /// the action needs one.
    pub fn dispatch(&mut self, action: Action) -> Option<SessionCommand> {
        self.logger.debug(&format!("[NAV] {:?}", action));
        match action {
            Action::TogglePresentation => Some(if self.roster.has_host() {
                SessionCommand::StopPresenting
            } else {
                SessionCommand::StartPresenting
            }),
            Action::RequestFullscreen => self.focus.clone().map(SessionCommand::RequestFullscreen),
            Action::CopyLink => Some(SessionCommand::CopyLink),
            Action::OpenSettings => Some(SessionCommand::OpenSettings),
            Action::CycleNext => {
                self.cycle(Direction::Next);
                None
            }
            Action::CyclePrevious => {
                self.cycle(Direction::Previous);
                None
            }
            Action::ToggleMuteFocused => {
                if let Some(id) = self.focused_remote() {
                    let entry = self.controls.toggle_mute(&id);
                    self.logger
                        .debug(&format!("[CONTROL] {} muted={}", id, entry.muted));
                }
                None
            }
            Action::VolumeUpFocused => {
                self.step_focused(self.options.volume_step);
                None
            }
            Action::VolumeDownFocused => {
                self.step_focused(-self.options.volume_step);
                None
            }
            Action::SetVolumeFocused(value) => {
                if let Some(id) = self.focused_remote() {
                    self.controls.set_volume(&id, value);
                }
                None
            }
            Action::SelectStream(target) => {
                if self.roster.contains(&target) {
                    self.select(target);
                } else {
                    self.logger
                        .debug(&format!("[NAV] Ignoring selection of absent {}", target));
                }
                None
            }
        }
    }

    /// Focused stream when it is a remote one. Audio controls only ever act
    /// through this, which keeps them off the presenter's own stream.
    fn focused_remote(&self) -> Option<RemoteId> {
        match self.focus.as_ref()? {
            StreamIdentity::Remote(id) => Some(id.clone()),
            StreamIdentity::Local => {
                self.logger
                    .debug("[CONTROL] Audio controls do not apply to the local stream");
                None
            }
        }
    }

    fn step_focused(&mut self, delta: i32) {
        if let Some(id) = self.focused_remote() {
            let entry = self.controls.step_volume(&id, delta);
            self.logger
                .debug(&format!("[CONTROL] {} volume={}", id, entry.volume));
        }
    }

    fn cycle(&mut self, direction: Direction) {
        if let Some(id) = cycle_target(&self.roster, self.focus.as_ref(), direction) {
            self.select(StreamIdentity::Remote(id));
        }
    }

    fn select(&mut self, target: StreamIdentity) {
        let transition = select_focus(self.focus.as_ref(), target);
        self.apply(transition);
    }

    fn apply(&mut self, transition: FocusTransition) -> bool {
        for effect in &transition.effects {
            match effect {
                FocusEffect::MuteLocal => {
                    self.logger.debug("[FOCUS] Leaving local stream, muting it");
                    self.controls.force_local_muted();
                }
            }
        }

        let changed = transition.changed_from(self.focus.as_ref());
        if changed {
            let describe =
                |f: Option<&StreamIdentity>| f.map_or("none".to_string(), |id| id.to_string());
            self.logger.debug(&format!(
                "[FOCUS] {} -> {}",
                describe(self.focus.as_ref()),
                describe(transition.focus.as_ref())
            ));
        }
        self.focus = transition.focus;
        changed
    }
}

impl<H: Clone> Session<H> {
    /// Rendering boundary for the current state.
    pub fn view(&self) -> StageView<H> {
        let focused = self
            .focus
            .as_ref()
            .and_then(|id| self.roster.entry(id))
            .cloned();

        let settings = self
            .focus
            .as_ref()
            .map(|id| PlaybackSettings::for_stream(&self.controls, id))
            .unwrap_or_default();

        let thumbnails = self
            .roster
            .entries()
            .filter(|e| Some(&e.identity) != self.focus.as_ref())
            .cloned()
            .collect();

        StageView {
            focused,
            settings,
            thumbnails,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::ControlEntry;
    use crate::identity::ParticipantId;
    use logging::LogLevel;

    fn session() -> Session<u32> {
        Session::new(Logger::capture(LogLevel::Debug))
    }

    fn roster(host: bool, clients: &[&str]) -> Roster<u32> {
        let mut roster = Roster::empty();
        if host {
            roster = roster.with_host(0, ParticipantId::new("me"));
        }
        for (i, id) in clients.iter().enumerate() {
            roster = roster.with_client(RemoteId::new(*id), i as u32 + 1, ParticipantId::new(*id));
        }
        roster
    }

    fn remote(id: &str) -> StreamIdentity {
        StreamIdentity::remote(id)
    }

    #[test]
    fn test_toggle_presentation_follows_host() {
        let mut s = session();
        assert_eq!(s.dispatch(Action::TogglePresentation), Some(SessionCommand::StartPresenting));

        s.apply_roster(roster(true, &[]));
        assert_eq!(s.dispatch(Action::TogglePresentation), Some(SessionCommand::StopPresenting));
    }

    #[test]
    fn test_fullscreen_needs_focus() {
        let mut s = session();
        assert_eq!(s.dispatch(Action::RequestFullscreen), None);

        s.apply_roster(roster(false, &["a"]));
        assert_eq!(
            s.dispatch(Action::RequestFullscreen),
            Some(SessionCommand::RequestFullscreen(remote("a")))
        );
    }

    #[test]
    fn test_audio_actions_skip_local_focus() {
        let mut s = session();
        s.apply_roster(roster(true, &["a"]));
        assert_eq!(s.focus(), Some(&StreamIdentity::Local));
        let before = s.controls().entry(&StreamIdentity::Local);

        s.dispatch(Action::ToggleMuteFocused);
        s.dispatch(Action::VolumeDownFocused);
        s.dispatch(Action::SetVolumeFocused(10));

        assert_eq!(s.controls().entry(&StreamIdentity::Local), before);
        assert!(!s.controls().remembers(&RemoteId::new("a")));
    }

    #[test]
    fn test_audio_actions_apply_to_focused_remote() {
        let mut s = session();
        s.apply_roster(roster(false, &["a", "b"]));

        s.dispatch(Action::ToggleMuteFocused);
        s.dispatch(Action::VolumeDownFocused);
        s.dispatch(Action::VolumeDownFocused);

        let entry = s.controls().entry(&remote("a"));
        assert!(entry.muted);
        assert_eq!(entry.volume, 98);
        assert_eq!(s.controls().entry(&remote("b")), ControlEntry::default());
    }

    #[test]
    fn test_volume_step_option() {
        let mut s: Session<u32> = Session::with_options(
            Logger::capture(LogLevel::Info),
            SessionOptions { volume_step: 5 },
        );
        s.apply_roster(roster(false, &["a"]));
        s.dispatch(Action::VolumeDownFocused);
        assert_eq!(s.controls().volume(&remote("a")), 95);
    }

    #[test]
    fn test_select_absent_stream_is_ignored() {
        let mut s = session();
        s.apply_roster(roster(false, &["a"]));
        s.dispatch(Action::SelectStream(remote("ghost")));
        assert_eq!(s.focus(), Some(&remote("a")));
    }

    #[test]
    fn test_view_splits_focus_and_thumbnails() {
        let mut s = session();
        s.apply_roster(roster(true, &["a", "b"]));
        s.dispatch(Action::SelectStream(remote("b")));

        let view = s.view();
        assert_eq!(view.focused.map(|e| e.handle), Some(2));
        let thumbs: Vec<_> = view.thumbnails.iter().map(|e| e.identity.clone()).collect();
        assert_eq!(thumbs, vec![StreamIdentity::Local, remote("a")]);
    }

    #[test]
    fn test_view_of_local_focus_is_muted() {
        let mut s = session();
        s.apply_roster(roster(true, &[]));
        let view = s.view();
        assert_eq!(view.focused.map(|e| e.identity), Some(StreamIdentity::Local));
        assert!(view.settings.muted);
    }

    #[test]
    fn test_empty_view() {
        let s = session();
        let view = s.view();
        assert!(view.focused.is_none());
        assert!(view.thumbnails.is_empty());
        assert_eq!(view.settings, PlaybackSettings::default());
    }

    #[test]
    fn test_focus_changes_are_logged() {
        let logger = Logger::capture(LogLevel::Debug);
        let mut s: Session<u32> = Session::new(logger.clone());
        s.apply_roster(roster(false, &["a"]));

        assert!(logger.captured().iter().any(|l| l.contains("[FOCUS] none -> remote:a")));
    }
}
