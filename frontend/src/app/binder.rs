//! Playback binder for the stage surface.
//!
//! Attaching a stream means choosing which texture the main surface draws
//! and at which gain its level meter runs. The simulated feed can refuse an
//! attach at a configured rate so the failure path is reachable.

use crate::models::{StreamHandle, Surface};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stage::{PlaybackBinder, PlaybackError, PlaybackSettings, RosterEntry};

pub(super) struct StageBinder {
    failure_rate: f64,
    rng: StdRng,
    surface: Surface,
}

impl StageBinder {
    pub fn new(failure_rate: f64) -> Self {
        Self::with_rng(failure_rate, StdRng::from_entropy())
    }

    pub fn with_rng(failure_rate: f64, rng: StdRng) -> Self {
        Self {
            failure_rate: failure_rate.clamp(0.0, 1.0),
            rng,
            surface: Surface::default(),
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }
}

impl PlaybackBinder<StreamHandle> for StageBinder {
    fn bind(
        &mut self,
        stream: Option<&RosterEntry<StreamHandle>>,
        settings: PlaybackSettings,
    ) -> Result<(), PlaybackError> {
        self.surface.gain = settings.gain();

        let handle = stream.map(|entry| entry.handle);
        // Only the audio changed; the attached stream keeps playing.
        if handle == self.surface.handle && !self.surface.failed {
            return Ok(());
        }

        self.surface.handle = handle;
        self.surface.failed = false;

        if let Some(entry) = stream
            && self.failure_rate > 0.0
            && self.rng.gen_bool(self.failure_rate)
        {
            self.surface.failed = true;
            return Err(PlaybackError::Rejected(format!(
                "{} refused to start",
                entry.identity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stage::{ParticipantId, StreamIdentity};

    fn entry(id: &str) -> RosterEntry<StreamHandle> {
        RosterEntry {
            identity: StreamIdentity::remote(id),
            handle: StreamHandle::fresh(),
            owner: ParticipantId::new(id),
        }
    }

    fn binder(rate: f64) -> StageBinder {
        StageBinder::with_rng(rate, StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_attaches_focused_stream() {
        let mut binder = binder(0.0);
        let a = entry("a");

        binder.bind(Some(&a), PlaybackSettings::default()).unwrap();

        assert_eq!(binder.surface().handle, Some(a.handle));
        assert!(!binder.surface().failed);
        assert_eq!(binder.surface().gain, 1.0);
    }

    #[test]
    fn test_clears_surface_without_focus() {
        let mut binder = binder(0.0);
        binder.bind(Some(&entry("a")), PlaybackSettings::default()).unwrap();
        binder.bind(None, PlaybackSettings::default()).unwrap();
        assert_eq!(binder.surface().handle, None);
    }

    #[test]
    fn test_settings_only_update_gain() {
        let mut binder = binder(0.0);
        let a = entry("a");
        binder.bind(Some(&a), PlaybackSettings::default()).unwrap();

        let quiet = PlaybackSettings {
            muted: false,
            volume: 25,
        };
        binder.bind(Some(&a), quiet).unwrap();
        assert_eq!(binder.surface().gain, 0.25);

        let muted = PlaybackSettings {
            muted: true,
            volume: 25,
        };
        binder.bind(Some(&a), muted).unwrap();
        assert_eq!(binder.surface().gain, 0.0);
    }

    #[test]
    fn test_refusal_marks_surface_failed() {
        let mut binder = binder(1.0);
        let a = entry("a");

        let result = binder.bind(Some(&a), PlaybackSettings::default());

        assert!(matches!(result, Err(PlaybackError::Rejected(_))));
        let surface = binder.surface();
        assert_eq!(surface.handle, Some(a.handle));
        assert!(surface.failed);
    }

    #[test]
    fn test_clearing_never_fails() {
        let mut binder = binder(1.0);
        assert!(binder.bind(None, PlaybackSettings::default()).is_ok());
    }
}
