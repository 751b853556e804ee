//! Per-stream mute and volume.
//!
//! Entries are created on first write and kept after their stream leaves the
//! roster, so a stream that comes back under the same identity gets its old
//! settings. The store is keyed by identity only: a different stream that
//! reuses an identity inherits the previous stream's settings.
//!
//! The presenter's own stream has a separate slot. Every user-facing
//! mutation takes a [`RemoteId`], so mute toggles and volume changes cannot
//! reach it; the only writes are the forced mutes below.

use crate::identity::{RemoteId, StreamIdentity};
use std::collections::HashMap;

pub const MIN_VOLUME: u8 = 0;
pub const MAX_VOLUME: u8 = 100;
pub const DEFAULT_VOLUME: u8 = MAX_VOLUME;

/// Stored audio settings of one stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlEntry {
    pub muted: bool,
    pub volume: u8,
}

impl Default for ControlEntry {
    fn default() -> Self {
        Self {
            muted: false,
            volume: DEFAULT_VOLUME,
        }
    }
}

fn clamp_volume(value: i32) -> u8 {
    value.clamp(MIN_VOLUME as i32, MAX_VOLUME as i32) as u8
}

#[derive(Debug, Default, Clone)]
pub struct ControlStore {
    local: Option<ControlEntry>,
    remote: HashMap<RemoteId, ControlEntry>,
}

impl ControlStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored entry for `id`, or the default when none was written.
    pub fn entry(&self, id: &StreamIdentity) -> ControlEntry {
        let stored = match id {
            StreamIdentity::Local => self.local,
            StreamIdentity::Remote(remote) => self.remote.get(remote).copied(),
        };
        stored.unwrap_or_default()
    }

    pub fn is_muted(&self, id: &StreamIdentity) -> bool {
        self.entry(id).muted
    }

    pub fn volume(&self, id: &StreamIdentity) -> u8 {
        self.entry(id).volume
    }

    /// Whether an entry was ever written for `id`.
    pub fn remembers(&self, id: &RemoteId) -> bool {
        self.remote.contains_key(id)
    }

    pub fn toggle_mute(&mut self, id: &RemoteId) -> ControlEntry {
        let entry = self.remote_mut(id);
        entry.muted = !entry.muted;
        *entry
    }

    /// Adds `delta` to the volume, clamped to `0..=100`.
    pub fn step_volume(&mut self, id: &RemoteId, delta: i32) -> ControlEntry {
        let entry = self.remote_mut(id);
        entry.volume = clamp_volume((entry.volume as i32).saturating_add(delta));
        *entry
    }

    /// Sets the volume from a continuous input, clamped to `0..=100`.
    pub fn set_volume(&mut self, id: &RemoteId, value: i32) -> ControlEntry {
        let entry = self.remote_mut(id);
        entry.volume = clamp_volume(value);
        *entry
    }

    /// A self-presentation never starts audible to the presenter.
    pub fn on_host_stream_appears(&mut self) {
        self.force_local_muted();
    }

    pub fn force_local_muted(&mut self) {
        self.local.get_or_insert_with(ControlEntry::default).muted = true;
    }

    fn remote_mut(&mut self, id: &RemoteId) -> &mut ControlEntry {
        self.remote.entry(id.clone()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> RemoteId {
        RemoteId::new(name)
    }

    #[test]
    fn test_absent_entry_reads_as_default() {
        let store = ControlStore::new();
        let remote = StreamIdentity::remote("a");

        assert!(!store.is_muted(&remote));
        assert_eq!(store.volume(&remote), 100);
        assert_eq!(store.entry(&StreamIdentity::Local), ControlEntry::default());
        assert!(!store.remembers(&id("a")));
    }

    #[test]
    fn test_toggle_mute_flips() {
        let mut store = ControlStore::new();
        assert!(store.toggle_mute(&id("a")).muted);
        assert!(!store.toggle_mute(&id("a")).muted);
    }

    #[test]
    fn test_volume_step_clamps_at_bounds() {
        let mut store = ControlStore::new();
        assert_eq!(store.step_volume(&id("a"), 1).volume, 100);

        store.set_volume(&id("a"), 0);
        assert_eq!(store.step_volume(&id("a"), -1).volume, 0);
    }

    #[test]
    fn test_set_volume_clamps_out_of_range() {
        let mut store = ControlStore::new();
        assert_eq!(store.set_volume(&id("a"), 250).volume, 100);
        assert_eq!(store.set_volume(&id("a"), -7).volume, 0);
        assert_eq!(store.set_volume(&id("a"), 42).volume, 42);
    }

    #[test]
    fn test_extreme_delta_does_not_overflow() {
        let mut store = ControlStore::new();
        assert_eq!(store.step_volume(&id("a"), i32::MAX).volume, 100);
        assert_eq!(store.step_volume(&id("a"), i32::MIN).volume, 0);
    }

    #[test]
    fn test_remote_mutations_leave_local_alone() {
        let mut store = ControlStore::new();
        store.force_local_muted();
        let before = store.entry(&StreamIdentity::Local);

        store.toggle_mute(&id("a"));
        store.step_volume(&id("a"), -1);
        store.set_volume(&id("a"), 3);

        assert_eq!(store.entry(&StreamIdentity::Local), before);
    }

    #[test]
    fn test_host_appearance_mutes_local() {
        let mut store = ControlStore::new();
        store.on_host_stream_appears();
        assert!(store.is_muted(&StreamIdentity::Local));
        assert_eq!(store.volume(&StreamIdentity::Local), 100);
    }

    #[test]
    fn test_entries_survive_without_eviction() {
        let mut store = ControlStore::new();
        store.set_volume(&id("a"), 30);
        store.toggle_mute(&id("a"));

        // Nothing ties the store to the roster; the entry is still there.
        assert!(store.remembers(&id("a")));
        let entry = store.entry(&StreamIdentity::remote("a"));
        assert_eq!(entry, ControlEntry { muted: true, volume: 30 });
    }
}
