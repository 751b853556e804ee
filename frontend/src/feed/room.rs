//! Simulated room membership.
//!
//! Stands in for the signaling layer: remote participants take seats and
//! leave again, and the local participant can present. Seats are a fixed
//! pool, so an identity that left can come back later as a new stream.

use crate::models::StreamHandle;
use rand::Rng;
use rand::seq::SliceRandom;
use stage::{DisplaySettings, Participant, ParticipantId, RemoteId, Roster};

const SEATS: [(&str, [u8; 3]); 6] = [
    ("ada", [239, 68, 68]),
    ("grace", [59, 130, 246]),
    ("linus", [245, 158, 11]),
    ("barbara", [168, 85, 247]),
    ("ken", [20, 184, 166]),
    ("margaret", [236, 72, 153]),
];

const LOCAL_COLOR: [u8; 3] = [148, 163, 184];
const LOCAL_PARTICIPANT: &str = "me";

/// A remote participant currently publishing a stream
pub(super) struct RemoteStream {
    pub id: RemoteId,
    pub handle: StreamHandle,
    pub owner: ParticipantId,
    pub name: String,
    pub color: [u8; 3],
    pub phase: f32,
}

pub(super) struct SimulatedRoom {
    display_name: String,
    host: Option<StreamHandle>,
    microphone_on: bool,
    remotes: Vec<RemoteStream>,
    settings: DisplaySettings,
}

impl SimulatedRoom {
    pub fn new(display_name: String, initial: usize, rng: &mut impl Rng) -> Self {
        let mut room = Self {
            display_name,
            host: None,
            microphone_on: false,
            remotes: Vec::new(),
            settings: DisplaySettings::default(),
        };
        for _ in 0..initial.min(SEATS.len()) {
            room.join(rng);
        }
        room
    }

    pub fn roster(&self) -> Roster<StreamHandle> {
        let me = ParticipantId::new(LOCAL_PARTICIPANT);
        let mut roster = Roster::empty();

        if let Some(handle) = self.host {
            roster = roster.with_host(handle, me.clone());
        }
        for remote in &self.remotes {
            roster = roster.with_client(remote.id.clone(), remote.handle, remote.owner.clone());
        }

        roster = roster.with_user(Participant {
            id: me,
            display_name: self.display_name.clone(),
            is_self: true,
            is_owner: true,
            is_presenting: self.host.is_some(),
        });
        for remote in &self.remotes {
            roster = roster.with_user(Participant {
                is_presenting: true,
                ..Participant::new(remote.owner.clone(), remote.name.clone())
            });
        }
        roster
    }

    /// Streams that need frames: (handle, colour, phase, speaking)
    pub fn streams(&self) -> Vec<(StreamHandle, [u8; 3], f32, bool)> {
        let local = self
            .host
            .map(|handle| (handle, LOCAL_COLOR, 0.0, self.microphone_on));
        let remotes = self
            .remotes
            .iter()
            .map(|r| (r.handle, r.color, r.phase, true));
        local.into_iter().chain(remotes).collect()
    }

    pub fn start_presenting(&mut self) -> bool {
        if self.host.is_some() {
            return false;
        }
        self.host = Some(StreamHandle::fresh());
        true
    }

    pub fn stop_presenting(&mut self) -> bool {
        self.host.take().is_some()
    }

    pub fn toggle_microphone(&mut self) -> bool {
        self.microphone_on = !self.microphone_on;
        self.microphone_on
    }

    pub fn rename(&mut self, name: String) {
        self.display_name = name;
    }

    pub fn save_settings(&mut self, settings: DisplaySettings) {
        self.settings = settings;
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    /// One participant joins or leaves. Returns whether the roster changed.
    pub fn churn(&mut self, rng: &mut impl Rng) -> bool {
        let leave = self.remotes.len() == SEATS.len() || (!self.remotes.is_empty() && rng.gen_bool(0.5));
        if leave {
            let index = rng.gen_range(0..self.remotes.len());
            self.remotes.remove(index);
            true
        } else {
            self.join(rng)
        }
    }

    fn join(&mut self, rng: &mut impl Rng) -> bool {
        let free: Vec<_> = SEATS
            .iter()
            .filter(|(seat, _)| !self.remotes.iter().any(|r| r.id.as_str() == *seat))
            .collect();
        let Some((seat, color)) = free.choose(rng) else {
            return false;
        };

        let mut name = seat.to_string();
        if let Some(first) = name.get_mut(0..1) {
            first.make_ascii_uppercase();
        }

        self.remotes.push(RemoteStream {
            id: RemoteId::new(*seat),
            handle: StreamHandle::fresh(),
            owner: ParticipantId::new(format!("user-{}", seat)),
            name,
            color: *color,
            phase: rng.gen_range(0.0..std::f32::consts::TAU),
        });
        true
    }
}
