//! Snapshot of the streams and users currently in the session.
//!
//! The roster is produced by the signaling side and replaced wholesale on
//! every change; the stage never edits it in place.

use crate::identity::{ParticipantId, RemoteId, StreamIdentity};

/// One stream in the roster, carrying an opaque media handle `H`.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry<H> {
    pub identity: StreamIdentity,
    pub handle: H,
    pub owner: ParticipantId,
}

/// A session member as reported by presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub display_name: String,
    pub is_self: bool,
    pub is_owner: bool,
    pub is_presenting: bool,
}

impl Participant {
    pub fn new(id: ParticipantId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            is_self: false,
            is_owner: false,
            is_presenting: false,
        }
    }
}

/// Host stream (at most one, always `Local`) plus ordered client streams.
///
/// Client order is navigation order and thumbnail order.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster<H> {
    host: Option<RosterEntry<H>>,
    clients: Vec<RosterEntry<H>>,
    users: Vec<Participant>,
}

impl<H> Default for Roster<H> {
    fn default() -> Self {
        Self {
            host: None,
            clients: Vec::new(),
            users: Vec::new(),
        }
    }
}

impl<H> Roster<H> {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets the host stream. Its identity is always [`StreamIdentity::Local`].
    pub fn with_host(mut self, handle: H, owner: ParticipantId) -> Self {
        self.host = Some(RosterEntry {
            identity: StreamIdentity::Local,
            handle,
            owner,
        });
        self
    }

    /// Appends a client stream. A repeated id replaces the earlier entry's
    /// handle and owner but keeps its position.
    pub fn with_client(mut self, id: RemoteId, handle: H, owner: ParticipantId) -> Self {
        let identity = StreamIdentity::Remote(id);
        match self.clients.iter_mut().find(|e| e.identity == identity) {
            Some(existing) => {
                existing.handle = handle;
                existing.owner = owner;
            }
            None => self.clients.push(RosterEntry {
                identity,
                handle,
                owner,
            }),
        }
        self
    }

    pub fn with_user(mut self, user: Participant) -> Self {
        self.users.push(user);
        self
    }

    pub fn host(&self) -> Option<&RosterEntry<H>> {
        self.host.as_ref()
    }

    pub fn has_host(&self) -> bool {
        self.host.is_some()
    }

    pub fn clients(&self) -> &[RosterEntry<H>] {
        &self.clients
    }

    pub fn users(&self) -> &[Participant] {
        &self.users
    }

    pub fn is_empty(&self) -> bool {
        self.host.is_none() && self.clients.is_empty()
    }

    /// Position of `id` among the clients, `None` for `Local` or absent ids.
    pub fn client_position(&self, id: &StreamIdentity) -> Option<usize> {
        self.clients.iter().position(|e| &e.identity == id)
    }

    pub fn contains(&self, id: &StreamIdentity) -> bool {
        self.entry(id).is_some()
    }

    pub fn entry(&self, id: &StreamIdentity) -> Option<&RosterEntry<H>> {
        match id {
            StreamIdentity::Local => self.host.as_ref(),
            StreamIdentity::Remote(_) => self.clients.iter().find(|e| &e.identity == id),
        }
    }

    /// Host first, then clients in roster order.
    pub fn entries(&self) -> impl Iterator<Item = &RosterEntry<H>> {
        self.host.iter().chain(self.clients.iter())
    }

    /// Display name of the participant owning `entry`, if presence knows it.
    pub fn display_name_for(&self, entry: &RosterEntry<H>) -> Option<&str> {
        self.users
            .iter()
            .find(|u| u.id == entry.owner)
            .map(|u| u.display_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(name: &str) -> ParticipantId {
        ParticipantId::new(name)
    }

    #[test]
    fn test_host_is_always_local() {
        let roster = Roster::empty().with_host((), owner("me"));
        assert_eq!(roster.host().map(|e| &e.identity), Some(&StreamIdentity::Local));
        assert!(roster.contains(&StreamIdentity::Local));
    }

    #[test]
    fn test_client_positions_follow_insertion_order() {
        let roster = Roster::empty()
            .with_client(RemoteId::new("a"), (), owner("ann"))
            .with_client(RemoteId::new("b"), (), owner("bob"));

        assert_eq!(roster.client_position(&StreamIdentity::remote("a")), Some(0));
        assert_eq!(roster.client_position(&StreamIdentity::remote("b")), Some(1));
        assert_eq!(roster.client_position(&StreamIdentity::Local), None);
    }

    #[test]
    fn test_repeated_client_keeps_position() {
        let roster = Roster::empty()
            .with_client(RemoteId::new("a"), 1, owner("ann"))
            .with_client(RemoteId::new("b"), 2, owner("bob"))
            .with_client(RemoteId::new("a"), 3, owner("ann"));

        assert_eq!(roster.clients().len(), 2);
        assert_eq!(roster.clients()[0].handle, 3);
    }

    #[test]
    fn test_local_not_found_among_clients_without_host() {
        let roster = Roster::empty().with_client(RemoteId::new("a"), (), owner("ann"));
        assert!(!roster.contains(&StreamIdentity::Local));
    }

    #[test]
    fn test_display_name_lookup() {
        let roster = Roster::empty()
            .with_client(RemoteId::new("a"), (), owner("p1"))
            .with_user(Participant::new(owner("p1"), "Ann"));

        let entry = &roster.clients()[0];
        assert_eq!(roster.display_name_for(entry), Some("Ann"));
    }

    #[test]
    fn test_entries_lists_host_first() {
        let roster = Roster::empty()
            .with_client(RemoteId::new("a"), (), owner("ann"))
            .with_host((), owner("me"));

        let ids: Vec<_> = roster.entries().map(|e| e.identity.clone()).collect();
        assert_eq!(ids, vec![StreamIdentity::Local, StreamIdentity::remote("a")]);
    }
}
