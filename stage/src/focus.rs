//! Focus resolution.
//!
//! Two paths change the focus. A roster change runs [`resolve_focus`], which
//! keeps the previous focus while it is still valid. A user selection runs
//! [`select_focus`], which never consults the roster rules. Both report the
//! side effects the caller must apply instead of applying them here.

use crate::identity::StreamIdentity;
use crate::roster::Roster;

/// Side effect required by a focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEffect {
    /// The presenter stopped looking at their own stream: mute its monitor.
    MuteLocal,
}

/// New focus plus the effects that must be applied with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTransition {
    pub focus: Option<StreamIdentity>,
    pub effects: Vec<FocusEffect>,
}

impl FocusTransition {
    fn between(previous: Option<&StreamIdentity>, focus: Option<StreamIdentity>) -> Self {
        let was_local = previous.is_some_and(StreamIdentity::is_local);
        let is_local = focus.as_ref().is_some_and(StreamIdentity::is_local);
        let leaving_local = was_local && !is_local;
        let effects = if leaving_local {
            vec![FocusEffect::MuteLocal]
        } else {
            Vec::new()
        };
        Self { focus, effects }
    }

    pub fn changed_from(&self, previous: Option<&StreamIdentity>) -> bool {
        self.focus.as_ref() != previous
    }
}

/// Recomputes the focus after a roster change.
///
/// In priority order:
/// 1. `Local` stays while the host stream exists.
/// 2. A client that is still present stays, wherever it moved to.
/// 3. Otherwise the first client.
/// 4. Otherwise nothing, even when a host stream exists.
///
/// Pure: the same arguments always give the same transition.
pub fn resolve_focus<H>(previous: Option<&StreamIdentity>, roster: &Roster<H>) -> FocusTransition {
    let focus = match previous {
        Some(StreamIdentity::Local) if roster.has_host() => Some(StreamIdentity::Local),
        Some(id @ StreamIdentity::Remote(_)) if roster.client_position(id).is_some() => {
            Some(id.clone())
        }
        _ => roster.clients().first().map(|e| e.identity.clone()),
    };
    FocusTransition::between(previous, focus)
}

/// Focus chosen directly by the user. Unconditional.
pub fn select_focus(previous: Option<&StreamIdentity>, target: StreamIdentity) -> FocusTransition {
    FocusTransition::between(previous, Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{ParticipantId, RemoteId};

    fn roster(host: bool, clients: &[&str]) -> Roster<()> {
        let mut roster = Roster::empty();
        if host {
            roster = roster.with_host((), ParticipantId::new("me"));
        }
        for id in clients {
            roster = roster.with_client(RemoteId::new(*id), (), ParticipantId::new(*id));
        }
        roster
    }

    fn remote(id: &str) -> StreamIdentity {
        StreamIdentity::remote(id)
    }

    #[test]
    fn test_local_kept_while_host_present() {
        let t = resolve_focus(Some(&StreamIdentity::Local), &roster(true, &["a", "b"]));
        assert_eq!(t.focus, Some(StreamIdentity::Local));
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_present_client_kept_after_reorder() {
        let t = resolve_focus(Some(&remote("b")), &roster(false, &["c", "b", "a"]));
        assert_eq!(t.focus, Some(remote("b")));
    }

    #[test]
    fn test_vanished_client_falls_back_to_first() {
        let t = resolve_focus(Some(&remote("x")), &roster(true, &["a", "b"]));
        assert_eq!(t.focus, Some(remote("a")));
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_no_previous_focus_picks_first_client() {
        let t = resolve_focus(None, &roster(false, &["a", "b"]));
        assert_eq!(t.focus, Some(remote("a")));
    }

    #[test]
    fn test_empty_clients_gives_none_even_with_host() {
        let t = resolve_focus(Some(&remote("a")), &roster(true, &[]));
        assert_eq!(t.focus, None);

        let t = resolve_focus(None, &roster(true, &[]));
        assert_eq!(t.focus, None);
    }

    #[test]
    fn test_local_without_host_moves_to_client_and_mutes() {
        let t = resolve_focus(Some(&StreamIdentity::Local), &roster(false, &["x"]));
        assert_eq!(t.focus, Some(remote("x")));
        assert_eq!(t.effects, vec![FocusEffect::MuteLocal]);
    }

    #[test]
    fn test_local_without_anything_resolves_to_none_and_mutes() {
        let t = resolve_focus(Some(&StreamIdentity::Local), &roster(false, &[]));
        assert_eq!(t.focus, None);
        assert_eq!(t.effects, vec![FocusEffect::MuteLocal]);
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let r = roster(true, &["a", "b", "c"]);
        for previous in [None, Some(StreamIdentity::Local), Some(remote("b")), Some(remote("z"))] {
            let first = resolve_focus(previous.as_ref(), &r);
            let second = resolve_focus(previous.as_ref(), &r);
            assert_eq!(first, second);

            // Feeding the result back in is a fixed point.
            let again = resolve_focus(first.focus.as_ref(), &r);
            assert_eq!(again.focus, first.focus);
        }
    }

    #[test]
    fn test_select_away_from_local_mutes() {
        let t = select_focus(Some(&StreamIdentity::Local), remote("y"));
        assert_eq!(t.focus, Some(remote("y")));
        assert_eq!(t.effects, vec![FocusEffect::MuteLocal]);
    }

    #[test]
    fn test_select_into_local_has_no_effects() {
        let t = select_focus(Some(&remote("x")), StreamIdentity::Local);
        assert!(t.effects.is_empty());
        assert!(t.changed_from(Some(&remote("x"))));
    }
}
