//! Discrete user actions and circular navigation over client streams.

use crate::identity::{RemoteId, StreamIdentity};
use crate::roster::Roster;

/// Everything the user can ask the stage to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    TogglePresentation,
    RequestFullscreen,
    CopyLink,
    CycleNext,
    CyclePrevious,
    ToggleMuteFocused,
    VolumeUpFocused,
    VolumeDownFocused,
    /// Absolute volume from the slider.
    SetVolumeFocused(i32),
    OpenSettings,
    SelectStream(StreamIdentity),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Client that cycling from `focus` lands on, or `None` without clients.
///
/// Only clients take part; the host stream is never a stop. When the focus
/// is not a client (local or nothing) the search index is -1, so `Next`
/// lands on the first client and `Previous` on the last one.
pub fn cycle_target<H>(
    roster: &Roster<H>,
    focus: Option<&StreamIdentity>,
    direction: Direction,
) -> Option<RemoteId> {
    let clients = roster.clients();
    let count = clients.len() as isize;
    if count == 0 {
        return None;
    }

    let index = focus
        .and_then(|id| roster.client_position(id))
        .map_or(-1, |i| i as isize);

    let target = match direction {
        Direction::Next => (index + 1).rem_euclid(count),
        Direction::Previous if index <= 0 => count - 1,
        Direction::Previous => index - 1,
    };

    clients[target as usize].identity.as_remote().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::ParticipantId;

    fn abc(host: bool) -> Roster<()> {
        let mut roster = Roster::empty();
        if host {
            roster = roster.with_host((), ParticipantId::new("me"));
        }
        for id in ["a", "b", "c"] {
            roster = roster.with_client(RemoteId::new(id), (), ParticipantId::new(id));
        }
        roster
    }

    fn next(roster: &Roster<()>, focus: Option<StreamIdentity>) -> Option<RemoteId> {
        cycle_target(roster, focus.as_ref(), Direction::Next)
    }

    fn previous(roster: &Roster<()>, focus: Option<StreamIdentity>) -> Option<RemoteId> {
        cycle_target(roster, focus.as_ref(), Direction::Previous)
    }

    #[test]
    fn test_next_advances_and_wraps() {
        let roster = abc(false);
        assert_eq!(next(&roster, Some(StreamIdentity::remote("b"))), Some(RemoteId::new("c")));
        assert_eq!(next(&roster, Some(StreamIdentity::remote("c"))), Some(RemoteId::new("a")));
    }

    #[test]
    fn test_previous_retreats_and_wraps() {
        let roster = abc(false);
        assert_eq!(previous(&roster, Some(StreamIdentity::remote("b"))), Some(RemoteId::new("a")));
        assert_eq!(previous(&roster, Some(StreamIdentity::remote("a"))), Some(RemoteId::new("c")));
    }

    #[test]
    fn test_not_found_focus_enters_from_the_ends() {
        let roster = abc(true);
        for focus in [None, Some(StreamIdentity::Local), Some(StreamIdentity::remote("gone"))] {
            assert_eq!(next(&roster, focus.clone()), Some(RemoteId::new("a")));
            assert_eq!(previous(&roster, focus), Some(RemoteId::new("c")));
        }
    }

    #[test]
    fn test_empty_clients_is_noop() {
        let roster: Roster<()> = Roster::empty().with_host((), ParticipantId::new("me"));
        assert_eq!(next(&roster, Some(StreamIdentity::Local)), None);
        assert_eq!(previous(&roster, None), None);
    }

    #[test]
    fn test_single_client_cycles_onto_itself() {
        let roster: Roster<()> =
            Roster::empty().with_client(RemoteId::new("a"), (), ParticipantId::new("a"));
        let focus = Some(StreamIdentity::remote("a"));
        assert_eq!(next(&roster, focus.clone()), Some(RemoteId::new("a")));
        assert_eq!(previous(&roster, focus), Some(RemoteId::new("a")));
    }
}
