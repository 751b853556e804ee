//! Stream and participant identities.

use std::fmt;

/// Opaque identifier of a remote (inbound) stream.
///
/// Stable for the lifetime of a stream, but a later stream may reuse it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RemoteId(String);

impl RemoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of any stream the stage can show.
///
/// `Local` is the presenter's own outbound stream. It is a variant, not a
/// reserved string, so no remote id can ever compare equal to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StreamIdentity {
    Local,
    Remote(RemoteId),
}

impl StreamIdentity {
    pub fn remote(id: impl Into<String>) -> Self {
        StreamIdentity::Remote(RemoteId::new(id))
    }

    pub fn is_local(&self) -> bool {
        matches!(self, StreamIdentity::Local)
    }

    pub fn as_remote(&self) -> Option<&RemoteId> {
        match self {
            StreamIdentity::Local => None,
            StreamIdentity::Remote(id) => Some(id),
        }
    }
}

impl From<RemoteId> for StreamIdentity {
    fn from(id: RemoteId) -> Self {
        StreamIdentity::Remote(id)
    }
}

impl fmt::Display for StreamIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamIdentity::Local => f.write_str("local"),
            StreamIdentity::Remote(id) => write!(f, "remote:{}", id),
        }
    }
}

/// Identifier of a participant (the owner of a stream).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
