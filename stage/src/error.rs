//! Failures reported by external collaborators.
//!
//! None of these are fatal to the stage: they become transient
//! [`Notification`](crate::Notification)s and the state is left as it was.

use thiserror::Error;

/// The platform refused to attach or start a stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("playback was rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,

    #[error("clipboard write failed: {0}")]
    Write(String),
}
