//! Focus and per-stream control state for a live session stage.
//!
//! The stage shows one stream large (the focus) and the rest as thumbnails.
//! This crate decides which stream that is, tracks mute/volume per stream,
//! turns key and pointer input into transitions, and hands the result to the
//! rendering and playback layers through plain values.
//!
//! Nothing here owns a thread or blocks: every transition runs synchronously
//! on the caller's event loop.

pub mod clipboard;
pub mod controls;
pub mod error;
pub mod focus;
pub mod fullscreen;
pub mod identity;
pub mod keymap;
pub mod navigation;
pub mod notification;
pub mod playback;
pub mod roster;
pub mod session;
pub mod visibility;

pub use clipboard::{Clipboard, copy_link};
pub use controls::{ControlEntry, ControlStore};
pub use error::{ClipboardError, PlaybackError};
pub use focus::{FocusEffect, FocusTransition, resolve_focus, select_focus};
pub use fullscreen::{FullscreenEntry, FullscreenOutcome, request_fullscreen};
pub use identity::{ParticipantId, RemoteId, StreamIdentity};
pub use keymap::{Key, Modifiers, action_for};
pub use navigation::{Action, Direction};
pub use notification::{Notification, NotificationLevel};
pub use playback::{PlaybackBinder, PlaybackSettings, bind_playback};
pub use roster::{Participant, Roster, RosterEntry};
pub use session::{DisplaySettings, Session, SessionCommand, SessionOptions, StageView};
pub use visibility::VisibilityTimer;
