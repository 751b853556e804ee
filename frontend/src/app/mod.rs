//! Application Module - MVU Controller
//!
//! This module implements the Controller layer of the MVU architecture.
//! It coordinates between the view layer (pages), the stage session and the
//! background roster feed thread.
//!
//! # Structure
//!
//! - `state.rs`: Application state definition and MVU loop
//! - `input.rs`: Keyboard and pointer input to UI commands
//! - `ui_handler.rs`: Command dispatcher for UI actions
//! - `command_handler.rs`: Executes session commands (feed, fullscreen, clipboard)
//! - `feed_handler.rs`: Processes events from the feed thread
//! - `binder.rs`, `platform.rs`: egui side of the stage's collaborator traits
//!
//! # Communication Flow
//!
//! ```text
//! View (pages) --> UiCommand --> ui_handler --> Session::dispatch --> SessionCommand
//!                                                                   \--> FeedCommand --> Feed thread
//!
//! Feed thread --> FeedEvent --> feed_handler --> Session::apply_roster, textures
//! ```

mod binder;
mod command_handler;
mod feed_handler;
mod input;
mod platform;
mod state;
mod ui_handler;

pub use state::App;
