use crate::models::StreamHandle;
use stage::Roster;

/// Events sent from the roster feed thread back to the UI thread
pub enum FeedEvent {
    /// A complete new roster snapshot
    RosterChanged(Roster<StreamHandle>),

    /// A decoded frame and the current audio level (0.0..=1.0) of a stream
    Frame {
        handle: StreamHandle,
        image: egui::ColorImage,
        level: f32,
    },

    MicrophoneChanged(bool),

    Error(String),
}
