use stage::{Action, DisplaySettings};

/// Commands initiated by the UI (View -> Controller)
/// These are "requests" to perform actions.
#[derive(Debug, Clone)]
pub enum UiCommand {
    // --- Stage ---
    /// A bound key, a thumbnail click or a control bar button
    Stage(Action),
    /// The pointer moved somewhere over the window
    PointerMoved,
    /// Escape: leave fullscreen if the window is in it
    LeaveFullscreen,

    // --- Settings dialog ---
    ToggleMicrophone,
    SaveSettings(DisplaySettings),
    CloseSettings,
}
