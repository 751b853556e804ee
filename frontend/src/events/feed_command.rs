use stage::DisplaySettings;

/// Commands sent from the UI thread to the roster feed thread
#[derive(Debug)]
pub enum FeedCommand {
    StartPresenting,
    StopPresenting,
    ToggleMicrophone,
    UpdateDisplayName(String),
    SaveDisplaySettings(DisplaySettings),
    Shutdown,
}
