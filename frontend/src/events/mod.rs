mod feed_command;
mod feed_event;
mod ui_command;

pub use feed_command::FeedCommand;
pub use feed_event::FeedEvent;
pub use ui_command::UiCommand;
