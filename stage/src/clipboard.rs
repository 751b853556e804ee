//! Invite-link copying.

use crate::error::ClipboardError;
use crate::notification::Notification;
use logging::Logger;

/// Platform clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Copies `link` and describes the outcome for the user.
pub fn copy_link(clipboard: &mut dyn Clipboard, link: &str, logger: &Logger) -> Notification {
    match clipboard.write_text(link) {
        Ok(()) => {
            logger.info(&format!("[LINK] Copied invite link {}", link));
            Notification::success("Invite link copied to clipboard")
        }
        Err(e) => {
            logger.warn(&format!("[LINK] Could not copy invite link: {}", e));
            Notification::error(format!("Could not copy invite link: {}", e))
        }
    }
}
