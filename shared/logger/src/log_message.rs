//! Internal log message structure.

use crate::log_level::LogLevel;
use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// A single record, stamped when it is created rather than when it is written.
#[derive(Debug, Clone)]
pub(crate) struct LogMessage {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<String>,
    pub message: String,
}

impl LogMessage {
    pub fn new(level: LogLevel, component: Option<&str>, message: &str) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            level,
            component: component.map(str::to_string),
            message: message.to_string(),
        }
    }

    /// Formats the record as one line without the trailing newline:
    /// `[timestamp] LEVEL [component]: message`
    pub fn line(&self) -> String {
        match self.component {
            Some(ref component) => format!(
                "[{}] {} [{}]: {}",
                self.timestamp, self.level, component, self.message
            ),
            None => format!("[{}] {}: {}", self.timestamp, self.level, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_with_component() {
        let msg = LogMessage::new(LogLevel::Warn, Some("Playback"), "attach refused");
        let line = msg.line();

        assert!(line.contains("WARN [Playback]: attach refused"));
        assert!(!line.ends_with('\n'));
    }

    #[test]
    fn test_line_without_component() {
        let msg = LogMessage::new(LogLevel::Info, None, "started");
        assert!(msg.line().ends_with("INFO: started"));
    }

    #[test]
    fn test_timestamp_format() {
        let msg = LogMessage::new(LogLevel::Info, None, "Test");
        let ts = &msg.timestamp;

        // YYYY-MM-DD HH:MM:SS.mmm
        assert_eq!(ts.len(), 23);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[19..20], ".");
    }
}
