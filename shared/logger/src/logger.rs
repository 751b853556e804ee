//! Thread-safe, non-blocking logger.
//!
//! This module provides the main [`Logger`] interface. File-backed loggers
//! never block the caller on I/O: records are queued to a writer thread.

use crate::error::Result;
use crate::log_level::LogLevel;
use crate::log_message::LogMessage;
use crate::sink::Sink;
use std::path::PathBuf;

/// Cloneable logger handle.
///
/// Clones and component loggers derived with [`Logger::for_component`]
/// share the same sink, so a whole application writes through one writer
/// thread (or one capture buffer).
///
/// # Examples
///
/// ```no_run
/// use logging::{LogLevel, Logger};
///
/// let logger = Logger::new("viewer.log".into(), LogLevel::Info).unwrap();
/// let stage = logger.for_component("Stage");
/// stage.info("[FOCUS] focus -> local");
/// ```
#[derive(Clone)]
pub struct Logger {
    sink: Sink,
    level: LogLevel,
    component: Option<String>,
    console_output: bool,
}

impl Logger {
    /// Creates a file-backed logger with a dedicated writer thread.
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be created or opened.
    pub fn new(log_path: PathBuf, level: LogLevel) -> Result<Self> {
        Ok(Logger {
            sink: Sink::file(&log_path)?,
            level,
            component: None,
            console_output: false,
        })
    }

    /// Creates a logger that keeps every accepted record in memory.
    ///
    /// Retrieve the lines with [`Logger::captured`].
    pub fn capture(level: LogLevel) -> Self {
        Logger {
            sink: Sink::capture(),
            level,
            component: None,
            console_output: false,
        }
    }

    /// Also echo accepted records to stdout.
    pub fn with_console(mut self, console_output: bool) -> Self {
        self.console_output = console_output;
        self
    }

    /// Derives a logger tagged with `component` that shares this sink.
    pub fn for_component(&self, component: &str) -> Self {
        Logger {
            sink: self.sink.clone(),
            level: self.level,
            component: Some(component.to_string()),
            console_output: self.console_output,
        }
    }

    /// Minimum level this logger records.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Lines recorded so far by a capture logger (and its clones).
    pub fn captured(&self) -> Vec<String> {
        self.sink.captured()
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }

        let record = LogMessage::new(level, self.component.as_deref(), message);
        if self.console_output {
            println!("{}", record.line());
        }
        self.sink.deliver(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    fn wait_for_write() {
        thread::sleep(Duration::from_millis(50));
    }

    #[test]
    fn test_logger_creates_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::new(log_path.clone(), LogLevel::Debug).unwrap();
        logger.info("Test message");
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Test message"));
    }

    #[test]
    fn test_logger_respects_level() {
        let logger = Logger::capture(LogLevel::Warn);
        logger.debug("Debug message");
        logger.info("Info message");
        logger.warn("Warn message");
        logger.error("Error message");

        let lines = logger.captured();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Warn message"));
        assert!(lines[1].contains("Error message"));
    }

    #[test]
    fn test_component_loggers_share_sink() {
        let root = Logger::capture(LogLevel::Debug);
        let stage = root.for_component("Stage");
        let roster = root.for_component("Roster");

        stage.info("focus changed");
        roster.info("client joined");

        let lines = root.captured();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[Stage]: focus changed"));
        assert!(lines[1].contains("[Roster]: client joined"));
    }

    #[test]
    fn test_console_echo_keeps_sink_delivery() {
        let root = Logger::capture(LogLevel::Info).with_console(true);
        let stage = root.for_component("Stage");

        stage.debug("filtered");
        stage.info("echoed and kept");

        let lines = root.captured();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[Stage]: echoed and kept"));
    }

    #[test]
    fn test_logger_clone_across_threads() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::new(log_path.clone(), LogLevel::Info).unwrap();
        let logger_clone = logger.clone();

        thread::spawn(move || {
            logger_clone.info("Message from thread");
        })
        .join()
        .unwrap();

        logger.info("Message from main");
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Message from thread"));
        assert!(content.contains("Message from main"));
    }
}
