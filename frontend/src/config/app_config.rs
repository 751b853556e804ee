//! Application Configuration
//!
//! Viewer configuration: logging, room identity, invite link and the
//! simulated roster used in place of a signaling connection.

use logging::LogLevel;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const CONFIG_FILE: &str = "app.conf";
const APP_DIR: &str = "stage-viewer";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_path: PathBuf,
    pub log_level: LogLevel,
    /// Also echo log lines to stdout
    pub log_console: bool,
    /// Name shown for the local participant
    pub display_name: String,
    pub room_id: String,
    /// Base of the invite link; the room id is appended. Empty disables copying.
    pub invite_base_url: String,
    /// How long the floating controls stay up after the pointer stops
    pub controls_idle: Duration,
    /// Remote participants present when the viewer starts
    pub simulated_participants: usize,
    /// Whether simulated participants keep joining and leaving
    pub roster_churn: bool,
    /// Probability in `0.0..=1.0` that attaching a stream is refused
    pub playback_failure_rate: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("stage-viewer.log"),
            log_level: LogLevel::Info,
            log_console: false,
            display_name: "You".to_string(),
            room_id: "lobby".to_string(),
            invite_base_url: "https://stage.local/join".to_string(),
            controls_idle: stage::visibility::DEFAULT_QUIESCENCE,
            simulated_participants: 3,
            roster_churn: true,
            playback_failure_rate: 0.0,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a .conf file
    ///
    /// Format:
    /// ```text
    /// log_path=stage-viewer.log
    /// log_level=Info
    /// log_console=false
    /// display_name=Ada
    /// room_id=standup
    /// invite_base_url=https://stage.local/join
    /// controls_idle_ms=1000
    /// simulated_participants=3
    /// roster_churn=true
    /// playback_failure_rate=0.0
    /// ```
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Parses `key=value` lines over the defaults. Bad values keep the default.
    pub fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                eprintln!("Warning: Ignoring malformed configuration line '{}'", line);
                continue;
            };
            config.apply(key.trim(), value.trim());
        }

        config
    }

    fn apply(&mut self, key: &str, value: &str) {
        match key {
            "log_path" => self.log_path = PathBuf::from(value),
            "log_level" => match value.parse() {
                Ok(level) => self.log_level = level,
                Err(e) => eprintln!("Warning: {}, keeping {}", e, self.log_level),
            },
            "log_console" => {
                if let Some(console) = parse_or_warn(key, value) {
                    self.log_console = console;
                }
            }
            "display_name" => self.display_name = value.to_string(),
            "room_id" => self.room_id = value.to_string(),
            "invite_base_url" => self.invite_base_url = value.to_string(),
            "controls_idle_ms" => {
                if let Some(ms) = parse_or_warn::<u64>(key, value) {
                    self.controls_idle = Duration::from_millis(ms);
                }
            }
            "simulated_participants" => {
                if let Some(count) = parse_or_warn(key, value) {
                    self.simulated_participants = count;
                }
            }
            "roster_churn" => {
                if let Some(churn) = parse_or_warn(key, value) {
                    self.roster_churn = churn;
                }
            }
            "playback_failure_rate" => {
                if let Some(rate) = parse_or_warn::<f64>(key, value) {
                    self.playback_failure_rate = rate.clamp(0.0, 1.0);
                }
            }
            _ => {
                // Ignore unknown keys for forward compatibility
                eprintln!("Warning: Unknown configuration key '{}' ignored", key);
            }
        }
    }

    /// Link others use to join this room, or empty when no base is configured.
    pub fn invite_link(&self) -> String {
        if self.invite_base_url.is_empty() {
            return String::new();
        }
        format!("{}/{}", self.invite_base_url.trim_end_matches('/'), self.room_id)
    }

    /// Loads configuration from the first location that has one.
    /// Tries in order: ./app.conf, ./frontend/app.conf, ../app.conf, then the
    /// user config directory. Falls back to defaults.
    pub fn load() -> Self {
        let mut candidates: Vec<PathBuf> = ["app.conf", "frontend/app.conf", "../app.conf"]
            .iter()
            .map(PathBuf::from)
            .collect();
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join(APP_DIR).join(CONFIG_FILE));
        }

        for path in candidates {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    println!("Loaded configuration from: {}", path.display());
                    return config;
                }
                Err(_) => continue,
            }
        }

        println!("No configuration file found, using defaults");
        Self::default()
    }
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    let parsed = value.parse().ok();
    if parsed.is_none() {
        eprintln!("Warning: Invalid value '{}' for '{}', keeping default", value, key);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.log_path, PathBuf::from("stage-viewer.log"));
        assert_eq!(config.controls_idle, Duration::from_millis(1000));
        assert_eq!(config.playback_failure_rate, 0.0);
    }

    #[test]
    fn test_parse_content() {
        let content = "\
            # Test config\n\
            log_level=Debug\n\
            display_name=Ada\n\
            room_id=standup\n\
            controls_idle_ms=2500\n\
            simulated_participants=5\n\
            roster_churn=false\n\
            playback_failure_rate=0.25\n\
        ";

        let config = AppConfig::parse(content);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.display_name, "Ada");
        assert_eq!(config.room_id, "standup");
        assert_eq!(config.controls_idle, Duration::from_millis(2500));
        assert_eq!(config.simulated_participants, 5);
        assert!(!config.roster_churn);
        assert_eq!(config.playback_failure_rate, 0.25);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let config = AppConfig::parse("controls_idle_ms=soon\nlog_level=loud\nnot a pair\n");
        assert_eq!(config.controls_idle, Duration::from_millis(1000));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_failure_rate_is_clamped() {
        let config = AppConfig::parse("playback_failure_rate=3.5");
        assert_eq!(config.playback_failure_rate, 1.0);
    }

    #[test]
    fn test_log_console_flag() {
        assert!(!AppConfig::default().log_console);
        assert!(AppConfig::parse("log_console=true").log_console);
        // Malformed value keeps the default
        assert!(!AppConfig::parse("log_console=loud").log_console);
    }

    #[test]
    fn test_invite_link() {
        let mut config = AppConfig::parse("invite_base_url=https://example.org/join/\nroom_id=abc");
        assert_eq!(config.invite_link(), "https://example.org/join/abc");

        config.invite_base_url.clear();
        assert_eq!(config.invite_link(), "");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "room_id=from-file\n").unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(config.room_id, "from-file");
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = AppConfig::load_from_file(Path::new("/path/that/does/not/exist.conf"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
