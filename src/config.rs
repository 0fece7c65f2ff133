//! Configuration for the render pipeline.
//!
//! Everything the driver needs is carried in an explicit [`Config`] value
//! rather than ambient process state, which keeps the derivation and render
//! code pure and testable. The usual entry point is [`Config::from_env`].

use std::path::PathBuf;

use crate::error::Error;
use crate::DEFAULT_TIMEOUT_SECS;

/// Entity ids consumed from the backend.
#[derive(Debug, Clone)]
pub struct Entities {
    /// Open doors/windows count sensor (numeric-as-string state)
    pub openings: String,
    /// Human-readable "last opened" sensor for the kitchen door
    pub door_last_opened: String,
    /// Alarm control panel
    pub alarm: String,
    /// Calendar entity carrying `message`, `all_day`, `start_time` attributes
    pub calendar: String,
    /// Dog-outside datetime helper (bridge feed only)
    pub dog_outside: String,
}

impl Default for Entities {
    fn default() -> Self {
        Self {
            openings: "number.open_doors_and_windows".to_string(),
            door_last_opened: "sensor.kitchen_door_last_opened_human".to_string(),
            alarm: "alarm_control_panel.master".to_string(),
            calendar: "calendar.primary".to_string(),
            dog_outside: "input_datetime.time_dog_was_outside".to_string(),
        }
    }
}

/// Render pipeline configuration.
///
/// # Example
///
/// ```rust
/// use inkboard::Config;
///
/// let config = Config::new("http://hass.local:8123/api/states/", "secret-token")
///     .with_state_path("/var/lib/inkboard/page_state.txt")
///     .with_output_path("/var/lib/inkboard/frame.ppm");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL; entity ids are appended verbatim
    pub base_url: String,
    /// Bearer token for the backend
    pub token: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Location of the persisted page index token
    pub state_path: PathBuf,
    /// Where the file-backed sink writes the finished frame
    pub output_path: PathBuf,
    /// Bind address for the bridge server
    pub bridge_addr: String,
    /// Entity ids to read
    pub entities: Entities,
}

impl Config {
    /// Create a configuration with defaults for everything but the backend.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            state_path: PathBuf::from("page_state.txt"),
            output_path: PathBuf::from("frame.ppm"),
            bridge_addr: "0.0.0.0:5000".to_string(),
            entities: Entities::default(),
        }
    }

    /// Load configuration from the environment.
    ///
    /// `HA_URL` and `HA_TOKEN` are required; the rest are optional:
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `INKBOARD_STATE` | `page_state.txt` |
    /// | `INKBOARD_OUTPUT` | `frame.ppm` |
    /// | `INKBOARD_BRIDGE_ADDR` | `0.0.0.0:5000` |
    pub fn from_env() -> Result<Self, Error> {
        let base_url =
            std::env::var("HA_URL").map_err(|_| Error::Config("HA_URL is not set".to_string()))?;
        let token = std::env::var("HA_TOKEN")
            .map_err(|_| Error::Config("HA_TOKEN is not set".to_string()))?;

        let mut config = Self::new(base_url, token);
        if let Ok(path) = std::env::var("INKBOARD_STATE") {
            config.state_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("INKBOARD_OUTPUT") {
            config.output_path = PathBuf::from(path);
        }
        if let Ok(addr) = std::env::var("INKBOARD_BRIDGE_ADDR") {
            config.bridge_addr = addr;
        }
        Ok(config)
    }

    /// Set the page index file location.
    #[must_use]
    pub fn with_state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_path = path.into();
        self
    }

    /// Set the frame output location.
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Override the consumed entity ids.
    #[must_use]
    pub fn with_entities(mut self, entities: Entities) -> Self {
        self.entities = entities;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("http://hass.local:8123/api/states/", "token");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.state_path, PathBuf::from("page_state.txt"));
        assert_eq!(config.entities.openings, "number.open_doors_and_windows");
        assert_eq!(config.bridge_addr, "0.0.0.0:5000");
    }

    #[test]
    fn test_builder_pattern() {
        let config = Config::new("http://hass.local/", "token")
            .with_state_path("/tmp/state.txt")
            .with_output_path("/tmp/out.ppm")
            .with_timeout_secs(2);

        assert_eq!(config.state_path, PathBuf::from("/tmp/state.txt"));
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.ppm"));
        assert_eq!(config.timeout_secs, 2);
    }
}
