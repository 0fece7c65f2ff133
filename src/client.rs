//! Backend client for reading entity state.
//!
//! One bounded-time GET per entity, bearer-token auth, JSON body. Reads
//! never fail outward: any transport or parse problem collapses into the
//! sentinel reading so a single dead sensor degrades one field instead of
//! killing the whole render.

use std::time::Duration;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::Config;

/// State string substituted when a read fails.
pub const ERROR_STATE: &str = "Error";

/// One entity's state as returned by the backend.
///
/// `attributes` is kept as raw JSON since each entity type carries its own
/// shape (the calendar entity's `message`/`all_day`/`start_time`, for
/// example).
#[derive(Debug, Clone, Deserialize)]
pub struct EntityReading {
    /// Primary state value, always a string on the wire
    pub state: String,

    /// Entity attributes, empty for sentinel readings
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl EntityReading {
    /// The sentinel reading substituted on any fetch failure.
    pub fn error() -> Self {
        Self {
            state: ERROR_STATE.to_string(),
            attributes: Map::new(),
        }
    }

    /// Whether this is the sentinel reading.
    pub fn is_error(&self) -> bool {
        self.state == ERROR_STATE
    }

    /// String attribute lookup.
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    /// Boolean attribute lookup.
    pub fn attr_bool(&self, key: &str) -> Option<bool> {
        self.attributes.get(key).and_then(Value::as_bool)
    }
}

/// Blocking client for the home-automation REST backend.
///
/// # Example
///
/// ```rust,no_run
/// use inkboard::Client;
///
/// let client = Client::new("http://hass.local:8123/api/states/", "secret-token");
/// let reading = client.fetch("alarm_control_panel.master");
/// println!("alarm: {}", reading.state);
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl Client {
    /// Create a client with the default request timeout.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_timeout(base_url, token, Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Create a client from a [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::with_timeout(
            config.base_url.clone(),
            config.token.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Read one entity's current state.
    ///
    /// Never fails: network errors, timeouts, non-JSON bodies and missing
    /// fields all yield [`EntityReading::error`]. No retries.
    pub fn fetch(&self, entity_id: &str) -> EntityReading {
        let url = format!("{}{}", self.base_url, entity_id);

        match self.try_fetch(&url) {
            Ok(reading) => reading,
            Err(err) => {
                tracing::warn!("fetch of {} failed: {}", entity_id, err);
                EntityReading::error()
            }
        }
    }

    fn try_fetch(&self, url: &str) -> Result<EntityReading, reqwest::Error> {
        self.http
            .get(url)
            .bearer_auth(&self.token)
            .send()?
            .json::<EntityReading>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_deserialization() {
        let json = r#"{"state": "disarmed", "attributes": {"friendly_name": "Master"}}"#;
        let reading: EntityReading = serde_json::from_str(json).unwrap();

        assert_eq!(reading.state, "disarmed");
        assert_eq!(reading.attr_str("friendly_name"), Some("Master"));
        assert!(!reading.is_error());
    }

    #[test]
    fn test_reading_missing_attributes() {
        let json = r#"{"state": "5"}"#;
        let reading: EntityReading = serde_json::from_str(json).unwrap();

        assert_eq!(reading.state, "5");
        assert!(reading.attributes.is_empty());
    }

    #[test]
    fn test_attr_lookups() {
        let json = r#"{"state": "on", "attributes": {"all_day": true, "message": "Dentist"}}"#;
        let reading: EntityReading = serde_json::from_str(json).unwrap();

        assert_eq!(reading.attr_bool("all_day"), Some(true));
        assert_eq!(reading.attr_str("message"), Some("Dentist"));
        assert_eq!(reading.attr_str("missing"), None);
        assert_eq!(reading.attr_bool("message"), None);
    }

    #[test]
    fn test_sentinel_reading() {
        let reading = EntityReading::error();
        assert_eq!(reading.state, ERROR_STATE);
        assert!(reading.is_error());
        assert!(reading.attributes.is_empty());
    }

    #[test]
    fn test_fetch_failure_returns_sentinel() {
        // Port 9 (discard) is not listening; connection is refused immediately.
        let client = Client::with_timeout(
            "http://127.0.0.1:9/",
            "token",
            Duration::from_millis(200),
        );
        let reading = client.fetch("sensor.anything");
        assert!(reading.is_error());
    }
}
