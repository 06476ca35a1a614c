//! Client configuration.

use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::error::{DetectError, DetectResult};

/// Address the detection backend binds to by default.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

/// File extensions the detection backend accepts.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "webp"];

/// Which response owns the display when uploads overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Only the most recently started upload may write the display;
    /// responses from older uploads are dropped.
    #[default]
    LatestRequest,
    /// Whichever response arrives last writes the display.
    LastResponse,
}

impl FromStr for OverlapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest-request" => Ok(OverlapPolicy::LatestRequest),
            "last-response" => Ok(OverlapPolicy::LastResponse),
            other => Err(format!(
                "unknown overlap policy '{}' (expected latest-request or last-response)",
                other
            )),
        }
    }
}

impl std::fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlapPolicy::LatestRequest => write!(f, "latest-request"),
            OverlapPolicy::LastResponse => write!(f, "last-response"),
        }
    }
}

/// Configuration for the prediction client and widget.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the detection backend
    pub server: Url,
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
    /// Display ownership for overlapping uploads
    pub overlap: OverlapPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: Url::parse(DEFAULT_SERVER).expect("default server URL is valid"),
            timeout: None,
            overlap: OverlapPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Create a config for the given server base URL.
    pub fn new(server: &str) -> DetectResult<Self> {
        let server = Url::parse(server)?;
        if server.cannot_be_a_base() {
            return Err(DetectError::InvalidUrl(format!(
                "{} cannot be used as a base URL",
                server
            )));
        }
        Ok(Self {
            server,
            ..Self::default()
        })
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.timeout = secs.map(Duration::from_secs);
        self
    }

    /// Set the overlap policy.
    pub fn with_overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.server.as_str(), "http://127.0.0.1:5000/");
        assert_eq!(config.timeout, None);
        assert_eq!(config.overlap, OverlapPolicy::LatestRequest);
    }

    #[test]
    fn test_config_rejects_non_base_url() {
        assert!(ClientConfig::new("mailto:someone@example.com").is_err());
        assert!(ClientConfig::new("not a url").is_err());
    }

    #[test]
    fn test_config_builders() {
        let config = ClientConfig::new("http://detector.local:8080")
            .unwrap()
            .with_timeout_secs(Some(30))
            .with_overlap(OverlapPolicy::LastResponse);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.overlap, OverlapPolicy::LastResponse);
    }

    #[test]
    fn test_overlap_policy_parse() {
        assert_eq!(
            "latest-request".parse::<OverlapPolicy>().unwrap(),
            OverlapPolicy::LatestRequest
        );
        assert_eq!(
            "last-response".parse::<OverlapPolicy>().unwrap(),
            OverlapPolicy::LastResponse
        );
        assert!("first-wins".parse::<OverlapPolicy>().is_err());
        assert_eq!(OverlapPolicy::LastResponse.to_string(), "last-response");
    }
}
