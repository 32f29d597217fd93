//! WigwamNow backend configuration.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Backend REST service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the external WigwamNow host, e.g.
    /// `https://wigwamnow.example.com`. Also used to build canonical wigwam
    /// links in shares and graph actions.
    pub external_host: String,

    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl BackendConfig {
    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate backend configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.external_host.is_empty() {
            return Err(ValidationError::MissingRequired("backend.external_host"));
        }
        if !self.external_host.starts_with("http://") && !self.external_host.starts_with("https://")
        {
            return Err(ValidationError::InvalidExternalHost);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_request_timeout() -> u64 {
    30
}
