//! Local persisted-state configuration.

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where process-wide auth flags are persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the auth-state file.
    #[serde(default = "default_auth_state_path")]
    pub auth_state_path: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.auth_state_path.as_os_str().is_empty() {
            return Err(ValidationError::InvalidAuthStatePath);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            auth_state_path: default_auth_state_path(),
        }
    }
}

fn default_auth_state_path() -> PathBuf {
    PathBuf::from("wigwamnow-auth.json")
}
