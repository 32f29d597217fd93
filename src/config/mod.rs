//! Application configuration.
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Values use the `WIGWAMNOW` prefix with
//! `__` separating nested sections, e.g.
//! `WIGWAMNOW__BACKEND__EXTERNAL_HOST=https://wigwamnow.example.com`.

mod backend;
mod error;
mod google;
mod storage;

pub use backend::BackendConfig;
pub use error::{ConfigError, ValidationError};
pub use google::GoogleConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// WigwamNow backend (external host, timeouts).
    pub backend: BackendConfig,

    /// Google hybrid-auth configuration (client id, scopes, redirect URI).
    pub google: GoogleConfig,

    /// Local persisted-state configuration.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Loads configuration from environment variables, reading a `.env`
    /// file first when present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WIGWAMNOW")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of all sections.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.backend.validate()?;
        self.google.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}
