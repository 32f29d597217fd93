//! Google hybrid-auth configuration.

use serde::Deserialize;

use super::error::ValidationError;

/// Configuration for the Google provider's server-side (hybrid) auth flow.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    /// OAuth client id of the web server component.
    pub client_id: String,

    /// Space-separated OAuth scopes requested for the server.
    #[serde(default = "default_scopes")]
    pub scopes: String,

    /// Space-separated app-activity types the app may write.
    #[serde(default = "default_visible_activities")]
    pub visible_activities: String,

    /// Redirect URI sent with the one-time code exchange.
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
}

impl GoogleConfig {
    /// The combined scope string handed to the vendor SDK when requesting a
    /// one-time server auth code.
    pub fn scope_string(&self) -> String {
        format!(
            "oauth2:server:client_id:{}:api_scope:{}",
            self.client_id, self.scopes
        )
    }

    /// Visible activity types as a list.
    pub fn visible_activities_list(&self) -> Vec<String> {
        self.visible_activities
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Validate Google configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.client_id.is_empty() {
            return Err(ValidationError::MissingRequired("google.client_id"));
        }
        if self.scopes.trim().is_empty() {
            return Err(ValidationError::NoScopes);
        }
        if self.redirect_uri.is_empty() {
            return Err(ValidationError::MissingRequired("google.redirect_uri"));
        }
        Ok(())
    }
}

fn default_scopes() -> String {
    "https://www.googleapis.com/auth/plus.login".to_string()
}

fn default_visible_activities() -> String {
    "http://schemas.google.com/AddActivity http://schemas.google.com/ReserveActivity".to_string()
}

fn default_redirect_uri() -> String {
    "postmessage".to_string()
}
