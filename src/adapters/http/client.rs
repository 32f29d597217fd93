//! HTTP implementation of the WigwamNow backend port.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::BackendConfig;
use crate::domain::wigwam::{Listing, Wigwam};
use crate::ports::{ApiError, FacebookTokenExchange, GoogleCodeExchange, WigwamApi};

/// reqwest-backed client for the WigwamNow REST backend.
pub struct HttpWigwamApi {
    client: Client,
    base_url: String,
}

impl HttpWigwamApi {
    /// Creates a client against the configured external host.
    pub fn new(config: &BackendConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.external_host.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|e| {
            tracing::error!(path, error = %e, "malformed backend response");
            ApiError::Decode {
                path: path.to_string(),
                message: e.to_string(),
            }
        })
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl WigwamApi for HttpWigwamApi {
    async fn list_wigwams(&self) -> Result<Vec<Wigwam>, ApiError> {
        self.get_json("/wigwams.json").await
    }

    async fn get_wigwam(&self, id: i64) -> Result<Wigwam, ApiError> {
        self.get_json(&format!("/wigwams/{}.json", id)).await
    }

    async fn availability(&self, id: i64) -> Result<Vec<Listing>, ApiError> {
        self.get_json(&format!("/wigwams/{}/availability.json", id))
            .await
    }

    async fn send_facebook_token(&self, exchange: &FacebookTokenExchange) -> Result<(), ApiError> {
        tracing::debug!("posting facebook access token to backend");
        self.post_json("/auth/facebook/hybrid.json", exchange).await
    }

    async fn send_google_code(&self, exchange: &GoogleCodeExchange) -> Result<(), ApiError> {
        tracing::debug!("posting google one-time code to backend");
        self.post_json("/auth/gplus/hybrid.json", exchange).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(host: &str) -> BackendConfig {
        BackendConfig {
            external_host: host.to_string(),
            request_timeout_secs: 5,
        }
    }

    #[test]
    fn urls_are_built_against_the_external_host() {
        let api = HttpWigwamApi::new(&test_config("https://wigwamnow.example.com"));
        assert_eq!(
            api.url("/wigwams.json"),
            "https://wigwamnow.example.com/wigwams.json"
        );
        assert_eq!(
            api.url("/wigwams/7/availability.json"),
            "https://wigwamnow.example.com/wigwams/7/availability.json"
        );
    }

    #[test]
    fn trailing_slash_on_host_is_trimmed() {
        let api = HttpWigwamApi::new(&test_config("https://wigwamnow.example.com/"));
        assert_eq!(
            api.url("/auth/gplus/hybrid.json"),
            "https://wigwamnow.example.com/auth/gplus/hybrid.json"
        );
    }
}
