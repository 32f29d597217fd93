//! Backend API port - the WigwamNow REST service.
//!
//! The backend is an external fixed service; this port covers the listing
//! endpoints and the two hybrid-auth exchange endpoints.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::wigwam::{Listing, Wigwam};

/// Errors raised by the backend API.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("network error calling {path}: {message}")]
    Network { path: String, message: String },

    /// The server answered with a non-success status.
    #[error("server returned {status} for {path}")]
    Status { path: String, status: u16 },

    /// The response body did not match the expected record shape.
    #[error("malformed response from {path}: {message}")]
    Decode { path: String, message: String },
}

/// Body of the Facebook hybrid auth exchange: the portable access token and
/// when it expires.
#[derive(Debug, Clone, Serialize)]
pub struct FacebookTokenExchange {
    pub access_token: String,
    pub expires_at: String,
}

/// Body of the Google hybrid auth exchange: the one-time server auth code
/// and the redirect URI the server completes the flow with.
#[derive(Debug, Clone, Serialize)]
pub struct GoogleCodeExchange {
    pub code: String,
    pub redirect_uri: String,
}

/// The WigwamNow backend REST surface.
#[async_trait]
pub trait WigwamApi: Send + Sync {
    /// GET `/wigwams.json` - all wigwams.
    async fn list_wigwams(&self) -> Result<Vec<Wigwam>, ApiError>;

    /// GET `/wigwams/{id}.json` - one wigwam.
    async fn get_wigwam(&self, id: i64) -> Result<Wigwam, ApiError>;

    /// GET `/wigwams/{id}/availability.json` - availability windows.
    async fn availability(&self, id: i64) -> Result<Vec<Listing>, ApiError>;

    /// POST `/auth/facebook/hybrid.json` - exchange a Facebook token for a
    /// server-side session.
    async fn send_facebook_token(&self, exchange: &FacebookTokenExchange) -> Result<(), ApiError>;

    /// POST `/auth/gplus/hybrid.json` - exchange a Google one-time code for
    /// a server-side session.
    async fn send_google_code(&self, exchange: &GoogleCodeExchange) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wigwam_api_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn WigwamApi) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn WigwamApi>>();
    }

    #[test]
    fn exchange_bodies_serialize_with_expected_fields() {
        let fb = serde_json::to_value(FacebookTokenExchange {
            access_token: "tok".to_string(),
            expires_at: "2013-06-01 00:00:00 UTC".to_string(),
        })
        .unwrap();
        assert_eq!(fb["access_token"], "tok");
        assert!(fb.get("expires_at").is_some());

        let gp = serde_json::to_value(GoogleCodeExchange {
            code: "4/abc".to_string(),
            redirect_uri: "postmessage".to_string(),
        })
        .unwrap();
        assert_eq!(gp["code"], "4/abc");
        assert_eq!(gp["redirect_uri"], "postmessage");
    }
}
