//! Facebook session port - the surface of the Facebook vendor SDK the
//! social core depends on: session/permission state, the feed dialog,
//! open-graph action publishing, photo upload, and the access token used in
//! the hybrid auth exchange.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::Secret;
use thiserror::Error;

/// Categories of graph request failures, used to pick the user-facing
/// message and follow-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphErrorCategory {
    /// The user should retry after re-authenticating on the vendor site.
    AuthenticationRetry,
    /// The session is stale and must be closed and reopened.
    AuthenticationReopenSession,
    /// A permission required by the request is missing.
    Permission,
    /// Temporary server-side failure.
    Server,
    /// The app is being throttled.
    Throttling,
    /// The request itself was malformed.
    BadRequest,
    /// Client-side failure in the vendor SDK.
    Client,
    /// Anything else.
    Other,
}

/// A failed graph request with its vendor-assigned category.
#[derive(Debug, Clone, Error)]
#[error("graph request failed ({category:?}): {message}")]
pub struct GraphError {
    pub category: GraphErrorCategory,
    pub message: String,
}

impl GraphError {
    pub fn new(category: GraphErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

/// A feed post shown in the vendor's feed dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPost {
    /// Post name, e.g. the wigwam's name.
    pub name: String,
    /// Caption under the name, e.g. the wigwam's description.
    pub caption: String,
    /// Absolute URL the post links to.
    pub link: String,
    /// Message pre-filled in the dialog.
    pub message: String,
    /// URL of the picture shown with the post.
    pub picture: String,
}

/// A typed open-graph action POSTed to the user's graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphAction {
    /// Graph API path, e.g. "me/wigwamnow:rent".
    pub path: String,
    /// Canonical URL of the object the action references.
    pub object_url: String,
}

/// Live Facebook session state and operations.
#[async_trait]
pub trait FacebookSession: Send + Sync {
    /// Whether the session is currently open.
    fn is_open(&self) -> bool;

    /// Current access token, when the session is open.
    fn access_token(&self) -> Option<Secret<String>>;

    /// Expiry of the current access token.
    fn token_expiry(&self) -> Option<DateTime<Utc>>;

    /// Permissions granted to the current session.
    fn permissions(&self) -> Vec<String>;

    /// Starts the interactive flow requesting additional publish
    /// permissions. The outcome arrives later as a token-update event.
    fn request_publish_permissions(&self, permissions: &[String], request_code: i32);

    /// Shows the feed dialog for a post. Resolves once the user completes
    /// or dismisses it; the created post id is `Some` on publish.
    async fn show_feed_dialog(&self, post: FeedPost) -> Result<Option<String>, GraphError>;

    /// Publishes an open-graph action, returning the created action id.
    async fn publish_action(&self, action: GraphAction) -> Result<String, GraphError>;

    /// Uploads a photo to the user's album, returning the created photo id.
    async fn upload_photo(&self, photo: &Path) -> Result<String, GraphError>;

    /// Closes the session and clears its token state.
    fn close_and_clear_token(&self);
}
