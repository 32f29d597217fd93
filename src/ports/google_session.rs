//! Google session port - the surface of the Google vendor SDK the social
//! core depends on: connection state, interactive sign-in/recovery flows,
//! the native share surface, app-activity moments, and one-time server auth
//! codes for the hybrid flow.

use async_trait::async_trait;
use thiserror::Error;

/// Errors the vendor SDK reports when requesting a server auth code.
#[derive(Debug, Clone, Error)]
pub enum GoogleAuthError {
    /// Network or server hiccup; the caller may try again later.
    #[error("transient auth error: {0}")]
    Transient(String),

    /// The user must complete a consent/recovery flow before a code can be
    /// issued. The handler launches the flow and suspends the attempt.
    #[error("user-recoverable auth error: {0}")]
    RecoveryRequired(String),

    /// The call is not expected to ever succeed and must not be retried.
    #[error("fatal auth error: {0}")]
    Fatal(String),
}

/// An interactive share, rendered by the vendor's native share surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePrompt {
    /// Headline text, e.g. "Check out Fort Awesome!".
    pub title: String,
    /// Longer description shown under the title.
    pub description: String,
    /// Absolute URL the post links to.
    pub content_url: String,
    /// Deep-link id resolved by the mobile app, e.g. "/wigwams/7".
    pub deep_link_id: String,
    /// Call-to-action label, e.g. "RESERVE".
    pub call_to_action: String,
}

/// A typed app activity written to the user's graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moment {
    /// Activity type URL, e.g. "http://schemas.google.com/ReserveActivity".
    pub kind: String,
    /// Canonical URL of the target entity.
    pub target_url: String,
    /// Result type URL, e.g. "http://schemas.google.com/Reservation".
    pub result_kind: String,
}

/// Live Google session state and operations.
///
/// Interactive flows (`begin_sign_in`, `begin_recovery`, `launch_share`)
/// only launch a vendor surface; their outcome arrives later as a
/// [`SessionEvent`](crate::domain::social::SessionEvent) or an external
/// flow-result callback identified by the request code.
#[async_trait]
pub trait GoogleSession: Send + Sync {
    /// Whether the session is currently connected.
    fn is_connected(&self) -> bool;

    /// Account name of the connected user, if any.
    fn account_name(&self) -> Option<String>;

    /// Starts the interactive connect flow.
    fn begin_sign_in(&self, request_code: i32);

    /// Clears the local session linkage without revoking server access.
    fn sign_out(&self);

    /// Revokes server-granted access for this app.
    async fn revoke_access(&self);

    /// Requests a single-use server auth code for the given scope string.
    async fn server_auth_code(
        &self,
        scope: &str,
        visible_activities: &[String],
    ) -> Result<String, GoogleAuthError>;

    /// Launches the recovery surface after a recoverable auth error.
    fn begin_recovery(&self, request_code: i32);

    /// Opens the native interactive share surface.
    fn launch_share(&self, prompt: SharePrompt);

    /// Writes an app-activity moment to the user's graph. Delivery is
    /// fire-and-forget, matching the vendor SDK.
    fn write_moment(&self, moment: Moment);
}
