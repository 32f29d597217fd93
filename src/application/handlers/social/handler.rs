//! The provider handler contract shared by all social networks.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::social::SocialFeature;
use crate::domain::wigwam::Wigwam;

/// Hard failures of a social action. Ordinary "not yet authorized"
/// conditions are not errors; they surface as `Ok(false)` from the action
/// methods so the caller can defer and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SocialError {
    /// The provider does not implement this feature at all. Callers are
    /// expected to check `supports` first; this is not retryable.
    #[error("Unsupported: {0}")]
    Unsupported(SocialFeature),
}

/// Outcome of a hybrid auth attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HybridAuth {
    /// The server acknowledged the exchange. The caller should now set the
    /// persisted code-sent flag.
    Completed,
    /// A user-recoverable auth error occurred; a recovery flow was
    /// launched and the attempt is suspended until its result arrives.
    RecoveryLaunched,
    /// Another exchange was already in flight on this handler instance;
    /// this call was a no-op.
    InFlight,
    /// The exchange failed (transient vendor or server error). The caller
    /// must leave the code-sent flag unset so a later sign-in retries.
    Failed,
}

/// A social provider's action surface.
///
/// Action methods report success-of-initiation: `Ok(true)` means the action
/// was launched (completion, if any, is reported asynchronously through the
/// vendor's own surface), `Ok(false)` means it could not be initiated,
/// typically for lack of a session or permission, and should be retried
/// after the next authorization update.
#[async_trait]
pub trait SocialHandler: Send + Sync {
    /// Capability-independent display name, e.g. "Google+" or "Facebook".
    fn name(&self) -> &'static str;

    /// Whether the provider implements the feature.
    fn supports(&self, feature: SocialFeature) -> bool;

    /// Shares the wigwam in the user's feed via a native dialog.
    async fn share(&self, wigwam: &Wigwam) -> Result<bool, SocialError>;

    /// Writes a typed share action to the user's social graph.
    async fn structured_share(&self, wigwam: &Wigwam) -> Result<bool, SocialError>;

    /// Writes a typed rental action to the user's social graph.
    async fn rent(&self, wigwam: &Wigwam) -> Result<bool, SocialError>;

    /// Uploads the photo at `photo` to the user's album.
    async fn post_photo(&self, photo: &Path) -> Result<bool, SocialError>;

    /// Exchanges a vendor credential for a server-side session. Callers
    /// gate this on the persisted code-sent flag and record the flag only
    /// on [`HybridAuth::Completed`].
    async fn hybrid_auth(&self) -> Result<HybridAuth, SocialError>;
}
