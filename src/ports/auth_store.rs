//! Auth store port - process-wide persisted auth flags.
//!
//! The store is a coarse key-value record surviving process restarts. All
//! writes originate from the single UI-bound flow, so whole-value
//! last-writer-wins semantics are sufficient; implementations need no
//! transactions.

use thiserror::Error;

use crate::domain::social::Provider;

/// Key under which the last signed-in provider id is stored.
pub const LAST_PROVIDER_KEY: &str = "LAST_PROVIDER";

/// Key under which the hybrid-auth code-sent flag for a provider is stored.
pub fn code_sent_key(provider: Provider) -> String {
    format!("CODE_SENT{}", provider.id())
}

/// Errors raised by a persisted auth store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("auth store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("auth store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted auth state: the last signed-in provider and, per provider,
/// whether the one-time hybrid auth exchange has completed since the last
/// disconnect.
pub trait AuthStore: Send + Sync {
    /// Whether the hybrid auth code has been sent for this provider since
    /// the last disconnect.
    fn code_sent(&self, provider: Provider) -> Result<bool, StoreError>;

    /// Records the code-sent flag. Set to `true` only after the server
    /// acknowledges the exchange; reset to `false` on error or disconnect.
    fn record_code_sent(&self, provider: Provider, sent: bool) -> Result<(), StoreError>;

    /// The last successfully signed-in provider, `Provider::None` if unset.
    fn last_provider(&self) -> Result<Provider, StoreError>;

    /// Persists the last signed-in provider.
    fn save_last_provider(&self, provider: Provider) -> Result<(), StoreError>;
}
