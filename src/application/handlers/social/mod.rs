//! Social action orchestration: provider handlers, the registry that
//! resolves them, the session/auth coordinator, and the per-screen action
//! dispatcher with pending-action replay.

mod coordinator;
mod dispatcher;
mod facebook;
mod google;
mod handler;
mod registry;

pub use coordinator::{SessionCoordinator, SessionError, StartScreen, REQUEST_CODE_RESOLVE_ERR};
pub use dispatcher::ActionDispatcher;
pub use facebook::{FacebookHandler, REAUTH_ACTIVITY_CODE};
pub use google::{GoogleHandler, REQUEST_CODE_TOKEN_AUTH};
pub use handler::{HybridAuth, SocialError, SocialHandler};
pub use registry::resolve;

use std::sync::Arc;

use crate::config::{AppConfig, GoogleConfig};
use crate::domain::social::Provider;
use crate::ports::{FacebookSession, GoogleSession, Notifier, WigwamApi};

/// Everything a provider handler needs, constructed once at the top level
/// and handed by reference to every dispatch. Handlers themselves are
/// created fresh per dispatch by [`resolve`].
#[derive(Clone)]
pub struct SocialContext {
    pub google: Arc<dyn GoogleSession>,
    pub facebook: Arc<dyn FacebookSession>,
    pub api: Arc<dyn WigwamApi>,
    pub notifier: Arc<dyn Notifier>,
    pub google_config: GoogleConfig,
    pub external_host: String,
}

impl SocialContext {
    pub fn new(
        config: &AppConfig,
        google: Arc<dyn GoogleSession>,
        facebook: Arc<dyn FacebookSession>,
        api: Arc<dyn WigwamApi>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            google,
            facebook,
            api,
            notifier,
            google_config: config.google.clone(),
            external_host: config.backend.external_host.clone(),
        }
    }

    /// The provider with a live session right now. Live state is the source
    /// of truth; Google is checked first and wins if both report active.
    pub fn current_provider(&self) -> Provider {
        if self.google.is_connected() {
            Provider::Google
        } else if self.facebook.is_open() {
            Provider::Facebook
        } else {
            Provider::None
        }
    }
}
