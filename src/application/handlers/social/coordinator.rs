//! Session/auth coordinator.
//!
//! Computes the current provider from live session state, persists the last
//! signed-in provider across restarts, and drives the once-per-auth-session
//! hybrid exchange off the session event stream.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use super::handler::HybridAuth;
use super::registry::resolve;
use super::{SocialContext, SocialError};
use crate::domain::social::{Provider, SessionEvent};
use crate::ports::{AuthStore, StoreError};

/// Flow-result request code for the Google connect error-resolution surface.
pub const REQUEST_CODE_RESOLVE_ERR: i32 = 9000;

/// Errors surfaced by coordinator operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Social(#[from] SocialError),
}

/// Which screen to show at startup when no live session exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartScreen {
    /// Definitely logged out; show the marketing splash.
    Splash,
    /// A session exists or existed recently; go straight to selection.
    Selection,
}

/// Tracks the signed-in provider and reconciles it with persisted state.
pub struct SessionCoordinator {
    ctx: SocialContext,
    store: Arc<dyn AuthStore>,
}

impl SessionCoordinator {
    pub fn new(ctx: SocialContext, store: Arc<dyn AuthStore>) -> Self {
        Self { ctx, store }
    }

    /// The provider with a live session right now.
    pub fn current_provider(&self) -> Provider {
        self.ctx.current_provider()
    }

    /// Which screen to show at startup. A persisted last provider with no
    /// live session means the session is still initializing after a process
    /// restart, not that the user logged out.
    pub fn start_screen(&self) -> Result<StartScreen, SessionError> {
        if self.current_provider() != Provider::None
            || self.store.last_provider()? != Provider::None
        {
            Ok(StartScreen::Selection)
        } else {
            Ok(StartScreen::Splash)
        }
    }

    /// Persists the current provider; called on every screen pause.
    pub fn on_pause(&self) -> Result<(), SessionError> {
        self.store.save_last_provider(self.current_provider())?;
        Ok(())
    }

    /// Restores the persisted provider; called on every screen resume.
    pub fn on_resume(&self) -> Result<Provider, SessionError> {
        Ok(self.store.last_provider()?)
    }

    /// Starts the interactive Google connect flow. Facebook sign-in is
    /// driven by its own session lifecycle outside this coordinator.
    pub fn sign_in(&self) {
        self.ctx.google.begin_sign_in(REQUEST_CODE_RESOLVE_ERR);
    }

    /// Clears the local Google session linkage without revoking
    /// server-granted access.
    pub fn sign_out(&self) {
        self.ctx.google.sign_out();
    }

    /// Revokes server-granted Google access and resets the code-sent flag
    /// so the next sign-in re-runs the hybrid exchange.
    pub async fn disconnect(&self) -> Result<(), SessionError> {
        self.ctx.google.revoke_access().await;
        self.store.record_code_sent(Provider::Google, false)?;
        Ok(())
    }

    /// Reacts to one session event from the vendor transports.
    pub async fn handle_event(&self, event: SessionEvent) -> Result<(), SessionError> {
        debug!(?event, "session event");
        match event {
            SessionEvent::Opened(provider) => {
                self.store.save_last_provider(provider)?;
                self.ensure_hybrid_auth(provider).await
            }
            SessionEvent::TokenUpdated(_) => Ok(()),
            SessionEvent::Closed(_) => {
                self.store.save_last_provider(Provider::None)?;
                Ok(())
            }
        }
    }

    /// Resumes the suspended Google hybrid exchange after the recovery
    /// surface reports success.
    pub async fn on_recovery_completed(&self) -> Result<(), SessionError> {
        self.ensure_hybrid_auth(Provider::Google).await
    }

    /// Runs the hybrid exchange for a provider unless it already completed
    /// this auth session. The flag is recorded only once the server
    /// acknowledges the exchange, so failures retry on the next sign-in.
    async fn ensure_hybrid_auth(&self, provider: Provider) -> Result<(), SessionError> {
        if self.store.code_sent(provider)? {
            debug!(provider = %provider.display_name(), "hybrid auth already completed");
            return Ok(());
        }
        let Some(handler) = resolve(provider, &self.ctx) else {
            return Ok(());
        };
        match handler.hybrid_auth().await? {
            HybridAuth::Completed => {
                self.store.record_code_sent(provider, true)?;
                info!(provider = %provider.display_name(), "hybrid auth completed");
            }
            outcome => {
                debug!(provider = %provider.display_name(), ?outcome, "hybrid auth not completed");
            }
        }
        Ok(())
    }

    /// Consumes session events until the channel closes, logging failures
    /// rather than stopping the loop.
    pub async fn run(&self, mut events: mpsc::Receiver<SessionEvent>) {
        while let Some(event) = events.recv().await {
            if let Err(err) = self.handle_event(event).await {
                error!(%err, "failed to handle session event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::MockWigwamApi;
    use crate::adapters::notify::RecordingNotifier;
    use crate::adapters::social::{MockFacebookSession, MockGoogleSession};
    use crate::adapters::store::InMemoryAuthStore;
    use crate::config::{AppConfig, BackendConfig, GoogleConfig, StorageConfig};
    use crate::ports::ApiError;
    use chrono::{TimeZone, Utc};

    fn app_config() -> AppConfig {
        AppConfig {
            backend: BackendConfig {
                external_host: "https://wigwamnow.example.com".to_string(),
                request_timeout_secs: 30,
            },
            google: GoogleConfig {
                client_id: "1234.apps.googleusercontent.com".to_string(),
                scopes: "https://www.googleapis.com/auth/plus.login".to_string(),
                visible_activities: "http://schemas.google.com/ReserveActivity".to_string(),
                redirect_uri: "postmessage".to_string(),
            },
            storage: StorageConfig::default(),
        }
    }

    struct Fixture {
        google: Arc<MockGoogleSession>,
        api: Arc<MockWigwamApi>,
        store: Arc<InMemoryAuthStore>,
        coordinator: SessionCoordinator,
    }

    fn fixture(google: MockGoogleSession, facebook: MockFacebookSession) -> Fixture {
        fixture_with_api(google, facebook, MockWigwamApi::new())
    }

    fn fixture_with_api(
        google: MockGoogleSession,
        facebook: MockFacebookSession,
        api: MockWigwamApi,
    ) -> Fixture {
        let google = Arc::new(google);
        let facebook = Arc::new(facebook);
        let api = Arc::new(api);
        let store = Arc::new(InMemoryAuthStore::new());
        let ctx = SocialContext::new(
            &app_config(),
            google.clone(),
            facebook.clone(),
            api.clone(),
            Arc::new(RecordingNotifier::new()),
        );
        let coordinator = SessionCoordinator::new(ctx, store.clone());
        Fixture {
            google,
            api,
            store,
            coordinator,
        }
    }

    fn open_facebook() -> MockFacebookSession {
        MockFacebookSession::new()
            .with_open_session("fb-token", Utc.with_ymd_and_hms(2013, 6, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn current_provider_prefers_google_when_both_are_active() {
        let f = fixture(
            MockGoogleSession::new().with_connected("user@example.com"),
            open_facebook(),
        );
        assert_eq!(f.coordinator.current_provider(), Provider::Google);
    }

    #[test]
    fn current_provider_falls_back_to_facebook_then_none() {
        let f = fixture(MockGoogleSession::new(), open_facebook());
        assert_eq!(f.coordinator.current_provider(), Provider::Facebook);

        let f = fixture(MockGoogleSession::new(), MockFacebookSession::new());
        assert_eq!(f.coordinator.current_provider(), Provider::None);
    }

    #[test]
    fn start_screen_is_splash_only_when_definitely_logged_out() {
        let f = fixture(MockGoogleSession::new(), MockFacebookSession::new());
        assert_eq!(f.coordinator.start_screen().unwrap(), StartScreen::Splash);

        // A persisted provider with no live session means "still
        // initializing", not "logged out".
        f.store.save_last_provider(Provider::Facebook).unwrap();
        assert_eq!(
            f.coordinator.start_screen().unwrap(),
            StartScreen::Selection
        );

        let f = fixture(
            MockGoogleSession::new().with_connected("user@example.com"),
            MockFacebookSession::new(),
        );
        assert_eq!(
            f.coordinator.start_screen().unwrap(),
            StartScreen::Selection
        );
    }

    #[test]
    fn pause_persists_the_live_provider() {
        let f = fixture(
            MockGoogleSession::new().with_connected("user@example.com"),
            MockFacebookSession::new(),
        );
        f.coordinator.on_pause().unwrap();
        assert_eq!(f.store.last_provider().unwrap(), Provider::Google);
    }

    #[test]
    fn sign_in_launches_the_google_connect_flow() {
        let f = fixture(MockGoogleSession::new(), MockFacebookSession::new());
        f.coordinator.sign_in();
        assert_eq!(f.google.sign_in_codes(), vec![REQUEST_CODE_RESOLVE_ERR]);
    }

    #[test]
    fn sign_out_clears_only_the_local_linkage() {
        let f = fixture(
            MockGoogleSession::new().with_connected("user@example.com"),
            MockFacebookSession::new(),
        );
        f.coordinator.sign_out();
        assert!(f.google.was_signed_out());
        assert!(!f.google.access_was_revoked());
    }

    #[tokio::test]
    async fn disconnect_revokes_access_and_resets_the_code_sent_flag() {
        let f = fixture(
            MockGoogleSession::new()
                .with_connected("user@example.com")
                .with_auth_code("4/code"),
            MockFacebookSession::new(),
        );
        f.coordinator
            .handle_event(SessionEvent::Opened(Provider::Google))
            .await
            .unwrap();
        assert!(f.store.code_sent(Provider::Google).unwrap());

        f.coordinator.disconnect().await.unwrap();

        assert!(f.google.access_was_revoked());
        assert!(!f.store.code_sent(Provider::Google).unwrap());
    }

    #[tokio::test]
    async fn session_open_runs_hybrid_auth_exactly_once() {
        let f = fixture(
            MockGoogleSession::new()
                .with_connected("user@example.com")
                .with_auth_code("4/code-a")
                .with_auth_code("4/code-b"),
            MockFacebookSession::new(),
        );

        f.coordinator
            .handle_event(SessionEvent::Opened(Provider::Google))
            .await
            .unwrap();
        // Second open of the same auth session must not burn another code.
        f.coordinator
            .handle_event(SessionEvent::Opened(Provider::Google))
            .await
            .unwrap();

        assert_eq!(f.api.google_codes().len(), 1);
        assert_eq!(f.store.last_provider().unwrap(), Provider::Google);
    }

    #[tokio::test]
    async fn failed_exchange_leaves_the_flag_unset_for_retry() {
        let f = fixture_with_api(
            MockGoogleSession::new()
                .with_connected("user@example.com")
                .with_auth_code("4/code-a")
                .with_auth_code("4/code-b"),
            MockFacebookSession::new(),
            MockWigwamApi::new().with_hybrid_result(Err(ApiError::Status {
                path: "/auth/gplus/hybrid.json".to_string(),
                status: 500,
            })),
        );

        f.coordinator
            .handle_event(SessionEvent::Opened(Provider::Google))
            .await
            .unwrap();
        assert!(!f.store.code_sent(Provider::Google).unwrap());

        // The next sign-in retries and succeeds.
        f.coordinator
            .handle_event(SessionEvent::Opened(Provider::Google))
            .await
            .unwrap();
        assert!(f.store.code_sent(Provider::Google).unwrap());
        assert_eq!(f.api.google_codes().len(), 1);
    }

    #[tokio::test]
    async fn facebook_open_exchanges_the_token() {
        let f = fixture(MockGoogleSession::new(), open_facebook());

        f.coordinator
            .handle_event(SessionEvent::Opened(Provider::Facebook))
            .await
            .unwrap();

        assert_eq!(f.api.facebook_tokens().len(), 1);
        assert!(f.store.code_sent(Provider::Facebook).unwrap());
    }

    #[tokio::test]
    async fn recovery_completion_resumes_the_suspended_exchange() {
        let f = fixture(
            MockGoogleSession::new()
                .with_connected("user@example.com")
                .with_auth_error(crate::ports::GoogleAuthError::RecoveryRequired(
                    "consent required".to_string(),
                )),
            MockFacebookSession::new(),
        );

        f.coordinator
            .handle_event(SessionEvent::Opened(Provider::Google))
            .await
            .unwrap();
        assert!(!f.store.code_sent(Provider::Google).unwrap());
        assert!(!f.google.recovery_codes().is_empty());

        f.google.push_auth_code(Ok("4/after-recovery".to_string()));
        f.coordinator.on_recovery_completed().await.unwrap();

        assert_eq!(f.api.google_codes().len(), 1);
        assert!(f.store.code_sent(Provider::Google).unwrap());
    }

    #[tokio::test]
    async fn session_close_clears_the_persisted_provider() {
        let f = fixture(MockGoogleSession::new(), MockFacebookSession::new());
        f.store.save_last_provider(Provider::Facebook).unwrap();

        f.coordinator
            .handle_event(SessionEvent::Closed(Provider::Facebook))
            .await
            .unwrap();

        assert_eq!(f.store.last_provider().unwrap(), Provider::None);
    }

    #[tokio::test]
    async fn run_drains_the_event_channel() {
        let f = fixture(
            MockGoogleSession::new()
                .with_connected("user@example.com")
                .with_auth_code("4/code"),
            MockFacebookSession::new(),
        );
        let (tx, rx) = mpsc::channel(8);

        tx.send(SessionEvent::Opened(Provider::Google))
            .await
            .unwrap();
        drop(tx);
        f.coordinator.run(rx).await;

        assert_eq!(f.api.google_codes().len(), 1);
    }
}
