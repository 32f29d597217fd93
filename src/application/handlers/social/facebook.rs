//! Facebook provider handler.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use tracing::warn;

use super::handler::{HybridAuth, SocialError, SocialHandler};
use super::SocialContext;
use crate::domain::social::SocialFeature;
use crate::domain::wigwam::Wigwam;
use crate::ports::{
    FacebookSession, FacebookTokenExchange, FeedPost, GraphAction, GraphError,
    GraphErrorCategory, Notifier, WigwamApi,
};

/// Flow-result request code for the publish-permission re-auth surface.
pub const REAUTH_ACTIVITY_CODE: i32 = 200;

const PUBLISH_PERMISSIONS: &[&str] = &["publish_stream"];

const RENT_ACTION_PATH: &str = "me/wigwamnow:rent";
const SHARE_ACTION_PATH: &str = "me/wigwamnow:share";

/// Facebook actions: the feed dialog, typed open-graph rent/share actions,
/// photo upload, and the access-token half of the hybrid auth flow.
pub struct FacebookHandler {
    session: Arc<dyn FacebookSession>,
    api: Arc<dyn WigwamApi>,
    notifier: Arc<dyn Notifier>,
    external_host: String,
}

impl FacebookHandler {
    pub fn new(ctx: &SocialContext) -> Self {
        Self {
            session: Arc::clone(&ctx.facebook),
            api: Arc::clone(&ctx.api),
            notifier: Arc::clone(&ctx.notifier),
            external_host: ctx.external_host.clone(),
        }
    }

    fn has_publish_permission(&self) -> bool {
        let granted = self.session.permissions();
        PUBLISH_PERMISSIONS
            .iter()
            .all(|needed| granted.iter().any(|p| p == needed))
    }

    /// Launches the permission re-auth flow. The grant arrives later as a
    /// token-update event, which replays whatever action was deferred.
    fn request_publish_permissions(&self) {
        let permissions: Vec<String> = PUBLISH_PERMISSIONS
            .iter()
            .map(|p| p.to_string())
            .collect();
        self.session
            .request_publish_permissions(&permissions, REAUTH_ACTIVITY_CODE);
    }

    /// Gate shared by every publish-class action: an open session holding
    /// the publish permission. Launches the missing flow and reports the
    /// action as not-initiated so the caller defers it.
    fn ready_to_publish(&self) -> bool {
        if !self.session.is_open() {
            return false;
        }
        if !self.has_publish_permission() {
            self.request_publish_permissions();
            return false;
        }
        true
    }

    fn on_post_response(&self, result: Result<String, GraphError>) {
        self.notifier.dismiss_progress();
        match result {
            Ok(id) => {
                self.notifier
                    .alert("Result", &format!("Action posted.  ID: {}", id));
            }
            Err(error) => self.handle_error(&error),
        }
    }

    /// Maps a categorized graph failure to user feedback and the session
    /// follow-up the category demands.
    fn handle_error(&self, error: &GraphError) {
        warn!(category = ?error.category, message = %error.message, "graph request failed");
        let body = match error.category {
            GraphErrorCategory::AuthenticationRetry => {
                "Please log in to facebook.com and try again.".to_string()
            }
            GraphErrorCategory::AuthenticationReopenSession => {
                self.session.close_and_clear_token();
                "Your session has expired. Please log in again.".to_string()
            }
            GraphErrorCategory::Permission => {
                self.request_publish_permissions();
                "Missing permission to publish. Please grant it and retry.".to_string()
            }
            GraphErrorCategory::Server | GraphErrorCategory::Throttling => {
                "The server is busy. Please try again later.".to_string()
            }
            GraphErrorCategory::BadRequest
            | GraphErrorCategory::Client
            | GraphErrorCategory::Other => format!("The action could not be posted: {}", error.message),
        };
        self.notifier.alert("Error", &body);
    }
}

#[async_trait]
impl SocialHandler for FacebookHandler {
    fn name(&self) -> &'static str {
        "Facebook"
    }

    fn supports(&self, _feature: SocialFeature) -> bool {
        true
    }

    async fn share(&self, wigwam: &Wigwam) -> Result<bool, SocialError> {
        if !self.ready_to_publish() {
            return Ok(false);
        }
        let post = FeedPost {
            name: wigwam.name.clone(),
            caption: wigwam.description.clone(),
            link: wigwam.canonical_url(&self.external_host),
            message: "Check out this wigwam!".to_string(),
            picture: wigwam.src.clone(),
        };
        match self.session.show_feed_dialog(post).await {
            Ok(Some(_id)) => self.notifier.toast("Published to timeline"),
            Ok(None) => {}
            Err(error) => self.handle_error(&error),
        }
        Ok(true)
    }

    async fn structured_share(&self, wigwam: &Wigwam) -> Result<bool, SocialError> {
        if !self.ready_to_publish() {
            return Ok(false);
        }
        self.notifier.show_progress("Posting...");
        let result = self
            .session
            .publish_action(GraphAction {
                path: SHARE_ACTION_PATH.to_string(),
                object_url: wigwam.canonical_url(&self.external_host),
            })
            .await;
        self.on_post_response(result);
        Ok(true)
    }

    async fn rent(&self, wigwam: &Wigwam) -> Result<bool, SocialError> {
        if !self.ready_to_publish() {
            return Ok(false);
        }
        self.notifier.show_progress("Posting...");
        let result = self
            .session
            .publish_action(GraphAction {
                path: RENT_ACTION_PATH.to_string(),
                object_url: wigwam.canonical_url(&self.external_host),
            })
            .await;
        self.on_post_response(result);
        Ok(true)
    }

    async fn post_photo(&self, photo: &Path) -> Result<bool, SocialError> {
        if !self.ready_to_publish() {
            return Ok(false);
        }
        self.notifier.show_progress("Posting photo...");
        let result = self.session.upload_photo(photo).await;
        self.on_post_response(result);
        Ok(true)
    }

    async fn hybrid_auth(&self) -> Result<HybridAuth, SocialError> {
        let (Some(token), Some(expiry)) = (self.session.access_token(), self.session.token_expiry())
        else {
            warn!("facebook session has no portable token to exchange");
            return Ok(HybridAuth::Failed);
        };
        let exchange = FacebookTokenExchange {
            access_token: token.expose_secret().clone(),
            expires_at: expiry.to_string(),
        };
        match self.api.send_facebook_token(&exchange).await {
            Ok(()) => Ok(HybridAuth::Completed),
            Err(error) => {
                warn!(%error, "facebook token exchange failed");
                Ok(HybridAuth::Failed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::adapters::http::MockWigwamApi;
    use crate::adapters::notify::{Notice, RecordingNotifier};
    use crate::adapters::social::{MockFacebookSession, MockGoogleSession};
    use crate::config::{AppConfig, BackendConfig, GoogleConfig, StorageConfig};

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
        facebook: Arc<MockFacebookSession>,
        api: Arc<MockWigwamApi>,
        notifier: Arc<RecordingNotifier>,
        handler: FacebookHandler,
    }

    fn fixture(facebook: MockFacebookSession) -> Fixture {
        let facebook = Arc::new(facebook);
        let api = Arc::new(MockWigwamApi::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let ctx = SocialContext::new(
            &app_config(),
            Arc::new(MockGoogleSession::new()),
            facebook.clone(),
            api.clone(),
            notifier.clone(),
        );
        let handler = FacebookHandler::new(&ctx);
        Fixture {
            facebook,
            api,
            notifier,
            handler,
        }
    }

    fn open_session() -> MockFacebookSession {
        MockFacebookSession::new()
            .with_open_session("fb-token", Utc.with_ymd_and_hms(2013, 6, 1, 0, 0, 0).unwrap())
    }

    fn wigwam() -> Wigwam {
        Wigwam {
            id: 7,
            name: "Fort Awesome".to_string(),
            description: "A lovely wigwam by the lake".to_string(),
            price: 150,
            src: "http://example.com/7.jpg".to_string(),
            street: "123 Fake Street".to_string(),
            city: "Mountain View".to_string(),
            state: "CA".to_string(),
            zip: "94043".to_string(),
            lat: 37.42,
            lng: -122.08,
        }
    }

    #[tokio::test]
    async fn actions_defer_when_the_session_is_closed() {
        let f = fixture(MockFacebookSession::new());

        assert!(!f.handler.share(&wigwam()).await.unwrap());
        assert!(!f.handler.rent(&wigwam()).await.unwrap());
        assert!(f.facebook.shown_feed_posts().is_empty());
        assert!(f.facebook.published_actions().is_empty());
    }

    #[tokio::test]
    async fn missing_publish_permission_launches_reauth_and_defers() {
        let f = fixture(open_session());

        assert!(!f.handler.rent(&wigwam()).await.unwrap());

        let requests = f.facebook.permission_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, vec!["publish_stream".to_string()]);
        assert_eq!(requests[0].1, REAUTH_ACTIVITY_CODE);
        assert!(f.facebook.published_actions().is_empty());
    }

    #[tokio::test]
    async fn share_shows_the_feed_dialog_and_toasts_on_publish() {
        let f = fixture(open_session().with_permission("publish_stream"));

        assert!(f.handler.share(&wigwam()).await.unwrap());

        let posts = f.facebook.shown_feed_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].name, "Fort Awesome");
        assert_eq!(posts[0].link, "https://wigwamnow.example.com/wigwams/7");
        assert_eq!(f.notifier.toasts(), vec!["Published to timeline"]);
    }

    #[tokio::test]
    async fn dismissed_feed_dialog_still_counts_as_handled() {
        let f = fixture(
            open_session()
                .with_permission("publish_stream")
                .with_feed_result(Ok(None)),
        );

        // The user saw and dismissed the dialog; nothing is pending.
        assert!(f.handler.share(&wigwam()).await.unwrap());
        assert!(f.notifier.toasts().is_empty());
    }

    #[tokio::test]
    async fn rent_publishes_a_typed_action_and_reports_the_id() {
        let f = fixture(
            open_session()
                .with_permission("publish_stream")
                .with_publish_result(Ok("action-42".to_string())),
        );

        assert!(f.handler.rent(&wigwam()).await.unwrap());

        let actions = f.facebook.published_actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].path, "me/wigwamnow:rent");
        assert_eq!(
            actions[0].object_url,
            "https://wigwamnow.example.com/wigwams/7"
        );
        let notices = f.notifier.notices();
        assert!(notices.contains(&Notice::ProgressShown("Posting...".to_string())));
        assert!(notices.contains(&Notice::ProgressDismissed));
        assert_eq!(
            f.notifier.alerts(),
            vec![("Result".to_string(), "Action posted.  ID: action-42".to_string())]
        );
    }

    #[tokio::test]
    async fn structured_share_publishes_the_share_action() {
        let f = fixture(open_session().with_permission("publish_stream"));

        assert!(f.handler.structured_share(&wigwam()).await.unwrap());
        assert_eq!(f.facebook.published_actions()[0].path, "me/wigwamnow:share");
    }

    #[tokio::test]
    async fn post_photo_uploads_the_staged_file() {
        let f = fixture(open_session().with_permission("publish_stream"));

        assert!(f
            .handler
            .post_photo(Path::new("/tmp/wigwam.jpg"))
            .await
            .unwrap());
        assert_eq!(
            f.facebook.uploaded_photos(),
            vec![std::path::PathBuf::from("/tmp/wigwam.jpg")]
        );
    }

    #[tokio::test]
    async fn stale_session_error_closes_the_session() {
        let f = fixture(
            open_session()
                .with_permission("publish_stream")
                .with_publish_result(Err(GraphError::new(
                    GraphErrorCategory::AuthenticationReopenSession,
                    "session invalidated",
                ))),
        );

        assert!(f.handler.rent(&wigwam()).await.unwrap());

        assert!(f.facebook.was_closed());
        let alerts = f.notifier.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].0, "Error");
    }

    #[tokio::test]
    async fn retryable_auth_error_asks_the_user_to_log_in_again() {
        let f = fixture(
            open_session()
                .with_permission("publish_stream")
                .with_publish_result(Err(GraphError::new(
                    GraphErrorCategory::AuthenticationRetry,
                    "password changed",
                ))),
        );

        assert!(f.handler.rent(&wigwam()).await.unwrap());

        // Retryable auth errors keep the session; the user re-authenticates
        // on the vendor site and triggers the action again.
        assert!(!f.facebook.was_closed());
        let alerts = f.notifier.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].1.contains("log in to facebook.com"));
    }

    #[tokio::test]
    async fn server_and_throttling_errors_ask_for_a_later_retry() {
        for category in [GraphErrorCategory::Server, GraphErrorCategory::Throttling] {
            let f = fixture(
                open_session()
                    .with_permission("publish_stream")
                    .with_publish_result(Err(GraphError::new(category, "over capacity"))),
            );

            assert!(f.handler.rent(&wigwam()).await.unwrap());

            assert!(!f.facebook.was_closed());
            assert!(f.facebook.permission_requests().is_empty());
            let alerts = f.notifier.alerts();
            assert_eq!(alerts.len(), 1);
            assert_eq!(alerts[0].0, "Error");
            assert!(alerts[0].1.contains("try again later"));
        }
    }

    #[tokio::test]
    async fn permission_error_relaunches_the_permission_flow() {
        let f = fixture(
            open_session()
                .with_permission("publish_stream")
                .with_publish_result(Err(GraphError::new(
                    GraphErrorCategory::Permission,
                    "publish denied",
                ))),
        );

        assert!(f.handler.rent(&wigwam()).await.unwrap());
        assert_eq!(f.facebook.permission_requests().len(), 1);
    }

    #[tokio::test]
    async fn hybrid_auth_posts_the_portable_token() {
        let f = fixture(open_session());

        assert_eq!(f.handler.hybrid_auth().await.unwrap(), HybridAuth::Completed);

        let tokens = f.api.facebook_tokens();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].access_token, "fb-token");
        assert!(tokens[0].expires_at.starts_with("2013-06-01"));
    }

    #[tokio::test]
    async fn hybrid_auth_fails_without_a_token() {
        let f = fixture(MockFacebookSession::new());

        assert_eq!(f.handler.hybrid_auth().await.unwrap(), HybridAuth::Failed);
        assert!(f.api.facebook_tokens().is_empty());
    }
}
