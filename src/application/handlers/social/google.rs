//! Google+ provider handler.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::handler::{HybridAuth, SocialError, SocialHandler};
use super::SocialContext;
use crate::config::GoogleConfig;
use crate::domain::social::SocialFeature;
use crate::domain::wigwam::Wigwam;
use crate::ports::{GoogleAuthError, GoogleCodeExchange, GoogleSession, Moment, SharePrompt, WigwamApi};

/// Flow-result request code for the token-auth recovery surface.
pub const REQUEST_CODE_TOKEN_AUTH: i32 = 9001;

const RESERVE_ACTIVITY: &str = "http://schemas.google.com/ReserveActivity";
const RESERVATION: &str = "http://schemas.google.com/Reservation";

/// Google+ actions: the interactive share surface, rental moments, and the
/// one-time-code half of the hybrid auth flow.
pub struct GoogleHandler {
    session: Arc<dyn GoogleSession>,
    api: Arc<dyn WigwamApi>,
    config: GoogleConfig,
    external_host: String,
    /// Set while a one-time code is being exchanged with the server, so an
    /// overlapping attempt on this instance becomes a no-op instead of
    /// burning a second code.
    code_exchange_in_flight: AtomicBool,
}

impl GoogleHandler {
    pub fn new(ctx: &SocialContext) -> Self {
        Self {
            session: Arc::clone(&ctx.google),
            api: Arc::clone(&ctx.api),
            config: ctx.google_config.clone(),
            external_host: ctx.external_host.clone(),
            code_exchange_in_flight: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl SocialHandler for GoogleHandler {
    fn name(&self) -> &'static str {
        "Google+"
    }

    fn supports(&self, feature: SocialFeature) -> bool {
        matches!(
            feature,
            SocialFeature::Share | SocialFeature::Rent | SocialFeature::HybridAuth
        )
    }

    /// Launches the native share surface. The vendor dialog reports its own
    /// outcome, so this returns `Ok(false)` regardless: the launch never
    /// counts as a completed action and is never recorded as one.
    async fn share(&self, wigwam: &Wigwam) -> Result<bool, SocialError> {
        self.session.launch_share(SharePrompt {
            title: format!("Check out {}!", wigwam.name),
            description: wigwam.description.clone(),
            content_url: wigwam.canonical_url(&self.external_host),
            deep_link_id: wigwam.path(),
            call_to_action: "RESERVE".to_string(),
        });
        Ok(false)
    }

    async fn structured_share(&self, _wigwam: &Wigwam) -> Result<bool, SocialError> {
        Err(SocialError::Unsupported(SocialFeature::StructuredShare))
    }

    async fn rent(&self, wigwam: &Wigwam) -> Result<bool, SocialError> {
        if !self.session.is_connected() {
            return Ok(false);
        }
        self.session.write_moment(Moment {
            kind: RESERVE_ACTIVITY.to_string(),
            target_url: wigwam.canonical_url(&self.external_host),
            result_kind: RESERVATION.to_string(),
        });
        Ok(true)
    }

    async fn post_photo(&self, _photo: &Path) -> Result<bool, SocialError> {
        Err(SocialError::Unsupported(SocialFeature::PostPhoto))
    }

    async fn hybrid_auth(&self) -> Result<HybridAuth, SocialError> {
        let scope = self.config.scope_string();
        let activities = self.config.visible_activities_list();
        let code = match self.session.server_auth_code(&scope, &activities).await {
            Ok(code) => code,
            Err(GoogleAuthError::RecoveryRequired(message)) => {
                debug!(%message, "launching auth recovery before code exchange");
                self.session.begin_recovery(REQUEST_CODE_TOKEN_AUTH);
                return Ok(HybridAuth::RecoveryLaunched);
            }
            Err(error) => {
                warn!(%error, "server auth code request failed");
                return Ok(HybridAuth::Failed);
            }
        };

        if self.code_exchange_in_flight.swap(true, Ordering::SeqCst) {
            return Ok(HybridAuth::InFlight);
        }
        let exchange = GoogleCodeExchange {
            code,
            redirect_uri: self.config.redirect_uri.clone(),
        };
        let result = self.api.send_google_code(&exchange).await;
        self.code_exchange_in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(()) => Ok(HybridAuth::Completed),
            Err(error) => {
                warn!(%error, "google code exchange failed");
                Ok(HybridAuth::Failed)
            }
        }
    }
}
