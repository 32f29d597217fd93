//! Per-screen social action dispatch with deferral and replay.
//!
//! One dispatcher lives alongside each detail screen. User-initiated actions
//! resolve the current provider, gate on its capability set, and run; an
//! action the handler could not initiate is recorded as pending and replayed
//! on the next session or token event.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::handler::SocialError;
use super::registry::resolve;
use super::SocialContext;
use crate::domain::social::{PendingAction, PendingActions, SessionEvent, SocialFeature};
use crate::domain::wigwam::Wigwam;

const SIGN_IN_REQUIRED: &str = "Please sign in to a social network.";
const FEATURE_NOT_SUPPORTED: &str = "Feature not supported.";

/// Dispatches the social actions available on a wigwam detail screen.
pub struct ActionDispatcher {
    ctx: SocialContext,
    wigwam: Wigwam,
    pending: PendingActions,
}

impl ActionDispatcher {
    pub fn new(ctx: SocialContext, wigwam: Wigwam) -> Self {
        Self {
            ctx,
            wigwam,
            pending: PendingActions::new(),
        }
    }

    pub async fn share(&mut self) {
        self.run_action(PendingAction::Share).await;
    }

    pub async fn structured_share(&mut self) {
        self.run_action(PendingAction::StructuredShare).await;
    }

    pub async fn rent(&mut self) {
        self.run_action(PendingAction::Rent).await;
    }

    /// Stages the photo location first so a deferred attempt replays with
    /// the same file.
    pub async fn post_photo(&mut self, photo: PathBuf) {
        self.pending.stage_photo(photo);
        self.run_action(PendingAction::PostPhoto).await;
    }

    /// Reacts to one session event. Opened and token-update events replay
    /// whatever was deferred; a close discards pending state, since the
    /// authorization it was waiting for can no longer arrive.
    pub async fn handle_event(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::Opened(_) | SessionEvent::TokenUpdated(_) => self.replay().await,
            SessionEvent::Closed(_) => self.pending.reset(),
        }
    }

    /// Discards pending state on screen teardown.
    pub fn tear_down(&mut self) {
        self.pending.reset();
    }

    /// Pending-action state, for the screen's own rendering.
    pub fn pending(&self) -> &PendingActions {
        &self.pending
    }

    /// Replays deferred actions in the fixed order. Each slot is cleared
    /// before its action re-runs, so a replay that defers again re-marks the
    /// slot instead of running twice.
    async fn replay(&mut self) {
        for action in PendingAction::REPLAY_ORDER {
            if self.pending.take(action) {
                debug!(?action, "replaying deferred action");
                self.run_action(action).await;
            }
        }
    }

    async fn run_action(&mut self, action: PendingAction) {
        // Replay already cleared the slot via `take`, but a user can also
        // re-trigger a still-deferred action directly; the success path
        // below never touches the flag, so clear it here or a succeeded
        // re-trigger would leave the slot pending and replay it again on
        // the next session event.
        self.pending.clear(action);

        let provider = self.ctx.current_provider();
        let Some(handler) = resolve(provider, &self.ctx) else {
            self.ctx.notifier.toast(SIGN_IN_REQUIRED);
            return;
        };
        if !handler.supports(feature_of(action)) {
            self.ctx.notifier.toast(FEATURE_NOT_SUPPORTED);
            return;
        }

        let result = match action {
            PendingAction::Share => handler.share(&self.wigwam).await,
            PendingAction::StructuredShare => handler.structured_share(&self.wigwam).await,
            PendingAction::Rent => handler.rent(&self.wigwam).await,
            PendingAction::PostPhoto => {
                let Some(photo) = self.pending.photo().map(Path::to_path_buf) else {
                    debug!("no staged photo to post");
                    return;
                };
                handler.post_photo(&photo).await
            }
        };

        match result {
            Ok(true) => {}
            Ok(false) => self.pending.mark(action),
            Err(SocialError::Unsupported(_)) => self.ctx.notifier.toast(FEATURE_NOT_SUPPORTED),
        }
    }
}

fn feature_of(action: PendingAction) -> SocialFeature {
    match action {
        PendingAction::Share => SocialFeature::Share,
        PendingAction::StructuredShare => SocialFeature::StructuredShare,
        PendingAction::Rent => SocialFeature::Rent,
        PendingAction::PostPhoto => SocialFeature::PostPhoto,
    }
}
