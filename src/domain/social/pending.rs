//! Deferred social actions awaiting authorization.
//!
//! When a provider handler cannot initiate an action (missing permission or
//! session), the hosting screen records it here and replays it once the
//! vendor session reports a token or sign-in update. State is per screen and
//! discarded on teardown; it is never persisted.

use std::path::{Path, PathBuf};

/// A deferrable social action.
///
/// # Invariants
///
/// - A slot is pending exactly when the last attempt of that action could
///   not be initiated and has not been replayed or cancelled since.
/// - At most one action runs at a time; replay clears a slot before the
///   action re-runs, so a failing replay re-marks rather than double-runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingAction {
    StructuredShare,
    Share,
    PostPhoto,
    Rent,
}

impl PendingAction {
    /// Fixed replay order after an authorization update.
    pub const REPLAY_ORDER: [PendingAction; 4] = [
        PendingAction::StructuredShare,
        PendingAction::Share,
        PendingAction::PostPhoto,
        PendingAction::Rent,
    ];

    fn index(self) -> usize {
        match self {
            PendingAction::StructuredShare => 0,
            PendingAction::Share => 1,
            PendingAction::PostPhoto => 2,
            PendingAction::Rent => 3,
        }
    }
}

/// Per-screen record of deferred actions, keyed by action kind, plus the
/// staged location of a photo waiting to be posted.
#[derive(Debug, Clone, Default)]
pub struct PendingActions {
    flags: [bool; 4],
    photo: Option<PathBuf>,
}

impl PendingActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an action as deferred.
    pub fn mark(&mut self, action: PendingAction) {
        self.flags[action.index()] = true;
    }

    /// Clears an action slot without replaying it.
    pub fn clear(&mut self, action: PendingAction) {
        self.flags[action.index()] = false;
    }

    /// Returns whether the action is currently deferred.
    pub fn is_pending(&self, action: PendingAction) -> bool {
        self.flags[action.index()]
    }

    /// Clears the slot and reports whether it was set. Replay loops call
    /// this before re-running the action so a failed replay can re-mark
    /// without the slot ever being set during the attempt.
    pub fn take(&mut self, action: PendingAction) -> bool {
        std::mem::replace(&mut self.flags[action.index()], false)
    }

    /// Returns whether any slot is pending.
    pub fn any_pending(&self) -> bool {
        self.flags.iter().any(|f| *f)
    }

    /// Stages the photo location a deferred `PostPhoto` should replay with.
    pub fn stage_photo(&mut self, location: PathBuf) {
        self.photo = Some(location);
    }

    /// The staged photo location, if any.
    pub fn photo(&self) -> Option<&Path> {
        self.photo.as_deref()
    }

    /// Discards all pending state, as on screen teardown or session close.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
