//! Mock Google session for testing.
//!
//! Configurable connection state, queued server-auth-code outcomes, and
//! call tracking for every interactive surface the port can launch.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{GoogleAuthError, GoogleSession, Moment, SharePrompt};

/// Mock Google session.
#[derive(Default)]
pub struct MockGoogleSession {
    connected: AtomicBool,
    account: Mutex<Option<String>>,
    /// Outcomes for `server_auth_code`, consumed in order.
    auth_codes: Mutex<VecDeque<Result<String, GoogleAuthError>>>,
    sign_in_requests: Mutex<Vec<i32>>,
    recovery_requests: Mutex<Vec<i32>>,
    signed_out: AtomicBool,
    revoked: AtomicBool,
    shares: Mutex<Vec<SharePrompt>>,
    moments: Mutex<Vec<Moment>>,
}

impl MockGoogleSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the session connected with the given account.
    pub fn with_connected(self, account: impl Into<String>) -> Self {
        self.connected.store(true, Ordering::SeqCst);
        *self.account.lock().unwrap() = Some(account.into());
        self
    }

    /// Queues a successful server auth code.
    pub fn with_auth_code(self, code: impl Into<String>) -> Self {
        self.auth_codes.lock().unwrap().push_back(Ok(code.into()));
        self
    }

    /// Queues a server auth code failure.
    pub fn with_auth_error(self, error: GoogleAuthError) -> Self {
        self.auth_codes.lock().unwrap().push_back(Err(error));
        self
    }

    /// Flips connection state at runtime, simulating sign-in completion.
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    /// Queues another auth-code outcome after construction.
    pub fn push_auth_code(&self, result: Result<String, GoogleAuthError>) {
        self.auth_codes.lock().unwrap().push_back(result);
    }

    // Call-tracking accessors.

    pub fn launched_shares(&self) -> Vec<SharePrompt> {
        self.shares.lock().unwrap().clone()
    }

    pub fn written_moments(&self) -> Vec<Moment> {
        self.moments.lock().unwrap().clone()
    }

    pub fn sign_in_codes(&self) -> Vec<i32> {
        self.sign_in_requests.lock().unwrap().clone()
    }

    pub fn recovery_codes(&self) -> Vec<i32> {
        self.recovery_requests.lock().unwrap().clone()
    }

    pub fn was_signed_out(&self) -> bool {
        self.signed_out.load(Ordering::SeqCst)
    }

    pub fn access_was_revoked(&self) -> bool {
        self.revoked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GoogleSession for MockGoogleSession {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn account_name(&self) -> Option<String> {
        self.account.lock().unwrap().clone()
    }

    fn begin_sign_in(&self, request_code: i32) {
        self.sign_in_requests.lock().unwrap().push(request_code);
    }

    fn sign_out(&self) {
        self.signed_out.store(true, Ordering::SeqCst);
        self.connected.store(false, Ordering::SeqCst);
    }

    async fn revoke_access(&self) {
        self.revoked.store(true, Ordering::SeqCst);
        self.connected.store(false, Ordering::SeqCst);
    }

    async fn server_auth_code(
        &self,
        _scope: &str,
        _visible_activities: &[String],
    ) -> Result<String, GoogleAuthError> {
        self.auth_codes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GoogleAuthError::Fatal("no auth code configured".to_string())))
    }

    fn begin_recovery(&self, request_code: i32) {
        self.recovery_requests.lock().unwrap().push(request_code);
    }

    fn launch_share(&self, prompt: SharePrompt) {
        self.shares.lock().unwrap().push(prompt);
    }

    fn write_moment(&self, moment: Moment) {
        self.moments.lock().unwrap().push(moment);
    }
}
