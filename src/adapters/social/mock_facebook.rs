//! Mock Facebook session for testing.
//!
//! Configurable session/permission state, queued graph outcomes, and call
//! tracking for permission requests, feed dialogs, graph posts, and photo
//! uploads.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::Secret;

use crate::ports::{FacebookSession, FeedPost, GraphAction, GraphError};

/// Mock Facebook session.
#[derive(Default)]
pub struct MockFacebookSession {
    open: AtomicBool,
    token: Mutex<Option<String>>,
    expiry: Mutex<Option<DateTime<Utc>>>,
    permissions: Mutex<Vec<String>>,
    /// Queued outcomes; when a queue is empty the call succeeds with a
    /// generated id.
    feed_results: Mutex<VecDeque<Result<Option<String>, GraphError>>>,
    publish_results: Mutex<VecDeque<Result<String, GraphError>>>,
    upload_results: Mutex<VecDeque<Result<String, GraphError>>>,
    permission_requests: Mutex<Vec<(Vec<String>, i32)>>,
    feed_posts: Mutex<Vec<FeedPost>>,
    published_actions: Mutex<Vec<GraphAction>>,
    uploads: Mutex<Vec<PathBuf>>,
    closed: AtomicBool,
}

impl MockFacebookSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the session open with the given token and expiry.
    pub fn with_open_session(self, token: impl Into<String>, expiry: DateTime<Utc>) -> Self {
        self.open.store(true, Ordering::SeqCst);
        *self.token.lock().unwrap() = Some(token.into());
        *self.expiry.lock().unwrap() = Some(expiry);
        self
    }

    /// Grants a permission up front.
    pub fn with_permission(self, permission: impl Into<String>) -> Self {
        self.permissions.lock().unwrap().push(permission.into());
        self
    }

    /// Queues a feed-dialog outcome.
    pub fn with_feed_result(self, result: Result<Option<String>, GraphError>) -> Self {
        self.feed_results.lock().unwrap().push_back(result);
        self
    }

    /// Queues a graph-publish outcome.
    pub fn with_publish_result(self, result: Result<String, GraphError>) -> Self {
        self.publish_results.lock().unwrap().push_back(result);
        self
    }

    /// Queues a photo-upload outcome.
    pub fn with_upload_result(self, result: Result<String, GraphError>) -> Self {
        self.upload_results.lock().unwrap().push_back(result);
        self
    }

    /// Grants a permission at runtime, simulating a completed re-auth flow.
    pub fn grant_permission(&self, permission: impl Into<String>) {
        self.permissions.lock().unwrap().push(permission.into());
    }

    /// Flips session state at runtime.
    pub fn set_open(&self, open: bool) {
        self.open.store(open, Ordering::SeqCst);
    }

    // Call-tracking accessors.

    pub fn permission_requests(&self) -> Vec<(Vec<String>, i32)> {
        self.permission_requests.lock().unwrap().clone()
    }

    pub fn shown_feed_posts(&self) -> Vec<FeedPost> {
        self.feed_posts.lock().unwrap().clone()
    }

    pub fn published_actions(&self) -> Vec<GraphAction> {
        self.published_actions.lock().unwrap().clone()
    }

    pub fn uploaded_photos(&self) -> Vec<PathBuf> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn was_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FacebookSession for MockFacebookSession {
    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    fn access_token(&self) -> Option<Secret<String>> {
        self.token.lock().unwrap().clone().map(Secret::new)
    }

    fn token_expiry(&self) -> Option<DateTime<Utc>> {
        *self.expiry.lock().unwrap()
    }

    fn permissions(&self) -> Vec<String> {
        self.permissions.lock().unwrap().clone()
    }

    fn request_publish_permissions(&self, permissions: &[String], request_code: i32) {
        self.permission_requests
            .lock()
            .unwrap()
            .push((permissions.to_vec(), request_code));
    }

    async fn show_feed_dialog(&self, post: FeedPost) -> Result<Option<String>, GraphError> {
        self.feed_posts.lock().unwrap().push(post);
        self.feed_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Some("post-1".to_string())))
    }

    async fn publish_action(&self, action: GraphAction) -> Result<String, GraphError> {
        self.published_actions.lock().unwrap().push(action);
        self.publish_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok("action-1".to_string()))
    }

    async fn upload_photo(&self, photo: &Path) -> Result<String, GraphError> {
        self.uploads.lock().unwrap().push(photo.to_path_buf());
        self.upload_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok("photo-1".to_string()))
    }

    fn close_and_clear_token(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.open.store(false, Ordering::SeqCst);
        *self.token.lock().unwrap() = None;
        *self.expiry.lock().unwrap() = None;
    }
}
