//! Notifier that records every notice, for asserting on user feedback in
//! tests.

use std::sync::Mutex;

use crate::ports::Notifier;

/// A recorded piece of user feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Toast(String),
    Alert { title: String, body: String },
    ProgressShown(String),
    ProgressDismissed,
}

/// Notifier that appends notices to an in-memory list.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in order.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    /// Toast messages recorded so far.
    pub fn toasts(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Toast(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Alert (title, body) pairs recorded so far.
    pub fn alerts(&self) -> Vec<(String, String)> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Alert { title, body } => Some((title, body)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

impl Notifier for RecordingNotifier {
    fn toast(&self, message: &str) {
        self.push(Notice::Toast(message.to_string()));
    }

    fn alert(&self, title: &str, body: &str) {
        self.push(Notice::Alert {
            title: title.to_string(),
            body: body.to_string(),
        });
    }

    fn show_progress(&self, message: &str) {
        self.push(Notice::ProgressShown(message.to_string()));
    }

    fn dismiss_progress(&self) {
        self.push(Notice::ProgressDismissed);
    }
}
