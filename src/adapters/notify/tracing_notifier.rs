//! Notifier that writes user feedback to the tracing log. Used by headless
//! contexts where no UI surface exists.

use crate::ports::Notifier;

/// Log-backed notifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn toast(&self, message: &str) {
        tracing::info!(target: "wigwamnow::ui", %message, "toast");
    }

    fn alert(&self, title: &str, body: &str) {
        tracing::info!(target: "wigwamnow::ui", %title, %body, "alert");
    }

    fn show_progress(&self, message: &str) {
        tracing::debug!(target: "wigwamnow::ui", %message, "progress shown");
    }

    fn dismiss_progress(&self) {
        tracing::debug!(target: "wigwamnow::ui", "progress dismissed");
    }
}
