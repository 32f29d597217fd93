//! Notifier port - the user-feedback surface (toast/dialog/progress).
//!
//! Handlers surface ordinary operational failures as categorized messages
//! here instead of letting vendor errors escape their boundary.

/// User-facing feedback surface.
pub trait Notifier: Send + Sync {
    /// Short transient message.
    fn toast(&self, message: &str);

    /// Modal message with a title.
    fn alert(&self, title: &str, body: &str);

    /// Shows a progress indicator for a long-running action.
    fn show_progress(&self, message: &str);

    /// Dismisses the progress indicator if one is showing.
    fn dismiss_progress(&self);
}
