//! Notifier adapters.

mod recording;
mod tracing_notifier;

pub use recording::{Notice, RecordingNotifier};
pub use tracing_notifier::TracingNotifier;
