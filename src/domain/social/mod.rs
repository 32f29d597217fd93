//! Social provider domain: provider identity, capability sets, pending
//! actions, and session lifecycle events.

mod events;
mod feature;
mod pending;
mod provider;

pub use events::SessionEvent;
pub use feature::SocialFeature;
pub use pending::{PendingAction, PendingActions};
pub use provider::Provider;
