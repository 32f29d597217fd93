//! Session lifecycle events.
//!
//! Vendor SDKs report session changes through registered callbacks; the
//! transport is decoupled here into an explicit event value so the
//! coordinator and screen dispatchers can be driven from a channel (or
//! called directly in tests) without knowing about the SDK callback shape.

use super::Provider;

/// A change in a vendor session, delivered to the session coordinator and
/// to any screen with pending actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The provider's session became open/connected.
    Opened(Provider),
    /// The session token was refreshed, typically with new permissions.
    TokenUpdated(Provider),
    /// The session was closed or signed out.
    Closed(Provider),
}

impl SessionEvent {
    /// The provider the event refers to.
    pub fn provider(&self) -> Provider {
        match self {
            SessionEvent::Opened(p) | SessionEvent::TokenUpdated(p) | SessionEvent::Closed(p) => {
                *p
            }
        }
    }
}
