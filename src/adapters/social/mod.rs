//! Vendor session adapters.
//!
//! The real vendor SDKs live in the mobile shell; here the sessions are
//! configurable in-memory doubles used by tests and demos.

mod mock_facebook;
mod mock_google;

pub use mock_facebook::MockFacebookSession;
pub use mock_google::MockGoogleSession;
