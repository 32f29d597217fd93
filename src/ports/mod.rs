//! Ports - trait seams between the social core and its collaborators:
//! vendor SDK sessions, the backend REST API, persisted auth state, and the
//! user-feedback surface.

mod auth_store;
mod facebook_session;
mod google_session;
mod notifier;
mod wigwam_api;

pub use auth_store::{code_sent_key, AuthStore, StoreError, LAST_PROVIDER_KEY};
pub use facebook_session::{
    FacebookSession, FeedPost, GraphAction, GraphError, GraphErrorCategory,
};
pub use google_session::{GoogleAuthError, GoogleSession, Moment, SharePrompt};
pub use notifier::Notifier;
pub use wigwam_api::{ApiError, FacebookTokenExchange, GoogleCodeExchange, WigwamApi};
