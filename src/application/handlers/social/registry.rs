//! Provider-to-handler resolution.

use super::facebook::FacebookHandler;
use super::google::GoogleHandler;
use super::handler::SocialHandler;
use super::SocialContext;
use crate::domain::social::Provider;

/// Resolves the handler for a provider. `Provider::None` has no handler;
/// callers treat that as "no active network" and surface feedback instead
/// of dispatching.
pub fn resolve(provider: Provider, ctx: &SocialContext) -> Option<Box<dyn SocialHandler>> {
    match provider {
        Provider::Google => Some(Box::new(GoogleHandler::new(ctx))),
        Provider::Facebook => Some(Box::new(FacebookHandler::new(ctx))),
        Provider::None => None,
    }
}
