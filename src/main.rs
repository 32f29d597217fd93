//! WigwamNow demo entry point: loads configuration, restores persisted auth
//! state, and prints the current listings with their availability.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use wigwamnow::adapters::http::HttpWigwamApi;
use wigwamnow::adapters::notify::TracingNotifier;
use wigwamnow::adapters::social::{MockFacebookSession, MockGoogleSession};
use wigwamnow::adapters::store::FileAuthStore;
use wigwamnow::application::handlers::social::{SessionCoordinator, SocialContext};
use wigwamnow::application::handlers::wigwams::BrowseWigwams;
use wigwamnow::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;
    info!(host = %config.backend.external_host, "connecting to backend");

    let api = Arc::new(HttpWigwamApi::new(&config.backend));
    let store = Arc::new(FileAuthStore::open(&config.storage.auth_state_path)?);

    // The vendor SDKs live in the mobile shell; headless runs use the
    // in-memory sessions, so the coordinator sees everything signed out.
    let ctx = SocialContext::new(
        &config,
        Arc::new(MockGoogleSession::new()),
        Arc::new(MockFacebookSession::new()),
        api.clone(),
        Arc::new(TracingNotifier),
    );
    let coordinator = SessionCoordinator::new(ctx, store);
    info!(
        provider = %coordinator.current_provider().display_name(),
        screen = ?coordinator.start_screen()?,
        "session state restored"
    );

    let browse = BrowseWigwams::new(api);
    let wigwams = browse.list().await?;
    info!(count = wigwams.len(), "fetched wigwams");
    for wigwam in &wigwams {
        println!(
            "#{} {} - ${}/night ({}, {})",
            wigwam.id, wigwam.name, wigwam.price, wigwam.city, wigwam.state
        );
        for range in browse.availability_display(wigwam.id).await? {
            println!("    available {}", range);
        }
    }

    Ok(())
}
