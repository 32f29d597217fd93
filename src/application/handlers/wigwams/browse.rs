//! Browsing wigwams: the listing, detail, and availability screens, plus
//! deep-link routing into a detail view.

use std::sync::Arc;

use tracing::debug;

use crate::domain::wigwam::{parse_deep_link, Wigwam};
use crate::ports::{ApiError, WigwamApi};

/// Read-side handler backing the listing and detail screens.
pub struct BrowseWigwams {
    api: Arc<dyn WigwamApi>,
}

impl BrowseWigwams {
    pub fn new(api: Arc<dyn WigwamApi>) -> Self {
        Self { api }
    }

    /// All wigwams, for the listing screen.
    pub async fn list(&self) -> Result<Vec<Wigwam>, ApiError> {
        self.api.list_wigwams().await
    }

    /// One wigwam, for the detail screen.
    pub async fn detail(&self, id: i64) -> Result<Wigwam, ApiError> {
        self.api.get_wigwam(id).await
    }

    /// Availability windows rendered as display strings, newest-first order
    /// as served.
    pub async fn availability_display(&self, id: i64) -> Result<Vec<String>, ApiError> {
        let listings = self.api.availability(id).await?;
        Ok(listings.iter().map(|l| l.display_range()).collect())
    }

    /// Routes an incoming URI to a wigwam detail when it carries a
    /// `/wigwams/{id}` segment; `None` for URIs that do not.
    pub async fn open_deep_link(&self, uri: &str) -> Result<Option<Wigwam>, ApiError> {
        let Some(id) = parse_deep_link(uri) else {
            debug!(%uri, "uri carries no wigwam deep link");
            return Ok(None);
        };
        self.detail(id).await.map(Some)
    }
}
