//! Wigwam and Listing models, mirroring the server's JSON records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A rentable wigwam as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wigwam {
    /// The wigwam's unique id.
    pub id: i64,
    /// The wigwam's English name.
    pub name: String,
    /// A brief description of the wigwam.
    pub description: String,
    /// Price in dollars per night.
    pub price: i64,
    /// URL of a picture of the wigwam.
    pub src: String,
    /// Street address, ex: 123 Fake Street.
    pub street: String,
    /// City in which the wigwam is located.
    pub city: String,
    /// State in which the wigwam is located.
    pub state: String,
    /// Zip code for the wigwam's location.
    pub zip: String,
    /// Latitude coordinate.
    pub lat: f64,
    /// Longitude coordinate.
    pub lng: f64,
}

impl Wigwam {
    /// Canonical path segment for this wigwam, used in deep links and
    /// graph objects.
    pub fn path(&self) -> String {
        format!("/wigwams/{}", self.id)
    }

    /// Absolute canonical URL under the configured external host.
    pub fn canonical_url(&self, external_host: &str) -> String {
        format!("{}{}", external_host.trim_end_matches('/'), self.path())
    }
}

/// An availability window for a wigwam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Listing {
    /// Human-readable date range, e.g. "Sat, Jun 1 '13 - Sat, Jun 8 '13".
    pub fn display_range(&self) -> String {
        const FORMAT: &str = "%a, %b %-d '%y";
        format!(
            "{} - {}",
            self.start_date.format(FORMAT),
            self.end_date.format(FORMAT)
        )
    }
}
