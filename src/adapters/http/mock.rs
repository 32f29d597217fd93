//! Mock backend for testing.
//!
//! Serves configured wigwams and listings and records hybrid-auth
//! exchanges, allowing tests to run without a network.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::domain::wigwam::{Listing, Wigwam};
use crate::ports::{ApiError, FacebookTokenExchange, GoogleCodeExchange, WigwamApi};

/// In-memory stand-in for the WigwamNow backend.
#[derive(Default)]
pub struct MockWigwamApi {
    wigwams: Mutex<Vec<Wigwam>>,
    listings: Mutex<HashMap<i64, Vec<Listing>>>,
    /// Pre-configured outcomes for hybrid exchanges, consumed in order.
    /// When empty, exchanges succeed.
    hybrid_results: Mutex<VecDeque<Result<(), ApiError>>>,
    /// Simulated latency for hybrid exchanges.
    hybrid_delay: Mutex<Option<Duration>>,
    google_codes: Mutex<Vec<GoogleCodeExchange>>,
    facebook_tokens: Mutex<Vec<FacebookTokenExchange>>,
}

impl MockWigwamApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a wigwam to the served listing set.
    pub fn with_wigwam(self, wigwam: Wigwam) -> Self {
        self.wigwams.lock().unwrap().push(wigwam);
        self
    }

    /// Sets the availability served for a wigwam.
    pub fn with_listings(self, id: i64, listings: Vec<Listing>) -> Self {
        self.listings.lock().unwrap().insert(id, listings);
        self
    }

    /// Queues an outcome for the next hybrid-auth exchange.
    pub fn with_hybrid_result(self, result: Result<(), ApiError>) -> Self {
        self.hybrid_results.lock().unwrap().push_back(result);
        self
    }

    /// Delays every hybrid exchange, for overlap testing.
    pub fn with_hybrid_delay(self, delay: Duration) -> Self {
        *self.hybrid_delay.lock().unwrap() = Some(delay);
        self
    }

    /// Google code exchanges received so far.
    pub fn google_codes(&self) -> Vec<GoogleCodeExchange> {
        self.google_codes.lock().unwrap().clone()
    }

    /// Facebook token exchanges received so far.
    pub fn facebook_tokens(&self) -> Vec<FacebookTokenExchange> {
        self.facebook_tokens.lock().unwrap().clone()
    }

    async fn next_hybrid_result(&self) -> Result<(), ApiError> {
        let delay = *self.hybrid_delay.lock().unwrap();
        if let Some(delay) = delay {
            sleep(delay).await;
        }
        self.hybrid_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

#[async_trait]
impl WigwamApi for MockWigwamApi {
    async fn list_wigwams(&self) -> Result<Vec<Wigwam>, ApiError> {
        Ok(self.wigwams.lock().unwrap().clone())
    }

    async fn get_wigwam(&self, id: i64) -> Result<Wigwam, ApiError> {
        self.wigwams
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                path: format!("/wigwams/{}.json", id),
                status: 404,
            })
    }

    async fn availability(&self, id: i64) -> Result<Vec<Listing>, ApiError> {
        Ok(self
            .listings
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or_default())
    }

    async fn send_facebook_token(&self, exchange: &FacebookTokenExchange) -> Result<(), ApiError> {
        let result = self.next_hybrid_result().await;
        if result.is_ok() {
            self.facebook_tokens.lock().unwrap().push(exchange.clone());
        }
        result
    }

    async fn send_google_code(&self, exchange: &GoogleCodeExchange) -> Result<(), ApiError> {
        let result = self.next_hybrid_result().await;
        if result.is_ok() {
            self.google_codes.lock().unwrap().push(exchange.clone());
        }
        result
    }
}
