//! In-memory auth store for tests and ephemeral use.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::social::Provider;
use crate::ports::{code_sent_key, AuthStore, StoreError, LAST_PROVIDER_KEY};

/// Auth store that keeps its values in memory only.
#[derive(Default)]
pub struct InMemoryAuthStore {
    values: Mutex<HashMap<String, i64>>,
}

impl InMemoryAuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, key: &str) -> i64 {
        self.values
            .lock()
            .expect("auth store lock poisoned")
            .get(key)
            .copied()
            .unwrap_or(0)
    }

    fn put(&self, key: String, value: i64) {
        self.values
            .lock()
            .expect("auth store lock poisoned")
            .insert(key, value);
    }
}

impl AuthStore for InMemoryAuthStore {
    fn code_sent(&self, provider: Provider) -> Result<bool, StoreError> {
        Ok(self.get(&code_sent_key(provider)) == 1)
    }

    fn record_code_sent(&self, provider: Provider, sent: bool) -> Result<(), StoreError> {
        self.put(code_sent_key(provider), i64::from(sent));
        Ok(())
    }

    fn last_provider(&self) -> Result<Provider, StoreError> {
        Ok(Provider::from_id(self.get(LAST_PROVIDER_KEY)))
    }

    fn save_last_provider(&self, provider: Provider) -> Result<(), StoreError> {
        self.put(LAST_PROVIDER_KEY.to_string(), provider.id());
        Ok(())
    }
}
