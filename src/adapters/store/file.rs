//! File-backed auth store.
//!
//! Persists the auth flags as a small JSON map of key to integer, mirroring
//! a mobile preferences file: whole-value reads and writes, last writer
//! wins. The file is rewritten on every put; all writes come from the
//! single UI-bound flow so no finer-grained coordination is needed.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::social::Provider;
use crate::ports::{code_sent_key, AuthStore, StoreError, LAST_PROVIDER_KEY};

/// Auth store persisted to a JSON file.
pub struct FileAuthStore {
    path: PathBuf,
    values: Mutex<HashMap<String, i64>>,
}

impl FileAuthStore {
    /// Opens the store at `path`, loading existing state. A missing file is
    /// an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    fn get(&self, key: &str) -> i64 {
        self.values
            .lock()
            .expect("auth store lock poisoned")
            .get(key)
            .copied()
            .unwrap_or(0)
    }

    fn put(&self, key: String, value: i64) -> Result<(), StoreError> {
        let mut values = self.values.lock().expect("auth store lock poisoned");
        values.insert(key, value);
        let json = serde_json::to_string_pretty(&*values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl AuthStore for FileAuthStore {
    fn code_sent(&self, provider: Provider) -> Result<bool, StoreError> {
        Ok(self.get(&code_sent_key(provider)) == 1)
    }

    fn record_code_sent(&self, provider: Provider, sent: bool) -> Result<(), StoreError> {
        self.put(code_sent_key(provider), i64::from(sent))
    }

    fn last_provider(&self) -> Result<Provider, StoreError> {
        Ok(Provider::from_id(self.get(LAST_PROVIDER_KEY)))
    }

    fn save_last_provider(&self, provider: Provider) -> Result<(), StoreError> {
        self.put(LAST_PROVIDER_KEY.to_string(), provider.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_defaults() {
        let dir = tempdir().unwrap();
        let store = FileAuthStore::open(dir.path().join("auth.json")).unwrap();
        assert!(!store.code_sent(Provider::Google).unwrap());
        assert_eq!(store.last_provider().unwrap(), Provider::None);
    }

    #[test]
    fn state_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("auth.json");

        let store = FileAuthStore::open(&path).unwrap();
        store.record_code_sent(Provider::Google, true).unwrap();
        store.save_last_provider(Provider::Facebook).unwrap();
        drop(store);

        let reopened = FileAuthStore::open(&path).unwrap();
        assert!(reopened.code_sent(Provider::Google).unwrap());
        assert!(!reopened.code_sent(Provider::Facebook).unwrap());
        assert_eq!(reopened.last_provider().unwrap(), Provider::Facebook);
    }

    #[test]
    fn code_sent_flags_are_independent_per_provider() {
        let dir = tempdir().unwrap();
        let store = FileAuthStore::open(dir.path().join("auth.json")).unwrap();
        store.record_code_sent(Provider::Facebook, true).unwrap();
        assert!(!store.code_sent(Provider::Google).unwrap());
        store.record_code_sent(Provider::Facebook, false).unwrap();
        assert!(!store.code_sent(Provider::Facebook).unwrap());
    }

    #[test]
    fn file_uses_preference_style_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("auth.json");
        let store = FileAuthStore::open(&path).unwrap();
        store.record_code_sent(Provider::Google, true).unwrap();
        store.save_last_provider(Provider::Google).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("CODE_SENT1"));
        assert!(text.contains("LAST_PROVIDER"));
    }
}
