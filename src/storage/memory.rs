//! in-memory preference storage
use {
    crate::{error::Result, storage::PreferenceStore},
    hashbrown::HashMap,
    std::sync::{Arc, RwLock},
};

/// a shared in-memory store
///
/// clones share the same map, like two tabs sharing one `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// the values, or `None` if the store is "broken"
    values: Option<Arc<RwLock<HashMap<String, String>>>>,
}

impl MemoryStore {
    /// make an empty store
    pub fn new() -> Self {
        Self {
            values: Some(Arc::new(RwLock::new(HashMap::new()))),
        }
    }

    /// a store that fails every operation
    pub fn unavailable() -> Self {
        Self { values: None }
    }

    /// get the map or fail like a blocked storage backend would
    fn values(&self) -> Result<&Arc<RwLock<HashMap<String, String>>>> {
        match self.values.as_ref() {
            Some(values) => Ok(values),
            None => crate::bail!(crate::error::ThemeError::StoreUnavailable(
                "storage is disabled".to_string()
            )),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values()?
            .read()
            .map_err(|e| format!("store lock poisoned: {}", e))?;
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values()?
            .write()
            .map_err(|e| format!("store lock poisoned: {}", e))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self
            .values()?
            .write()
            .map_err(|e| format!("store lock poisoned: {}", e))?;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_values() {
        let store = MemoryStore::new();
        let other_tab = store.clone();

        store.save("theme-preference", "dark").unwrap();

        assert_eq!(
            other_tab.load("theme-preference").unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn remove_is_quiet_for_missing_keys() {
        let store = MemoryStore::new();
        store.remove("nope").unwrap();
        assert!(store.load("nope").unwrap().is_none());
    }

    #[test]
    fn unavailable_store_errors() {
        let store = MemoryStore::unavailable();

        assert!(store.load("k").is_err());
        assert!(store.save("k", "v").is_err());
        assert!(store.remove("k").is_err());
    }
}
