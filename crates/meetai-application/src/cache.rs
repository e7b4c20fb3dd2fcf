use async_trait::async_trait;
use meetai_core::error::Result;
use meetai_core::query::{QueryFamily, QueryInvalidator, QueryKey};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;

/// One cached response: the query family plus the serialized query input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheEntryKey {
    key: QueryKey,
    params: String,
}

/// In-memory cache of list/detail query results.
///
/// Responses are stored as JSON values so one cache serves every query
/// shape. Invalidating a key drops all of its entries (every page of a list).
pub struct QueryCache {
    entries: Arc<RwLock<HashMap<CacheEntryKey, serde_json::Value>>>,
}

impl QueryCache {
    /// Creates a new empty QueryCache.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Gets a cached response.
    ///
    /// # Arguments
    ///
    /// * `key` - Query family
    /// * `params` - Query input the response was fetched with
    pub async fn get<T, P>(&self, key: &QueryKey, params: &P) -> Option<T>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        let entry_key = Self::entry_key(key, params)?;
        let entries = self.entries.read().await;
        entries
            .get(&entry_key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Caches a response.
    pub async fn insert<T, P>(&self, key: &QueryKey, params: &P, value: &T)
    where
        T: Serialize,
        P: Serialize,
    {
        let (Some(entry_key), Ok(value)) =
            (Self::entry_key(key, params), serde_json::to_value(value))
        else {
            return;
        };
        let mut entries = self.entries.write().await;
        entries.insert(entry_key, value);
    }

    /// Runs `fetch` and caches its result under `key`/`params`.
    ///
    /// Reads always go to the backend; the cached copy is what a view can
    /// show while the fetch is in flight. A failed fetch drops the stale copy.
    pub async fn refresh<T, P, F, Fut>(&self, key: &QueryKey, params: &P, fetch: F) -> Result<T>
    where
        T: Serialize,
        P: Serialize,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        match fetch().await {
            Ok(value) => {
                self.insert(key, params, &value).await;
                Ok(value)
            }
            Err(e) => {
                if let Some(entry_key) = Self::entry_key(key, params) {
                    self.entries.write().await.remove(&entry_key);
                }
                tracing::debug!("[QueryCache] refresh failed for {:?}: {}", key, e);
                Err(e)
            }
        }
    }

    /// Removes every entry of `key`.
    pub async fn remove(&self, key: &QueryKey) {
        let mut entries = self.entries.write().await;
        entries.retain(|entry, _| &entry.key != key);
    }

    /// Removes every entry whose key belongs to `family`.
    pub async fn remove_family(&self, family: QueryFamily) {
        let mut entries = self.entries.write().await;
        entries.retain(|entry, _| entry.key.family() != family);
    }

    /// Whether any response of `key` is cached.
    pub async fn contains(&self, key: &QueryKey) -> bool {
        let entries = self.entries.read().await;
        entries.keys().any(|entry| &entry.key == key)
    }

    /// Clears all cached responses.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    fn entry_key<P: Serialize>(key: &QueryKey, params: &P) -> Option<CacheEntryKey> {
        serde_json::to_string(params).ok().map(|params| CacheEntryKey {
            key: key.clone(),
            params,
        })
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryInvalidator for QueryCache {
    async fn invalidate(&self, key: &QueryKey) {
        tracing::debug!("[QueryCache] invalidate: {:?}", key);
        self.remove(key).await;
    }

    async fn invalidate_family(&self, family: QueryFamily) {
        tracing::debug!("[QueryCache] invalidate family: {:?}", family);
        self.remove_family(family).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meetai_core::MeetError;

    #[tokio::test]
    async fn test_refresh_always_fetches() {
        let cache = QueryCache::new();
        let key = QueryKey::Agent("a1".to_string());

        let first = cache
            .refresh(&key, &"a1", || async { Ok("Tutor".to_string()) })
            .await;
        assert_eq!(first.unwrap(), "Tutor");

        let second = cache
            .refresh(&key, &"a1", || async { Ok("Coach".to_string()) })
            .await;
        assert_eq!(second.unwrap(), "Coach");
        assert_eq!(cache.get::<String, _>(&key, &"a1").await.unwrap(), "Coach");
    }

    #[tokio::test]
    async fn test_failed_refresh_drops_stale_copy() {
        let cache = QueryCache::new();
        let key = QueryKey::Meeting("m1".to_string());
        cache.insert(&key, &"m1", &"Math").await;

        let failed: Result<String> = cache
            .refresh(&key, &"m1", || async { Err(MeetError::not_found("Meeting", "m1")) })
            .await;
        assert!(failed.is_err());
        assert!(!cache.contains(&key).await);
    }

    #[tokio::test]
    async fn test_invalidate_family_drops_every_id() {
        let cache = QueryCache::new();
        cache.insert(&QueryKey::Meeting("m1".to_string()), &"m1", &1).await;
        cache.insert(&QueryKey::Meeting("m2".to_string()), &"m2", &2).await;
        cache.insert(&QueryKey::Agent("a1".to_string()), &"a1", &3).await;

        cache.invalidate_family(QueryFamily::Meeting).await;

        assert!(!cache.contains(&QueryKey::Meeting("m1".to_string())).await);
        assert!(!cache.contains(&QueryKey::Meeting("m2".to_string())).await);
        assert!(cache.contains(&QueryKey::Agent("a1".to_string())).await);
    }

    #[tokio::test]
    async fn test_invalidate_drops_every_page() {
        let cache = QueryCache::new();
        cache.insert(&QueryKey::AgentsList, &1, &vec!["a"]).await;
        cache.insert(&QueryKey::AgentsList, &2, &vec!["b"]).await;
        cache.insert(&QueryKey::MeetingsList, &1, &vec!["m"]).await;

        cache.invalidate(&QueryKey::AgentsList).await;

        assert!(!cache.contains(&QueryKey::AgentsList).await);
        assert!(cache.contains(&QueryKey::MeetingsList).await);
    }
}
