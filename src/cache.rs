//! Key-value result cache collaborator.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::error::SpecificationError;

/// Key-value cache capability consumed by result memoization.
pub trait SpecificationCache: Send + Sync {
    /// Return the rows cached under `key`, producing and storing them on a
    /// miss or an expired entry.
    fn remember(
        &self,
        key: &str,
        ttl: Duration,
        producer: &mut dyn FnMut() -> Vec<Value>,
    ) -> Result<Vec<Value>, SpecificationError>;

    /// Drop the entry under `key`. Returns true if one existed.
    fn forget(&self, key: &str) -> Result<bool, SpecificationError>;
}

struct CacheEntry {
    rows: Vec<Value>,
    expires_at: Instant,
}

/// In-memory cache backed by `Arc<RwLock<HashMap>>`.
///
/// Clone-friendly (cloning shares the same underlying storage). Expired
/// entries are treated as absent and overwritten on the next `remember`.
#[derive(Clone)]
pub struct InMemoryCache {
    storage: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl SpecificationCache for InMemoryCache {
    fn remember(
        &self,
        key: &str,
        ttl: Duration,
        producer: &mut dyn FnMut() -> Vec<Value>,
    ) -> Result<Vec<Value>, SpecificationError> {
        {
            let storage = self
                .storage
                .read()
                .map_err(|_| SpecificationError::CachePoisoned("cache read"))?;
            if let Some(entry) = storage.get(key) {
                if entry.expires_at > Instant::now() {
                    return Ok(entry.rows.clone());
                }
            }
        }

        let rows = producer();
        let mut storage = self
            .storage
            .write()
            .map_err(|_| SpecificationError::CachePoisoned("cache write"))?;
        storage.insert(
            key.to_string(),
            CacheEntry {
                rows: rows.clone(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(rows)
    }

    fn forget(&self, key: &str) -> Result<bool, SpecificationError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| SpecificationError::CachePoisoned("cache write"))?;
        Ok(storage.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn remember_produces_once_within_ttl() {
        let cache = InMemoryCache::new();
        let mut calls = 0;

        for _ in 0..3 {
            let rows = cache
                .remember("key", Duration::from_secs(60), &mut || {
                    calls += 1;
                    vec![json!({"id": 1})]
                })
                .unwrap();
            assert_eq!(rows, vec![json!({"id": 1})]);
        }

        assert_eq!(calls, 1);
    }

    #[test]
    fn expired_entry_is_reproduced() {
        let cache = InMemoryCache::new();
        let mut calls = 0;
        let mut produce = || {
            calls += 1;
            vec![json!(calls)]
        };

        // Zero TTL expires immediately.
        cache.remember("key", Duration::ZERO, &mut produce).unwrap();
        let rows = cache.remember("key", Duration::ZERO, &mut produce).unwrap();

        assert_eq!(calls, 2);
        assert_eq!(rows, vec![json!(2)]);
    }

    #[test]
    fn forget_removes_entry() {
        let cache = InMemoryCache::new();
        cache
            .remember("key", Duration::from_secs(60), &mut || vec![json!(1)])
            .unwrap();

        assert!(cache.forget("key").unwrap());
        assert!(!cache.forget("key").unwrap());

        let mut calls = 0;
        cache
            .remember("key", Duration::from_secs(60), &mut || {
                calls += 1;
                vec![json!(2)]
            })
            .unwrap();
        assert_eq!(calls, 1);
    }

    #[test]
    fn keys_are_independent() {
        let cache = InMemoryCache::new();
        cache
            .remember("a", Duration::from_secs(60), &mut || vec![json!("a")])
            .unwrap();
        let rows = cache
            .remember("b", Duration::from_secs(60), &mut || vec![json!("b")])
            .unwrap();
        assert_eq!(rows, vec![json!("b")]);
    }

    #[test]
    fn clone_shares_storage() {
        let cache = InMemoryCache::new();
        let clone = cache.clone();

        cache
            .remember("key", Duration::from_secs(60), &mut || vec![json!(1)])
            .unwrap();

        let mut calls = 0;
        let rows = clone
            .remember("key", Duration::from_secs(60), &mut || {
                calls += 1;
                Vec::new()
            })
            .unwrap();
        assert_eq!(calls, 0);
        assert_eq!(rows, vec![json!(1)]);
    }
}
