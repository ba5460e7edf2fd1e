//! Memoized query execution keyed by specification fingerprint.
//!
//! The cache and configuration are explicit collaborators passed in by the
//! caller; the specification itself holds no state beyond its structure.

use std::time::Duration;

use serde_json::Value;

use crate::cache::SpecificationCache;
use crate::config::CacheConfig;
use crate::error::SpecificationError;
use crate::query::{Execute, QueryBuilder};
use crate::specification::Specification;

pub trait Cacheable: Specification {
    /// Apply this specification to `query` and return the matching rows,
    /// memoized under `prefix + cache_key()` when caching is enabled.
    ///
    /// On a cache hit the query is left untouched. `ttl` overrides the
    /// configured time-to-live for this call only.
    fn cached_results<Q>(
        &self,
        query: &mut Q,
        cache: &dyn SpecificationCache,
        config: &CacheConfig,
        ttl: Option<Duration>,
    ) -> Result<Vec<Value>, SpecificationError>
    where
        Q: QueryBuilder + Execute,
    {
        if !config.enabled {
            self.to_query(&mut *query);
            return Ok(query.get());
        }

        let key = format!("{}{}", config.prefix, self.cache_key());
        let mut produce = || {
            self.to_query(&mut *query);
            query.get()
        };
        cache.remember(&key, ttl.unwrap_or(config.ttl), &mut produce)
    }

    /// Drop this specification's memoized rows. Returns true if an entry
    /// existed.
    fn clear_cache(
        &self,
        cache: &dyn SpecificationCache,
        config: &CacheConfig,
    ) -> Result<bool, SpecificationError> {
        cache.forget(&format!("{}{}", config.prefix, self.cache_key()))
    }
}

impl<S: Specification + ?Sized> Cacheable for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryCache;
    use crate::conditions::WhereSpecification;
    use crate::memory::MemoryQuery;
    use serde_json::json;

    fn rows() -> Vec<Value> {
        vec![
            json!({"id": 1, "status": "active"}),
            json!({"id": 2, "status": "inactive"}),
        ]
    }

    fn enabled_config() -> CacheConfig {
        CacheConfig {
            enabled: true,
            ..CacheConfig::default()
        }
    }

    #[test]
    fn disabled_config_executes_directly() {
        let spec = WhereSpecification::new("status", "=", "active");
        let cache = InMemoryCache::new();
        let mut query = MemoryQuery::new(rows());

        let results = spec
            .cached_results(&mut query, &cache, &CacheConfig::default(), None)
            .unwrap();

        assert_eq!(results, vec![json!({"id": 1, "status": "active"})]);
        // Nothing was stored: the first enabled call still produces.
        assert!(!cache.forget("spec_x").unwrap());
    }

    #[test]
    fn enabled_config_memoizes_by_fingerprint() {
        let spec = WhereSpecification::new("status", "=", "active");
        let cache = InMemoryCache::new();
        let config = enabled_config();

        let mut first = MemoryQuery::new(rows());
        let results = spec
            .cached_results(&mut first, &cache, &config, None)
            .unwrap();
        assert_eq!(results.len(), 1);

        // A second query over a shrunken row set hits the cache instead of
        // executing, and a structurally equal specification shares the key.
        let twin = WhereSpecification::new("status", "=", "active");
        let mut second = MemoryQuery::new(Vec::new());
        let cached = twin
            .cached_results(&mut second, &cache, &config, None)
            .unwrap();
        assert_eq!(cached, results);
    }

    #[test]
    fn clear_cache_forces_reproduction() {
        let spec = WhereSpecification::new("status", "=", "active");
        let cache = InMemoryCache::new();
        let config = enabled_config();

        let mut query = MemoryQuery::new(rows());
        spec.cached_results(&mut query, &cache, &config, None)
            .unwrap();

        assert!(spec.clear_cache(&cache, &config).unwrap());

        let mut empty = MemoryQuery::new(Vec::new());
        let reproduced = spec
            .cached_results(&mut empty, &cache, &config, None)
            .unwrap();
        assert!(reproduced.is_empty());
    }

    #[test]
    fn different_specifications_use_different_keys() {
        let cache = InMemoryCache::new();
        let config = enabled_config();

        let active = WhereSpecification::new("status", "=", "active");
        let inactive = WhereSpecification::new("status", "=", "inactive");

        let mut query = MemoryQuery::new(rows());
        let active_rows = active
            .cached_results(&mut query, &cache, &config, None)
            .unwrap();

        let mut other = MemoryQuery::new(rows());
        let inactive_rows = inactive
            .cached_results(&mut other, &cache, &config, None)
            .unwrap();

        assert_ne!(active_rows, inactive_rows);
    }
}
