use std::env;
use std::time::Duration;

/// Configuration for specification result caching.
///
/// Caching is opt-in: the default configuration leaves it disabled, and
/// `cached_results` falls back to executing the query directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub enabled: bool,
    pub ttl: Duration,
    pub prefix: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            ttl: Duration::from_secs(3600),
            prefix: "spec_".to_string(),
        }
    }
}

impl CacheConfig {
    /// Read configuration from `SPECIFICATION_CACHE_ENABLED`,
    /// `SPECIFICATION_CACHE_TTL` (seconds), and
    /// `SPECIFICATION_CACHE_PREFIX`, falling back to the defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env::var("SPECIFICATION_CACHE_ENABLED")
                .ok()
                .map(|raw| matches!(raw.as_str(), "1" | "true" | "TRUE" | "on"))
                .unwrap_or(defaults.enabled),
            ttl: env::var("SPECIFICATION_CACHE_TTL")
                .ok()
                .and_then(|raw| raw.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.ttl),
            prefix: env::var("SPECIFICATION_CACHE_PREFIX").unwrap_or(defaults.prefix),
        }
    }
}
