//! Hot-swappable suffix engine with a result cache.
//!
//! This module provides a classification front end with:
//! - LRU cache of per-host results
//! - Atomic hot reload of the rule database without downtime
//! - Lock-free concurrent reads

mod config;

pub use config::EngineConfig;

use arc_swap::ArcSwap;
use quick_cache::sync::Cache;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::classifier::Classifier;
use crate::database::RuleDatabase;
use crate::domain::normalize_host;
use crate::output::{Classification, OutputKind, OutputValue};
use crate::Result;

/// SuffixEngine owns the current rule database and serves classifications.
///
/// The database lives behind an `ArcSwap`: a reload builds the replacement
/// off to the side and publishes it with one atomic store. In-flight queries
/// finish against the old database, new queries see the new one.
///
/// # Example
///
/// ```
/// use k2psl::SuffixEngine;
///
/// let engine = SuffixEngine::from_source("com\nuk\nco.uk\n").unwrap();
/// assert_eq!(engine.classify("www.example.co.uk").registered_domain, "example.co.uk");
///
/// engine.reload_from_str("com\n").unwrap();
/// assert_eq!(engine.classify("www.example.co.uk").registered_domain, "co.uk");
/// ```
pub struct SuffixEngine {
    /// Current database, replaced atomically on reload.
    inner: ArcSwap<RuleDatabase>,
    /// Cached results tagged with the generation they were computed under.
    cache: Option<Cache<String, (u64, Classification)>>,
    config: EngineConfig,
    /// Incremented on every reload.
    generation: AtomicU64,
}

impl SuffixEngine {
    /// Wrap a database with the default configuration.
    pub fn new(db: RuleDatabase) -> Self {
        Self::with_config(db, EngineConfig::default())
    }

    /// Wrap a database with a custom configuration.
    pub fn with_config(db: RuleDatabase, config: EngineConfig) -> Self {
        let cache = if config.uses_cache() {
            Some(Cache::new(config.cache_capacity))
        } else {
            None
        };

        Self {
            inner: ArcSwap::from_pointee(db),
            cache,
            config,
            generation: AtomicU64::new(0),
        }
    }

    /// Build from list text with default configuration.
    pub fn from_source(text: &str) -> Result<Self> {
        Ok(Self::new(RuleDatabase::parse(text)?))
    }

    /// Open a list file with default configuration.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_config(path, EngineConfig::default())
    }

    /// Open a list file with custom configuration.
    pub fn open_with_config(path: &Path, config: EngineConfig) -> Result<Self> {
        Ok(Self::with_config(RuleDatabase::open(path)?, config))
    }

    /// Hot reload rules from a list file.
    ///
    /// On error the current database stays in place.
    pub fn reload(&self, path: &Path) -> Result<()> {
        let db = RuleDatabase::open(path)?;
        self.replace(db);
        log::info!("Hot reloaded suffix list from {:?}", path);
        Ok(())
    }

    /// Hot reload rules from list text.
    pub fn reload_from_str(&self, text: &str) -> Result<()> {
        let db = RuleDatabase::parse(text)?;
        self.replace(db);
        log::info!("Hot reloaded suffix list from text");
        Ok(())
    }

    /// Publish a new database and invalidate cached results.
    pub fn replace(&self, db: RuleDatabase) {
        self.inner.store(Arc::new(db));
        self.generation.fetch_add(1, Ordering::SeqCst);

        if let Some(ref cache) = self.cache {
            cache.clear();
        }
    }

    /// Classify a raw host token, using the cache when enabled.
    pub fn classify(&self, raw_host: &str) -> Classification {
        let host = normalize_host(raw_host);
        let generation = self.generation();

        if let Some(ref cache) = self.cache {
            if let Some((cached_gen, result)) = cache.get(&host) {
                if cached_gen == generation {
                    return result;
                }
            }
        }

        let db = self.inner.load();
        let result = Classifier::new(&db).classify_name(&host);

        if let Some(ref cache) = self.cache {
            cache.insert(host, (generation, result.clone()));
        }

        result
    }

    /// Compute one result for a raw host token.
    pub fn evaluate(&self, raw_host: &str, kind: OutputKind) -> OutputValue {
        if self.cache.is_some() {
            return self.classify(raw_host).get(kind);
        }
        let db = self.inner.load();
        Classifier::new(&db).evaluate(raw_host, kind)
    }

    /// Snapshot of the current database.
    ///
    /// The returned `Arc` keeps that database alive even after a reload.
    pub fn database(&self) -> Arc<RuleDatabase> {
        self.inner.load_full()
    }

    /// Clear the cache.
    pub fn clear_cache(&self) {
        if let Some(ref cache) = self.cache {
            cache.clear();
        }
    }

    /// Get cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        match self.cache {
            Some(ref cache) => CacheStats {
                capacity: self.config.cache_capacity,
                len: cache.len(),
                enabled: true,
            },
            None => CacheStats {
                capacity: 0,
                len: 0,
                enabled: false,
            },
        }
    }

    /// Get the current generation (incremented on each reload).
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy)]
pub struct CacheStats {
    /// Maximum cache capacity.
    pub capacity: usize,
    /// Current number of entries in the cache.
    pub len: usize,
    /// Whether caching is enabled.
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = "// ===BEGIN ICANN DOMAINS===\ncom\nuk\nco.uk\n// ===END ICANN DOMAINS===\n\
                        // ===BEGIN PRIVATE DOMAINS===\nblogspot.com\n// ===END PRIVATE DOMAINS===\n";

    #[test]
    fn test_engine_basic() {
        let engine = SuffixEngine::from_source(LIST).unwrap();
        let c = engine.classify("foo.blogspot.com");
        assert!(!c.is_icann);
        assert_eq!(c.domain_suffix, "blogspot.com");
        assert_eq!(c.public_suffix, "com");
    }

    #[test]
    fn test_cache_hit() {
        let engine = SuffixEngine::from_source(LIST).unwrap();

        let _ = engine.classify("www.example.co.uk");
        assert_eq!(engine.cache_stats().len, 1);

        // Same host after normalization shares the entry
        let _ = engine.classify("WWW.Example.co.uk:443");
        assert_eq!(engine.cache_stats().len, 1);
    }

    #[test]
    fn test_hot_reload() {
        let engine = SuffixEngine::from_source(LIST).unwrap();
        assert_eq!(engine.classify("foo.blogspot.com").domain_suffix, "blogspot.com");
        assert_eq!(engine.generation(), 0);

        engine.reload_from_str("com\n").unwrap();

        assert_eq!(engine.generation(), 1);
        assert_eq!(engine.classify("foo.blogspot.com").domain_suffix, "com");
    }

    #[test]
    fn test_failed_reload_keeps_database() {
        let engine = SuffixEngine::from_source(LIST).unwrap();
        assert!(engine.reload_from_str("com\n..\n").is_err());
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.database().len(), 4);
    }

    #[test]
    fn test_cache_clear_on_reload() {
        let engine = SuffixEngine::from_source(LIST).unwrap();
        let _ = engine.classify("a.com");
        let _ = engine.classify("b.co.uk");
        assert_eq!(engine.cache_stats().len, 2);

        engine.reload_from_str(LIST).unwrap();
        assert_eq!(engine.cache_stats().len, 0);
    }

    #[test]
    fn test_clear_cache() {
        let engine = SuffixEngine::from_source(LIST).unwrap();
        let _ = engine.classify("a.com");
        let _ = engine.classify("b.blogspot.com");
        assert_eq!(engine.cache_stats().len, 2);

        engine.clear_cache();
        assert_eq!(engine.cache_stats().len, 0);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.classify("b.blogspot.com").domain_suffix, "blogspot.com");
    }

    #[test]
    fn test_old_snapshot_survives_reload() {
        let engine = SuffixEngine::from_source(LIST).unwrap();
        let old = engine.database();
        engine.reload_from_str("com\n").unwrap();
        assert_eq!(old.len(), 4);
        assert_eq!(engine.database().len(), 1);
    }

    #[test]
    fn test_no_cache_config() {
        let db = RuleDatabase::parse(LIST).unwrap();
        let engine = SuffixEngine::with_config(db, EngineConfig::no_cache());

        assert_eq!(
            engine.evaluate("x.example.co.uk", OutputKind::RegisteredDomain),
            OutputValue::Text("example.co.uk".to_string())
        );
        let stats = engine.cache_stats();
        assert!(!stats.enabled);
        assert_eq!(stats.len, 0);
    }

    #[test]
    fn test_custom_capacity() {
        let db = RuleDatabase::parse(LIST).unwrap();
        let engine = SuffixEngine::with_config(db, EngineConfig::with_capacity(100));

        let stats = engine.cache_stats();
        assert!(stats.enabled);
        assert_eq!(stats.capacity, 100);
        assert_eq!(engine.config().cache_capacity, 100);
    }

    #[test]
    fn test_concurrent_reads_during_reload() {
        let engine = SuffixEngine::from_source(LIST).unwrap();

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..500 {
                        let c = engine.classify("sub.example.co.uk");
                        // Both lists agree on the ICANN answer
                        assert!(c.is_icann);
                        assert!(
                            c.registered_domain == "example.co.uk"
                                || c.registered_domain == "co.uk"
                        );
                    }
                });
            }
            s.spawn(|| {
                for i in 0..50 {
                    let text = if i % 2 == 0 { "com\n" } else { LIST };
                    engine.reload_from_str(text).unwrap();
                }
            });
        });

        assert_eq!(engine.generation(), 50);
    }
}
