//! Cache of built normalizers.
//!
//! Compiling a rule set is cheap but not free. This module keeps recently
//! used normalizers keyed by their configuration so that callers switching
//! between a handful of configurations build each one only once.

use crate::config::NormalizerConfig;
use crate::normalizer::Normalizer;
use akshar_core::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// LRU cache of normalizers.
///
/// Uses a simple HashMap-based implementation with a fixed capacity.
/// When the cache exceeds capacity, the least recently used entry is evicted.
pub struct NormalizerCache {
    /// The cache storing config -> normalizer
    cache: HashMap<NormalizerConfig, Arc<Normalizer>>,
    /// Maximum number of entries in the cache
    capacity: usize,
    /// Track use order for LRU eviction
    insertion_order: Vec<NormalizerConfig>,
    hits: u64,
    misses: u64,
}

impl NormalizerCache {
    /// Create a new cache with the given capacity.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries to store
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: HashMap::with_capacity(capacity),
            capacity,
            insertion_order: Vec::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Create a new cache with default capacity (16).
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    /// Get the cached normalizer for `config`, building it on a miss.
    ///
    /// Construction errors are returned and nothing is cached.
    pub fn get_or_build(&mut self, config: &NormalizerConfig) -> Result<Arc<Normalizer>> {
        if let Some(cached) = self.cache.get(config).cloned() {
            self.touch(config);
            self.hits += 1;
            tracing::trace!(script = %config.script, "normalizer cache hit");
            return Ok(cached);
        }

        self.misses += 1;
        tracing::trace!(script = %config.script, "normalizer cache miss");
        let normalizer = Arc::new(Normalizer::new(config.clone())?);
        self.insert(config.clone(), Arc::clone(&normalizer));

        Ok(normalizer)
    }

    /// Move `config` to the most recently used position.
    fn touch(&mut self, config: &NormalizerConfig) {
        if let Some(pos) = self.insertion_order.iter().position(|x| x == config) {
            self.insertion_order.remove(pos);
        }
        self.insertion_order.push(config.clone());
    }

    fn insert(&mut self, key: NormalizerConfig, value: Arc<Normalizer>) {
        if self.capacity == 0 {
            return;
        }

        if self.insertion_order.len() >= self.capacity && !self.cache.contains_key(&key) {
            self.evict_oldest();
        }

        self.touch(&key);
        self.cache.insert(key, value);
    }

    fn evict_oldest(&mut self) {
        if !self.insertion_order.is_empty() {
            let oldest = self.insertion_order.remove(0);
            self.cache.remove(&oldest);
        }
    }

    /// Clear all entries from the cache.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.insertion_order.clear();
    }

    /// Get the number of entries in the cache.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Get the cache capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Resize the cache.
    ///
    /// If the new capacity is smaller than the current size,
    /// least recently used entries will be evicted.
    pub fn resize(&mut self, new_capacity: usize) {
        self.capacity = new_capacity;
        while self.insertion_order.len() > new_capacity {
            self.evict_oldest();
        }
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        let lookups = self.hits + self.misses;
        CacheStats {
            entries: self.cache.len(),
            capacity: self.capacity,
            hit_rate: (lookups > 0).then(|| self.hits as f64 / lookups as f64),
        }
    }
}

impl Default for NormalizerCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Current number of entries
    pub entries: usize,
    /// Maximum capacity
    pub capacity: usize,
    /// Cache hit rate (None before the first lookup)
    pub hit_rate: Option<f64>,
}
