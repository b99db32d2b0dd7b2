#![forbid(unsafe_code)]

//! LRU cache of measured text widths.
//!
//! Widgets measure the same labels on every frame. The cache remembers widths
//! for one [`RuneWidths`] configuration; switching configurations needs a new
//! cache.
//!
//! # Example
//! ```
//! use tdash_text::{RuneWidths, WidthCache};
//!
//! let mut cache = WidthCache::new(128, RuneWidths::new());
//! assert_eq!(cache.get_or_compute("界面"), 4);
//! assert_eq!(cache.get_or_compute("界面"), 4);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxHasher;

use crate::width::RuneWidths;

/// Default number of cached entries.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Hit and miss counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to measure the text.
    pub misses: u64,
    /// Entries currently held.
    pub size: usize,
    /// Entries held at most.
    pub capacity: usize,
}

impl CacheStats {
    /// Fraction of lookups served from the cache, `0.0` before any lookup.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Width cache bound to one [`RuneWidths`] configuration.
///
/// Not thread-safe; keep one per drawing thread.
#[derive(Debug)]
pub struct WidthCache {
    widths: RuneWidths,
    cache: LruCache<u64, usize>,
    hits: u64,
    misses: u64,
}

impl WidthCache {
    /// Create a cache holding up to `capacity` widths (at least one).
    #[must_use]
    pub fn new(capacity: usize, widths: RuneWidths) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            widths,
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// The configuration widths are measured with.
    #[must_use]
    pub fn widths(&self) -> &RuneWidths {
        &self.widths
    }

    /// Cached width of `text`, measuring it on a miss.
    pub fn get_or_compute(&mut self, text: &str) -> usize {
        let key = hash_text(text);
        if let Some(&width) = self.cache.get(&key) {
            self.hits += 1;
            return width;
        }
        self.misses += 1;
        let width = self.widths.str_width(text);
        self.cache.put(key, width);
        width
    }

    /// Whether `text` has a cached width.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.cache.contains(&hash_text(text))
    }

    /// Drop every cached width. Counters are kept.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY, RuneWidths::default())
    }
}

#[inline]
fn hash_text(text: &str) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    hasher.finish()
}
