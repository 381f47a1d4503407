//! Cache Module
//!
//! Provides the bounded LRU response cache and its performance counters.

mod lru;
mod stats;


// Re-export public types
pub use lru::LruCache;
pub use stats::CacheStats;
