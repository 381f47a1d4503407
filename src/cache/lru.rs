//! Bounded LRU Cache Module
//!
//! The core of the facade: a bounded least-recently-used cache memoizing
//! response payloads keyed by request identity. Lookup is a HashMap from
//! key to a slot in an arena-backed doubly-linked recency list, so both
//! `get` and `set` run in O(1) amortized time.
//!
//! `get` is a mutating operation: a hit promotes the entry to the
//! most-recently-used position, which is why callers must hold exclusive
//! access for reads as well as writes.

use std::collections::HashMap;

use crate::cache::CacheStats;
use crate::error::{FacadeError, Result};

/// Sentinel index marking the absence of a neighbor in the recency list.
const NIL: usize = usize::MAX;

// == Node ==
/// A slot in the recency list arena.
///
/// `prev` points toward the most-recently-used end, `next` toward the
/// least-recently-used end.
#[derive(Debug)]
struct Node<V> {
    key: String,
    value: V,
    prev: usize,
    next: usize,
}

// == Bounded LRU Cache ==
/// A bounded cache evicting the least-recently-used entry on overflow.
///
/// Keys are opaque strings (the request identity); values are a generic
/// payload type cloned out on every hit. Capacity is fixed at construction
/// and the entry count never exceeds it.
#[derive(Debug)]
pub struct LruCache<V> {
    /// Key to arena-slot mapping
    map: HashMap<String, usize>,
    /// Arena backing the recency list
    nodes: Vec<Node<V>>,
    /// Recycled arena slots
    free: Vec<usize>,
    /// Most recently used slot
    head: usize,
    /// Least recently used slot
    tail: usize,
    /// Maximum number of entries
    capacity: usize,
    /// Performance counters
    stats: CacheStats,
}

impl<V: Clone> LruCache<V> {
    // == Constructor ==
    /// Creates a new empty cache holding at most `capacity` entries.
    ///
    /// Fails with [`FacadeError::InvalidConfiguration`] when `capacity` is
    /// zero; a cache that can hold nothing is a configuration mistake, not
    /// a degenerate mode worth supporting.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < 1 {
            return Err(FacadeError::InvalidConfiguration(
                "cache capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            map: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            capacity,
            stats: CacheStats::new(),
        })
    }

    // == Get ==
    /// Looks up a key, promoting the entry to most-recently-used on a hit.
    ///
    /// A miss returns `None` without touching entries or ordering; it is a
    /// normal outcome, not an error.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.map.get(key).copied() {
            Some(slot) => {
                self.detach(slot);
                self.attach_front(slot);
                self.stats.record_hit();
                Some(self.nodes[slot].value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Inserts or replaces a value, making the entry most-recently-used.
    ///
    /// When the key is new and the cache is full, the least-recently-used
    /// entry is evicted first, so the entry count never exceeds capacity.
    /// Eviction is silent; callers are not notified.
    pub fn set(&mut self, key: String, value: V) {
        if let Some(&slot) = self.map.get(&key) {
            self.nodes[slot].value = value;
            self.detach(slot);
            self.attach_front(slot);
            return;
        }

        if self.map.len() >= self.capacity {
            self.evict_oldest();
        }

        let slot = self.allocate(key.clone(), value);
        self.map.insert(key, slot);
        self.attach_front(slot);
    }

    // == Contains ==
    /// Checks whether a key is present without refreshing its recency.
    #[allow(dead_code)]
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    // == Clear ==
    /// Drops every entry and resets the recency list.
    ///
    /// Hit/miss/eviction counters are preserved; clearing invalidates the
    /// entries, not the history.
    pub fn clear(&mut self) {
        self.map.clear();
        self.nodes.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    // == Stats ==
    /// Returns a snapshot of the performance counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.map.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    // == Capacity ==
    /// Returns the maximum number of entries.
    #[allow(dead_code)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Internal: Allocate ==
    /// Places a node in the arena, reusing a recycled slot when available.
    fn allocate(&mut self, key: String, value: V) -> usize {
        let node = Node {
            key,
            value,
            prev: NIL,
            next: NIL,
        };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    // == Internal: Evict Oldest ==
    /// Removes the least-recently-used entry and recycles its slot.
    fn evict_oldest(&mut self) {
        let slot = self.tail;
        if slot == NIL {
            return;
        }
        self.detach(slot);
        let key = std::mem::take(&mut self.nodes[slot].key);
        self.map.remove(&key);
        self.free.push(slot);
        self.stats.record_eviction();
    }

    // == Internal: Detach ==
    /// Unlinks a currently linked slot from the recency list.
    fn detach(&mut self, slot: usize) {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        if prev != NIL {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }
        self.nodes[slot].prev = NIL;
        self.nodes[slot].next = NIL;
    }

    // == Internal: Attach Front ==
    /// Links a detached slot in at the most-recently-used position.
    fn attach_front(&mut self, slot: usize) {
        self.nodes[slot].prev = NIL;
        self.nodes[slot].next = self.head;
        if self.head != NIL {
            self.nodes[self.head].prev = slot;
        }
        self.head = slot;
        if self.tail == NIL {
            self.tail = slot;
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_capacity() {
        let result = LruCache::<String>::new(0);
        assert!(matches!(result, Err(FacadeError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_new_starts_empty() {
        let cache = LruCache::<String>::new(4).unwrap();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.capacity(), 4);
    }

    #[test]
    fn test_set_and_get() {
        let mut cache = LruCache::new(4).unwrap();

        cache.set("a".to_string(), 1);
        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_miss_on_empty_cache() {
        let mut cache = LruCache::<i32>::new(4).unwrap();

        assert_eq!(cache.get("nonexistent"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_update_in_place() {
        let mut cache = LruCache::new(4).unwrap();

        cache.set("a".to_string(), 1);
        cache.set("a".to_string(), 2);

        assert_eq!(cache.get("a"), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_eviction_at_capacity() {
        let mut cache = LruCache::new(3).unwrap();

        cache.set("k1".to_string(), 1);
        cache.set("k2".to_string(), 2);
        cache.set("k3".to_string(), 3);
        cache.set("k4".to_string(), 4);

        assert_eq!(cache.len(), 3);
        assert!(!cache.contains("k1"));
        assert!(cache.contains("k2"));
        assert!(cache.contains("k3"));
        assert!(cache.contains("k4"));
    }

    #[test]
    fn test_get_refreshes_recency() {
        let mut cache = LruCache::new(2).unwrap();

        cache.set("a".to_string(), 1);
        cache.set("b".to_string(), 2);

        // Touch "a" so "b" becomes the eviction candidate
        assert_eq!(cache.get("a"), Some(1));

        cache.set("c".to_string(), 3);

        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("c"), Some(3));
    }

    #[test]
    fn test_reset_refreshes_recency() {
        let mut cache = LruCache::new(2).unwrap();

        cache.set("a".to_string(), 1);
        cache.set("b".to_string(), 2);
        // Re-setting "b" with the same value still refreshes its recency
        cache.set("b".to_string(), 2);
        cache.set("c".to_string(), 3);

        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
        assert!(cache.contains("c"));
    }

    #[test]
    fn test_reset_most_recent_key() {
        let mut cache = LruCache::new(2).unwrap();

        cache.set("a".to_string(), 1);
        cache.set("b".to_string(), 2);
        // "b" is already most recent; ordering is unchanged, value replaced
        cache.set("b".to_string(), 20);

        assert_eq!(cache.get("b"), Some(20));
        cache.set("c".to_string(), 3);
        assert!(!cache.contains("a"));
    }

    #[test]
    fn test_capacity_one_churn() {
        let mut cache = LruCache::new(1).unwrap();

        cache.set("a".to_string(), 1);
        cache.set("b".to_string(), 2);
        cache.set("c".to_string(), 3);

        assert_eq!(cache.len(), 1);
        assert!(!cache.contains("a"));
        assert!(!cache.contains("b"));
        assert_eq!(cache.get("c"), Some(3));
    }

    #[test]
    fn test_clear() {
        let mut cache = LruCache::new(3).unwrap();

        cache.set("a".to_string(), 1);
        cache.set("b".to_string(), 2);
        cache.get("a");

        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.get("a"), None);

        // Cache is usable after a clear and counters survive it
        cache.set("c".to_string(), 3);
        assert_eq!(cache.get("c"), Some(3));
        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_stats_counting() {
        let mut cache = LruCache::new(2).unwrap();

        cache.set("a".to_string(), 1);
        cache.get("a"); // hit
        cache.get("b"); // miss
        cache.set("b".to_string(), 2);
        cache.set("c".to_string(), 3); // evicts "a"

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.entries, 2);
    }

    #[test]
    fn test_slot_reuse_after_eviction() {
        let mut cache = LruCache::new(2).unwrap();

        // Drive enough churn to cycle through recycled arena slots
        for i in 0..20 {
            cache.set(format!("k{}", i), i);
            assert!(cache.len() <= 2);
        }

        assert_eq!(cache.get("k19"), Some(19));
        assert_eq!(cache.get("k18"), Some(18));
        assert_eq!(cache.get("k0"), None);
    }
}
