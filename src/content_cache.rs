use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use spdlog::debug;

/// Fixed-capacity cache living for one run. Once full, the oldest inserted
/// entry is evicted first. A capacity of 0 caches nothing.
pub struct ContentCache<T> {
    entries: HashMap<String, Arc<T>>,
    order: VecDeque<String>,
    capacity: usize,
}

impl<T> ContentCache<T> {
    pub fn new(capacity: usize) -> Self {
        ContentCache {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<Arc<T>> {
        self.entries.get(key).cloned()
    }

    pub fn add(&mut self, key: &str, content: T) -> Arc<T> {
        let value = Arc::new(content);
        if self.capacity == 0 {
            return value;
        }

        if self.entries.insert(key.to_string(), value.clone()).is_none() {
            self.order.push_back(key.to_string());
        }

        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                debug!("Evicting {} from cache", oldest);
                self.entries.remove(&oldest);
            }
        }

        value
    }

    /// Returns the cached value for `key`, or loads it with `load` and caches
    /// the result. Load errors are returned as is and nothing gets cached.
    pub fn get_or<E, F>(&mut self, key: &str, load: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }
        let content = load()?;
        Ok(self.add(key, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut cache = ContentCache::new(2);
        let content = "Hello, world!".to_string();

        let cached = cache.add("post", content.clone());
        assert_eq!(Arc::strong_count(&cached), 2);

        let retrieved = cache.get("post").unwrap();
        assert_eq!(retrieved.as_ref(), &content);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_nonexistent_key() {
        let cache: ContentCache<String> = ContentCache::new(4);
        assert!(cache.get("nonexistent-key").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_oldest_is_evicted() {
        let mut cache = ContentCache::new(2);
        cache.add("a", 1);
        cache.add("b", 2);
        cache.add("c", 3);

        assert!(cache.get("a").is_none());
        assert_eq!(*cache.get("b").unwrap(), 2);
        assert_eq!(*cache.get("c").unwrap(), 3);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_replacing_keeps_insertion_slot() {
        let mut cache = ContentCache::new(2);
        cache.add("a", 1);
        cache.add("b", 2);
        cache.add("a", 10);
        cache.add("c", 3);

        // "a" was inserted first, so it still goes first
        assert!(cache.get("a").is_none());
        assert_eq!(*cache.get("b").unwrap(), 2);
        assert_eq!(*cache.get("c").unwrap(), 3);
    }

    #[test]
    fn test_non_caching_behavior() {
        let mut cache: ContentCache<String> = ContentCache::new(0);
        let cached = cache.add("post", "Non-cached content".to_string());
        assert_eq!(Arc::strong_count(&cached), 1);
        assert!(cache.get("post").is_none());
    }

    #[test]
    fn test_get_or_loads_once() {
        let mut cache = ContentCache::new(4);
        let mut loads = 0;

        for _ in 0..3 {
            let value = cache
                .get_or("key", || -> Result<String, String> {
                    loads += 1;
                    Ok("loaded".to_string())
                })
                .unwrap();
            assert_eq!(value.as_str(), "loaded");
        }
        assert_eq!(loads, 1);
    }

    #[test]
    fn test_get_or_does_not_cache_errors() {
        let mut cache: ContentCache<String> = ContentCache::new(4);
        let res = cache.get_or("key", || Err("boom".to_string()));
        assert_eq!(res.unwrap_err(), "boom");
        assert!(cache.get("key").is_none());
    }
}
