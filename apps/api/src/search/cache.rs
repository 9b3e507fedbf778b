//! Process-local search result cache.
//!
//! A memoization stopgap, not a cache with an eviction policy: entries live
//! for a fixed five minutes, there is no size bound, and nothing is shared
//! across instances. Expired entries are dropped lazily on lookup.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tokio::time::{Duration, Instant};

use crate::search::providers::Job;

pub const SEARCH_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

struct CachedSearch {
    jobs: Vec<Job>,
    stored_at: Instant,
}

/// TTL map keyed by the JSON-serialized search request.
pub struct SearchCache {
    entries: RwLock<HashMap<String, CachedSearch>>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached results for `key` if present and fresh.
    /// An expired entry is removed and treated as a miss.
    pub async fn get(&self, key: &str) -> Option<Vec<Job>> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(cached) if cached.stored_at.elapsed() < SEARCH_CACHE_TTL => {
                    return Some(cached.jobs.clone());
                }
                Some(_) => {} // expired, fall through to remove
                None => return None,
            }
        }

        self.entries.write().await.remove(key);
        None
    }

    pub async fn put(&self, key: String, jobs: Vec<Job>) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            CachedSearch {
                jobs,
                stored_at: Instant::now(),
            },
        );
    }
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str) -> Job {
        Job {
            id: format!("test:{title}"),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: None,
            description: String::new(),
            url: None,
            salary: None,
            source: "test".to_string(),
            posted_at: None,
            match_score: None,
        }
    }

    #[tokio::test]
    async fn test_miss_on_empty_cache() {
        let cache = SearchCache::new();
        assert!(cache.get("k").await.is_none());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let cache = SearchCache::new();
        cache.put("k".to_string(), vec![job("Engineer")]).await;

        let hit = cache.get("k").await.expect("fresh entry should hit");
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].title, "Engineer");
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let cache = SearchCache::new();
        cache.put("k".to_string(), vec![job("Engineer")]).await;

        tokio::time::advance(SEARCH_CACHE_TTL + Duration::from_secs(1)).await;

        assert!(cache.get("k").await.is_none());
        // Expired entry was removed, not just skipped
        assert!(cache.entries.read().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_fresh_just_under_ttl() {
        let cache = SearchCache::new();
        cache.put("k".to_string(), vec![job("Engineer")]).await;

        tokio::time::advance(SEARCH_CACHE_TTL - Duration::from_secs(1)).await;

        assert!(cache.get("k").await.is_some());
    }
}
