use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::Mutex;

/// Verdict of a single recorded submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDecision {
    pub allowed: bool,
    /// Submissions counted in the current window, this one included.
    pub count: u32,
}

/// Fixed-window submission counter, keyed by client identity.
///
/// `record_and_check` is the only mutating operation: window reset, increment
/// and limit comparison happen under one lock, so a record's count can never
/// pass the limit without the same call returning a rejection. The trait is
/// async so a shared external store can back it in multi-instance
/// deployments; the bundled store is process-local and best-effort by
/// contract (state is lost on restart).
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    async fn record_and_check(&self, key: &str) -> RateDecision;
}

#[derive(Debug)]
struct WindowRecord {
    count: u32,
    window_start: Instant,
    last_seen: Instant,
}

type Key = String;

#[derive(Clone)]
pub struct InMemoryRateLimitStore {
    map: Arc<DashMap<Key, Arc<Mutex<WindowRecord>>>>,
    window: Duration,
    limit: u32,
}

impl InMemoryRateLimitStore {
    pub fn new(window: Duration, limit: u32) -> Self {
        InMemoryRateLimitStore {
            map: Arc::new(DashMap::new()),
            window,
            limit,
        }
    }

    fn get_record(&self, key: &str, now: Instant) -> Arc<Mutex<WindowRecord>> {
        if let Some(existing) = self.map.get(key) {
            return existing.clone();
        }
        let record = Arc::new(Mutex::new(WindowRecord {
            count: 0,
            window_start: now,
            last_seen: now,
        }));
        match self.map.entry(key.to_string()) {
            dashmap::mapref::entry::Entry::Occupied(entry) => entry.get().clone(),
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                entry.insert(record.clone());
                record
            }
        }
    }

    /// Clock-injectable form of [`RateLimitStore::record_and_check`]; tests
    /// use it to simulate window expiry without sleeping.
    pub fn record_and_check_at(&self, key: &str, now: Instant) -> RateDecision {
        let record = self.get_record(key, now);
        let mut rec = record.lock();

        if now.duration_since(rec.window_start) > self.window {
            rec.count = 0;
            rec.window_start = now;
        }
        rec.count += 1;
        rec.last_seen = now;

        RateDecision {
            allowed: rec.count <= self.limit,
            count: rec.count,
        }
    }

    /// Drops records idle longer than `idle_ttl`. Called from the periodic
    /// sweep so addresses seen once do not accumulate forever.
    pub fn evict_stale(&self, idle_ttl: Duration) -> usize {
        let now = Instant::now();
        let stale: Vec<Key> = self
            .map
            .iter()
            .filter_map(|entry| {
                let rec = entry.value().lock();
                if now.duration_since(rec.last_seen) > idle_ttl {
                    Some(entry.key().clone())
                } else {
                    None
                }
            })
            .collect();

        let evicted = stale.len();
        for key in stale {
            self.map.remove(&key);
        }
        evicted
    }

    pub fn tracked_keys(&self) -> usize {
        self.map.len()
    }
}

#[async_trait]
impl RateLimitStore for InMemoryRateLimitStore {
    async fn record_and_check(&self, key: &str) -> RateDecision {
        self.record_and_check_at(key, Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryRateLimitStore {
        InMemoryRateLimitStore::new(Duration::from_secs(60), 5)
    }

    #[test]
    fn sixth_submission_in_window_is_rejected() {
        let store = store();
        let now = Instant::now();

        for i in 1..=5 {
            let decision = store.record_and_check_at("203.0.113.7", now);
            assert!(decision.allowed, "submission {} should pass", i);
        }
        let sixth = store.record_and_check_at("203.0.113.7", now);
        assert!(!sixth.allowed);
        assert_eq!(sixth.count, 6);
    }

    #[test]
    fn window_expiry_resets_count_to_one() {
        let store = store();
        let now = Instant::now();

        for _ in 0..6 {
            store.record_and_check_at("203.0.113.7", now);
        }

        let later = now + Duration::from_secs(61);
        let decision = store.record_and_check_at("203.0.113.7", later);
        assert!(decision.allowed);
        assert_eq!(decision.count, 1);
    }

    #[test]
    fn keys_are_counted_independently() {
        let store = store();
        let now = Instant::now();

        for _ in 0..5 {
            store.record_and_check_at("203.0.113.7", now);
        }
        let other = store.record_and_check_at("198.51.100.2", now);
        assert!(other.allowed);
        assert_eq!(other.count, 1);
    }

    #[test]
    fn sweep_evicts_only_idle_records() {
        let store = store();
        let old = Instant::now() - Duration::from_secs(3600);

        store.record_and_check_at("stale-client", old);
        store.record_and_check_at("fresh-client", Instant::now());

        let evicted = store.evict_stale(Duration::from_secs(600));
        assert_eq!(evicted, 1);
        assert_eq!(store.tracked_keys(), 1);
    }
}
