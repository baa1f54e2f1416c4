use tokio::time::{interval, Duration};

use crate::limiter::rate_limit::InMemoryRateLimitStore;

const SWEEP_INTERVAL: Duration = Duration::from_secs(300);
const IDLE_TTL: Duration = Duration::from_secs(600);

/// Periodically drops rate-limit records for addresses not seen recently,
/// so the in-memory table cannot grow without bound.
pub async fn start_eviction_task(store: InMemoryRateLimitStore) {
    let mut interval = interval(SWEEP_INTERVAL);

    loop {
        interval.tick().await;

        let evicted = store.evict_stale(IDLE_TTL);
        if evicted > 0 {
            tracing::info!(
                evicted,
                remaining = store.tracked_keys(),
                "Evicted idle rate-limit records"
            );
        }
    }
}
