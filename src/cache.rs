//! TTL cache for the hospital directory.
//!
//! Holds the last-fetched departments and doctors as one atomic
//! snapshot and refreshes it at most once per freshness window.
//! Dependencies (provider, clock, TTL) are injected so tests run with
//! fakes and a deterministic clock.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::directory::{DirectoryError, DirectoryProvider};
use crate::models::{Department, Doctor};

// ═══════════════════════════════════════════════════════════
// Clock seam
// ═══════════════════════════════════════════════════════════

/// Epoch-millisecond clock, injectable for deterministic TTL tests.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

// ═══════════════════════════════════════════════════════════
// Snapshot
// ═══════════════════════════════════════════════════════════

/// One atomic view of the directory. Departments and doctors always
/// come from the same fetch pair — never half-refreshed.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorySnapshot {
    pub departments: Vec<Department>,
    pub doctors: Vec<Doctor>,
}

struct CacheState {
    snapshot: Option<DirectorySnapshot>,
    fetched_at_ms: i64,
}

// ═══════════════════════════════════════════════════════════
// DirectoryCache
// ═══════════════════════════════════════════════════════════

/// Refresh-on-demand cache in front of the directory API.
pub struct DirectoryCache {
    provider: Arc<dyn DirectoryProvider>,
    clock: Arc<dyn Clock>,
    ttl_ms: i64,
    state: Mutex<CacheState>,
}

impl DirectoryCache {
    pub fn new(provider: Arc<dyn DirectoryProvider>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            provider,
            clock,
            ttl_ms: ttl.as_millis() as i64,
            state: Mutex::new(CacheState {
                snapshot: None,
                fetched_at_ms: 0,
            }),
        }
    }

    /// Return a fresh snapshot, fetching only when empty or stale.
    ///
    /// Both collections are fetched concurrently and replaced together;
    /// if either fetch fails the previous contents stay untouched and
    /// the error propagates (no internal retry). The state lock is held
    /// across the refresh, so concurrent stale hits collapse into a
    /// single fetch pair — the second caller re-checks freshness after
    /// the first finishes and takes the cache hit.
    pub async fn load(&self) -> Result<DirectorySnapshot, DirectoryError> {
        let mut state = self.state.lock().await;
        let now = self.clock.now_ms();

        if let Some(snapshot) = &state.snapshot {
            if now - state.fetched_at_ms <= self.ttl_ms {
                return Ok(snapshot.clone());
            }
        }

        tracing::debug!("directory cache empty or stale, refreshing");
        let (departments, doctors) = tokio::try_join!(
            self.provider.fetch_departments(),
            self.provider.fetch_doctors(),
        )?;
        tracing::info!(
            departments = departments.len(),
            doctors = doctors.len(),
            "directory cache refreshed"
        );

        let snapshot = DirectorySnapshot {
            departments,
            doctors,
        };
        state.snapshot = Some(snapshot.clone());
        state.fetched_at_ms = now;
        Ok(snapshot)
    }

    /// Current contents without triggering a refresh.
    pub async fn cached(&self) -> Option<DirectorySnapshot> {
        self.state.lock().await.snapshot.clone()
    }
}
