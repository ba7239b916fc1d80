//! Cached directory record store.
//!
//! A single-slot cache over a [`RecordSource`]: the last successful full
//! load plus its load timestamp. Reads inside the TTL perform no I/O;
//! reads past it refresh the slot wholesale. Failures never surface to
//! callers — an expired entry is preferred over an empty result, and the
//! slot is only replaced by a successful fetch.
//!
//! Concurrent misses may both fetch and both write; the overwrite is
//! idempotent and deliberately unserialized. The lock is never held
//! across an await point.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use tracing::{debug, warn};

use crate::domain::outcome::{DirectorySnapshot, Freshness};
use crate::domain::ports::{RecordSource, RecordSourceError};
use crate::domain::record::{UserId, UserRecord};

/// Default lifetime in seconds of a cached record set.
pub const DEFAULT_RECORDS_TTL_SECS: i64 = 5 * 60;

struct CachedRecords {
    records: Arc<[UserRecord]>,
    fetched_at: DateTime<Utc>,
}

/// Short-TTL, single-slot cache over a [`RecordSource`].
pub struct DirectoryStore {
    source: Arc<dyn RecordSource>,
    clock: Arc<dyn Clock>,
    ttl: TimeDelta,
    cache: RwLock<Option<CachedRecords>>,
}

impl DirectoryStore {
    /// Create a store with the default record TTL.
    pub fn new(source: Arc<dyn RecordSource>, clock: Arc<dyn Clock>) -> Self {
        Self::with_ttl(source, clock, TimeDelta::seconds(DEFAULT_RECORDS_TTL_SECS))
    }

    /// Create a store with an explicit record TTL.
    pub fn with_ttl(source: Arc<dyn RecordSource>, clock: Arc<dyn Clock>, ttl: TimeDelta) -> Self {
        Self {
            source,
            clock,
            ttl,
            cache: RwLock::new(None),
        }
    }

    /// Return the record set, refreshing the cache when it has expired.
    pub async fn load_all(&self) -> DirectorySnapshot {
        let now = self.clock.utc();
        if let Some(snapshot) = self.cached_within_ttl(now) {
            return snapshot;
        }
        match self.source.fetch_records().await {
            Ok(records) => self.store_fresh(records, now),
            Err(error) => self.degraded(&error),
        }
    }

    /// Return one record by id, scanning the current snapshot.
    ///
    /// No index is maintained; record sets are small enough that a linear
    /// scan per lookup is acceptable.
    pub async fn load_one(&self, uid: &UserId) -> Option<UserRecord> {
        self.load_all()
            .await
            .records
            .iter()
            .find(|record| &record.uid == uid)
            .cloned()
    }

    fn cached_within_ttl(&self, now: DateTime<Utc>) -> Option<DirectorySnapshot> {
        let guard = self.cache.read().ok()?;
        let cached = guard.as_ref()?;
        (now.signed_duration_since(cached.fetched_at) < self.ttl).then(|| DirectorySnapshot {
            records: Arc::clone(&cached.records),
            freshness: Freshness::Fresh,
        })
    }

    fn store_fresh(&self, records: Vec<UserRecord>, now: DateTime<Utc>) -> DirectorySnapshot {
        let records: Arc<[UserRecord]> = records.into();
        if let Ok(mut guard) = self.cache.write() {
            *guard = Some(CachedRecords {
                records: Arc::clone(&records),
                fetched_at: now,
            });
        }
        debug!(count = records.len(), "directory records refreshed");
        DirectorySnapshot {
            records,
            freshness: Freshness::Fresh,
        }
    }

    fn degraded(&self, error: &RecordSourceError) -> DirectorySnapshot {
        let stale = self
            .cache
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|cached| Arc::clone(&cached.records)));
        match stale {
            Some(records) => {
                warn!(%error, "record fetch failed; serving stale directory");
                DirectorySnapshot {
                    records,
                    freshness: Freshness::Stale,
                }
            }
            None => {
                warn!(%error, "record fetch failed with no cached fallback");
                DirectorySnapshot::empty()
            }
        }
    }
}
