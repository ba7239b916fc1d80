//! Degradation-aware read outcomes.
//!
//! The data layer never raises across its public boundary; every fallible
//! read instead returns a value labelled with its provenance, so callers
//! and tests can distinguish degraded results from healthy ones.

use std::sync::Arc;

use crate::domain::ports::ProfileFields;
use crate::domain::record::UserRecord;

/// Provenance label attached to degraded-capable reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Served from a valid cache entry or a successful fetch.
    Fresh,
    /// Served from an expired cache entry after a failed refresh.
    Stale,
    /// No data was available at all.
    Empty,
}

/// Record set returned by the directory store.
#[derive(Debug, Clone)]
pub struct DirectorySnapshot {
    /// Records in backing-source order.
    pub records: Arc<[UserRecord]>,
    /// Provenance of the records.
    pub freshness: Freshness,
}

impl DirectorySnapshot {
    /// Snapshot representing a directory with no data at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
            freshness: Freshness::Empty,
        }
    }
}

/// Enrichment fields plus their provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedProfile {
    /// Parsed profile fields; empty strings when degraded to empty.
    pub fields: ProfileFields,
    /// Provenance of the fields.
    pub freshness: Freshness,
}

impl EnrichedProfile {
    /// Empty-default profile used when enrichment fails closed.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            fields: ProfileFields::default(),
            freshness: Freshness::Empty,
        }
    }
}
