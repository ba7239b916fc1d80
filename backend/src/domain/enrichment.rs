//! Gravatar profile enrichment with a long-lived cache.
//!
//! Entries are keyed by email fingerprint and live for an hour by
//! default. Expired entries are kept and served as a fallback when a
//! refresh fails, so a flaky or slow profile service degrades the
//! directory instead of breaking it. The request timeout lives in the
//! source adapter; a timeout aborts the in-flight request and reaches
//! this service as an ordinary failure.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use tracing::warn;

use crate::domain::fingerprint::EmailFingerprint;
use crate::domain::outcome::{EnrichedProfile, Freshness};
use crate::domain::ports::{ProfileFields, ProfileSource, ProfileSourceError};

/// Default lifetime in seconds of a cached profile entry.
pub const DEFAULT_PROFILE_TTL_SECS: i64 = 60 * 60;

struct CachedProfile {
    fields: ProfileFields,
    fetched_at: DateTime<Utc>,
}

/// Long-TTL, per-fingerprint cache over a [`ProfileSource`].
///
/// Constructed without a source (see [`ProfileEnrichmentService::disabled`])
/// the service fails closed: every lookup returns empty fields with a
/// logged warning.
pub struct ProfileEnrichmentService {
    source: Option<Arc<dyn ProfileSource>>,
    clock: Arc<dyn Clock>,
    ttl: TimeDelta,
    cache: RwLock<HashMap<EmailFingerprint, CachedProfile>>,
}

impl ProfileEnrichmentService {
    /// Create a service backed by `source` with the default entry TTL.
    pub fn new(source: Arc<dyn ProfileSource>, clock: Arc<dyn Clock>) -> Self {
        Self::with_ttl(source, clock, TimeDelta::seconds(DEFAULT_PROFILE_TTL_SECS))
    }

    /// Create a service with an explicit entry TTL.
    pub fn with_ttl(
        source: Arc<dyn ProfileSource>,
        clock: Arc<dyn Clock>,
        ttl: TimeDelta,
    ) -> Self {
        Self {
            source: Some(source),
            clock,
            ttl,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Create a fail-closed service for deployments without outbound
    /// network access.
    pub fn disabled(clock: Arc<dyn Clock>) -> Self {
        Self {
            source: None,
            clock,
            ttl: TimeDelta::seconds(DEFAULT_PROFILE_TTL_SECS),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch profile fields for `email`.
    ///
    /// Serves cached entries while they remain valid and degrades to
    /// stale-or-empty on failure; never returns an error.
    pub async fn enrich(&self, email: &str) -> EnrichedProfile {
        if email.trim().is_empty() {
            return EnrichedProfile::empty();
        }
        let Some(source) = self.source.as_ref() else {
            warn!("profile enrichment invoked without an outbound source");
            return EnrichedProfile::empty();
        };

        let fingerprint = EmailFingerprint::new(email);
        let now = self.clock.utc();
        if let Some(fields) = self.cached_within_ttl(&fingerprint, now) {
            return EnrichedProfile {
                fields,
                freshness: Freshness::Fresh,
            };
        }

        match source.fetch_profile(&fingerprint).await {
            Ok(fields) => {
                self.store(fingerprint, fields.clone(), now);
                EnrichedProfile {
                    fields,
                    freshness: Freshness::Fresh,
                }
            }
            Err(error) => self.degraded(&fingerprint, &error),
        }
    }

    fn cached_within_ttl(
        &self,
        fingerprint: &EmailFingerprint,
        now: DateTime<Utc>,
    ) -> Option<ProfileFields> {
        let guard = self.cache.read().ok()?;
        let cached = guard.get(fingerprint)?;
        (now.signed_duration_since(cached.fetched_at) < self.ttl).then(|| cached.fields.clone())
    }

    fn store(&self, fingerprint: EmailFingerprint, fields: ProfileFields, now: DateTime<Utc>) {
        if let Ok(mut guard) = self.cache.write() {
            guard.insert(
                fingerprint,
                CachedProfile {
                    fields,
                    fetched_at: now,
                },
            );
        }
    }

    fn degraded(
        &self,
        fingerprint: &EmailFingerprint,
        error: &ProfileSourceError,
    ) -> EnrichedProfile {
        let stale = self
            .cache
            .read()
            .ok()
            .and_then(|guard| guard.get(fingerprint).map(|cached| cached.fields.clone()));
        match stale {
            Some(fields) => {
                warn!(%error, %fingerprint, "profile fetch failed; serving stale entry");
                EnrichedProfile {
                    fields,
                    freshness: Freshness::Stale,
                }
            }
            None => {
                warn!(%error, %fingerprint, "profile fetch failed with no cached fallback");
                EnrichedProfile::empty()
            }
        }
    }
}
