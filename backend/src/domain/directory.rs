//! Directory query layer composing the store and enrichment.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::enrichment::ProfileEnrichmentService;
use crate::domain::outcome::DirectorySnapshot;
use crate::domain::ports::DirectoryQuery;
use crate::domain::record::{UserId, UserRecord};
use crate::domain::store::DirectoryStore;

/// Production implementation of the [`DirectoryQuery`] driving port.
///
/// Records without an email perform zero external calls. Enrichment
/// failures are already absorbed inside [`ProfileEnrichmentService`], so
/// the base record is returned unmodified in the worst case.
pub struct DirectoryService {
    store: Arc<DirectoryStore>,
    enrichment: Arc<ProfileEnrichmentService>,
}

impl DirectoryService {
    /// Compose a query layer over a record store and enrichment service.
    pub fn new(store: Arc<DirectoryStore>, enrichment: Arc<ProfileEnrichmentService>) -> Self {
        Self { store, enrichment }
    }
}

#[async_trait]
impl DirectoryQuery for DirectoryService {
    async fn list_records(&self) -> DirectorySnapshot {
        self.store.load_all().await
    }

    async fn find_record(&self, uid: &UserId) -> Option<UserRecord> {
        self.store.load_one(uid).await
    }

    async fn full_record(&self, uid: &UserId) -> Option<UserRecord> {
        let record = self.store.load_one(uid).await?;
        let email = record.enrichment_email().map(str::to_owned);
        match email {
            None => Some(record),
            Some(email) => {
                let enriched = self.enrichment.enrich(&email).await;
                Some(record.filled_with(&enriched.fields))
            }
        }
    }
}
