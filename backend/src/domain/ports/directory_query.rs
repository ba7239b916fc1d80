//! Driving port for directory reads.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch member data
//! without importing the store or outbound adapters. Production backs it
//! with [`crate::domain::DirectoryService`]; handler tests use the
//! deterministic fixture below.
//!
//! Every operation is infallible by design: the data layer absorbs source
//! and enrichment failures into degraded values, and "not found" is an
//! explicit absent result rather than an error.

use async_trait::async_trait;

use crate::domain::outcome::DirectorySnapshot;
use crate::domain::record::{UserId, UserRecord};

/// Domain use-case port for directory reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryQuery: Send + Sync {
    /// Return the current directory snapshot.
    async fn list_records(&self) -> DirectorySnapshot;

    /// Find one record by id, without enrichment.
    async fn find_record(&self, uid: &UserId) -> Option<UserRecord>;

    /// Find one record by id and fill empty fields from the external
    /// profile service.
    async fn full_record(&self, uid: &UserId) -> Option<UserRecord>;
}

/// Deterministic in-memory directory used by handler tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDirectoryQuery;

impl FixtureDirectoryQuery {
    /// Records served by the fixture, in directory order.
    #[must_use]
    pub fn records() -> Vec<UserRecord> {
        let entries = [
            (
                "u-100",
                "Ada Lovelace",
                Some("ada@example.com"),
                "Research and Development",
                Some("Wrote the first program."),
            ),
            (
                "u-200",
                "Grace Hopper",
                Some("grace@example.com"),
                "Finance",
                None,
            ),
            ("u-300", "Alan Turing", None, "Cryptanalysis", None),
        ];
        entries
            .into_iter()
            .filter_map(|(uid, display_name, email, department, bio)| {
                Some(UserRecord {
                    uid: UserId::new(uid).ok()?,
                    display_name: display_name.to_owned(),
                    email: email.map(str::to_owned),
                    department: department.to_owned(),
                    bio: bio.map(str::to_owned),
                    avatar_url: None,
                })
            })
            .collect()
    }
}

#[async_trait]
impl DirectoryQuery for FixtureDirectoryQuery {
    async fn list_records(&self) -> DirectorySnapshot {
        use crate::domain::outcome::Freshness;
        DirectorySnapshot {
            records: Self::records().into(),
            freshness: Freshness::Fresh,
        }
    }

    async fn find_record(&self, uid: &UserId) -> Option<UserRecord> {
        Self::records()
            .into_iter()
            .find(|record| &record.uid == uid)
    }

    async fn full_record(&self, uid: &UserId) -> Option<UserRecord> {
        self.find_record(uid).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_lists_three_records() {
        let snapshot = FixtureDirectoryQuery.list_records().await;
        assert_eq!(snapshot.records.len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_finds_records_by_id() {
        let uid = UserId::new("u-200").expect("fixture uid");
        let record = FixtureDirectoryQuery
            .find_record(&uid)
            .await
            .expect("record exists");
        assert_eq!(record.display_name, "Grace Hopper");
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_returns_none_for_unknown_id() {
        let uid = UserId::new("missing-id").expect("fixture uid");
        assert!(FixtureDirectoryQuery.find_record(&uid).await.is_none());
    }
}
