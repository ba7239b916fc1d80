//! Driven port for loading the directory record set.
//!
//! The domain owns the record shape; adapters own transport (file read or
//! HTTP fetch) and are selected at construction time.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::record::UserRecord;

/// Errors surfaced by record-source adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordSourceError {
    /// The backing file or endpoint could not be read.
    #[error("record source unavailable: {message}")]
    Unavailable { message: String },
    /// The payload could not be decoded into records.
    #[error("record source decode failed: {message}")]
    Decode { message: String },
}

impl RecordSourceError {
    /// Helper for read failures.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Helper for decode failures.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for fetching the full record set from the backing source.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch every record, in backing-source order.
    async fn fetch_records(&self) -> Result<Vec<UserRecord>, RecordSourceError>;
}

/// Fixture source returning no records.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureRecordSource;

#[async_trait]
impl RecordSource for FixtureRecordSource {
    async fn fetch_records(&self) -> Result<Vec<UserRecord>, RecordSourceError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn error_helpers_render_their_messages() {
        assert_eq!(
            RecordSourceError::unavailable("no such file").to_string(),
            "record source unavailable: no such file"
        );
        assert_eq!(
            RecordSourceError::decode("bad JSON").to_string(),
            "record source decode failed: bad JSON"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_source_returns_no_records() {
        let records = FixtureRecordSource
            .fetch_records()
            .await
            .expect("fixture fetch succeeds");
        assert!(records.is_empty());
    }
}
