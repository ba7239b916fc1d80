//! Driven port for fetching Gravatar profile fields.
//!
//! The domain owns the field contract (bio and avatar thumbnail, empty
//! strings when absent) so the enrichment cache stays adapter-agnostic.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::fingerprint::EmailFingerprint;

/// Profile fields consumed from the external service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileFields {
    /// Short biography; empty when the profile has none.
    pub bio: String,
    /// Avatar thumbnail address; empty when the profile has none.
    pub avatar_url: String,
}

/// Errors surfaced while calling the profile service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileSourceError {
    /// Network transport failed before receiving a response.
    #[error("profile transport failed: {message}")]
    Transport { message: String },
    /// The request exceeded its timeout and was aborted.
    #[error("profile request timed out: {message}")]
    Timeout { message: String },
    /// The service answered with a non-success status.
    #[error("profile request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body could not be decoded.
    #[error("profile response decode failed: {message}")]
    Decode { message: String },
}

impl ProfileSourceError {
    /// Helper for transport-level failures.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Helper for aborted, timed-out requests.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Helper for non-success HTTP statuses.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
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

/// Port for fetching the profile fields published for a fingerprint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch the profile fields published for `fingerprint`.
    async fn fetch_profile(
        &self,
        fingerprint: &EmailFingerprint,
    ) -> Result<ProfileFields, ProfileSourceError>;
}

/// Fixture source returning an empty profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureProfileSource;

#[async_trait]
impl ProfileSource for FixtureProfileSource {
    async fn fetch_profile(
        &self,
        _fingerprint: &EmailFingerprint,
    ) -> Result<ProfileFields, ProfileSourceError> {
        Ok(ProfileFields::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn status_error_carries_the_code() {
        let error = ProfileSourceError::status(502, "bad gateway");
        assert_eq!(
            error.to_string(),
            "profile request failed with status 502: bad gateway"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_source_returns_empty_fields() {
        let fields = FixtureProfileSource
            .fetch_profile(&EmailFingerprint::new("ada@example.com"))
            .await
            .expect("fixture fetch succeeds");
        assert_eq!(fields, ProfileFields::default());
    }
}
