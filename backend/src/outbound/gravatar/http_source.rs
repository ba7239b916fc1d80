//! Reqwest-backed Gravatar source adapter.
//!
//! This adapter owns transport details only: request construction, timeout
//! and HTTP error mapping, and JSON decoding into profile fields. The
//! client-level timeout aborts the in-flight request when it expires.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::GravatarProfileDto;
use crate::domain::EmailFingerprint;
use crate::domain::ports::{ProfileFields, ProfileSource, ProfileSourceError};

/// Profile endpoint used when no override is configured.
pub const DEFAULT_PROFILE_ENDPOINT: &str = "https://www.gravatar.com";

const DEFAULT_USER_AGENT: &str = "member-directory-backend/0.1";

/// Gravatar adapter performing HTTP GET requests against one endpoint.
pub struct GravatarHttpSource {
    client: Client,
    endpoint: Url,
    user_agent: String,
}

impl GravatarHttpSource {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        })
    }

    fn profile_url(&self, fingerprint: &EmailFingerprint) -> Url {
        let mut url = self.endpoint.clone();
        url.set_path(&format!("/{fingerprint}.json"));
        url
    }
}

#[async_trait]
impl ProfileSource for GravatarHttpSource {
    async fn fetch_profile(
        &self,
        fingerprint: &EmailFingerprint,
    ) -> Result<ProfileFields, ProfileSourceError> {
        let response = self
            .client
            .get(self.profile_url(fingerprint))
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_profile(body.as_ref())
    }
}

fn parse_profile(body: &[u8]) -> Result<ProfileFields, ProfileSourceError> {
    let decoded: GravatarProfileDto = serde_json::from_slice(body).map_err(|error| {
        ProfileSourceError::decode(format!("invalid Gravatar JSON payload: {error}"))
    })?;
    Ok(decoded.into_profile_fields())
}

fn map_transport_error(error: reqwest::Error) -> ProfileSourceError {
    if error.is_timeout() {
        ProfileSourceError::timeout(error.to_string())
    } else {
        ProfileSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ProfileSourceError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        "no response body".to_owned()
    } else {
        preview
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            ProfileSourceError::timeout(format!("status {}: {message}", status.as_u16()))
        }
        _ => ProfileSourceError::status(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
