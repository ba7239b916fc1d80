//! HTTP-backed record source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::domain::ports::{RecordSource, RecordSourceError};
use crate::domain::record::UserRecord;

/// Record source fetching the JSON document from a remote endpoint.
pub struct HttpRecordSource {
    client: Client,
    endpoint: Url,
}

impl HttpRecordSource {
    /// Build a source using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_records(&self) -> Result<Vec<UserRecord>, RecordSourceError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecordSourceError::unavailable(format!(
                "{} answered status {}",
                self.endpoint,
                status.as_u16()
            )));
        }

        let body = response.bytes().await.map_err(map_fetch_error)?;
        serde_json::from_slice(body.as_ref())
            .map_err(|error| RecordSourceError::decode(format!("invalid records JSON: {error}")))
    }
}

fn map_fetch_error(error: reqwest::Error) -> RecordSourceError {
    RecordSourceError::unavailable(error.to_string())
}
