//! Server configuration assembled from the environment.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::TimeDelta;
use thiserror::Error;
use url::Url;

use backend::domain::enrichment::DEFAULT_PROFILE_TTL_SECS;
use backend::domain::store::DEFAULT_RECORDS_TTL_SECS;
use backend::outbound::gravatar::http_source::DEFAULT_PROFILE_ENDPOINT;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATA_FILE: &str = "data/users.json";
const DEFAULT_AVATAR_ENDPOINT: &str = "https://gravatar.com";
const DEFAULT_PROFILE_TIMEOUT_SECS: u64 = 3;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was present but failed to parse.
    #[error("invalid {name}: {message}")]
    Invalid {
        /// Environment variable name.
        name: &'static str,
        /// Parse failure description.
        message: String,
    },
}

impl ConfigError {
    fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            name,
            message: message.into(),
        }
    }
}

/// Builder-style configuration for the directory server.
pub struct ServerConfig {
    bind_addr: SocketAddr,
    data_path: PathBuf,
    records_url: Option<Url>,
    profile_endpoint: Url,
    avatar_base: Url,
    records_ttl: TimeDelta,
    profile_ttl: TimeDelta,
    profile_timeout: Duration,
}

impl ServerConfig {
    /// Assemble the configuration from `DIRECTORY_*` and `GRAVATAR_*`
    /// environment variables, using defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: parse_bind_addr(env_var("DIRECTORY_BIND_ADDR"))?,
            data_path: env_var("DIRECTORY_DATA_FILE")
                .map_or_else(|| PathBuf::from(DEFAULT_DATA_FILE), PathBuf::from),
            records_url: parse_optional_url("DIRECTORY_RECORDS_URL", env_var("DIRECTORY_RECORDS_URL"))?,
            profile_endpoint: parse_url(
                "GRAVATAR_PROFILE_ENDPOINT",
                env_var("GRAVATAR_PROFILE_ENDPOINT"),
                DEFAULT_PROFILE_ENDPOINT,
            )?,
            avatar_base: parse_url(
                "GRAVATAR_AVATAR_ENDPOINT",
                env_var("GRAVATAR_AVATAR_ENDPOINT"),
                DEFAULT_AVATAR_ENDPOINT,
            )?,
            records_ttl: parse_ttl_secs(
                "DIRECTORY_RECORDS_TTL_SECS",
                env_var("DIRECTORY_RECORDS_TTL_SECS"),
                DEFAULT_RECORDS_TTL_SECS,
            )?,
            profile_ttl: parse_ttl_secs(
                "GRAVATAR_PROFILE_TTL_SECS",
                env_var("GRAVATAR_PROFILE_TTL_SECS"),
                DEFAULT_PROFILE_TTL_SECS,
            )?,
            profile_timeout: Duration::from_secs(parse_secs(
                "GRAVATAR_TIMEOUT_SECS",
                env_var("GRAVATAR_TIMEOUT_SECS"),
                DEFAULT_PROFILE_TIMEOUT_SECS,
            )?),
        })
    }

    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Backing document path for the file record source.
    #[must_use]
    pub fn data_path(&self) -> &Path {
        self.data_path.as_path()
    }

    /// Remote records endpoint; when set, the HTTP record source is used
    /// instead of the file source.
    #[must_use]
    pub fn records_url(&self) -> Option<&Url> {
        self.records_url.as_ref()
    }

    /// Gravatar profile endpoint.
    #[must_use]
    pub fn profile_endpoint(&self) -> &Url {
        &self.profile_endpoint
    }

    /// Gravatar avatar endpoint used for derived image URLs.
    #[must_use]
    pub fn avatar_base(&self) -> &Url {
        &self.avatar_base
    }

    /// Lifetime of the cached record set.
    #[must_use]
    pub fn records_ttl(&self) -> TimeDelta {
        self.records_ttl
    }

    /// Lifetime of cached profile entries.
    #[must_use]
    pub fn profile_ttl(&self) -> TimeDelta {
        self.profile_ttl
    }

    /// Outbound request timeout for the profile and record fetches.
    #[must_use]
    pub fn profile_timeout(&self) -> Duration {
        self.profile_timeout
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn parse_bind_addr(value: Option<String>) -> Result<SocketAddr, ConfigError> {
    value
        .as_deref()
        .unwrap_or(DEFAULT_BIND_ADDR)
        .parse()
        .map_err(|error| {
            ConfigError::invalid("DIRECTORY_BIND_ADDR", format!("{error}"))
        })
}

fn parse_url(
    name: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<Url, ConfigError> {
    Url::parse(value.as_deref().unwrap_or(default))
        .map_err(|error| ConfigError::invalid(name, format!("{error}")))
}

fn parse_optional_url(
    name: &'static str,
    value: Option<String>,
) -> Result<Option<Url>, ConfigError> {
    value
        .as_deref()
        .map(Url::parse)
        .transpose()
        .map_err(|error| ConfigError::invalid(name, format!("{error}")))
}

fn parse_secs(
    name: &'static str,
    value: Option<String>,
    default: u64,
) -> Result<u64, ConfigError> {
    value
        .as_deref()
        .map(str::parse::<u64>)
        .transpose()
        .map_err(|error| ConfigError::invalid(name, format!("{error}")))
        .map(|parsed| parsed.unwrap_or(default))
}

fn parse_ttl_secs(
    name: &'static str,
    value: Option<String>,
    default: i64,
) -> Result<TimeDelta, ConfigError> {
    let seconds = value
        .as_deref()
        .map(str::parse::<i64>)
        .transpose()
        .map_err(|error| ConfigError::invalid(name, format!("{error}")))?
        .unwrap_or(default);
    if seconds < 0 {
        return Err(ConfigError::invalid(name, "TTL must not be negative"));
    }
    Ok(TimeDelta::seconds(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn bind_addr_falls_back_to_the_default() {
        let addr = parse_bind_addr(None).expect("default parses");
        assert_eq!(addr.port(), 8080);
    }

    #[rstest]
    fn bind_addr_rejects_garbage() {
        assert!(parse_bind_addr(Some("not-an-addr".to_owned())).is_err());
    }

    #[rstest]
    fn optional_url_is_absent_by_default() {
        let url = parse_optional_url("DIRECTORY_RECORDS_URL", None).expect("parses");
        assert!(url.is_none());
    }

    #[rstest]
    fn ttl_rejects_negative_values() {
        let result = parse_ttl_secs("DIRECTORY_RECORDS_TTL_SECS", Some("-5".to_owned()), 300);
        assert!(result.is_err());
    }

    #[rstest]
    fn ttl_falls_back_to_the_default() {
        let ttl = parse_ttl_secs("DIRECTORY_RECORDS_TTL_SECS", None, 300).expect("parses");
        assert_eq!(ttl, TimeDelta::seconds(300));
    }

    #[rstest]
    fn ttl_parses_explicit_values() {
        let ttl =
            parse_ttl_secs("GRAVATAR_PROFILE_TTL_SECS", Some("7200".to_owned()), 3600).expect("parses");
        assert_eq!(ttl, TimeDelta::seconds(7200));
    }
}
