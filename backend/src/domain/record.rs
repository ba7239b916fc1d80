//! Directory record model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::ProfileFields;

/// Validation errors returned when constructing a [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdValidationError {
    /// Identifier is empty.
    Empty,
    /// Identifier carries leading or trailing whitespace.
    SurroundingWhitespace,
}

impl fmt::Display for UserIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "member id must not be empty"),
            Self::SurroundingWhitespace => {
                write!(f, "member id must not contain surrounding whitespace")
            }
        }
    }
}

impl std::error::Error for UserIdValidationError {}

/// Opaque record identifier assigned by the backing data source.
///
/// Identifiers are free-form strings owned by the data source; the domain
/// only requires them to be non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserIdValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    fn from_owned(id: String) -> Result<Self, UserIdValidationError> {
        if id.is_empty() {
            return Err(UserIdValidationError::Empty);
        }
        if id.trim() != id {
            return Err(UserIdValidationError::SurroundingWhitespace);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// One member record as stored in the backing JSON document.
///
/// ## Invariants
/// - `uid` is unique across a record set (owned by the data source).
/// - Records are immutable once loaded; [`UserRecord::filled_with`]
///   produces a new merged value instead of mutating in place.
///
/// Wire field names follow the backing document: `uid`, `displayName`,
/// `email`, `job_title`, `aboutMe`, `thumbnailUrl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserRecord {
    /// Opaque unique identifier.
    pub uid: UserId,
    /// Human-readable name.
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// Contact address; the enrichment key when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Free-form department or job title; drives color assignment.
    #[serde(rename = "job_title")]
    pub department: String,
    /// Short biography; enrichment may fill this when empty.
    #[serde(rename = "aboutMe", default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Avatar image address; enrichment may fill this when empty.
    #[serde(
        rename = "thumbnailUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_url: Option<String>,
}

impl UserRecord {
    /// Return the enrichment key when the record carries a usable address.
    ///
    /// Blank or whitespace-only addresses are treated as absent, so no
    /// enrichment is attempted for them.
    #[must_use]
    pub fn enrichment_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|address| !address.is_empty())
    }

    /// Merge enrichment fields into a new record.
    ///
    /// Enrichment only fills fields the base record left empty; a
    /// non-empty pre-existing `bio` or `avatar_url` is never overwritten.
    #[must_use]
    pub fn filled_with(&self, profile: &ProfileFields) -> Self {
        let mut merged = self.clone();
        if is_blank(merged.bio.as_deref()) && !profile.bio.is_empty() {
            merged.bio = Some(profile.bio.clone());
        }
        if is_blank(merged.avatar_url.as_deref()) && !profile.avatar_url.is_empty() {
            merged.avatar_url = Some(profile.avatar_url.clone());
        }
        merged
    }
}

fn is_blank(field: Option<&str>) -> bool {
    field.is_none_or(|value| value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(bio: Option<&str>, avatar_url: Option<&str>) -> UserRecord {
        UserRecord {
            uid: UserId::new("u-100").expect("fixture uid"),
            display_name: "Ada Lovelace".to_owned(),
            email: Some("ada@example.com".to_owned()),
            department: "Research and Development".to_owned(),
            bio: bio.map(str::to_owned),
            avatar_url: avatar_url.map(str::to_owned),
        }
    }

    #[rstest]
    #[case::empty("")]
    #[case::padded(" u-100 ")]
    fn user_id_rejects_invalid_input(#[case] raw: &str) {
        assert!(UserId::new(raw).is_err());
    }

    #[rstest]
    fn enrichment_email_ignores_blank_addresses(
        #[values(None, Some(""), Some("   "))] email: Option<&str>,
    ) {
        let mut subject = record(None, None);
        subject.email = email.map(str::to_owned);
        assert_eq!(subject.enrichment_email(), None);
    }

    #[rstest]
    fn filled_with_keeps_existing_bio() {
        let base = record(Some("hand-written"), None);
        let profile = ProfileFields {
            bio: "from gravatar".to_owned(),
            avatar_url: "https://example.com/a.png".to_owned(),
        };

        let merged = base.filled_with(&profile);

        assert_eq!(merged.bio.as_deref(), Some("hand-written"));
        assert_eq!(merged.avatar_url.as_deref(), Some("https://example.com/a.png"));
    }

    #[rstest]
    fn filled_with_fills_blank_fields_only(
        #[values(None, Some(""), Some("  "))] bio: Option<&str>,
    ) {
        let base = record(bio, None);
        let profile = ProfileFields {
            bio: "from gravatar".to_owned(),
            avatar_url: String::new(),
        };

        let merged = base.filled_with(&profile);

        assert_eq!(merged.bio.as_deref(), Some("from gravatar"));
        assert_eq!(merged.avatar_url, None, "empty enrichment must not fill");
    }

    #[rstest]
    fn wire_format_round_trips_source_field_names() {
        let document = r#"{
            "uid": "u-7",
            "displayName": "Grace Hopper",
            "email": "grace@example.com",
            "job_title": "Finance",
            "aboutMe": "compilers"
        }"#;

        let parsed: UserRecord = serde_json::from_str(document).expect("record decodes");
        assert_eq!(parsed.uid.as_ref(), "u-7");
        assert_eq!(parsed.department, "Finance");
        assert_eq!(parsed.avatar_url, None);

        let serialised = serde_json::to_value(&parsed).expect("record encodes");
        assert_eq!(serialised["job_title"], "Finance");
        assert_eq!(serialised["aboutMe"], "compilers");
        assert!(serialised.get("thumbnailUrl").is_none());
    }
}
