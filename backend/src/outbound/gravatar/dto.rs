//! Gravatar profile response DTOs.
//!
//! The profile document carries many more fields than the directory
//! consumes; everything beyond the first entry's `aboutMe` and
//! `thumbnailUrl` is ignored here.

use serde::Deserialize;

use crate::domain::ports::ProfileFields;

/// Top-level Gravatar profile document.
#[derive(Debug, Clone, Deserialize)]
pub struct GravatarProfileDto {
    /// Profile entries; only the first is consumed.
    #[serde(default)]
    pub entry: Vec<GravatarEntryDto>,
}

/// One profile entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GravatarEntryDto {
    /// Short biography.
    #[serde(rename = "aboutMe", default)]
    pub about_me: Option<String>,
    /// Avatar thumbnail address.
    #[serde(rename = "thumbnailUrl", default)]
    pub thumbnail_url: Option<String>,
}

impl GravatarProfileDto {
    /// Collapse the document into the fields enrichment consumes,
    /// defaulting absent values to empty strings.
    #[must_use]
    pub fn into_profile_fields(self) -> ProfileFields {
        let first = self.entry.into_iter().next().unwrap_or_default();
        ProfileFields {
            bio: first.about_me.unwrap_or_default(),
            avatar_url: first.thumbnail_url.unwrap_or_default(),
        }
    }
}
