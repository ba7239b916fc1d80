//! Demo member records in backing-document wire format.

use serde::{Deserialize, Serialize};

/// One demo member, serialised with the backing document's field names:
/// `uid`, `displayName`, `email`, `job_title`, `aboutMe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoMember {
    /// Opaque unique identifier.
    pub uid: String,
    /// Full display name.
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// Contact address; omitted for a fraction of members.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Department label.
    #[serde(rename = "job_title")]
    pub department: String,
    /// Short biography; omitted for a fraction of members.
    #[serde(rename = "aboutMe", default, skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
}
