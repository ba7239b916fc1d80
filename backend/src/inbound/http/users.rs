//! Member REST handlers.
//!
//! ```text
//! GET /api/v1/users
//! GET /api/v1/users/{uid}
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use crate::domain::avatar::{AvatarOptions, avatar_url};
use crate::domain::color::department_color;
use crate::domain::record::{UserId, UserRecord};
use crate::domain::{DomainError, EmailFingerprint};
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::state::HttpState;

/// Directory entry returned by `GET /api/v1/users`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    /// Opaque member identifier.
    pub uid: String,
    /// Human-readable name.
    pub display_name: String,
    /// Contact address when published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Free-form department label.
    pub department: String,
    /// Resolved display color for the department badge.
    pub department_color: String,
    /// Card-size avatar image address, derived from the email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserSummaryDto {
    fn from_record(record: &UserRecord, avatar_base: &Url) -> Self {
        let avatar = record.enrichment_email().map(|email| {
            avatar_url(
                avatar_base,
                &EmailFingerprint::new(email),
                &AvatarOptions::default(),
            )
            .to_string()
        });
        Self {
            uid: record.uid.to_string(),
            display_name: record.display_name.clone(),
            email: record.email.clone(),
            department: record.department.clone(),
            department_color: department_color(Some(record.department.as_str())),
            avatar_url: avatar,
        }
    }
}

/// Member profile returned by `GET /api/v1/users/{uid}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    /// Opaque member identifier.
    pub uid: String,
    /// Human-readable name.
    pub display_name: String,
    /// Contact address when published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Free-form department label.
    pub department: String,
    /// Resolved display color for the department badge.
    pub department_color: String,
    /// Biography after enrichment; empty when none is known.
    pub bio: String,
    /// Thumbnail address after enrichment; empty when none is known.
    pub thumbnail_url: String,
    /// Profile-size avatar image address, derived from the email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserProfileDto {
    fn from_record(record: &UserRecord, avatar_base: &Url) -> Self {
        let avatar = record.enrichment_email().map(|email| {
            avatar_url(
                avatar_base,
                &EmailFingerprint::new(email),
                &AvatarOptions::profile(),
            )
            .to_string()
        });
        Self {
            uid: record.uid.to_string(),
            display_name: record.display_name.clone(),
            email: record.email.clone(),
            department: record.department.clone(),
            department_color: department_color(Some(record.department.as_str())),
            bio: record.bio.clone().unwrap_or_default(),
            thumbnail_url: record.avatar_url.clone().unwrap_or_default(),
            avatar_url: avatar,
        }
    }
}

/// List directory members.
///
/// The directory always renders something: on backing-source failure the
/// data layer serves stale or empty records instead of an error.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Directory members", body = [UserSummaryDto]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> web::Json<Vec<UserSummaryDto>> {
    let snapshot = state.directory.list_records().await;
    let summaries = snapshot
        .records
        .iter()
        .map(|record| UserSummaryDto::from_record(record, &state.avatar_base))
        .collect();
    web::Json(summaries)
}

/// Fetch one member profile, enriched with Gravatar fields.
#[utoipa::path(
    get,
    path = "/api/v1/users/{uid}",
    params(
        ("uid" = String, Path, description = "Opaque member identifier")
    ),
    responses(
        (status = 200, description = "Member profile", body = UserProfileDto),
        (status = 400, description = "Invalid member id", body = ApiError),
        (status = 404, description = "Unknown member id", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{uid}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    uid: web::Path<String>,
) -> ApiResult<web::Json<UserProfileDto>> {
    let uid = UserId::new(uid.into_inner())
        .map_err(|err| DomainError::invalid_request(format!("invalid member id: {err}")))
        .map_err(ApiError::from_domain)?;
    let record = state
        .directory
        .full_record(&uid)
        .await
        .ok_or_else(|| ApiError::from_domain(DomainError::not_found("no member with this id")))?;
    Ok(web::Json(UserProfileDto::from_record(
        &record,
        &state.avatar_base,
    )))
}
