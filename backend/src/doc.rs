//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API:
//! member listing and profile endpoints, the department filter source,
//! and health probes. The generated document backs Swagger UI in debug
//! builds.

use utoipa::OpenApi;

use crate::domain::ErrorCode;
use crate::inbound::http::departments::DepartmentDto;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::users::{UserProfileDto, UserSummaryDto};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Member directory API",
        description = "Read-only member directory with Gravatar-enriched profiles."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::departments::list_departments,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSummaryDto, UserProfileDto, DepartmentDto, ApiError, ErrorCode)),
    tags(
        (name = "users", description = "Directory members and departments"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
