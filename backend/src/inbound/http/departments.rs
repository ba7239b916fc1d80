//! Department listing for the directory filter strip.

use std::collections::BTreeSet;

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::color::department_color;
use crate::inbound::http::state::HttpState;

/// One department with its resolved display color.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    /// Department label as it appears on records.
    pub name: String,
    /// Resolved display color.
    pub color: String,
}

/// List the distinct departments present in the directory.
///
/// Departments are returned in lexicographic order so the filter strip is
/// stable across refreshes.
#[utoipa::path(
    get,
    path = "/api/v1/departments",
    responses(
        (status = 200, description = "Distinct departments", body = [DepartmentDto]),
    ),
    tags = ["users"],
    operation_id = "listDepartments"
)]
#[get("/departments")]
pub async fn list_departments(state: web::Data<HttpState>) -> web::Json<Vec<DepartmentDto>> {
    let snapshot = state.directory.list_records().await;
    let names: BTreeSet<&str> = snapshot
        .records
        .iter()
        .map(|record| record.department.as_str())
        .filter(|name| !name.trim().is_empty())
        .collect();
    let departments = names
        .into_iter()
        .map(|name| DepartmentDto {
            name: name.to_owned(),
            color: department_color(Some(name)),
        })
        .collect();
    web::Json(departments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};
    use std::sync::Arc;
    use url::Url;

    use crate::domain::ports::FixtureDirectoryQuery;

    #[actix_web::test]
    async fn departments_are_distinct_sorted_and_colored() {
        let state = web::Data::new(HttpState::new(
            Arc::new(FixtureDirectoryQuery),
            Url::parse("https://gravatar.com").expect("avatar base"),
        ));
        let app = actix_test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/api/v1").service(list_departments)),
        )
        .await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/departments")
            .to_request();
        let departments: Vec<DepartmentDto> =
            actix_test::call_and_read_body_json(&app, request).await;

        let names: Vec<&str> = departments.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Cryptanalysis", "Finance", "Research and Development"],
        );
        assert_eq!(departments[1].color, "#4CAF50");
        assert!(
            departments[0].color.starts_with("hsl("),
            "unmapped departments derive a fallback color"
        );
    }
}
