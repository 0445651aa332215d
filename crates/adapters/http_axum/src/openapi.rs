//! Machine-readable description of the REST API.

use axum::Json;
use utoipa::OpenApi;

use roster_domain::stats::YearCount;
use roster_domain::student::Student;

use crate::api::students;

/// Path the generated document is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "roster", description = "Gestion des étudiants"),
    paths(
        students::create,
        students::list,
        students::get,
        students::update,
        students::delete,
        students::count,
        students::stats_by_year,
    ),
    components(schemas(Student, YearCount)),
    tags((name = "students", description = "Student records and statistics"))
)]
pub struct ApiDoc;

/// `GET /api-docs/openapi.json`
pub async fn serve() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
