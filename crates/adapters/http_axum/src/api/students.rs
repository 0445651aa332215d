//! JSON REST handlers for students.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use roster_app::ports::StudentRepository;
use roster_domain::id::StudentId;
use roster_domain::stats::YearCount;
use roster_domain::student::Student;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Student>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Student>),
    NotFound,
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

/// Possible responses from the create and update endpoints.
pub enum SaveResponse {
    Ok(Json<Student>),
}

impl IntoResponse for SaveResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
    NotFound,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

/// Possible responses from the count endpoint.
pub enum CountResponse {
    Ok(Json<u64>),
}

impl IntoResponse for CountResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the statistics endpoint.
pub enum StatsResponse {
    Ok(Json<Vec<YearCount>>),
}

impl IntoResponse for StatsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/students`: create a student; any `id` in the body is ignored.
#[utoipa::path(
    post, path = "/api/students", tag = "students",
    summary = "Créer un étudiant",
    request_body = Student,
    responses(
        (status = 200, description = "Student stored with its assigned id", body = Student),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(student): Json<Student>,
) -> Result<SaveResponse, ApiError>
where
    R: StudentRepository + Send + Sync + 'static,
{
    let created = state.student_service.create(student).await?;
    Ok(SaveResponse::Ok(Json(created)))
}

/// `GET /api/students`: list all students.
#[utoipa::path(
    get, path = "/api/students", tag = "students",
    summary = "Lister tous les étudiants",
    responses(
        (status = 200, description = "Every stored student", body = Vec<Student>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: StudentRepository + Send + Sync + 'static,
{
    let students = state.student_service.find_all().await?;
    Ok(ListResponse::Ok(Json(students)))
}

/// `GET /api/students/:id`: get a student, `404` with an empty body if absent.
#[utoipa::path(
    get, path = "/api/students/{id}", tag = "students",
    summary = "Récupérer un étudiant par identifiant",
    params(("id" = i64, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "Student found", body = Student),
        (status = 404, description = "No student with this id"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    R: StudentRepository + Send + Sync + 'static,
{
    let found = state.student_service.find_by_id(StudentId::new(id)).await?;
    Ok(found.map_or(GetResponse::NotFound, |student| {
        GetResponse::Ok(Json(student))
    }))
}

/// `PUT /api/students/:id`: replace the student at `id`, inserting it if absent.
#[utoipa::path(
    put, path = "/api/students/{id}", tag = "students",
    summary = "Mettre à jour un étudiant",
    params(("id" = i64, Path, description = "Student identifier")),
    request_body = Student,
    responses(
        (status = 200, description = "Student stored at the path id", body = Student),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
    Json(student): Json<Student>,
) -> Result<SaveResponse, ApiError>
where
    R: StudentRepository + Send + Sync + 'static,
{
    let updated = state
        .student_service
        .update(StudentId::new(id), student)
        .await?;
    Ok(SaveResponse::Ok(Json(updated)))
}

/// `DELETE /api/students/:id`: `204` when removed, `404` when absent.
#[utoipa::path(
    delete, path = "/api/students/{id}", tag = "students",
    summary = "Supprimer un étudiant",
    params(("id" = i64, Path, description = "Student identifier")),
    responses(
        (status = 204, description = "Student removed"),
        (status = 404, description = "No student with this id"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    R: StudentRepository + Send + Sync + 'static,
{
    if state.student_service.delete(StudentId::new(id)).await? {
        Ok(DeleteResponse::NoContent)
    } else {
        Ok(DeleteResponse::NotFound)
    }
}

/// `GET /api/students/count`: total number of students.
#[utoipa::path(
    get, path = "/api/students/count", tag = "students",
    summary = "Compter le nombre total d'étudiants",
    responses(
        (status = 200, description = "Number of stored students", body = u64),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn count<R>(State(state): State<AppState<R>>) -> Result<CountResponse, ApiError>
where
    R: StudentRepository + Send + Sync + 'static,
{
    let count = state.student_service.count().await?;
    Ok(CountResponse::Ok(Json(count)))
}

/// `GET /api/students/stats/by-year`: `[{year, count}]` per birth year.
#[utoipa::path(
    get, path = "/api/students/stats/by-year", tag = "students",
    summary = "Statistiques du nombre d'étudiants par année de naissance",
    responses(
        (status = 200, description = "Students per birth year, oldest first", body = Vec<YearCount>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn stats_by_year<R>(State(state): State<AppState<R>>) -> Result<StatsResponse, ApiError>
where
    R: StudentRepository + Send + Sync + 'static,
{
    let stats = state.student_service.stats_by_year().await?;
    Ok(StatsResponse::Ok(Json(stats)))
}
