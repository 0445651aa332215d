//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod students;

use axum::Router;
use axum::routing::get;

use roster_app::ports::StudentRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// Static segments (`count`, `stats/by-year`) take precedence over the
/// `{id}` capture, so they are never parsed as identifiers.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: StudentRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/students",
            get(students::list::<R>).post(students::create::<R>),
        )
        .route("/students/count", get(students::count::<R>))
        .route("/students/stats/by-year", get(students::stats_by_year::<R>))
        .route(
            "/students/{id}",
            get(students::get::<R>)
                .put(students::update::<R>)
                .delete(students::delete::<R>),
        )
}
