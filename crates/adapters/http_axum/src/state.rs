//! Shared application state for axum handlers.

use std::sync::Arc;

use roster_app::ports::StudentRepository;
use roster_app::services::student_service::StudentService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone`: only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Student record service.
    pub student_service: Arc<StudentService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            student_service: Arc::clone(&self.student_service),
        }
    }
}

impl<R> AppState<R>
where
    R: StudentRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(student_service: StudentService<R>) -> Self {
        Self {
            student_service: Arc::new(student_service),
        }
    }
}
