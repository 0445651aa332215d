//! Student service: use-cases for managing student records.

use roster_domain::error::RosterError;
use roster_domain::id::StudentId;
use roster_domain::stats::YearCount;
use roster_domain::student::Student;

use crate::ports::StudentRepository;

/// Application service for student CRUD operations and statistics.
///
/// Holds no state of its own; every call is a single pass through the
/// repository and storage errors are returned untouched.
pub struct StudentService<R> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a new student and return it with its store-assigned id.
    ///
    /// Any id carried by `student` is discarded so the store always
    /// allocates a fresh one.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, student), fields(student_nom = %student.nom))]
    pub async fn create(&self, student: Student) -> Result<Student, RosterError> {
        self.repo.save(student.without_id()).await
    }

    /// List all students.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Student>, RosterError> {
        self.repo.find_all().await
    }

    /// Look up a student by id. A missing row is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, RosterError> {
        self.repo.find_by_id(id).await
    }

    /// Replace the student stored at `id` with `student`.
    ///
    /// The id carried by `student` is overwritten with `id`. When no row
    /// exists at `id` one is inserted there.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, student))]
    pub async fn update(&self, id: StudentId, student: Student) -> Result<Student, RosterError> {
        self.repo.save(student.with_id(id)).await
    }

    /// Delete the student at `id`.
    ///
    /// Returns `true` when a row existed and was removed, `false` when
    /// nothing was stored at `id` (the store is left untouched).
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: StudentId) -> Result<bool, RosterError> {
        let Some(student) = self.repo.find_by_id(id).await? else {
            tracing::debug!("student not found, nothing to delete");
            return Ok(false);
        };
        self.repo.delete(student).await?;
        Ok(true)
    }

    /// Total number of stored students.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn count(&self) -> Result<u64, RosterError> {
        self.repo.count().await
    }

    /// Number of students per birth year, in store order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn stats_by_year(&self) -> Result<Vec<YearCount>, RosterError> {
        let stats = self.repo.find_count_grouped_by_year().await?;
        tracing::debug!(years = stats.len(), "computed birth-year statistics");
        Ok(stats)
    }
}
