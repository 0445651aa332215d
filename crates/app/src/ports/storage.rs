//! Storage port: repository traits for persistence.

use std::future::Future;

use roster_domain::error::RosterError;
use roster_domain::id::StudentId;
use roster_domain::stats::YearCount;
use roster_domain::student::Student;

/// Repository for persisting and querying [`Student`]s.
///
/// Identifier generation belongs to the implementation: a student saved
/// without an id receives a fresh one.
pub trait StudentRepository {
    /// Insert or replace a student.
    ///
    /// Without an id the student is inserted and returned with the assigned
    /// id. With an id the row is replaced, or inserted at that id if absent.
    fn save(&self, student: Student) -> impl Future<Output = Result<Student, RosterError>> + Send;

    /// Get a student by its unique identifier.
    fn find_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<Option<Student>, RosterError>> + Send;

    /// Get all students.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Student>, RosterError>> + Send;

    /// Remove the row backing `student`. A student without an id is ignored.
    fn delete(&self, student: Student) -> impl Future<Output = Result<(), RosterError>> + Send;

    /// Total number of stored students.
    fn count(&self) -> impl Future<Output = Result<u64, RosterError>> + Send;

    /// Number of students per distinct birth year.
    ///
    /// Students without a birth date are not counted. Years with no student
    /// produce no row.
    fn find_count_grouped_by_year(
        &self,
    ) -> impl Future<Output = Result<Vec<YearCount>, RosterError>> + Send;
}
