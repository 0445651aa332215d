//! `SQLite` implementation of [`StudentRepository`].

use std::future::Future;

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use roster_app::ports::StudentRepository;
use roster_domain::error::RosterError;
use roster_domain::id::StudentId;
use roster_domain::stats::YearCount;
use roster_domain::student::Student;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Student`].
struct Wrapper(Student);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Student> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let nom: String = row.try_get("nom")?;
        let prenom: Option<String> = row.try_get("prenom")?;
        let date_naissance: Option<String> = row.try_get("date_naissance")?;

        let date_naissance = date_naissance
            .map(|s| s.parse::<NaiveDate>())
            .transpose()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Student {
            id: Some(StudentId::new(id)),
            nom,
            prenom,
            date_naissance,
        }))
    }
}

/// Row of the per-year aggregate.
struct YearRow(YearCount);

impl<'r> FromRow<'r, SqliteRow> for YearRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let year: i64 = row.try_get("year")?;
        let count: i64 = row.try_get("count")?;

        let year = i32::try_from(year).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let count = u64::try_from(count).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(YearCount { year, count }))
    }
}

const INSERT: &str =
    "INSERT INTO students (nom, prenom, date_naissance, birth_year) VALUES (?, ?, ?, ?)";
const UPSERT: &str = r"
    INSERT INTO students (id, nom, prenom, date_naissance, birth_year) VALUES (?, ?, ?, ?, ?)
    ON CONFLICT(id) DO UPDATE SET
        nom = excluded.nom,
        prenom = excluded.prenom,
        date_naissance = excluded.date_naissance,
        birth_year = excluded.birth_year
";
const SELECT_BY_ID: &str = "SELECT * FROM students WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM students ORDER BY id";
const DELETE_BY_ID: &str = "DELETE FROM students WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM students";
// `birth_year` is written with `date_naissance` on every save; `strftime('%Y')`
// is NULL outside 0000..=9999.
const COUNT_BY_YEAR: &str = r"
    SELECT birth_year AS year, COUNT(*) AS count
    FROM students
    WHERE birth_year IS NOT NULL
    GROUP BY birth_year
    ORDER BY birth_year ASC
";

/// `SQLite`-backed student repository.
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StudentRepository for SqliteStudentRepository {
    fn save(&self, student: Student) -> impl Future<Output = Result<Student, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let date_naissance = student.date_naissance.map(|date| date.to_string());
            let birth_year = student.birth_year();

            if let Some(id) = student.id {
                sqlx::query(UPSERT)
                    .bind(id.as_i64())
                    .bind(&student.nom)
                    .bind(&student.prenom)
                    .bind(date_naissance)
                    .bind(birth_year)
                    .execute(&pool)
                    .await
                    .map_err(StorageError::from)?;

                return Ok(student);
            }

            let result = sqlx::query(INSERT)
                .bind(&student.nom)
                .bind(&student.prenom)
                .bind(date_naissance)
                .bind(birth_year)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(student.with_id(StudentId::new(result.last_insert_rowid())))
        }
    }

    fn find_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<Option<Student>, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn find_all(&self) -> impl Future<Output = Result<Vec<Student>, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn delete(&self, student: Student) -> impl Future<Output = Result<(), RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let Some(id) = student.id else {
                return Ok(());
            };

            sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn count(&self) -> impl Future<Output = Result<u64, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let count: i64 = sqlx::query_scalar(COUNT)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(u64::try_from(count).map_err(StorageError::from)?)
        }
    }

    fn find_count_grouped_by_year(
        &self,
    ) -> impl Future<Output = Result<Vec<YearCount>, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<YearRow> = sqlx::query_as(COUNT_BY_YEAR)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }
}
