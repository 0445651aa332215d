//! Student: the single record type managed by roster.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::StudentId;

/// A student record.
///
/// `id` is `None` until the record has been persisted. Updates replace the
/// whole record; there is no partial patch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default)]
    pub id: Option<StudentId>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "Mido"))]
    pub nom: String,
    #[serde(default)]
    pub prenom: Option<String>,
    #[serde(default)]
    pub date_naissance: Option<NaiveDate>,
}

impl Student {
    /// Create a builder for constructing a [`Student`].
    #[must_use]
    pub fn builder() -> StudentBuilder {
        StudentBuilder::default()
    }

    /// Return the same record carrying `id`.
    #[must_use]
    pub fn with_id(self, id: StudentId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Return the same record with its identifier cleared.
    #[must_use]
    pub fn without_id(self) -> Self {
        Self { id: None, ..self }
    }

    /// Birth year, if a birth date is known.
    #[must_use]
    pub fn birth_year(&self) -> Option<i32> {
        use chrono::Datelike;

        self.date_naissance.map(|date| date.year())
    }
}

/// Step-by-step builder for [`Student`].
#[derive(Debug, Default)]
pub struct StudentBuilder {
    id: Option<StudentId>,
    nom: Option<String>,
    prenom: Option<String>,
    date_naissance: Option<NaiveDate>,
}

impl StudentBuilder {
    #[must_use]
    pub fn id(mut self, id: StudentId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn nom(mut self, nom: impl Into<String>) -> Self {
        self.nom = Some(nom.into());
        self
    }

    #[must_use]
    pub fn prenom(mut self, prenom: impl Into<String>) -> Self {
        self.prenom = Some(prenom.into());
        self
    }

    #[must_use]
    pub fn date_naissance(mut self, date: NaiveDate) -> Self {
        self.date_naissance = Some(date);
        self
    }

    /// Consume the builder and return a [`Student`].
    #[must_use]
    pub fn build(self) -> Student {
        Student {
            id: self.id,
            nom: self.nom.unwrap_or_default(),
            prenom: self.prenom,
            date_naissance: self.date_naissance,
        }
    }
}
