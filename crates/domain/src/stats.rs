//! Aggregate statistics over stored students.

use serde::{Deserialize, Serialize};

/// Number of students sharing a birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct YearCount {
    pub year: i32,
    pub count: u64,
}

impl YearCount {
    #[must_use]
    pub const fn new(year: i32, count: u64) -> Self {
        Self { year, count }
    }
}

impl From<(i32, u64)> for YearCount {
    fn from((year, count): (i32, u64)) -> Self {
        Self { year, count }
    }
}
