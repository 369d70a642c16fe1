//! Student record model and DTOs.

use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::score::Score;

/// A row from the `students` table together with its scores.
///
/// `scores` is not a column; repositories fill it after loading the row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub surname: String,
    #[sqlx(skip)]
    pub scores: Vec<Score>,
}

/// DTO for creating a new student.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub name: String,
    pub surname: String,
}

/// DTO for patching a student. Absent and `null` fields are both `None`
/// and leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudent {
    pub name: Option<String>,
    pub surname: Option<String>,
}
