//! Score record model and DTOs.

use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `scores` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Score {
    pub id: DbId,
    pub student_id: DbId,
    pub score: i64,
}

/// DTO for recording a new score.
///
/// `student_id` is stored as given; it is not checked against `students`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScore {
    pub student_id: DbId,
    pub score: i64,
}

/// DTO for patching a score. Only the value itself can change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateScore {
    pub score: Option<i64>,
}
