//! Repository for the `scores` table.

use roster_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::score::{CreateScore, Score, UpdateScore};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, student_id, score";

/// Provides CRUD operations for scores.
pub struct ScoreRepo;

impl ScoreRepo {
    /// Insert a new score, returning the created row.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateScore,
    ) -> Result<Score, sqlx::Error> {
        let query = format!(
            "INSERT INTO scores (student_id, score)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Score>(&query)
            .bind(input.student_id)
            .bind(input.score)
            .fetch_one(conn)
            .await
    }

    /// Find a score by its ID.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Score>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scores WHERE id = $1");
        sqlx::query_as::<_, Score>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List every score in id order.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Score>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scores ORDER BY id");
        sqlx::query_as::<_, Score>(&query).fetch_all(conn).await
    }

    /// List the scores recorded for one student, in id order.
    pub async fn list_by_student(
        conn: &mut SqliteConnection,
        student_id: DbId,
    ) -> Result<Vec<Score>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scores WHERE student_id = $1 ORDER BY id");
        sqlx::query_as::<_, Score>(&query)
            .bind(student_id)
            .fetch_all(conn)
            .await
    }

    /// Update a score. A `None` value keeps the stored one.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: DbId,
        input: &UpdateScore,
    ) -> Result<Option<Score>, sqlx::Error> {
        let query = format!(
            "UPDATE scores SET
                score = COALESCE($2, score)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Score>(&query)
            .bind(id)
            .bind(input.score)
            .fetch_optional(conn)
            .await
    }

    /// Delete a score, returning the row as it was before removal.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn delete(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Score>, sqlx::Error> {
        let query = format!("DELETE FROM scores WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Score>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }
}
