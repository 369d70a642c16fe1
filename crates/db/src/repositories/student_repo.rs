//! Repository for the `students` table.
//!
//! Every method that returns a [`Student`] also loads its scores, so callers
//! always get the full read shape.

use std::collections::HashMap;

use roster_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::score::Score;
use crate::models::student::{CreateStudent, Student, UpdateStudent};
use crate::repositories::ScoreRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, surname";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row. A fresh student has
    /// no scores, so none are loaded.
    pub async fn create(
        conn: &mut SqliteConnection,
        input: &CreateStudent,
    ) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (name, surname)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.name)
            .bind(&input.surname)
            .fetch_one(conn)
            .await
    }

    /// Find a student by ID, with scores.
    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        let student = sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

        match student {
            Some(student) => Ok(Some(Self::with_scores(conn, student).await?)),
            None => Ok(None),
        }
    }

    /// List all students in id order, each with its scores.
    ///
    /// Scores are fetched in one query and grouped in memory rather than
    /// once per student.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY id");
        let mut students = sqlx::query_as::<_, Student>(&query)
            .fetch_all(&mut *conn)
            .await?;

        let mut by_student = group_by_student(ScoreRepo::list(conn).await?);
        for student in &mut students {
            student.scores = by_student.remove(&student.id).unwrap_or_default();
        }
        Ok(students)
    }

    /// Update a student. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut SqliteConnection,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                name = COALESCE($2, name),
                surname = COALESCE($3, surname)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let student = sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.surname)
            .fetch_optional(&mut *conn)
            .await?;

        match student {
            Some(student) => Ok(Some(Self::with_scores(conn, student).await?)),
            None => Ok(None),
        }
    }

    /// Delete a student, returning the row and its scores as they were
    /// immediately before removal.
    ///
    /// Scores are not removed with their student. Returns `None` if no row
    /// with the given `id` exists.
    pub async fn delete(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<Student>, sqlx::Error> {
        let Some(student) = Self::find_by_id(&mut *conn, id).await? else {
            return Ok(None);
        };

        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;

        // Lost a race with a concurrent delete.
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(student))
    }

    async fn with_scores(
        conn: &mut SqliteConnection,
        mut student: Student,
    ) -> Result<Student, sqlx::Error> {
        student.scores = ScoreRepo::list_by_student(conn, student.id).await?;
        Ok(student)
    }
}

fn group_by_student(scores: Vec<Score>) -> HashMap<DbId, Vec<Score>> {
    let mut grouped: HashMap<DbId, Vec<Score>> = HashMap::new();
    for score in scores {
        grouped.entry(score.student_id).or_default().push(score);
    }
    grouped
}
