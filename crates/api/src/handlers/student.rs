//! Handlers for the `/students` resource.

use axum::extract::Path;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::types::DbId;
use roster_db::models::student::{CreateStudent, Student, UpdateStudent};
use roster_db::repositories::StudentRepo;

use crate::error::AppResult;
use crate::session::DbSession;

const ENTITY: &str = "Student";

/// GET /students/
pub async fn list(mut db: DbSession) -> AppResult<Json<Vec<Student>>> {
    let students = StudentRepo::list(db.conn()).await?;
    Ok(Json(students))
}

/// POST /students/
pub async fn create(
    mut db: DbSession,
    Json(input): Json<CreateStudent>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::create(db.conn(), &input).await?;
    tracing::info!(student_id = student.id, "Student created");
    Ok(Json(student))
}

/// GET /students/{id}
pub async fn get_by_id(Path(id): Path<DbId>, mut db: DbSession) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(db.conn(), id)
        .await?
        .ok_or(CoreError::not_found(ENTITY, id))?;
    Ok(Json(student))
}

/// PATCH /students/{id}
pub async fn update(
    Path(id): Path<DbId>,
    mut db: DbSession,
    Json(input): Json<UpdateStudent>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::update(db.conn(), id, &input)
        .await?
        .ok_or(CoreError::not_found(ENTITY, id))?;
    tracing::info!(student_id = id, "Student updated");
    Ok(Json(student))
}

/// DELETE /students/{id}
///
/// Responds with the student as it was before removal. Its scores stay in
/// the database.
pub async fn delete(Path(id): Path<DbId>, mut db: DbSession) -> AppResult<Json<Student>> {
    let student = StudentRepo::delete(db.conn(), id)
        .await?
        .ok_or(CoreError::not_found(ENTITY, id))?;
    tracing::info!(
        student_id = id,
        orphaned_scores = student.scores.len(),
        "Student deleted"
    );
    Ok(Json(student))
}
