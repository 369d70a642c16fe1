//! Handlers for the `/score` resource.

use axum::extract::Path;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::types::DbId;
use roster_db::models::score::{CreateScore, Score, UpdateScore};
use roster_db::repositories::ScoreRepo;

use crate::error::AppResult;
use crate::session::DbSession;

const ENTITY: &str = "Score";

/// GET /score/
pub async fn list(mut db: DbSession) -> AppResult<Json<Vec<Score>>> {
    let scores = ScoreRepo::list(db.conn()).await?;
    Ok(Json(scores))
}

/// POST /score/
///
/// `student_id` is stored as given, without checking that the student exists.
pub async fn create(mut db: DbSession, Json(input): Json<CreateScore>) -> AppResult<Json<Score>> {
    let score = ScoreRepo::create(db.conn(), &input).await?;
    tracing::info!(
        score_id = score.id,
        student_id = score.student_id,
        "Score created"
    );
    Ok(Json(score))
}

/// GET /score/{id}
pub async fn get_by_id(Path(id): Path<DbId>, mut db: DbSession) -> AppResult<Json<Score>> {
    let score = ScoreRepo::find_by_id(db.conn(), id)
        .await?
        .ok_or(CoreError::not_found(ENTITY, id))?;
    Ok(Json(score))
}

/// PATCH /score/{id}
pub async fn update(
    Path(id): Path<DbId>,
    mut db: DbSession,
    Json(input): Json<UpdateScore>,
) -> AppResult<Json<Score>> {
    let score = ScoreRepo::update(db.conn(), id, &input)
        .await?
        .ok_or(CoreError::not_found(ENTITY, id))?;
    tracing::info!(score_id = id, "Score updated");
    Ok(Json(score))
}

/// DELETE /score/{id}
pub async fn delete(Path(id): Path<DbId>, mut db: DbSession) -> AppResult<Json<Score>> {
    let score = ScoreRepo::delete(db.conn(), id)
        .await?
        .ok_or(CoreError::not_found(ENTITY, id))?;
    tracing::info!(score_id = id, "Score deleted");
    Ok(Json(score))
}
