//! Route definitions for the `/score` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::score;
use crate::state::AppState;

/// ```text
/// GET    /score/         -> list
/// POST   /score/         -> create
/// GET    /score/{id}     -> get_by_id
/// PATCH  /score/{id}     -> update
/// DELETE /score/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/score/", get(score::list).post(score::create))
        .route(
            "/score/{id}",
            get(score::get_by_id)
                .patch(score::update)
                .delete(score::delete),
        )
}
