//! Route definitions for the `/students` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Student routes. Paths are absolute; the collection path keeps its
/// trailing slash.
///
/// ```text
/// GET    /students/         -> list
/// POST   /students/         -> create
/// GET    /students/{id}     -> get_by_id
/// PATCH  /students/{id}     -> update
/// DELETE /students/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/students/", get(student::list).post(student::create))
        .route(
            "/students/{id}",
            get(student::get_by_id)
                .patch(student::update)
                .delete(student::delete),
        )
}
