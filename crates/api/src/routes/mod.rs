pub mod health;
pub mod score;
pub mod student;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /students/                  list, create
/// /students/{id}              get, patch, delete
///
/// /score/                     list, create
/// /score/{id}                 get, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(student::router())
        .merge(score::router())
}
