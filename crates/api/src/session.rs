//! Per-request database session.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use roster_db::DbConnection;
use sqlx::SqliteConnection;

use crate::error::AppError;
use crate::state::AppState;

/// One pooled connection, checked out before the handler body runs.
///
/// The connection goes back to the pool when the extractor is dropped, which
/// happens when the handler returns, whether with `Ok`, `Err`, or by
/// unwinding. A pool that cannot supply a connection within the configured
/// acquire timeout rejects the request with a 500.
///
/// ```ignore
/// async fn handler(mut db: DbSession) -> AppResult<Json<Vec<Student>>> {
///     Ok(Json(StudentRepo::list(db.conn()).await?))
/// }
/// ```
pub struct DbSession(DbConnection);

impl DbSession {
    /// The underlying connection, for passing to repository methods.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.0
    }
}

impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.pool.acquire().await?;
        Ok(DbSession(conn))
    }
}
