/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Resource handlers take connections through
    /// [`DbSession`](crate::session::DbSession) rather than using it directly.
    pub pool: roster_db::DbPool,
}
