use crate::types::DbId;

/// Domain-level failures raised by handlers, independent of HTTP.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No record of kind `entity` exists with identifier `id`.
    ///
    /// The display text is the fixed client-facing message, e.g.
    /// `"Student not found"`; the id is kept for logging only.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound { entity, id }
    }
}
