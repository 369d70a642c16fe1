//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept the request's open connection as the first argument.

pub mod score_repo;
pub mod student_repo;

pub use score_repo::ScoreRepo;
pub use student_repo::StudentRepo;
