//! Record structs and transfer DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` record struct matching the table row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod score;
pub mod student;
