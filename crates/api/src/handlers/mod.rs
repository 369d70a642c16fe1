pub mod score;
pub mod student;
