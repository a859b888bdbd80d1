pub mod student;
pub mod teacher;
