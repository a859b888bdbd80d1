pub mod dashboard;
pub mod index;
pub mod login;
pub mod students;
