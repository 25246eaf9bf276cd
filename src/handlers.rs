pub mod academic_modules;
pub mod admin;
pub mod auth;
pub mod careers;
pub mod dashboard;
pub mod goals;
pub mod health;
pub mod opportunities;
pub mod profile;
pub mod progress;
pub mod resources;
pub mod students;
pub mod training_programs;
