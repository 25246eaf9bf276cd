pub mod academic_module;
pub mod career;
pub mod goal;
pub mod opportunity;
pub mod profile;
pub mod progress_record;
pub mod resource;
pub mod saved_opportunity;
pub mod session;
pub mod training_program;
pub mod user;
