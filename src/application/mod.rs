pub mod edit_application;
pub mod submit_application;
