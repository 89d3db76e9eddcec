pub mod entity;
pub mod errors;
pub mod field;
pub mod rules;
pub mod sink;
pub mod submission;
pub mod value_objects;
