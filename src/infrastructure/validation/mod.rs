pub mod form_validator;

pub use form_validator::{FormValidator, ValidationOutcome};
