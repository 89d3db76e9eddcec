pub mod sinks;
pub mod validation;
