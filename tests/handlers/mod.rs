pub mod person_handler;
pub mod validation;
