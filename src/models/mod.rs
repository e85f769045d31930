//! Canonical output shapes returned to callers, independent of the upstream
//! wire format.

pub mod movie;
pub mod person;

pub use movie::{MovieDetails, MovieSummary};
pub use person::{MovieCredit, PersonDetails, PersonSummary, MAX_PERSON_CREDITS};
