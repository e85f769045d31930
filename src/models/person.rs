use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Maximum number of credits attached to a [`PersonDetails`].
pub const MAX_PERSON_CREDITS: usize = 20;

/// Caller-facing shape of a person search hit.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PersonSummary {
    /// TMDB person ID
    pub id: i64,
    /// Person's name
    pub name: String,
    /// Department, optionally followed by up to three notable works,
    /// e.g. "Acting (Inception, Titanic, The Revenant)"
    pub known_for: String,
    /// Path to profile image
    pub profile_path: Option<String>,
}

/// One movie in a person's filmography.
///
/// Cast credits carry `character`, crew credits carry `job`; never both.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MovieCredit {
    /// TMDB movie ID
    pub id: i64,
    /// Movie title
    pub title: String,
    /// Character played (cast credits)
    pub character: Option<String>,
    /// Crew job: Director, Producer, Writer or Screenplay (crew credits)
    pub job: Option<String>,
    /// Release date (YYYY-MM-DD)
    pub release_date: Option<String>,
}

impl MovieCredit {
    pub fn is_cast(&self) -> bool {
        self.character.is_some()
    }
}

/// Person profile plus a bounded filmography.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PersonDetails {
    /// TMDB person ID
    pub id: i64,
    /// Person's name
    pub name: String,
    pub biography: String,
    /// Birth date (YYYY-MM-DD)
    pub birthday: Option<String>,
    /// Death date (YYYY-MM-DD)
    pub deathday: Option<String>,
    /// Primary department, e.g. "Acting" or "Directing"
    pub known_for_department: String,
    pub place_of_birth: Option<String>,
    /// Path to profile image
    pub profile_path: Option<String>,
    /// Cast credits followed by key crew credits, at most 20
    pub movies: Vec<MovieCredit>,
}
