use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Caller-facing movie shape used by every list tool.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MovieSummary {
    /// TMDB movie ID
    pub id: i64,
    /// Movie title
    pub title: String,
    /// Release date (YYYY-MM-DD), empty when unknown
    pub release_date: String,
    /// Movie plot summary
    pub overview: String,
    /// Average user rating (0-10)
    pub rating: f64,
    /// Path to movie poster image
    pub poster_path: Option<String>,
}

/// Full movie record returned by `get_movie_details`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MovieDetails {
    /// TMDB movie ID
    pub id: i64,
    /// Movie title
    pub title: String,
    /// Release date (YYYY-MM-DD), empty when unknown
    pub release_date: String,
    /// Movie plot summary
    pub overview: String,
    /// Average user rating (0-10)
    pub rating: f64,
    /// Path to movie poster image
    pub poster_path: Option<String>,
    /// Runtime in minutes (0 when unknown)
    pub runtime_minutes: i64,
    /// Production budget in USD (0 when unknown)
    pub budget: i64,
    /// Box office revenue in USD (0 when unknown)
    pub revenue: i64,
    /// Genre names in provider order
    pub genres: Vec<String>,
    /// Marketing tagline
    pub tagline: Option<String>,
}
