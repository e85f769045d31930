//! Tool input and output shapes. Field doc comments become the JSON schema
//! descriptions the calling agent sees.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{MovieDetails, MovieSummary, PersonDetails, PersonSummary};

/// Input for search_movies tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchMoviesInput {
    /// Movie title to search for
    pub query: String,
    /// Optional release year to filter results
    #[serde(default)]
    pub year: Option<i32>,
}

/// Input for get_movie_details tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetMovieDetailsInput {
    /// TMDB movie ID (from search_movies, get_trending or discover_movies)
    pub movie_id: i64,
}

/// Input for get_trending tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetTrendingInput {
    /// Trending time window: 'day' for today's trending movies or 'week' for
    /// this week's (default: week)
    #[serde(default)]
    #[schemars(extend("enum" = ["day", "week"]))]
    pub time_window: Option<String>,
}

/// Input for get_recommendations tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetRecommendationsInput {
    /// TMDB movie ID to get recommendations for
    pub movie_id: i64,
    /// Maximum number of recommendations to return (default 10, max 20)
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Input for discover_movies tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DiscoverMoviesInput {
    /// Genre name (e.g., 'science fiction', 'action', 'drama'); unknown values
    /// are passed to TMDB as a raw genre filter
    #[serde(default)]
    pub genre: Option<String>,
    /// Release year (e.g., 2020)
    #[serde(default)]
    pub year: Option<i32>,
    /// Minimum average rating (0-10, e.g., 7.5); only titles with at least 100
    /// votes are considered
    #[serde(default)]
    pub min_rating: Option<f64>,
    /// Sort order: 'popularity.desc' (default), 'vote_average.desc', or
    /// 'release_date.desc'
    #[serde(default)]
    pub sort_by: Option<String>,
    /// Maximum number of results to return (default 20, max 20)
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Input for search_person tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchPersonInput {
    /// Person name to search for (actor, director, producer, etc.)
    pub query: String,
}

/// Input for get_person_details tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetPersonDetailsInput {
    /// TMDB person ID (from search_person)
    pub person_id: i64,
}

/// Movie list returned by search, trending, recommendation and discover tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MovieListOutput {
    /// Movies in provider order
    pub results: Vec<MovieSummary>,
    /// Total number of results (search_movies: all matches upstream; other
    /// tools: number of results returned)
    pub total: i64,
}

/// Output of get_movie_details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MovieDetailsOutput {
    pub movie: MovieDetails,
}

/// Output of search_person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PersonListOutput {
    /// People in provider order
    pub results: Vec<PersonSummary>,
    /// Number of results returned
    pub total: i64,
}

/// Output of get_person_details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PersonDetailsOutput {
    pub person: PersonDetails,
}

impl MovieListOutput {
    /// Envelope whose total is the number of results carried.
    pub fn counted(results: Vec<MovieSummary>) -> Self {
        let total = results.len() as i64;
        Self { results, total }
    }
}

impl PersonListOutput {
    pub fn counted(results: Vec<PersonSummary>) -> Self {
        let total = results.len() as i64;
        Self { results, total }
    }
}
