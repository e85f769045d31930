//! Provider client contract for the remote movie-metadata service.
//!
//! Handlers depend only on the [`MovieProvider`] trait so they can run against
//! a stub in tests. [`TmdbClient`] is the production implementation.

pub mod records;
pub mod tmdb;

use async_trait::async_trait;
use thiserror::Error;

pub use records::{
    CastCreditRecord, CrewCreditRecord, GenreRecord, KnownForRecord, MovieCreditsRecord,
    MovieRecord, Page, PersonRecord,
};
pub use tmdb::{TmdbClient, TmdbConfig};

/// Failure of a single provider call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (connect, TLS, timeout, aborted body).
    ///
    /// Built through `From`, which strips the request URL: it carries the
    /// API key as a query parameter.
    #[error("request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The provider has no record at the requested path.
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// Any other non-success status (auth, rate limit, server error).
    #[error("upstream returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected record shape.
    #[error("malformed upstream payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http(err.without_url())
    }
}

/// Trending time window accepted by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for title search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub year: Option<i32>,
}

impl SearchFilters {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(year) = self.year {
            params.push(("year", year.to_string()));
        }
        params
    }
}

/// Filters for the discover endpoint, already normalized by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverFilters {
    pub sort_by: String,
    /// Numeric category code, or a raw provider-native identifier.
    pub with_genres: Option<String>,
    pub primary_release_year: Option<i32>,
    pub min_vote_average: Option<f64>,
    pub min_vote_count: Option<u32>,
}

impl Default for DiscoverFilters {
    fn default() -> Self {
        Self {
            sort_by: "popularity.desc".to_string(),
            with_genres: None,
            primary_release_year: None,
            min_vote_average: None,
            min_vote_count: None,
        }
    }
}

impl DiscoverFilters {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("sort_by", self.sort_by.clone())];
        if let Some(genres) = &self.with_genres {
            params.push(("with_genres", genres.clone()));
        }
        if let Some(year) = self.primary_release_year {
            params.push(("primary_release_year", year.to_string()));
        }
        if let Some(rating) = self.min_vote_average {
            params.push(("vote_average.gte", format!("{:.1}", rating)));
        }
        if let Some(count) = self.min_vote_count {
            params.push(("vote_count.gte", count.to_string()));
        }
        params
    }
}

/// Typed access to the movie-metadata service.
///
/// Implementations must tolerate concurrent use: one handle is shared by every
/// in-flight tool call.
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// Title search. Returns one page of results plus the provider's total.
    async fn search_movies(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Page<MovieRecord>, ProviderError>;

    async fn movie_details(&self, movie_id: i64) -> Result<MovieRecord, ProviderError>;

    /// Trending movies (media type is fixed to movies).
    async fn trending_movies(&self, window: TimeWindow) -> Result<Vec<MovieRecord>, ProviderError>;

    async fn movie_recommendations(&self, movie_id: i64)
        -> Result<Vec<MovieRecord>, ProviderError>;

    async fn discover_movies(
        &self,
        filters: &DiscoverFilters,
    ) -> Result<Vec<MovieRecord>, ProviderError>;

    async fn search_people(&self, query: &str) -> Result<Vec<PersonRecord>, ProviderError>;

    async fn person_details(&self, person_id: i64) -> Result<PersonRecord, ProviderError>;

    async fn person_movie_credits(
        &self,
        person_id: i64,
    ) -> Result<MovieCreditsRecord, ProviderError>;
}
