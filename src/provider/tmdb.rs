//! `reqwest` implementation of [`MovieProvider`] against the TMDB v3 API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::{
    DiscoverFilters, MovieCreditsRecord, MovieProvider, MovieRecord, Page, PersonRecord,
    ProviderError, SearchFilters, TimeWindow,
};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`TmdbClient`].
#[derive(Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Error body TMDB sends with non-success statuses.
#[derive(Deserialize)]
struct StatusBody {
    status_message: String,
}

/// Listing endpoints that are not paginated for our purposes still wrap
/// results in a page envelope.
#[derive(Deserialize)]
struct Results<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

/// TMDB client. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("tmdb-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, ProviderError> {
        debug!(path, "tmdb request");
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound {
                resource: path.to_string(),
            });
        }
        if !status.is_success() {
            let message = serde_json::from_str::<StatusBody>(&body)
                .map(|b| b.status_message)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown").to_string());
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    async fn get_results<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<Vec<T>, ProviderError> {
        let page: Results<T> = self.get(path, params).await?;
        Ok(page.results)
    }
}

#[async_trait]
impl MovieProvider for TmdbClient {
    async fn search_movies(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Page<MovieRecord>, ProviderError> {
        let mut params = vec![("query", query.to_string())];
        params.extend(filters.to_query());
        self.get("/search/movie", &params).await
    }

    async fn movie_details(&self, movie_id: i64) -> Result<MovieRecord, ProviderError> {
        self.get(&format!("/movie/{}", movie_id), &[]).await
    }

    async fn trending_movies(&self, window: TimeWindow) -> Result<Vec<MovieRecord>, ProviderError> {
        self.get_results(&format!("/trending/movie/{}", window), &[])
            .await
    }

    async fn movie_recommendations(
        &self,
        movie_id: i64,
    ) -> Result<Vec<MovieRecord>, ProviderError> {
        self.get_results(&format!("/movie/{}/recommendations", movie_id), &[])
            .await
    }

    async fn discover_movies(
        &self,
        filters: &DiscoverFilters,
    ) -> Result<Vec<MovieRecord>, ProviderError> {
        self.get_results("/discover/movie", &filters.to_query()).await
    }

    async fn search_people(&self, query: &str) -> Result<Vec<PersonRecord>, ProviderError> {
        self.get_results("/search/person", &[("query", query.to_string())])
            .await
    }

    async fn person_details(&self, person_id: i64) -> Result<PersonRecord, ProviderError> {
        self.get(&format!("/person/{}", person_id), &[]).await
    }

    async fn person_movie_credits(
        &self,
        person_id: i64,
    ) -> Result<MovieCreditsRecord, ProviderError> {
        self.get(&format!("/person/{}/movie_credits", person_id), &[])
            .await
    }
}
