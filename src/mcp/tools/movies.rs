use async_trait::async_trait;
use tracing::debug;

use crate::error::GatewayError;
use crate::mcp::tools::Tool;
use crate::mcp::types::{
    DiscoverMoviesInput, GetMovieDetailsInput, GetRecommendationsInput, GetTrendingInput,
    MovieDetailsOutput, MovieListOutput, SearchMoviesInput,
};
use crate::normalize::{
    self, clamp_limit, DEFAULT_DISCOVER_LIMIT, DEFAULT_RECOMMENDATIONS_LIMIT, MAX_LIST_LIMIT,
};
use crate::provider::MovieProvider;

pub struct SearchMovies;

#[async_trait]
impl Tool for SearchMovies {
    type Input = SearchMoviesInput;
    type Output = MovieListOutput;

    const NAME: &'static str = "search_movies";
    const DESCRIPTION: &'static str = "Search for movies by title to find their TMDB ID and basic information. Use this when you need to find a specific movie mentioned by name (e.g., 'Inception', 'The Matrix'). Returns movie ID, title, release date, overview, rating, and poster. Required when you need a movie's ID for other operations like getting details or recommendations.";

    async fn run(
        &self,
        provider: &dyn MovieProvider,
        input: SearchMoviesInput,
    ) -> Result<MovieListOutput, GatewayError> {
        let filters = normalize::search_filters(input.year);
        let page = provider
            .search_movies(&input.query, &filters)
            .await
            .map_err(GatewayError::upstream("failed to search movies"))?;

        let results: Vec<_> = page.results.iter().map(normalize::movie_summary).collect();
        debug!(query = %input.query, returned = results.len(), total = page.total_results, "search_movies");
        Ok(MovieListOutput {
            results,
            total: page.total_results,
        })
    }
}

pub struct GetMovieDetails;

#[async_trait]
impl Tool for GetMovieDetails {
    type Input = GetMovieDetailsInput;
    type Output = MovieDetailsOutput;

    const NAME: &'static str = "get_movie_details";
    const DESCRIPTION: &'static str = "Get comprehensive details about a specific movie using its TMDB ID. Returns full information including runtime, budget, revenue, genres, tagline, and more. Use this after searching for a movie to get complete information, or when you already have a movie ID and need detailed data. Requires a movie ID from search_movies, get_trending, get_recommendations or discover_movies.";

    async fn run(
        &self,
        provider: &dyn MovieProvider,
        input: GetMovieDetailsInput,
    ) -> Result<MovieDetailsOutput, GatewayError> {
        let record = provider
            .movie_details(input.movie_id)
            .await
            .map_err(GatewayError::upstream("failed to get movie details"))?;

        Ok(MovieDetailsOutput {
            movie: normalize::movie_details(record),
        })
    }
}

pub struct GetTrending;

#[async_trait]
impl Tool for GetTrending {
    type Input = GetTrendingInput;
    type Output = MovieListOutput;

    const NAME: &'static str = "get_trending";
    const DESCRIPTION: &'static str = "Get movies that are currently trending on TMDB, either today or this week. Use this when users ask about 'trending', 'popular right now', 'what's hot', or 'current popular movies'. Does not require any movie name or ID - provides a curated list of what's trending. Any time window other than 'day' returns this week's list.";

    async fn run(
        &self,
        provider: &dyn MovieProvider,
        input: GetTrendingInput,
    ) -> Result<MovieListOutput, GatewayError> {
        let window = normalize::time_window(input.time_window.as_deref());
        let records = provider
            .trending_movies(window)
            .await
            .map_err(GatewayError::upstream("failed to get trending movies"))?;

        Ok(MovieListOutput::counted(
            records.iter().map(normalize::movie_summary).collect(),
        ))
    }
}

pub struct GetRecommendations;

#[async_trait]
impl Tool for GetRecommendations {
    type Input = GetRecommendationsInput;
    type Output = MovieListOutput;

    const NAME: &'static str = "get_recommendations";
    const DESCRIPTION: &'static str = "Get personalized movie recommendations based on a specific movie the user enjoyed. IMPORTANT: Use this when users say they 'liked', 'loved', 'enjoyed' a movie and want 'similar', 'recommendations', or 'movies like' that one. First use search_movies to get the movie ID, then use this tool with that ID. Returns up to 20 movies (default 10) that are similar in genre, theme, and style.";

    async fn run(
        &self,
        provider: &dyn MovieProvider,
        input: GetRecommendationsInput,
    ) -> Result<MovieListOutput, GatewayError> {
        let limit = clamp_limit(input.limit, DEFAULT_RECOMMENDATIONS_LIMIT, MAX_LIST_LIMIT);
        let records = provider
            .movie_recommendations(input.movie_id)
            .await
            .map_err(GatewayError::upstream("failed to get movie recommendations"))?;

        Ok(MovieListOutput::counted(normalize::movie_summaries(
            &records, limit,
        )))
    }
}

pub struct DiscoverMovies;

#[async_trait]
impl Tool for DiscoverMovies {
    type Input = DiscoverMoviesInput;
    type Output = MovieListOutput;

    const NAME: &'static str = "discover_movies";
    const DESCRIPTION: &'static str = "Discover movies using advanced filters for genre, year, minimum rating, and sorting. Use this when users want movies matching specific criteria like 'sci-fi movies from 2020s', 'highly rated action films', 'recent comedies', or combining multiple attributes. More flexible than recommendations when users specify genres, years, or ratings rather than a specific movie they liked. Does not require a movie ID. Returns up to 20 movies.";

    async fn run(
        &self,
        provider: &dyn MovieProvider,
        input: DiscoverMoviesInput,
    ) -> Result<MovieListOutput, GatewayError> {
        let filters = normalize::discover_filters(
            input.genre.as_deref(),
            input.year,
            input.min_rating,
            input.sort_by.as_deref(),
        );
        let limit = clamp_limit(input.limit, DEFAULT_DISCOVER_LIMIT, MAX_LIST_LIMIT);
        debug!(?filters, limit, "discover_movies");

        let records = provider
            .discover_movies(&filters)
            .await
            .map_err(GatewayError::upstream("failed to discover movies"))?;

        Ok(MovieListOutput::counted(normalize::movie_summaries(
            &records, limit,
        )))
    }
}
