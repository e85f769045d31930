//! Normalization rules: input defaulting/clamping and upstream → canonical
//! record mapping. Everything here is pure.

pub mod genre;
pub mod movie;
pub mod person;

use crate::provider::{DiscoverFilters, SearchFilters, TimeWindow};

pub use genre::{genre_code, genre_filter, GENRE_TABLE};
pub use movie::{clamp_rating, movie_details, movie_summaries, movie_summary};
pub use person::{known_for, movie_credits, person_details, person_summary, KEY_CREW_JOBS};

/// Hard ceiling on list sizes for recommendation and discover results.
pub const MAX_LIST_LIMIT: usize = 20;

/// Default `get_recommendations` limit.
pub const DEFAULT_RECOMMENDATIONS_LIMIT: usize = 10;

/// Default `discover_movies` limit.
pub const DEFAULT_DISCOVER_LIMIT: usize = 20;

/// Sort order used when `discover_movies` gets none.
pub const DEFAULT_SORT_BY: &str = "popularity.desc";

/// Vote-count floor attached to every minimum-rating filter.
pub const MIN_VOTE_COUNT_FOR_RATING: u32 = 100;

/// Resolve a requested list size.
///
/// Absent or non-positive values take `default`; anything above `max` is
/// clamped down to `max`.
pub fn clamp_limit(requested: Option<i64>, default: usize, max: usize) -> usize {
    match requested {
        Some(n) if n > 0 => usize::try_from(n).unwrap_or(max).min(max),
        _ => default.min(max),
    }
}

/// Only the exact strings "day" and "week" are honoured; everything else is week.
pub fn time_window(raw: Option<&str>) -> TimeWindow {
    match raw {
        Some("day") => TimeWindow::Day,
        _ => TimeWindow::Week,
    }
}

pub fn search_filters(year: Option<i32>) -> SearchFilters {
    SearchFilters {
        year: year.filter(|y| *y > 0),
    }
}

/// Build discover filters from raw tool input.
pub fn discover_filters(
    genre: Option<&str>,
    year: Option<i32>,
    min_rating: Option<f64>,
    sort_by: Option<&str>,
) -> DiscoverFilters {
    let sort_by = match sort_by {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => DEFAULT_SORT_BY.to_string(),
    };
    let min_vote_average = min_rating.filter(|r| *r > 0.0);

    DiscoverFilters {
        sort_by,
        with_genres: genre.filter(|g| !g.is_empty()).map(genre_filter),
        primary_release_year: year.filter(|y| *y > 0),
        min_vote_average,
        min_vote_count: min_vote_average.map(|_| MIN_VOTE_COUNT_FOR_RATING),
    }
}

/// Treat upstream empty strings as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
