use crate::models::{MovieDetails, MovieSummary};
use crate::provider::MovieRecord;

use super::non_empty;

/// Ratings are reported on a 0-10 scale; anything outside (or NaN) is pulled back in.
pub fn clamp_rating(rating: f64) -> f64 {
    if rating.is_finite() {
        rating.clamp(0.0, 10.0)
    } else {
        0.0
    }
}

pub fn movie_summary(record: &MovieRecord) -> MovieSummary {
    MovieSummary {
        id: record.id,
        title: record.title.clone(),
        release_date: record.release_date.clone(),
        overview: record.overview.clone(),
        rating: clamp_rating(record.vote_average),
        poster_path: non_empty(record.poster_path.clone()),
    }
}

/// Map records in provider order, keeping at most `limit` of them.
pub fn movie_summaries(records: &[MovieRecord], limit: usize) -> Vec<MovieSummary> {
    records.iter().take(limit).map(movie_summary).collect()
}

/// Genre codes are dropped; only names survive, in provider order.
pub fn movie_details(record: MovieRecord) -> MovieDetails {
    MovieDetails {
        id: record.id,
        title: record.title,
        release_date: record.release_date,
        overview: record.overview,
        rating: clamp_rating(record.vote_average),
        poster_path: non_empty(record.poster_path),
        runtime_minutes: record.runtime.max(0),
        budget: record.budget.max(0),
        revenue: record.revenue.max(0),
        genres: record.genres.into_iter().map(|g| g.name).collect(),
        tagline: non_empty(record.tagline),
    }
}
