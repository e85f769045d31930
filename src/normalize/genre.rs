//! Static genre name to provider category code lookup.

/// Lowercase genre name → TMDB numeric genre code.
pub const GENRE_TABLE: [(&str, &str); 20] = [
    ("action", "28"),
    ("adventure", "12"),
    ("animation", "16"),
    ("comedy", "35"),
    ("crime", "80"),
    ("documentary", "99"),
    ("drama", "18"),
    ("family", "10751"),
    ("fantasy", "14"),
    ("history", "36"),
    ("horror", "27"),
    ("music", "10402"),
    ("mystery", "9648"),
    ("romance", "10749"),
    ("science fiction", "878"),
    ("sci-fi", "878"),
    ("tv movie", "10770"),
    ("thriller", "53"),
    ("war", "10752"),
    ("western", "37"),
];

/// Exact (case-sensitive) lookup of a genre name.
pub fn genre_code(name: &str) -> Option<&'static str> {
    GENRE_TABLE
        .iter()
        .find(|(genre, _)| *genre == name)
        .map(|(_, code)| *code)
}

/// Value for the provider's genre filter.
///
/// Known names map to their code. Anything else is passed through unchanged so
/// provider-native identifiers (e.g. "878" or "28,12") keep working.
pub fn genre_filter(genre: &str) -> String {
    genre_code(genre).unwrap_or(genre).to_string()
}
