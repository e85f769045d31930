//! Upstream record shapes as returned by the provider's JSON API.
//!
//! Only the fields the gateway reads are declared. Strings the provider may
//! send as `null` decode to their default so normalization never sees `null`.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// One page of a paginated provider listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_results: i64,
}

/// Movie record. Detail-only fields are zero/empty on list endpoints.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub release_date: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub overview: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub runtime: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub budget: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub revenue: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub genres: Vec<GenreRecord>,
    #[serde(default)]
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenreRecord {
    pub id: i64,
    pub name: String,
}

/// Person record from search or profile endpoints.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub known_for_department: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub known_for: Vec<KnownForRecord>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub deathday: Option<String>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
}

/// A notable work attached to a person search hit. Movies carry `title`,
/// TV shows carry `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnownForRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieCreditsRecord {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub cast: Vec<CastCreditRecord>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub crew: Vec<CrewCreditRecord>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CastCreditRecord {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub release_date: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrewCreditRecord {
    pub id: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub release_date: Option<String>,
}
