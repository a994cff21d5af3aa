use serde::Deserialize;

pub mod movie;
pub mod suggestion;

pub use movie::{MovieCard, MovieRecord, SearchHit, NOT_AVAILABLE, PLACEHOLDER_POSTER_URL};
pub use suggestion::{
    SuggestionOutcome, SuggestionRequest, SuggestionResponse, SUGGESTION_FAILURE_MESSAGE,
};

// ============================================================================
// OMDb API Types
// ============================================================================

/// OMDb signals success with the string "True" rather than an HTTP status
fn is_true(flag: &str) -> bool {
    flag.eq_ignore_ascii_case("true")
}

/// Raw response from `?t=` and `?i=` lookups
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbMovie {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbMovie {
    /// Normalizes the payload, or `None` when OMDb reported failure
    pub fn into_record(self) -> Option<MovieRecord> {
        if !is_true(&self.response) {
            return None;
        }

        let or_na = |v: Option<String>| v.unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Some(MovieRecord {
            imdb_id: self.imdb_id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            year: or_na(self.year),
            poster_url: or_na(self.poster),
            rating: or_na(self.imdb_rating),
            found: true,
        })
    }
}

/// Raw response from `?s=` searches
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchEntry>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchEntry {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

impl OmdbSearchResponse {
    /// Search hits in OMDb's own order; empty when OMDb reported failure
    pub fn into_hits(self) -> Vec<SearchHit> {
        if !is_true(&self.response) {
            return Vec::new();
        }

        self.search
            .into_iter()
            .map(|entry| SearchHit {
                imdb_id: entry.imdb_id,
                title: entry.title,
                year: entry.year,
            })
            .collect()
    }
}
