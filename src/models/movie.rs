use serde::{Deserialize, Serialize};

/// Shown in place of a poster when the metadata API has none
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";

/// Value the metadata API uses for absent fields
pub const NOT_AVAILABLE: &str = "N/A";

/// A movie confirmed to exist by the metadata API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    /// IMDb identifier (e.g., "tt0120338")
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    /// Poster URL, or "N/A"
    pub poster_url: String,
    /// IMDb rating as reported, or "N/A"
    pub rating: String,
    /// Records with `found == false` are never handed to the display
    pub found: bool,
}

impl MovieRecord {
    /// Poster URL suitable for display, substituting the placeholder when missing
    pub fn display_poster(&self) -> &str {
        if self.poster_url.is_empty() || self.poster_url == NOT_AVAILABLE {
            PLACEHOLDER_POSTER_URL
        } else {
            &self.poster_url
        }
    }
}

/// Poster card rendered for a trending or suggested movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieCard {
    pub title: String,
    pub year: String,
    pub rating: String,
    pub poster_url: String,
}

impl From<&MovieRecord> for MovieCard {
    fn from(record: &MovieRecord) -> Self {
        Self {
            title: record.title.clone(),
            year: record.year.clone(),
            rating: record.rating.clone(),
            poster_url: record.display_poster().to_string(),
        }
    }
}

/// A lightweight entry from a fuzzy search; only the identifier is used for follow-up
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
}
