use serde::{Deserialize, Serialize};

use super::MovieCard;

/// Generic text shown when the AI endpoint itself fails
pub const SUGGESTION_FAILURE_MESSAGE: &str = "Failed to get suggestions from AI.";

/// Body of `POST /api/v1/suggestions`, also forwarded as-is to the AI endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub prompt: String,
}

/// Reply from the AI endpoint; the text carries no guaranteed structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestionResponse {
    #[serde(default, rename = "result")]
    pub raw_text: String,
}

/// Result of one suggestion flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionOutcome {
    pub raw_text: String,
    pub movies: Vec<MovieCard>,
}

impl SuggestionOutcome {
    /// Raw AI text to show when nothing could be resolved into a card
    pub fn fallback_text(&self) -> Option<&str> {
        if self.movies.is_empty() && !self.raw_text.is_empty() {
            Some(&self.raw_text)
        } else {
            None
        }
    }
}
