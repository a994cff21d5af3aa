use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::Config,
    error::AppResult,
    models::MovieCard,
    services::{
        providers::{HttpSuggestionClient, MetadataProvider, OmdbProvider, SuggestionProvider},
        resolver::MovieResolver,
        trending,
    },
};

use super::DisplaySession;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub metadata: Arc<dyn MetadataProvider>,
    pub suggestions: Arc<dyn SuggestionProvider>,
    pub resolver: MovieResolver,
    pub session: DisplaySession,
    pub trending_titles: Arc<Vec<String>>,
}

impl AppState {
    /// Creates state around the given collaborators with an empty display
    pub fn new(
        metadata: Arc<dyn MetadataProvider>,
        suggestions: Arc<dyn SuggestionProvider>,
        trending_titles: Vec<String>,
    ) -> Self {
        Self {
            resolver: MovieResolver::new(metadata.clone()),
            metadata,
            suggestions,
            session: DisplaySession::new(),
            trending_titles: Arc::new(trending_titles),
        }
    }

    /// Wires the HTTP-backed providers from configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let timeout = Duration::from_secs(config.http_timeout_secs);

        let metadata = OmdbProvider::new(
            config.omdb_api_key.clone(),
            config.omdb_api_url.clone(),
            timeout,
        )?;
        let suggestions = HttpSuggestionClient::new(config.suggest_api_url.clone(), timeout)?;

        Ok(Self::new(
            Arc::new(metadata),
            Arc::new(suggestions),
            config.trending_titles.clone(),
        ))
    }

    /// Fetches the trending list as cards, without touching the display
    pub async fn trending_cards(&self) -> Vec<MovieCard> {
        trending::fetch_trending(self.metadata.clone(), &self.trending_titles)
            .await
            .iter()
            .map(MovieCard::from)
            .collect()
    }

    /// Startup population of the trending section
    ///
    /// Dropped if a submission begins before the lookups finish.
    pub async fn populate_trending(&self) -> bool {
        let generation = self.session.begin_trending();
        let cards = self.trending_cards().await;
        self.session.commit_trending(generation, cards).await
    }
}
