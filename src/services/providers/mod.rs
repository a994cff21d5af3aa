/// Outbound collaborators
///
/// Two opaque HTTP services sit behind these traits: the movie-metadata API (OMDb)
/// and the AI suggestion endpoint. Handlers and services only ever see the traits,
/// so tests swap in mocks and count calls.
use crate::{
    error::AppResult,
    models::{MovieRecord, SearchHit},
};

pub mod omdb;
pub mod suggest;

pub use omdb::OmdbProvider;
pub use suggest::HttpSuggestionClient;

/// Trait for movie-metadata providers
///
/// `Ok(None)` means the API answered but reported failure; `Err` means the call itself
/// failed (transport, non-2xx status, unparseable body).
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Look up a single record by an assumed-exact title
    async fn lookup_by_title(&self, title: &str) -> AppResult<Option<MovieRecord>>;

    /// Fuzzy search; results in the provider's own order
    async fn search(&self, query: &str) -> AppResult<Vec<SearchHit>>;

    /// Fetch the full record for a search hit's identifier
    async fn lookup_by_id(&self, imdb_id: &str) -> AppResult<Option<MovieRecord>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Trait for the AI suggestion backend
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Send a free-text prompt, returning the raw suggestion text
    async fn suggest(&self, prompt: &str) -> AppResult<String>;
}
