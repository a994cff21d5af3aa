use std::sync::Arc;

use tracing::Instrument;

use crate::{
    error::AppResult,
    models::MovieRecord,
    services::providers::MetadataProvider,
};

/// Resolves candidate titles to metadata records
///
/// Stateless: no caching, no deduplication, no retries. Every failure, including
/// transport errors, becomes "not found" for that one title.
#[derive(Clone)]
pub struct MovieResolver {
    provider: Arc<dyn MetadataProvider>,
}

impl MovieResolver {
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self { provider }
    }

    /// Resolve one title: exact lookup, then search plus identifier lookup
    ///
    /// Issues at most three requests. Returns `None` for anything that is not a
    /// confirmed record.
    pub async fn resolve(&self, title: &str) -> Option<MovieRecord> {
        match self.try_resolve(title).await {
            Ok(record) => record.filter(|r| r.found),
            Err(e) => {
                tracing::warn!(
                    title = %title,
                    provider = self.provider.name(),
                    error = %e,
                    "Movie lookup failed"
                );
                None
            }
        }
    }

    async fn try_resolve(&self, title: &str) -> AppResult<Option<MovieRecord>> {
        if let Some(record) = self.provider.lookup_by_title(title).await? {
            tracing::debug!(title = %title, stage = "exact", "Title resolved");
            return Ok(Some(record));
        }

        let hits = self.provider.search(title).await?;
        let Some(first) = hits.first() else {
            tracing::debug!(title = %title, stage = "search", "No search results");
            return Ok(None);
        };

        let record = self.provider.lookup_by_id(&first.imdb_id).await?;
        tracing::debug!(
            title = %title,
            imdb_id = %first.imdb_id,
            stage = "id",
            found = record.is_some(),
            "Search fallback finished"
        );

        Ok(record)
    }

    /// Resolve every title concurrently, waiting for all of them
    ///
    /// Unresolved titles are dropped; survivors keep the input order. Each lookup
    /// runs in the caller's span.
    pub async fn resolve_all(&self, titles: Vec<String>) -> Vec<MovieRecord> {
        let mut tasks = Vec::new();

        for title in titles {
            let resolver = self.clone();
            let task = tokio::spawn(
                async move { resolver.resolve(&title).await }.instrument(tracing::Span::current()),
            );
            tasks.push(task);
        }

        let mut records = Vec::new();
        let mut missing = 0usize;

        for task in tasks {
            match task.await {
                Ok(Some(record)) => records.push(record),
                Ok(None) => missing += 1,
                Err(e) => {
                    tracing::error!(error = %e, "Task join error");
                    missing += 1;
                }
            }
        }

        if missing > 0 {
            tracing::info!(
                resolved = records.len(),
                dropped = missing,
                "Some titles could not be resolved"
            );
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        models::SearchHit,
        services::providers::MockMetadataProvider,
    };

    fn record(imdb_id: &str, title: &str) -> MovieRecord {
        MovieRecord {
            imdb_id: imdb_id.to_string(),
            title: title.to_string(),
            year: "1997".to_string(),
            poster_url: "N/A".to_string(),
            rating: "7.9".to_string(),
            found: true,
        }
    }

    fn hit(imdb_id: &str) -> SearchHit {
        SearchHit {
            imdb_id: imdb_id.to_string(),
            title: "Some Film".to_string(),
            year: "2001".to_string(),
        }
    }

    /// Provider whose exact lookups only return once `n` of them are in flight
    struct GatedProvider {
        gate: tokio::sync::Barrier,
        spans: std::sync::Mutex<Vec<Option<&'static str>>>,
    }

    impl GatedProvider {
        fn new(n: usize) -> Self {
            Self {
                gate: tokio::sync::Barrier::new(n),
                spans: std::sync::Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl MetadataProvider for GatedProvider {
        async fn lookup_by_title(&self, title: &str) -> AppResult<Option<MovieRecord>> {
            let span = tracing::Span::current().metadata().map(|m| m.name());
            self.spans.lock().unwrap().push(span);
            self.gate.wait().await;
            Ok(Some(record("tt0000001", title)))
        }

        async fn search(&self, _query: &str) -> AppResult<Vec<SearchHit>> {
            Ok(vec![])
        }

        async fn lookup_by_id(&self, _imdb_id: &str) -> AppResult<Option<MovieRecord>> {
            Ok(None)
        }

        fn name(&self) -> &'static str {
            "gated"
        }
    }

    fn titles(names: &[&str]) -> Vec<String> {
        names.iter().map(|t| t.to_string()).collect()
    }

    fn resolver(mock: MockMetadataProvider) -> MovieResolver {
        MovieResolver::new(Arc::new(mock))
    }

    fn base_mock() -> MockMetadataProvider {
        let mut mock = MockMetadataProvider::new();
        mock.expect_name().return_const("mock");
        mock
    }

    #[tokio::test]
    async fn test_exact_hit_skips_search() {
        let mut mock = base_mock();
        mock.expect_lookup_by_title()
            .withf(|t| t == "Titanic")
            .times(1)
            .returning(|_| Ok(Some(record("tt0120338", "Titanic"))));
        mock.expect_search().times(0);
        mock.expect_lookup_by_id().times(0);

        let result = resolver(mock).resolve("Titanic").await;
        assert_eq!(result.unwrap().title, "Titanic");
    }

    #[tokio::test]
    async fn test_falls_back_to_first_search_hit() {
        let mut mock = base_mock();
        mock.expect_lookup_by_title()
            .times(1)
            .returning(|_| Ok(None));
        mock.expect_search()
            .withf(|q| q == "Matrix")
            .times(1)
            .returning(|_| Ok(vec![hit("tt0133093"), hit("tt0234215")]));
        mock.expect_lookup_by_id()
            .withf(|id| id == "tt0133093")
            .times(1)
            .returning(|_| Ok(Some(record("tt0133093", "The Matrix"))));

        let result = resolver(mock).resolve("Matrix").await;
        assert_eq!(result.unwrap().imdb_id, "tt0133093");
    }

    #[tokio::test]
    async fn test_empty_search_is_not_found() {
        let mut mock = base_mock();
        mock.expect_lookup_by_title().returning(|_| Ok(None));
        mock.expect_search().times(1).returning(|_| Ok(vec![]));
        mock.expect_lookup_by_id().times(0);

        assert!(resolver(mock).resolve("Unknown Obscure Film XYZ").await.is_none());
    }

    #[tokio::test]
    async fn test_failed_id_lookup_is_not_found() {
        let mut mock = base_mock();
        mock.expect_lookup_by_title().returning(|_| Ok(None));
        mock.expect_search().returning(|_| Ok(vec![hit("tt9999999")]));
        mock.expect_lookup_by_id().times(1).returning(|_| Ok(None));

        assert!(resolver(mock).resolve("Ghost").await.is_none());
    }

    #[tokio::test]
    async fn test_transport_errors_become_not_found() {
        let mut mock = base_mock();
        mock.expect_lookup_by_title()
            .returning(|_| Err(AppError::ExternalApi("connection reset".to_string())));
        mock.expect_search().times(0);
        assert!(resolver(mock).resolve("Heat").await.is_none());

        let mut mock = base_mock();
        mock.expect_lookup_by_title().returning(|_| Ok(None));
        mock.expect_search()
            .returning(|_| Err(AppError::ExternalApi("timeout".to_string())));
        assert!(resolver(mock).resolve("Heat").await.is_none());

        let mut mock = base_mock();
        mock.expect_lookup_by_title().returning(|_| Ok(None));
        mock.expect_search().returning(|_| Ok(vec![hit("tt0113277")]));
        mock.expect_lookup_by_id()
            .returning(|_| Err(AppError::ExternalApi("timeout".to_string())));
        assert!(resolver(mock).resolve("Heat").await.is_none());
    }

    #[tokio::test]
    async fn test_unfound_record_is_discarded() {
        let mut mock = base_mock();
        mock.expect_lookup_by_title().returning(|_| {
            let mut r = record("tt0000000", "Ghost");
            r.found = false;
            Ok(Some(r))
        });

        assert!(resolver(mock).resolve("Ghost").await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_all_drops_failures_and_keeps_order() {
        let mut mock = base_mock();
        mock.expect_lookup_by_title().returning(|t| match t {
            "Titanic" => Ok(Some(record("tt0120338", "Titanic"))),
            "Heat" => Err(AppError::ExternalApi("boom".to_string())),
            "Alien" => Ok(Some(record("tt0078748", "Alien"))),
            _ => Ok(None),
        });
        mock.expect_search().returning(|_| Ok(vec![]));

        let titles = ["Titanic", "Heat", "Nothing", "Alien", "Titanic"]
            .iter()
            .map(|t| t.to_string())
            .collect();

        let records = resolver(mock).resolve_all(titles).await;
        let names: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(names, vec!["Titanic", "Alien", "Titanic"]);
    }

    #[tokio::test]
    async fn test_resolve_all_empty_input() {
        let mock = base_mock();
        assert!(resolver(mock).resolve_all(vec![]).await.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_all_runs_lookups_concurrently() {
        let resolver = MovieResolver::new(Arc::new(GatedProvider::new(4)));

        // Every lookup blocks until all four are in flight
        let records = tokio::time::timeout(
            std::time::Duration::from_secs(2),
            resolver.resolve_all(titles(&["Heat", "Ronin", "Alien", "Up"])),
        )
        .await
        .expect("lookups did not overlap");

        assert_eq!(records.len(), 4);
    }

    #[tokio::test]
    async fn test_lookups_run_in_caller_span() {
        use tracing_subscriber::util::SubscriberInitExt;
        let _guard = tracing_subscriber::registry().set_default();

        let provider = Arc::new(GatedProvider::new(2));
        let resolver = MovieResolver::new(provider.clone());

        resolver
            .resolve_all(titles(&["Heat", "Ronin"]))
            .instrument(tracing::info_span!("http_request"))
            .await;

        let spans = provider.spans.lock().unwrap().clone();
        assert_eq!(spans, vec![Some("http_request"); 2]);
    }
}
