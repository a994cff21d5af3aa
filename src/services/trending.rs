use std::sync::Arc;

use tracing::Instrument;

use crate::{models::MovieRecord, services::providers::MetadataProvider};

/// Looks up the fixed trending list by exact title
///
/// One task per title, all awaited before returning. Misses and errors are
/// silently omitted (no search fallback here) and the list order is kept.
pub async fn fetch_trending(
    provider: Arc<dyn MetadataProvider>,
    titles: &[String],
) -> Vec<MovieRecord> {
    let mut tasks = Vec::new();

    for title in titles.iter().cloned() {
        let provider = provider.clone();
        let lookup = async move {
            match provider.lookup_by_title(&title).await {
                Ok(record) => record.filter(|r| r.found),
                Err(e) => {
                    tracing::warn!(title = %title, error = %e, "Trending lookup failed");
                    None
                }
            }
        };
        let task = tokio::spawn(lookup.instrument(tracing::Span::current()));
        tasks.push(task);
    }

    let mut records = Vec::new();
    for task in tasks {
        match task.await {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(e) => tracing::error!(error = %e, "Task join error"),
        }
    }

    tracing::info!(
        requested = titles.len(),
        fetched = records.len(),
        provider = provider.name(),
        "Trending movies fetched"
    );

    records
}
