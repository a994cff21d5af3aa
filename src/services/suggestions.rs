use crate::{
    error::AppResult,
    models::{MovieCard, SuggestionOutcome},
    services::{providers::SuggestionProvider, resolver::MovieResolver, title_extractor},
};

/// Runs one suggestion flow: AI call, title extraction, concurrent resolution
///
/// Only a failure of the AI call itself is an error. Titles that cannot be resolved
/// are dropped, and an AI reply with no usable lines yields an outcome with no movies.
/// Callers reject blank prompts before getting here.
pub async fn suggest_movies(
    ai: &dyn SuggestionProvider,
    resolver: &MovieResolver,
    prompt: &str,
) -> AppResult<SuggestionOutcome> {
    let raw_text = ai.suggest(prompt).await?;

    let titles = title_extractor::extract_titles(&raw_text);
    tracing::info!(candidates = titles.len(), "Extracted candidate titles");

    let records = resolver.resolve_all(titles).await;
    let movies = records.iter().map(MovieCard::from).collect();

    Ok(SuggestionOutcome { raw_text, movies })
}
