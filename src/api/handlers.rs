use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::Instrument;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{MovieCard, SuggestionOutcome, SuggestionRequest, SUGGESTION_FAILURE_MESSAGE},
    services::suggestions,
};

use super::{session::Generation, AppState, DisplayState};

// Response types

#[derive(Debug, Serialize)]
pub struct SuggestionView {
    pub generation: Generation,
    pub raw_text: String,
    pub movies: Vec<MovieCard>,
    pub fallback_text: Option<String>,
}

impl SuggestionView {
    fn new(generation: Generation, outcome: SuggestionOutcome) -> Self {
        let fallback_text = outcome.fallback_text().map(str::to_string);
        Self {
            generation,
            raw_text: outcome.raw_text,
            movies: outcome.movies,
            fallback_text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DisplayView {
    #[serde(flatten)]
    pub state: DisplayState,
    pub fallback_text: Option<String>,
}

impl From<DisplayState> for DisplayView {
    fn from(state: DisplayState) -> Self {
        let fallback_text = state.fallback_text().map(str::to_string);
        Self {
            state,
            fallback_text,
        }
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Looks up the trending list afresh
pub async fn get_trending(State(state): State<AppState>) -> Json<Vec<MovieCard>> {
    Json(state.trending_cards().await)
}

/// Current display state
pub async fn get_display(State(state): State<AppState>) -> Json<DisplayView> {
    Json(DisplayView::from(state.session.snapshot().await))
}

/// Runs the suggestion flow for a prompt and commits it to the display
///
/// The flow runs in its own task so the commit still happens if the caller goes away.
pub async fn create_suggestions(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<SuggestionRequest>,
) -> AppResult<Json<SuggestionView>> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::InvalidInput("Prompt cannot be empty".to_string()));
    }

    let generation = state.session.begin_submission().await;

    tracing::info!(
        request_id = %request_id,
        generation,
        prompt_chars = request.prompt.len(),
        "Processing suggestion request"
    );

    let task = tokio::spawn(
        run_submission(state, generation, request.prompt, request_id)
            .instrument(tracing::Span::current()),
    );

    let outcome = task
        .await
        .map_err(|e| AppError::Internal(format!("Suggestion task failed: {}", e)))??;

    Ok(Json(SuggestionView::new(generation, outcome)))
}

/// AI call, resolution and commit for one generation
async fn run_submission(
    state: AppState,
    generation: Generation,
    prompt: String,
    request_id: RequestId,
) -> AppResult<SuggestionOutcome> {
    let result =
        suggestions::suggest_movies(state.suggestions.as_ref(), &state.resolver, &prompt).await;

    match result {
        Ok(outcome) => {
            let committed = state.session.commit_suggestions(generation, &outcome).await;

            tracing::info!(
                request_id = %request_id,
                generation,
                movies = outcome.movies.len(),
                committed,
                "Suggestions completed"
            );

            Ok(outcome)
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                generation,
                error = %e,
                "AI suggestion error"
            );

            state
                .session
                .commit_failure(generation, SUGGESTION_FAILURE_MESSAGE)
                .await;

            Err(AppError::ExternalApi(SUGGESTION_FAILURE_MESSAGE.to_string()))
        }
    }
}
