use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::models::{MovieCard, SuggestionOutcome};

/// Identifies one fetch sequence; only the latest may commit its results
pub type Generation = u64;

/// What the page currently shows
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DisplayState {
    pub generation: Generation,
    pub loading: bool,
    /// Raw AI text, or the generic failure message
    pub raw_text: String,
    pub trending: Vec<MovieCard>,
    pub suggested: Vec<MovieCard>,
    pub updated_at: DateTime<Utc>,
}

impl DisplayState {
    fn empty() -> Self {
        Self {
            generation: 0,
            loading: false,
            raw_text: String::new(),
            trending: Vec::new(),
            suggested: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Raw text is shown only when no suggested cards are
    pub fn fallback_text(&self) -> Option<&str> {
        if self.suggested.is_empty() && !self.raw_text.is_empty() {
            Some(&self.raw_text)
        } else {
            None
        }
    }
}

/// Display state shared by every request
///
/// Each submission takes a new generation and overwrites the display immediately.
/// In-flight sequences are not cancelled; their results are discarded on commit
/// if a newer generation has started.
#[derive(Clone)]
pub struct DisplaySession {
    current: Arc<AtomicU64>,
    state: Arc<RwLock<DisplayState>>,
}

impl Default for DisplaySession {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySession {
    pub fn new() -> Self {
        Self {
            current: Arc::new(AtomicU64::new(0)),
            state: Arc::new(RwLock::new(DisplayState::empty())),
        }
    }

    pub fn current_generation(&self) -> Generation {
        self.current.load(Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> DisplayState {
        self.state.read().await.clone()
    }

    /// Ticket for the startup trending population
    pub fn begin_trending(&self) -> Generation {
        self.current_generation()
    }

    /// Starts a submission: new generation, cleared display, loading on
    pub async fn begin_submission(&self) -> Generation {
        let mut state = self.state.write().await;
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;

        *state = DisplayState {
            generation,
            loading: true,
            ..DisplayState::empty()
        };

        generation
    }

    pub async fn commit_trending(&self, generation: Generation, cards: Vec<MovieCard>) -> bool {
        self.commit(generation, "trending", |state| {
            state.trending = cards;
        })
        .await
    }

    pub async fn commit_suggestions(
        &self,
        generation: Generation,
        outcome: &SuggestionOutcome,
    ) -> bool {
        self.commit(generation, "suggestions", |state| {
            state.raw_text = outcome.raw_text.clone();
            state.suggested = outcome.movies.clone();
            state.loading = false;
        })
        .await
    }

    pub async fn commit_failure(&self, generation: Generation, message: &str) -> bool {
        self.commit(generation, "failure", |state| {
            state.raw_text = message.to_string();
            state.suggested.clear();
            state.loading = false;
        })
        .await
    }

    async fn commit<F>(&self, generation: Generation, kind: &str, apply: F) -> bool
    where
        F: FnOnce(&mut DisplayState),
    {
        // begin_submission bumps the counter while holding this lock
        let mut state = self.state.write().await;
        let current = self.current_generation();

        if generation != current {
            tracing::debug!(
                generation,
                current,
                kind,
                "Discarding stale results"
            );
            return false;
        }

        apply(&mut state);
        state.updated_at = Utc::now();
        true
    }
}
