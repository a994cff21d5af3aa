/// HTTP client for the AI suggestion endpoint
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{SuggestionRequest, SuggestionResponse},
    services::providers::SuggestionProvider,
};

#[derive(Clone)]
pub struct HttpSuggestionClient {
    http_client: HttpClient,
    api_url: String,
}

impl HttpSuggestionClient {
    pub fn new(api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url,
        })
    }
}

#[async_trait::async_trait]
impl SuggestionProvider for HttpSuggestionClient {
    async fn suggest(&self, prompt: &str) -> AppResult<String> {
        let response = self
            .http_client
            .post(&self.api_url)
            .json(&SuggestionRequest {
                prompt: prompt.to_string(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Suggestion endpoint returned status {}: {}",
                status, body
            )));
        }

        let suggestion: SuggestionResponse = response.json().await?;

        tracing::info!(
            chars = suggestion.raw_text.len(),
            lines = suggestion.raw_text.lines().count(),
            "Suggestion text received"
        );

        Ok(suggestion.raw_text)
    }
}
