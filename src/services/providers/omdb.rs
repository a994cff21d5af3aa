/// OMDb metadata provider
///
/// All three call shapes hit the same URL and differ only by query parameter:
/// `t=` exact title, `s=` search, `i=` IMDb ID. OMDb answers 200 even for misses and
/// reports the outcome in the body's `Response` field.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::{
    error::{AppError, AppResult},
    models::{MovieRecord, OmdbMovie, OmdbSearchResponse, SearchHit},
    services::providers::MetadataProvider,
};

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
        })
    }

    /// Issues one GET with the credential attached and decodes the body
    async fn get<T: DeserializeOwned>(&self, param: &str, value: &str) -> AppResult<T> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[(param, value), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(|e| {
            tracing::debug!(response = %response_text, "Raw OMDb response");
            AppError::ExternalApi(format!("Failed to parse OMDb response: {}", e))
        })
    }
}

#[async_trait::async_trait]
impl MetadataProvider for OmdbProvider {
    async fn lookup_by_title(&self, title: &str) -> AppResult<Option<MovieRecord>> {
        let movie: OmdbMovie = self.get("t", title).await?;
        if let Some(error) = &movie.error {
            tracing::debug!(title = %title, error = %error, "OMDb exact lookup missed");
        }
        Ok(movie.into_record())
    }

    async fn search(&self, query: &str) -> AppResult<Vec<SearchHit>> {
        let response: OmdbSearchResponse = self.get("s", query).await?;
        let hits = response.into_hits();

        tracing::debug!(
            query = %query,
            results = hits.len(),
            provider = "omdb",
            "Title search completed"
        );

        Ok(hits)
    }

    async fn lookup_by_id(&self, imdb_id: &str) -> AppResult<Option<MovieRecord>> {
        let movie: OmdbMovie = self.get("i", imdb_id).await?;
        Ok(movie.into_record())
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
