use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb access credential, sent as the `apikey` query parameter
    pub omdb_api_key: String,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// AI suggestion endpoint (accepts `{"prompt": ..}`, answers `{"result": ..}`)
    #[serde(default = "default_suggest_api_url")]
    pub suggest_api_url: String,

    /// Titles looked up at startup for the trending list
    #[serde(default = "default_trending_titles")]
    pub trending_titles: Vec<String>,

    /// Per-request timeout for outbound HTTP calls
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_omdb_api_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_suggest_api_url() -> String {
    "http://localhost:5000/api/suggest".to_string()
}

fn default_trending_titles() -> Vec<String> {
    [
        "Inception",
        "The Dark Knight",
        "Interstellar",
        "Avengers: Endgame",
        "The Matrix",
        "Titanic",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

fn default_http_timeout_secs() -> u64 {
    15
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_applied() {
        let config: Config = envy::from_iter(vars(&[("OMDB_API_KEY", "secret")])).unwrap();

        assert_eq!(config.omdb_api_key, "secret");
        assert_eq!(config.omdb_api_url, "https://www.omdbapi.com");
        assert_eq!(config.suggest_api_url, "http://localhost:5000/api/suggest");
        assert_eq!(config.trending_titles.len(), 6);
        assert_eq!(config.trending_titles[3], "Avengers: Endgame");
        assert_eq!(config.http_timeout_secs, 15);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_missing_credential_is_an_error() {
        let result = envy::from_iter::<_, Config>(vars(&[("PORT", "8080")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_trending_titles_from_comma_list() {
        let config: Config = envy::from_iter(vars(&[
            ("OMDB_API_KEY", "secret"),
            ("TRENDING_TITLES", "Heat,Alien"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.trending_titles, vec!["Heat", "Alien"]);
        assert_eq!(config.port, 8080);
    }
}
