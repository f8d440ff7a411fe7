use anyhow::Result;

/// Default backend address for local development
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8081";

/// Application configuration from environment
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    /// Load configuration from .env file and environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Not an error if .env is missing

        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        Ok(Self { api_base_url })
    }
}
