use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a development default; nothing is required.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Region hint handed to the phone normalizer for numbers without a
    /// country prefix (ISO 3166-1 alpha-2, e.g. "US").
    pub default_phone_region: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("API_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("API_PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_phone_region: std::env::var("DEFAULT_PHONE_REGION")
                .unwrap_or_else(|_| "US".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8000,
            rust_log: "info".to_string(),
            default_phone_region: "US".to_string(),
        }
    }
}
