use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if a numeric variable does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Listings backend endpoint returning the opportunity catalog.
    pub opportunity_api_url: Option<String>,
    pub opportunity_api_token: Option<String>,
    /// JSON file catalog, used when no listings backend is configured.
    pub catalog_path: Option<String>,
    pub catalog_timeout_secs: u64,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", optional_env("PORT"), 8080)?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            opportunity_api_url: optional_env("OPPORTUNITY_API_URL"),
            opportunity_api_token: optional_env("OPPORTUNITY_API_TOKEN"),
            catalog_path: optional_env("OPPORTUNITY_CATALOG_PATH"),
            catalog_timeout_secs: parse_env(
                "CATALOG_TIMEOUT_SECS",
                optional_env("CATALOG_TIMEOUT_SECS"),
                15,
            )?,
            max_upload_bytes: parse_env(
                "MAX_UPLOAD_BYTES",
                optional_env("MAX_UPLOAD_BYTES"),
                DEFAULT_MAX_UPLOAD_BYTES,
            )?,
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{value}'")),
        None => Ok(default),
    }
}
