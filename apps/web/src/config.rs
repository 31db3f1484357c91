use anyhow::{Context, Result};

/// Request bodies above this are refused before the validator sees them.
/// Kept well above the 16 MiB file limit so oversize files get the precise message.
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the resume analysis service; uploads go to `{upstream_url}/upload`.
    pub upstream_url: String,
    pub port: u16,
    pub max_body_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            upstream_url: require_env("UPSTREAM_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_body_bytes: match std::env::var("MAX_BODY_BYTES") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_BODY_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_BODY_BYTES,
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
