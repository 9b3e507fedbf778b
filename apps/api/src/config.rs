use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails with a named error if a required variable is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub auth_base_url: String,
    pub auth_api_key: String,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub anthropic_api_key: String,
    /// JSearch (RapidAPI) key. The provider is skipped when unset.
    pub rapidapi_key: Option<String>,
    /// Adzuna credentials. The provider is skipped when either is unset.
    pub adzuna_app_id: Option<String>,
    pub adzuna_app_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            auth_base_url: require_env("AUTH_BASE_URL")?,
            auth_api_key: require_env("AUTH_API_KEY")?,
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            rapidapi_key: optional_env("RAPIDAPI_KEY"),
            adzuna_app_id: optional_env("ADZUNA_APP_ID"),
            adzuna_app_key: optional_env("ADZUNA_APP_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
