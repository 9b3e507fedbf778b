mod ai;
mod auth;
mod config;
mod db;
mod errors;
mod interactions;
mod llm_client;
mod models;
mod profile;
mod resumes;
mod routes;
mod search;
mod state;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::auth::AuthClient;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::search::cache::SearchCache;
use crate::search::providers::adzuna::AdzunaProvider;
use crate::search::providers::jsearch::JSearchProvider;
use crate::search::providers::remotive::RemotiveProvider;
use crate::search::providers::JobProvider;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize S3 / MinIO
    let s3 = build_s3_client(&config).await;
    info!("S3 client initialized");

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize auth-service client
    let auth = AuthClient::new(config.auth_base_url.clone(), config.auth_api_key.clone());
    info!("Auth client initialized ({})", config.auth_base_url);

    // Register job-search providers for which credentials exist
    let providers = build_providers(&config);
    info!(
        "Job providers registered: {}",
        providers
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    // Build app state
    let state = AppState {
        db,
        s3,
        llm,
        auth,
        config: config.clone(),
        providers: Arc::new(providers),
        search_cache: Arc::new(SearchCache::new()),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Providers are registered only when their credentials are configured;
/// Remotive needs none and is always present.
fn build_providers(config: &Config) -> Vec<Arc<dyn JobProvider>> {
    let mut providers: Vec<Arc<dyn JobProvider>> = Vec::new();

    if let Some(key) = config.rapidapi_key.clone() {
        providers.push(Arc::new(JSearchProvider::new(key)));
    }
    if let (Some(app_id), Some(app_key)) =
        (config.adzuna_app_id.clone(), config.adzuna_app_key.clone())
    {
        providers.push(Arc::new(AdzunaProvider::new(app_id, app_key)));
    }
    providers.push(Arc::new(RemotiveProvider::new()));

    providers
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "compass-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
