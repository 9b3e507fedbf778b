use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::auth::AuthClient;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::search::cache::SearchCache;
use crate::search::providers::JobProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub s3: S3Client,
    pub llm: LlmClient,
    pub auth: AuthClient,
    pub config: Config,
    /// Job-search providers assembled at startup from the configured
    /// credentials. Providers whose keys are absent are never registered.
    pub providers: Arc<Vec<Arc<dyn JobProvider>>>,
    /// Process-local search result cache. Not shared across instances.
    pub search_cache: Arc<SearchCache>,
}
