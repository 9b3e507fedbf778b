//! Axum route handlers for the job search API.

use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::ai::matching::annotate_jobs;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::profile::ProfileRow;
use crate::search::aggregate::search_jobs;
use crate::search::providers::{Job, SearchRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub jobs: Vec<Job>,
    pub count: usize,
}

/// POST /api/v1/jobs/search
///
/// Aggregated multi-provider search. With `annotate: true` the top results
/// also get LLM match scores against the caller's profile; annotation
/// failure degrades to unscored results rather than failing the search.
pub async fn handle_search(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    let mut jobs = search_jobs(&state, &user, &request).await?;

    if request.annotate && !jobs.is_empty() {
        let profile: Option<ProfileRow> =
            sqlx::query_as("SELECT * FROM profiles WHERE user_id = $1")
                .bind(user.id)
                .fetch_optional(&state.db)
                .await?;
        annotate_jobs(&state.llm, profile.as_ref(), &mut jobs).await;
    }

    let count = jobs.len();
    Ok(Json(SearchResponse { jobs, count }))
}
