//! Axum route handlers for the AI endpoints.

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ai::matching::{score_job_match, JobPayload, MatchReport};
use crate::ai::recommendations::{generate_recommendations, CareerRecommendations};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::profile::ProfileRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub job: JobPayload,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub report: MatchReport,
}

/// POST /api/v1/ai/match
///
/// Scores one job against the caller's profile and the skills detected in
/// their latest analyzed resume.
pub async fn handle_match(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    if request.job.title.trim().is_empty() || request.job.description.trim().is_empty() {
        return Err(AppError::Validation(
            "job title and description cannot be empty".to_string(),
        ));
    }

    let profile: Option<ProfileRow> =
        sqlx::query_as("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user.id)
            .fetch_optional(&state.db)
            .await?;

    let skills = latest_resume_skills(&state, &user).await?;

    let report = score_job_match(&state.llm, profile.as_ref(), &skills, &request.job).await?;

    Ok(Json(MatchResponse { report }))
}

/// POST /api/v1/ai/recommendations
///
/// Career recommendations from profile + latest resume analysis + recent
/// saved jobs. Returned only, never persisted.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<CareerRecommendations>, AppError> {
    let recommendations = generate_recommendations(&state.db, &state.llm, user.id).await?;
    Ok(Json(recommendations))
}

async fn latest_resume_skills(state: &AppState, user: &AuthUser) -> Result<Vec<String>, AppError> {
    let analysis: Option<(Value,)> = sqlx::query_as(
        r#"
        SELECT analysis FROM resumes
        WHERE user_id = $1 AND analysis IS NOT NULL
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(user.id)
    .fetch_optional(&state.db)
    .await?;

    Ok(analysis
        .map(|(value,)| skills_from_analysis(&value))
        .unwrap_or_default())
}

/// Pulls `detected_skills` out of a stored analysis blob. The blob is
/// persisted as parsed and never re-validated; missing or oddly-typed
/// fields yield an empty list.
fn skills_from_analysis(analysis: &Value) -> Vec<String> {
    analysis
        .get("detected_skills")
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
