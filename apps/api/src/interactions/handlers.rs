//! Axum route handler for saved/applied job tracking.
//!
//! One POST endpoint keyed by an `action` field; the frontend sends every
//! interaction through it.

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::interactions::store;
use crate::models::job::JobInteractionRow;
use crate::state::AppState;

const INTERACTION_TYPES: &[&str] = &["saved", "applied"];

/// Action-keyed request body for POST /api/v1/jobs/interactions.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum InteractionRequest {
    Save(SaveJobRequest),
    Apply(SaveJobRequest),
    Unsave {
        job_id: String,
    },
    UpdateNotes {
        id: Uuid,
        notes: String,
    },
    List {
        #[serde(default)]
        interaction_type: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
pub struct SaveJobRequest {
    pub job_id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub match_score: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum InteractionResponse {
    One(JobInteractionRow),
    Many(Vec<JobInteractionRow>),
    Deleted { deleted: bool },
}

/// POST /api/v1/jobs/interactions
pub async fn handle_interaction(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<InteractionRequest>,
) -> Result<Json<InteractionResponse>, AppError> {
    match request {
        InteractionRequest::Save(job) => save(&state, &user, job, "saved").await,
        InteractionRequest::Apply(job) => save(&state, &user, job, "applied").await,
        InteractionRequest::Unsave { job_id } => {
            if store::delete_saved(&state.db, user.id, &job_id).await? {
                Ok(Json(InteractionResponse::Deleted { deleted: true }))
            } else {
                Err(AppError::NotFound(format!(
                    "No saved interaction for job {job_id}"
                )))
            }
        }
        InteractionRequest::UpdateNotes { id, notes } => {
            let row = store::set_notes(&state.db, user.id, id, &notes)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Interaction {id} not found")))?;
            Ok(Json(InteractionResponse::One(row)))
        }
        InteractionRequest::List { interaction_type } => {
            if let Some(kind) = interaction_type.as_deref() {
                if !INTERACTION_TYPES.contains(&kind) {
                    return Err(AppError::Validation(format!(
                        "Unknown interaction_type '{kind}'"
                    )));
                }
            }
            let rows =
                store::list_interactions(&state.db, user.id, interaction_type.as_deref()).await?;
            Ok(Json(InteractionResponse::Many(rows)))
        }
    }
}

/// Existence check first; a duplicate save/apply returns the existing row
/// unchanged instead of inserting a second one.
async fn save(
    state: &AppState,
    user: &AuthUser,
    job: SaveJobRequest,
    interaction_type: &str,
) -> Result<Json<InteractionResponse>, AppError> {
    if job.job_id.trim().is_empty() || job.title.trim().is_empty() || job.company.trim().is_empty()
    {
        return Err(AppError::Validation(
            "job_id, title and company cannot be empty".to_string(),
        ));
    }

    if let Some(existing) =
        store::find_interaction(&state.db, user.id, &job.job_id, interaction_type).await?
    {
        return Ok(Json(InteractionResponse::One(existing)));
    }

    let row = store::insert_interaction(&state.db, user.id, interaction_type, &job).await?;
    Ok(Json(InteractionResponse::One(row)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_action_parses() {
        let json = r#"{
            "action": "save",
            "job_id": "jsearch:abc",
            "title": "Rust Engineer",
            "company": "Acme",
            "match_score": 77
        }"#;
        let request: InteractionRequest = serde_json::from_str(json).unwrap();
        match request {
            InteractionRequest::Save(job) => {
                assert_eq!(job.job_id, "jsearch:abc");
                assert_eq!(job.match_score, Some(77));
                assert!(job.notes.is_none());
            }
            other => panic!("parsed wrong action: {other:?}"),
        }
    }

    #[test]
    fn test_unsave_action_parses() {
        let json = r#"{"action": "unsave", "job_id": "adzuna:42"}"#;
        let request: InteractionRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(
            request,
            InteractionRequest::Unsave { job_id } if job_id == "adzuna:42"
        ));
    }

    #[test]
    fn test_update_notes_action_parses() {
        let json = r#"{
            "action": "update_notes",
            "id": "7f8a2a9e-3a67-4b8e-9a35-111111111111",
            "notes": "Recruiter replied"
        }"#;
        let request: InteractionRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(request, InteractionRequest::UpdateNotes { .. }));
    }

    #[test]
    fn test_list_action_defaults_to_no_filter() {
        let request: InteractionRequest = serde_json::from_str(r#"{"action": "list"}"#).unwrap();
        assert!(matches!(
            request,
            InteractionRequest::List {
                interaction_type: None
            }
        ));
    }

    #[test]
    fn test_unknown_action_rejected() {
        let result =
            serde_json::from_str::<InteractionRequest>(r#"{"action": "archive", "job_id": "x"}"#);
        assert!(result.is_err());
    }
}
