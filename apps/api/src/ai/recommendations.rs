//! Career recommendations — one LLM call over everything the service
//! knows about the user: profile, latest resume analysis, recent saves.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::ai::prompts::{RECOMMENDATIONS_SYSTEM, RECOMMENDATIONS_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::profile::ProfileRow;

/// How many recently saved jobs feed the prompt.
const SAVED_JOBS_LIMIT: i64 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedRole {
    pub title: String,
    pub reason: String,
}

/// Structured recommendations. Returned to the caller, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecommendations {
    pub summary: String,
    pub recommended_roles: Vec<RecommendedRole>,
    pub skill_gaps: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Gathers the user's data and asks the LLM for recommendations.
pub async fn generate_recommendations(
    db: &PgPool,
    llm: &LlmClient,
    user_id: Uuid,
) -> Result<CareerRecommendations, AppError> {
    let profile: Option<ProfileRow> =
        sqlx::query_as("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await?;

    let analysis: Option<(Value,)> = sqlx::query_as(
        r#"
        SELECT analysis FROM resumes
        WHERE user_id = $1 AND analysis IS NOT NULL
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    let saved: Vec<(String, String)> = sqlx::query_as(
        r#"
        SELECT title, company FROM job_interactions
        WHERE user_id = $1 AND interaction_type = 'saved'
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(SAVED_JOBS_LIMIT)
    .fetch_all(db)
    .await?;

    let profile_json = match &profile {
        Some(row) => serde_json::json!({
            "target_role": row.target_role,
            "work_preference": row.work_preference,
            "salary_min": row.salary_min,
            "salary_max": row.salary_max,
            "headline": row.headline,
        })
        .to_string(),
        None => "null".to_string(),
    };
    let analysis_json = match &analysis {
        Some((value,)) => value.to_string(),
        None => "null".to_string(),
    };
    let saved_jobs_json = serde_json::json!(saved
        .iter()
        .map(|(title, company)| serde_json::json!({"title": title, "company": company}))
        .collect::<Vec<_>>())
    .to_string();

    let prompt = RECOMMENDATIONS_TEMPLATE
        .replace("{profile_json}", &profile_json)
        .replace("{analysis_json}", &analysis_json)
        .replace("{saved_jobs_json}", &saved_jobs_json);

    llm.call_json::<CareerRecommendations>(&prompt, RECOMMENDATIONS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Recommendations failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations_deserialize_from_llm_shape() {
        let json = r#"{
            "summary": "Mid-level backend engineer aiming at senior platform roles.",
            "recommended_roles": [
                {"title": "Senior Backend Engineer", "reason": "Direct continuation of current skills"},
                {"title": "Platform Engineer", "reason": "Saved jobs skew toward infrastructure"}
            ],
            "skill_gaps": ["Kubernetes"],
            "next_steps": ["Ship a small k8s side project", "Target 5 applications this month"]
        }"#;

        let recs: CareerRecommendations = serde_json::from_str(json).unwrap();
        assert_eq!(recs.recommended_roles.len(), 2);
        assert_eq!(recs.recommended_roles[1].title, "Platform Engineer");
        assert_eq!(recs.skill_gaps, vec!["Kubernetes"]);
        assert_eq!(recs.next_steps.len(), 2);
    }
}
