//! Job match scoring — single-job reports and batch annotation of search
//! results, both against the caller's profile.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ai::prompts::{BATCH_MATCH_TEMPLATE, MATCH_SYSTEM, MATCH_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, SCORING_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::models::profile::ProfileRow;
use crate::search::providers::Job;

/// At most this many search results get LLM scores per request.
pub const ANNOTATE_LIMIT: usize = 10;

/// Job description text beyond this is cut from prompts.
const MAX_DESCRIPTION_CHARS: usize = 2_000;

/// The job being scored, as submitted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPayload {
    #[serde(default)]
    pub job_id: Option<String>,
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Structured output of single-job match scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub match_score: i32,
    pub matching_strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub verdict: String,
}

#[derive(Debug, Deserialize)]
struct BatchScores {
    scores: Vec<BatchScore>,
}

#[derive(Debug, Deserialize)]
struct BatchScore {
    job_id: String,
    match_score: i32,
}

/// Scores one job against the caller's profile and detected skills.
pub async fn score_job_match(
    llm: &LlmClient,
    profile: Option<&ProfileRow>,
    skills: &[String],
    job: &JobPayload,
) -> Result<MatchReport, AppError> {
    let job_view = serde_json::json!({
        "title": job.title,
        "company": job.company,
        "location": job.location,
        "description": truncate_chars(&job.description, MAX_DESCRIPTION_CHARS),
    });

    let prompt = format!(
        "{}\n\n{}",
        MATCH_TEMPLATE
            .replace("{profile_json}", &profile_json(profile))
            .replace("{skills_json}", &serde_json::json!(skills).to_string())
            .replace("{job_json}", &job_view.to_string()),
        SCORING_INSTRUCTION
    );

    llm.call_json::<MatchReport>(&prompt, MATCH_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Match scoring failed: {e}")))
}

/// Annotates the top search results with match scores in one LLM call.
/// Best-effort: on any failure the jobs are returned unscored.
pub async fn annotate_jobs(llm: &LlmClient, profile: Option<&ProfileRow>, jobs: &mut [Job]) {
    let top = &jobs[..jobs.len().min(ANNOTATE_LIMIT)];
    if top.is_empty() {
        return;
    }

    let jobs_view: Vec<_> = top
        .iter()
        .map(|job| {
            serde_json::json!({
                "id": job.id,
                "title": job.title,
                "company": job.company,
                "description": truncate_chars(&job.description, 500),
            })
        })
        .collect();

    let prompt = format!(
        "{}\n\n{}",
        BATCH_MATCH_TEMPLATE
            .replace("{profile_json}", &profile_json(profile))
            .replace("{jobs_json}", &serde_json::json!(jobs_view).to_string()),
        SCORING_INSTRUCTION
    );

    let batch: BatchScores = match llm.call_json(&prompt, JSON_ONLY_SYSTEM).await {
        Ok(batch) => batch,
        Err(e) => {
            warn!("Match annotation failed, returning unscored results: {e}");
            return;
        }
    };

    apply_scores(jobs, &batch.scores);
}

fn apply_scores(jobs: &mut [Job], scores: &[BatchScore]) {
    for score in scores {
        if let Some(job) = jobs.iter_mut().find(|j| j.id == score.job_id) {
            job.match_score = Some(score.match_score);
        }
    }
}

fn profile_json(profile: Option<&ProfileRow>) -> String {
    match profile {
        Some(row) => serde_json::json!({
            "target_role": row.target_role,
            "work_preference": row.work_preference,
            "salary_min": row.salary_min,
            "salary_max": row.salary_max,
            "headline": row.headline,
        })
        .to_string(),
        None => "null".to_string(),
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str) -> Job {
        Job {
            id: id.to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: None,
            description: String::new(),
            url: None,
            salary: None,
            source: "test".to_string(),
            posted_at: None,
            match_score: None,
        }
    }

    #[test]
    fn test_match_report_deserializes_from_llm_shape() {
        let json = r#"{
            "match_score": 68,
            "matching_strengths": ["Rust depth"],
            "gaps": ["No Kubernetes"],
            "verdict": "Plausible fit with infra gaps"
        }"#;
        let report: MatchReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.match_score, 68);
        assert_eq!(report.gaps.len(), 1);
    }

    #[test]
    fn test_apply_scores_matches_by_id() {
        let mut jobs = vec![job("jsearch:1"), job("adzuna:2")];
        let scores = vec![
            BatchScore {
                job_id: "adzuna:2".to_string(),
                match_score: 81,
            },
            BatchScore {
                job_id: "unknown:9".to_string(),
                match_score: 12,
            },
        ];

        apply_scores(&mut jobs, &scores);
        assert_eq!(jobs[0].match_score, None);
        assert_eq!(jobs[1].match_score, Some(81));
    }

    #[test]
    fn test_profile_json_null_when_absent() {
        assert_eq!(profile_json(None), "null");
    }

    #[test]
    fn test_job_payload_optional_fields_default() {
        let payload: JobPayload = serde_json::from_str(
            r#"{"title": "Engineer", "company": "Acme", "description": "Build things"}"#,
        )
        .unwrap();
        assert!(payload.job_id.is_none());
        assert!(payload.location.is_none());
    }
}
