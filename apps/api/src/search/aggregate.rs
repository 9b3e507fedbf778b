//! Multi-source search aggregation: cache lookup, provider fan-out,
//! dedup, truncation, and the write-only search session log.

use anyhow::Context;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::search::country::detect_country;
use crate::search::providers::{Job, SearchRequest};
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 30;

/// Runs one aggregated search. Provider failures are logged and contribute
/// an empty page; only cache-key serialization or session-log DB errors can
/// be seen here, and the latter is swallowed too.
pub async fn search_jobs(
    state: &AppState,
    user: &AuthUser,
    request: &SearchRequest,
) -> Result<Vec<Job>, AppError> {
    let cache_key =
        serde_json::to_string(request).context("Failed to serialize search request")?;

    if let Some(jobs) = state.search_cache.get(&cache_key).await {
        return Ok(jobs);
    }

    let country = detect_country(request.location.as_deref().unwrap_or(""));

    let mut handles = Vec::new();
    for provider in state
        .providers
        .iter()
        .filter(|p| p.eligible(request, country))
    {
        let provider = provider.clone();
        let request = request.clone();
        handles.push(tokio::spawn(async move {
            let result = provider.search(&request, country).await;
            (provider.name(), result)
        }));
    }

    let mut all_jobs = Vec::new();
    for handle in handles {
        match handle.await {
            Ok((_, Ok(jobs))) => all_jobs.extend(jobs),
            Ok((name, Err(e))) => warn!("Provider '{name}' failed, skipping: {e}"),
            Err(e) => warn!("Provider task panicked: {e}"),
        }
    }

    let mut jobs = dedupe_jobs(all_jobs);
    jobs.truncate(request.limit.unwrap_or(DEFAULT_LIMIT));

    state.search_cache.put(cache_key, jobs.clone()).await;

    log_search_session(&state.db, user.id, request, jobs.len()).await;

    Ok(jobs)
}

/// Deduplicates by lowercased (title, company); the first occurrence wins,
/// so provider registration order decides which listing survives.
pub fn dedupe_jobs(jobs: Vec<Job>) -> Vec<Job> {
    let mut seen = std::collections::HashSet::new();
    jobs.into_iter()
        .filter(|job| seen.insert(dedup_key(job)))
        .collect()
}

fn dedup_key(job: &Job) -> String {
    format!(
        "{}|{}",
        job.title.trim().to_lowercase(),
        job.company.trim().to_lowercase()
    )
}

/// Write-only session log. Never read back; a failed insert must not fail
/// the search.
async fn log_search_session(db: &PgPool, user_id: Uuid, request: &SearchRequest, count: usize) {
    let result = sqlx::query(
        r#"
        INSERT INTO search_sessions (id, user_id, query, location, result_count)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&request.query)
    .bind(&request.location)
    .bind(count as i32)
    .execute(db)
    .await;

    if let Err(e) = result {
        warn!("Failed to log search session: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, title: &str, company: &str, source: &str) -> Job {
        Job {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            location: None,
            description: String::new(),
            url: None,
            salary: None,
            source: source.to_string(),
            posted_at: None,
            match_score: None,
        }
    }

    #[test]
    fn test_dedupe_case_insensitive() {
        let jobs = vec![
            job("jsearch:1", "Rust Engineer", "Acme", "jsearch"),
            job("adzuna:9", "rust engineer", "ACME", "adzuna"),
            job("remotive:3", "Rust Engineer", "Globex", "remotive"),
        ];

        let deduped = dedupe_jobs(jobs);
        assert_eq!(deduped.len(), 2);
        // First occurrence wins
        assert_eq!(deduped[0].id, "jsearch:1");
        assert_eq!(deduped[1].id, "remotive:3");
    }

    #[test]
    fn test_dedupe_trims_whitespace() {
        let jobs = vec![
            job("a", "Rust Engineer ", "Acme", "jsearch"),
            job("b", " Rust Engineer", " Acme ", "adzuna"),
        ];
        assert_eq!(dedupe_jobs(jobs).len(), 1);
    }

    #[test]
    fn test_same_title_different_company_kept() {
        let jobs = vec![
            job("a", "Rust Engineer", "Acme", "jsearch"),
            job("b", "Rust Engineer", "Initech", "jsearch"),
        ];
        assert_eq!(dedupe_jobs(jobs).len(), 2);
    }
}
