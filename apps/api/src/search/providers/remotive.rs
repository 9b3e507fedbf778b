//! Remotive provider — remote-only listings, no API key required.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;

use crate::search::providers::{Job, JobProvider, ProviderError, SearchRequest};

const API_URL: &str = "https://remotive.com/api/remote-jobs";
const RESULT_LIMIT: u32 = 20;

pub struct RemotiveProvider {
    client: Client,
}

impl RemotiveProvider {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for RemotiveProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobProvider for RemotiveProvider {
    fn name(&self) -> &'static str {
        "remotive"
    }

    fn eligible(&self, request: &SearchRequest, _country: &str) -> bool {
        // Only lists remote positions, so skip when the caller excludes them.
        request.remote_ok
    }

    async fn search(
        &self,
        request: &SearchRequest,
        _country: &str,
    ) -> Result<Vec<Job>, ProviderError> {
        let response = self
            .client
            .get(API_URL)
            .query(&[
                ("search", request.query.as_str()),
                ("limit", &RESULT_LIMIT.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
            });
        }

        let body: RemotiveResponse = response.json().await?;
        Ok(body.jobs.into_iter().map(to_job).collect())
    }
}

#[derive(Debug, Deserialize)]
struct RemotiveResponse {
    #[serde(default)]
    jobs: Vec<RemotiveJob>,
}

#[derive(Debug, Deserialize)]
struct RemotiveJob {
    id: i64,
    title: String,
    company_name: String,
    candidate_required_location: Option<String>,
    #[serde(default)]
    description: String,
    url: Option<String>,
    salary: Option<String>,
    /// Local datetime without offset, e.g. "2026-07-01T13:21:00"
    publication_date: Option<String>,
}

fn to_job(raw: RemotiveJob) -> Job {
    let posted_at = raw
        .publication_date
        .as_deref()
        .and_then(|s| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").ok())
        .map(|naive| naive.and_utc());

    Job {
        id: format!("remotive:{}", raw.id),
        title: raw.title,
        company: raw.company_name,
        location: raw.candidate_required_location,
        description: raw.description,
        url: raw.url,
        salary: raw.salary.filter(|s| !s.trim().is_empty()),
        source: "remotive".to_string(),
        posted_at,
        match_score: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "job-count": 2,
        "jobs": [
            {
                "id": 1907432,
                "title": "Rust Backend Engineer",
                "company_name": "Hooli",
                "candidate_required_location": "Worldwide",
                "description": "<p>Own our ingestion pipeline.</p>",
                "url": "https://remotive.com/remote-jobs/software-dev/1907432",
                "salary": "$120k - $150k",
                "publication_date": "2026-07-20T10:15:00"
            },
            {
                "id": 1907433,
                "title": "Platform Engineer",
                "company_name": "Pied Piper",
                "candidate_required_location": null,
                "url": null,
                "salary": "",
                "publication_date": "not-a-date"
            }
        ]
    }"#;

    #[test]
    fn test_fixture_maps_to_common_shape() {
        let response: RemotiveResponse = serde_json::from_str(FIXTURE).unwrap();
        let jobs: Vec<Job> = response.jobs.into_iter().map(to_job).collect();
        assert_eq!(jobs.len(), 2);

        assert_eq!(jobs[0].id, "remotive:1907432");
        assert_eq!(jobs[0].source, "remotive");
        assert_eq!(jobs[0].salary.as_deref(), Some("$120k - $150k"));
        assert!(jobs[0].posted_at.is_some());

        // Blank salary and unparseable date degrade to None
        assert!(jobs[1].salary.is_none());
        assert!(jobs[1].posted_at.is_none());
    }

    #[test]
    fn test_eligibility_follows_remote_ok() {
        let provider = RemotiveProvider::new();
        let remote: SearchRequest = serde_json::from_str(r#"{"query": "rust"}"#).unwrap();
        let onsite: SearchRequest =
            serde_json::from_str(r#"{"query": "rust", "remote_ok": false}"#).unwrap();

        assert!(provider.eligible(&remote, "us"));
        assert!(!provider.eligible(&onsite, "us"));
    }
}
