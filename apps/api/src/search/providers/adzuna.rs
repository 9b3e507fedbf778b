//! Adzuna provider.
//!
//! Adzuna puts the country code in the URL path, so the provider is skipped
//! entirely when the detected country is outside its supported set.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::search::providers::{salary_display, Job, JobProvider, ProviderError, SearchRequest};

const API_BASE: &str = "https://api.adzuna.com/v1/api/jobs";
const RESULTS_PER_PAGE: u32 = 20;

const SUPPORTED_COUNTRIES: &[&str] = &[
    "at", "au", "be", "br", "ca", "ch", "de", "es", "fr", "gb", "in", "it", "mx", "nl", "nz",
    "pl", "sg", "us", "za",
];

pub struct AdzunaProvider {
    client: Client,
    app_id: String,
    app_key: String,
}

impl AdzunaProvider {
    pub fn new(app_id: String, app_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .expect("Failed to build HTTP client"),
            app_id,
            app_key,
        }
    }
}

#[async_trait]
impl JobProvider for AdzunaProvider {
    fn name(&self) -> &'static str {
        "adzuna"
    }

    fn eligible(&self, _request: &SearchRequest, country: &str) -> bool {
        SUPPORTED_COUNTRIES.contains(&country)
    }

    async fn search(
        &self,
        request: &SearchRequest,
        country: &str,
    ) -> Result<Vec<Job>, ProviderError> {
        let url = format!("{API_BASE}/{country}/search/1");

        let mut params = vec![
            ("app_id", self.app_id.clone()),
            ("app_key", self.app_key.clone()),
            ("what", request.query.clone()),
            ("results_per_page", RESULTS_PER_PAGE.to_string()),
        ];
        if let Some(location) = request.location.as_deref() {
            if !location.trim().is_empty() {
                params.push(("where", location.to_string()));
            }
        }

        let response = self.client.get(&url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
            });
        }

        let body: AdzunaResponse = response.json().await?;
        Ok(body.results.into_iter().map(to_job).collect())
    }
}

#[derive(Debug, Deserialize)]
struct AdzunaResponse {
    #[serde(default)]
    results: Vec<AdzunaJob>,
}

#[derive(Debug, Deserialize)]
struct AdzunaJob {
    id: String,
    title: String,
    company: AdzunaCompany,
    location: AdzunaLocation,
    #[serde(default)]
    description: String,
    redirect_url: Option<String>,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
    created: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct AdzunaCompany {
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AdzunaLocation {
    display_name: Option<String>,
}

fn to_job(raw: AdzunaJob) -> Job {
    Job {
        id: format!("adzuna:{}", raw.id),
        title: raw.title,
        company: raw.company.display_name.unwrap_or_default(),
        location: raw.location.display_name,
        description: raw.description,
        url: raw.redirect_url,
        // Adzuna reports salaries in the market's local currency
        salary: salary_display(raw.salary_min, raw.salary_max, None),
        source: "adzuna".to_string(),
        posted_at: raw.created,
        match_score: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "count": 2,
        "results": [
            {
                "id": "4567890123",
                "title": "Rust Developer",
                "company": {"display_name": "Initech"},
                "location": {"display_name": "London, UK"},
                "description": "Work on low-latency trading systems.",
                "redirect_url": "https://adzuna.example/redirect/1",
                "salary_min": 70000,
                "salary_max": 95000,
                "created": "2026-06-15T08:00:00Z"
            },
            {
                "id": "4567890124",
                "title": "Systems Engineer",
                "company": {"display_name": null},
                "location": {"display_name": null},
                "redirect_url": null,
                "salary_min": null,
                "salary_max": null,
                "created": null
            }
        ]
    }"#;

    #[test]
    fn test_fixture_maps_to_common_shape() {
        let response: AdzunaResponse = serde_json::from_str(FIXTURE).unwrap();
        let jobs: Vec<Job> = response.results.into_iter().map(to_job).collect();
        assert_eq!(jobs.len(), 2);

        assert_eq!(jobs[0].id, "adzuna:4567890123");
        assert_eq!(jobs[0].company, "Initech");
        assert_eq!(jobs[0].location.as_deref(), Some("London, UK"));
        assert_eq!(jobs[0].salary.as_deref(), Some("70000-95000"));

        assert_eq!(jobs[1].company, "");
        assert!(jobs[1].location.is_none());
        assert!(jobs[1].posted_at.is_none());
    }

    #[test]
    fn test_eligibility_by_country() {
        let provider = AdzunaProvider::new("id".to_string(), "key".to_string());
        let request: SearchRequest = serde_json::from_str(r#"{"query": "rust"}"#).unwrap();

        assert!(provider.eligible(&request, "gb"));
        assert!(provider.eligible(&request, "us"));
        assert!(!provider.eligible(&request, "ae"));
        assert!(!provider.eligible(&request, "jp"));
    }
}
