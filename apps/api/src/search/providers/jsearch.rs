//! JSearch (RapidAPI) provider.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::search::providers::{salary_display, Job, JobProvider, ProviderError, SearchRequest};

const API_URL: &str = "https://jsearch.p.rapidapi.com/search";
const API_HOST: &str = "jsearch.p.rapidapi.com";

pub struct JSearchProvider {
    client: Client,
    api_key: String,
}

impl JSearchProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl JobProvider for JSearchProvider {
    fn name(&self) -> &'static str {
        "jsearch"
    }

    fn eligible(&self, _request: &SearchRequest, _country: &str) -> bool {
        // Registered only when a RapidAPI key is configured.
        true
    }

    async fn search(
        &self,
        request: &SearchRequest,
        country: &str,
    ) -> Result<Vec<Job>, ProviderError> {
        // JSearch folds the location into the query string itself.
        let query = match request.location.as_deref() {
            Some(location) if !location.trim().is_empty() => {
                format!("{} in {}", request.query, location)
            }
            _ => request.query.clone(),
        };

        let response = self
            .client
            .get(API_URL)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", API_HOST)
            .query(&[
                ("query", query.as_str()),
                ("page", "1"),
                ("num_pages", "1"),
                ("country", country),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
            });
        }

        let body: JSearchResponse = response.json().await?;
        Ok(body.data.into_iter().map(to_job).collect())
    }
}

#[derive(Debug, Deserialize)]
struct JSearchResponse {
    #[serde(default)]
    data: Vec<JSearchJob>,
}

#[derive(Debug, Deserialize)]
struct JSearchJob {
    job_id: String,
    job_title: String,
    employer_name: String,
    job_city: Option<String>,
    job_country: Option<String>,
    #[serde(default)]
    job_description: String,
    job_apply_link: Option<String>,
    job_min_salary: Option<f64>,
    job_max_salary: Option<f64>,
    job_salary_currency: Option<String>,
    job_posted_at_datetime_utc: Option<DateTime<Utc>>,
}

fn to_job(raw: JSearchJob) -> Job {
    let location = match (raw.job_city, raw.job_country) {
        (Some(city), Some(country)) => Some(format!("{city}, {country}")),
        (Some(city), None) => Some(city),
        (None, Some(country)) => Some(country),
        (None, None) => None,
    };

    Job {
        id: format!("jsearch:{}", raw.job_id),
        title: raw.job_title,
        company: raw.employer_name,
        location,
        description: raw.job_description,
        url: raw.job_apply_link,
        salary: salary_display(
            raw.job_min_salary,
            raw.job_max_salary,
            raw.job_salary_currency.as_deref(),
        ),
        source: "jsearch".to_string(),
        posted_at: raw.job_posted_at_datetime_utc,
        match_score: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "status": "OK",
        "data": [
            {
                "job_id": "aBcD123==",
                "job_title": "Senior Rust Engineer",
                "employer_name": "Acme Corp",
                "job_city": "Berlin",
                "job_country": "DE",
                "job_description": "Build backend services in Rust.",
                "job_apply_link": "https://example.com/apply",
                "job_min_salary": 90000,
                "job_max_salary": 120000,
                "job_salary_currency": "EUR",
                "job_posted_at_datetime_utc": "2026-07-01T09:30:00.000Z"
            },
            {
                "job_id": "xYz789",
                "job_title": "Backend Developer",
                "employer_name": "Globex",
                "job_city": null,
                "job_country": "US",
                "job_apply_link": null,
                "job_min_salary": null,
                "job_max_salary": null,
                "job_salary_currency": null,
                "job_posted_at_datetime_utc": null
            }
        ]
    }"#;

    #[test]
    fn test_fixture_maps_to_common_shape() {
        let response: JSearchResponse = serde_json::from_str(FIXTURE).unwrap();
        let jobs: Vec<Job> = response.data.into_iter().map(to_job).collect();
        assert_eq!(jobs.len(), 2);

        assert_eq!(jobs[0].id, "jsearch:aBcD123==");
        assert_eq!(jobs[0].source, "jsearch");
        assert_eq!(jobs[0].location.as_deref(), Some("Berlin, DE"));
        assert_eq!(jobs[0].salary.as_deref(), Some("90000-120000 EUR"));
        assert!(jobs[0].posted_at.is_some());

        assert_eq!(jobs[1].location.as_deref(), Some("US"));
        assert!(jobs[1].salary.is_none());
        assert!(jobs[1].url.is_none());
        // Missing description defaults to empty rather than failing the decode
        assert!(jobs[1].description.is_empty());
    }

    #[test]
    fn test_empty_data_field_tolerated() {
        let response: JSearchResponse = serde_json::from_str(r#"{"status": "OK"}"#).unwrap();
        assert!(response.data.is_empty());
    }
}
