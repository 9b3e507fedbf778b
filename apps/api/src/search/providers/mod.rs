//! Job-search providers.
//!
//! Each third-party API gets one `JobProvider` impl that translates its
//! query parameters and response shape into the common `Job` shape. The
//! aggregator treats providers uniformly through the trait; a provider
//! failure never fails a search.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod adzuna;
pub mod jsearch;
pub mod remotive;

/// The common job shape every provider response is translated into.
/// `id` is prefixed with the provider name so ids never collide across
/// sources ("jsearch:abc123").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: String,
    pub url: Option<String>,
    pub salary: Option<String>,
    pub source: String,
    pub posted_at: Option<DateTime<Utc>>,
    /// Filled by LLM annotation when the caller asks for it.
    pub match_score: Option<i32>,
}

/// A job-search request. Also serves as the cache key when serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_true")]
    pub remote_ok: bool,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub annotate: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}")]
    Api { status: u16 },
}

/// One third-party job-search API.
#[async_trait]
pub trait JobProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether this provider should be consulted for the request.
    /// `country` is the detected country code for the request location.
    fn eligible(&self, request: &SearchRequest, country: &str) -> bool;

    async fn search(&self, request: &SearchRequest, country: &str)
        -> Result<Vec<Job>, ProviderError>;
}

/// Builds a display string from numeric salary bounds, e.g. "90000-120000 USD".
/// Returns `None` when neither bound is present.
pub(crate) fn salary_display(
    min: Option<f64>,
    max: Option<f64>,
    currency: Option<&str>,
) -> Option<String> {
    let range = match (min, max) {
        (Some(min), Some(max)) => format!("{}-{}", min.round() as i64, max.round() as i64),
        (Some(min), None) => format!("from {}", min.round() as i64),
        (None, Some(max)) => format!("up to {}", max.round() as i64),
        (None, None) => return None,
    };
    match currency {
        Some(c) if !c.is_empty() => Some(format!("{range} {c}")),
        _ => Some(range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_display_both_bounds() {
        assert_eq!(
            salary_display(Some(90000.0), Some(120000.0), Some("USD")),
            Some("90000-120000 USD".to_string())
        );
    }

    #[test]
    fn test_salary_display_single_bound() {
        assert_eq!(
            salary_display(Some(80000.0), None, None),
            Some("from 80000".to_string())
        );
        assert_eq!(
            salary_display(None, Some(150000.5), Some("EUR")),
            Some("up to 150001 EUR".to_string())
        );
    }

    #[test]
    fn test_salary_display_absent() {
        assert_eq!(salary_display(None, None, Some("USD")), None);
    }

    #[test]
    fn test_search_request_defaults() {
        let req: SearchRequest = serde_json::from_str(r#"{"query": "rust engineer"}"#).unwrap();
        assert_eq!(req.query, "rust engineer");
        assert!(req.remote_ok);
        assert!(!req.annotate);
        assert!(req.location.is_none());
        assert!(req.limit.is_none());
    }

    #[test]
    fn test_search_request_cache_key_is_stable() {
        let a: SearchRequest =
            serde_json::from_str(r#"{"query": "rust", "location": "Berlin"}"#).unwrap();
        let b: SearchRequest =
            serde_json::from_str(r#"{"query": "rust", "location": "Berlin"}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
