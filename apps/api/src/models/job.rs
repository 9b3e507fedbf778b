#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A saved or applied job. `job_id` is the provider-prefixed id from search
/// results. Uniqueness of (user_id, job_id, interaction_type) is enforced by
/// an existence check before insert, not a database constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobInteractionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_id: String,
    pub interaction_type: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub url: Option<String>,
    pub match_score: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Write-only log of one search request. Inserted after each uncached
/// search; no endpoint reads it back.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SearchSessionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub query: String,
    pub location: Option<String>,
    pub result_count: i32,
    pub created_at: DateTime<Utc>,
}
