use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// How the user wants to work. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkPreference {
    Remote,
    Hybrid,
    Onsite,
}

impl WorkPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkPreference::Remote => "remote",
            WorkPreference::Hybrid => "hybrid",
            WorkPreference::Onsite => "onsite",
        }
    }
}

/// Career objectives for one user. One row per user, upserted by the
/// profile endpoints and read by match scoring and recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub target_role: Option<String>,
    pub work_preference: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub headline: Option<String>,
    pub updated_at: DateTime<Utc>,
}
