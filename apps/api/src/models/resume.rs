use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// An uploaded resume: the S3 object reference, the extracted plain text,
/// and the AI analysis blob. `analysis` and `score` are NULL when the
/// analysis call failed at upload time — the upload itself is never
/// rolled back for that.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub file_name: String,
    pub s3_key: String,
    pub extracted_text: String,
    pub analysis: Option<Value>,
    pub score: Option<i32>,
    pub created_at: DateTime<Utc>,
}
