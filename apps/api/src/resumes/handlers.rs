//! Axum route handlers for the Resume API.

use aws_sdk_s3::primitives::ByteStream;
use axum::{
    extract::{Multipart, Path, State},
    Extension, Json,
};
use bytes::Bytes;
use tracing::warn;
use uuid::Uuid;

use crate::ai::analysis::analyze_resume;
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::resumes::extract::extract_text;
use crate::state::AppState;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// POST /api/v1/resumes (multipart)
///
/// Upload pipeline: store the raw file in S3, extract plain text, analyze
/// with the LLM, persist the row. Analysis is best-effort — if the LLM call
/// fails the row is stored with NULL analysis/score and the upload still
/// succeeds.
pub async fn handle_upload(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRow>, AppError> {
    let (file_name, data) = read_file_part(&mut multipart).await?;

    if data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(format!(
            "File exceeds the {} MB upload limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }

    let s3_key = format!("resumes/{}/{}_{}", user.id, Uuid::new_v4(), file_name);
    state
        .s3
        .put_object()
        .bucket(&state.config.s3_bucket)
        .key(&s3_key)
        .body(ByteStream::from(data.clone()))
        .send()
        .await
        .map_err(|e| AppError::S3(format!("Failed to store resume: {e}")))?;

    let extracted_text = extract_text(&file_name, &data)?;

    // Best-effort analysis; the upload is never rolled back for an LLM failure.
    let (analysis, score) = match analyze_resume(&extracted_text, &state.llm).await {
        Ok(analysis) => {
            let score = analysis.overall_score;
            let value = serde_json::to_value(&analysis)
                .map_err(|e| AppError::Llm(format!("Analysis not serializable: {e}")))?;
            (Some(value), Some(score))
        }
        Err(e) => {
            warn!("Resume analysis failed, storing without it: {e}");
            (None, None)
        }
    };

    let row: ResumeRow = sqlx::query_as(
        r#"
        INSERT INTO resumes (id, user_id, file_name, s3_key, extracted_text, analysis, score)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user.id)
    .bind(&file_name)
    .bind(&s3_key)
    .bind(&extracted_text)
    .bind(&analysis)
    .bind(score)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let rows: Vec<ResumeRow> =
        sqlx::query_as("SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at DESC")
            .bind(user.id)
            .fetch_all(&state.db)
            .await?;
    Ok(Json(rows))
}

/// GET /api/v1/resumes/:id
///
/// 404 covers both "does not exist" and "someone else's resume".
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    let row: Option<ResumeRow> =
        sqlx::query_as("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
            .bind(resume_id)
            .bind(user.id)
            .fetch_optional(&state.db)
            .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))
}

async fn read_file_part(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field
                .file_name()
                .unwrap_or("resume")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            return Ok((file_name, data));
        }
    }

    Err(AppError::Validation(
        "Multipart body must contain a 'file' part".to_string(),
    ))
}
