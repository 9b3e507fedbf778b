//! Persistence for job interactions.
//!
//! Uniqueness of (user_id, job_id, interaction_type) is an application-level
//! existence check done by the handler before `insert_interaction` — there
//! is no database constraint backing it.

use sqlx::PgPool;
use uuid::Uuid;

use crate::interactions::handlers::SaveJobRequest;
use crate::models::job::JobInteractionRow;

pub async fn find_interaction(
    db: &PgPool,
    user_id: Uuid,
    job_id: &str,
    interaction_type: &str,
) -> Result<Option<JobInteractionRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT * FROM job_interactions
        WHERE user_id = $1 AND job_id = $2 AND interaction_type = $3
        "#,
    )
    .bind(user_id)
    .bind(job_id)
    .bind(interaction_type)
    .fetch_optional(db)
    .await
}

pub async fn insert_interaction(
    db: &PgPool,
    user_id: Uuid,
    interaction_type: &str,
    job: &SaveJobRequest,
) -> Result<JobInteractionRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO job_interactions
            (id, user_id, job_id, interaction_type, title, company, location, url,
             match_score, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&job.job_id)
    .bind(interaction_type)
    .bind(&job.title)
    .bind(&job.company)
    .bind(&job.location)
    .bind(&job.url)
    .bind(job.match_score)
    .bind(&job.notes)
    .fetch_one(db)
    .await
}

/// Deletes the `saved` interaction for a job. Returns whether a row existed.
pub async fn delete_saved(db: &PgPool, user_id: Uuid, job_id: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM job_interactions
        WHERE user_id = $1 AND job_id = $2 AND interaction_type = 'saved'
        "#,
    )
    .bind(user_id)
    .bind(job_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn set_notes(
    db: &PgPool,
    user_id: Uuid,
    id: Uuid,
    notes: &str,
) -> Result<Option<JobInteractionRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE job_interactions
        SET notes = $3
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(notes)
    .fetch_optional(db)
    .await
}

pub async fn list_interactions(
    db: &PgPool,
    user_id: Uuid,
    interaction_type: Option<&str>,
) -> Result<Vec<JobInteractionRow>, sqlx::Error> {
    match interaction_type {
        Some(kind) => {
            sqlx::query_as(
                r#"
                SELECT * FROM job_interactions
                WHERE user_id = $1 AND interaction_type = $2
                ORDER BY created_at DESC
                "#,
            )
            .bind(user_id)
            .bind(kind)
            .fetch_all(db)
            .await
        }
        None => {
            sqlx::query_as(
                r#"
                SELECT * FROM job_interactions
                WHERE user_id = $1
                ORDER BY created_at DESC
                "#,
            )
            .bind(user_id)
            .fetch_all(db)
            .await
        }
    }
}
