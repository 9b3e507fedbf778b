//! Axum route handlers for career objectives (the user profile).

use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::profile::{ProfileRow, WorkPreference};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub target_role: Option<String>,
    #[serde(default)]
    pub work_preference: Option<WorkPreference>,
    #[serde(default)]
    pub salary_min: Option<i64>,
    #[serde(default)]
    pub salary_max: Option<i64>,
    #[serde(default)]
    pub headline: Option<String>,
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ProfileRow>, AppError> {
    let row: Option<ProfileRow> = sqlx::query_as("SELECT * FROM profiles WHERE user_id = $1")
        .bind(user.id)
        .fetch_optional(&state.db)
        .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound("Profile has not been created yet".to_string()))
}

/// PUT /api/v1/profile
///
/// Upserts the caller's career objectives. All fields are free-form
/// preferences; only the salary bounds get cross-field validation.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileRow>, AppError> {
    validate_salary_bounds(request.salary_min, request.salary_max)?;

    let row: ProfileRow = sqlx::query_as(
        r#"
        INSERT INTO profiles
            (user_id, target_role, work_preference, salary_min, salary_max, headline, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, now())
        ON CONFLICT (user_id) DO UPDATE SET
            target_role = EXCLUDED.target_role,
            work_preference = EXCLUDED.work_preference,
            salary_min = EXCLUDED.salary_min,
            salary_max = EXCLUDED.salary_max,
            headline = EXCLUDED.headline,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user.id)
    .bind(&request.target_role)
    .bind(request.work_preference.map(|p| p.as_str()))
    .bind(request.salary_min)
    .bind(request.salary_max)
    .bind(&request.headline)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

fn validate_salary_bounds(min: Option<i64>, max: Option<i64>) -> Result<(), AppError> {
    if min.is_some_and(|v| v < 0) || max.is_some_and(|v| v < 0) {
        return Err(AppError::Validation(
            "Salary bounds cannot be negative".to_string(),
        ));
    }
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(AppError::Validation(
                "salary_min cannot exceed salary_max".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_bounds_valid() {
        assert!(validate_salary_bounds(Some(80_000), Some(120_000)).is_ok());
        assert!(validate_salary_bounds(None, Some(120_000)).is_ok());
        assert!(validate_salary_bounds(None, None).is_ok());
    }

    #[test]
    fn test_salary_bounds_negative_rejected() {
        assert!(validate_salary_bounds(Some(-1), None).is_err());
        assert!(validate_salary_bounds(None, Some(-500)).is_err());
    }

    #[test]
    fn test_salary_bounds_inverted_rejected() {
        assert!(validate_salary_bounds(Some(150_000), Some(100_000)).is_err());
    }

    #[test]
    fn test_work_preference_variants_parse() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"work_preference": "remote"}"#).unwrap();
        assert_eq!(request.work_preference, Some(WorkPreference::Remote));

        assert!(serde_json::from_str::<UpdateProfileRequest>(
            r#"{"work_preference": "freelance"}"#
        )
        .is_err());
    }
}
