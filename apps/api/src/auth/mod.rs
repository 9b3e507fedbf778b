//! Bearer-token authentication against the hosted auth service.
//!
//! Session issuance and login screens live in the hosted service; this
//! module only verifies tokens and attaches the resolved user to requests.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

/// The authenticated user resolved from a bearer token.
/// Inserted into request extensions by `require_auth`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

/// Thin client for the hosted auth service's user-info endpoint.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AuthClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            api_key,
        }
    }

    /// Resolves a bearer token to a user by asking the auth service.
    /// Any non-2xx answer (expired, revoked, malformed) is `Unauthorized`.
    pub async fn verify_token(&self, token: &str) -> Result<AuthUser, AppError> {
        let url = format!("{}/auth/v1/user", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header("apikey", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Auth service unreachable: {e}");
                AppError::Unauthorized
            })?;

        if !response.status().is_success() {
            return Err(AppError::Unauthorized);
        }

        response.json::<AuthUser>().await.map_err(|e| {
            tracing::warn!("Auth service returned malformed user object: {e}");
            AppError::Unauthorized
        })
    }
}

/// Axum middleware: requires a valid `Authorization: Bearer <token>` header
/// and inserts the resolved `AuthUser` into request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request).ok_or(AppError::Unauthorized)?;

    let user = state.auth.verify_token(&token).await?;
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<String> {
    let header = request.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with_auth(value: &str) -> Request {
        axum::http::Request::builder()
            .header(AUTHORIZATION, value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_bearer_token_extracted() {
        let req = request_with_auth("Bearer abc123");
        assert_eq!(bearer_token(&req), Some("abc123".to_string()));
    }

    #[test]
    fn test_bearer_token_missing_scheme() {
        let req = request_with_auth("abc123");
        assert_eq!(bearer_token(&req), None);
    }

    #[test]
    fn test_bearer_token_empty_value() {
        let req = request_with_auth("Bearer   ");
        assert_eq!(bearer_token(&req), None);
    }

    #[test]
    fn test_bearer_token_no_header() {
        let req = axum::http::Request::builder().body(Body::empty()).unwrap();
        assert_eq!(bearer_token(&req), None);
    }
}
