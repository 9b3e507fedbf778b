pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use crate::ai;
use crate::auth::require_auth;
use crate::interactions;
use crate::profile;
use crate::resumes;
use crate::search;
use crate::state::AppState;

/// 10 MB uploads plus multipart framing overhead.
const BODY_LIMIT_BYTES: usize = 12 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/api/v1/profile",
            get(profile::handlers::handle_get_profile).put(profile::handlers::handle_update_profile),
        )
        .route(
            "/api/v1/resumes",
            post(resumes::handlers::handle_upload).get(resumes::handlers::handle_list_resumes),
        )
        .route("/api/v1/resumes/:id", get(resumes::handlers::handle_get_resume))
        .route("/api/v1/jobs/search", post(search::handlers::handle_search))
        .route(
            "/api/v1/jobs/interactions",
            post(interactions::handlers::handle_interaction),
        )
        .route("/api/v1/ai/match", post(ai::handlers::handle_match))
        .route(
            "/api/v1/ai/recommendations",
            post(ai::handlers::handle_recommendations),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(health::health_handler))
        .merge(api)
        .with_state(state)
}
