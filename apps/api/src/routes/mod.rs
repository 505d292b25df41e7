pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::profile::handlers as profile;
use crate::resume::handlers as resume;
use crate::skills::handlers as skills;
use crate::state::AppState;
use crate::subscribers::handlers as subscribers;
use crate::text::handlers as text;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Core utilities
        .route("/api/v1/text/normalize", post(text::handle_normalize))
        .route("/api/v1/skills/match", post(skills::handle_match))
        // Resume API
        .route(
            "/api/v1/resumes/parse",
            post(resume::handle_parse_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/resumes/ask", post(resume::handle_ask))
        // Profile API
        .route("/api/v1/profiles", post(profile::handle_create_profile))
        .route("/api/v1/profiles/paste", post(profile::handle_paste_profile))
        .route(
            "/api/v1/profiles/:id",
            get(profile::handle_get_profile).delete(profile::handle_delete_profile),
        )
        .route(
            "/api/v1/profiles/:id/analysis",
            post(profile::handle_analyze_section),
        )
        // Newsletter
        .route("/api/v1/subscribers", post(subscribers::handle_subscribe))
        .with_state(state)
}
