pub mod docs;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::jobs::handlers as jobs;
use crate::review::handlers as review;
use crate::review::upload::MAX_UPLOAD_BYTES;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/docs", get(docs::docs_handler))
        .route(docs::OPENAPI_PATH, get(docs::openapi_handler))
        .route("/jobs", get(jobs::list_jobs))
        .route("/jobs/:job_id", get(jobs::get_job))
        .route(
            "/review-resume",
            post(review::review_resume).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/review-resume/:analysis_id", get(review::get_analysis))
        .with_state(state)
}

/// CORS for the front-end dev servers: listed origins only, credentials allowed.
/// Methods and headers are mirrored from the request, since a wildcard cannot
/// be combined with credentials.
pub fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.iter().cloned()))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
