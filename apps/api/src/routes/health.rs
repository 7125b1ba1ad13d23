use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::timestamp::local_iso8601;

pub const SERVICE_NAME: &str = "openhire-mock-backend";

#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointMap {
    pub health: String,
    pub jobs: String,
    pub review_resume: String,
    pub docs: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceDescriptor {
    pub message: String,
    pub version: String,
    pub status: String,
    pub endpoints: EndpointMap,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

/// GET /
/// Names the service and where its endpoints live.
#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses((status = 200, description = "Service descriptor", body = ServiceDescriptor))
)]
pub async fn root_handler() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        message: "OpenHire Mock Backend".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
        endpoints: EndpointMap {
            health: "/health".to_string(),
            jobs: "/jobs".to_string(),
            review_resume: "/review-resume".to_string(),
            docs: "/docs".to_string(),
        },
    })
}

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "service",
    responses((status = 200, description = "Service is up", body = HealthStatus))
)]
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: local_iso8601(),
        service: SERVICE_NAME.to_string(),
    })
}
