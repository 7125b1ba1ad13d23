use axum::{response::Html, Json};
use utoipa::OpenApi;

use crate::errors::ErrorBody;
use crate::jobs::handlers as jobs;
use crate::models::analysis::{AnalysisHeadline, AnalysisScores, AnalysisSummary, ResumeAnalysis};
use crate::models::job::{Job, JobList};
use crate::review::handlers as review;
use crate::review::upload::ResumeUploadForm;
use crate::routes::health::{self, EndpointMap, HealthStatus, ServiceDescriptor};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "OpenHire Mock Backend",
        version = "1.0.0",
        description = "Mock backend for testing the OpenHire frontend"
    ),
    paths(
        health::root_handler,
        health::health_handler,
        jobs::list_jobs,
        jobs::get_job,
        review::review_resume,
        review::get_analysis
    ),
    components(schemas(
        ServiceDescriptor,
        EndpointMap,
        HealthStatus,
        Job,
        JobList,
        ResumeUploadForm,
        ResumeAnalysis,
        AnalysisScores,
        AnalysisSummary,
        AnalysisHeadline,
        ErrorBody
    ))
)]
pub struct ApiDoc;

pub const OPENAPI_PATH: &str = "/openapi.json";

/// Swagger UI shell; the bundle comes from a CDN and reads `OPENAPI_PATH`.
const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>OpenHire Mock Backend - Swagger UI</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "{openapi_path}", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// GET /openapi.json
/// OpenAPI document for every route.
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /docs
/// Interactive docs page for humans.
pub async fn docs_handler() -> Html<String> {
    Html(SWAGGER_UI_PAGE.replace("{openapi_path}", OPENAPI_PATH))
}
