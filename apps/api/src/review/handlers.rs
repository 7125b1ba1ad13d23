//! Axum route handlers for the resume review API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::analysis::{AnalysisSummary, ResumeAnalysis};
use crate::review::reviewer::canned_summary;
use crate::review::upload::{has_accepted_extension, read_upload};
use crate::state::AppState;

/// POST /review-resume
///
/// Checks the filename extension first, then the job id, then asks the
/// reviewer for an analysis. The file body is never read.
#[utoipa::path(
    post,
    path = "/review-resume",
    tag = "review",
    request_body(content = crate::review::upload::ResumeUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Fabricated analysis", body = ResumeAnalysis),
        (status = 400, description = "Invalid file type", body = crate::errors::ErrorBody),
        (status = 404, description = "Unknown job id", body = crate::errors::ErrorBody),
        (status = 413, description = "Upload larger than the body limit", body = crate::errors::ErrorBody),
        (status = 422, description = "Missing form field", body = crate::errors::ErrorBody)
    )
)]
pub async fn review_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let upload = read_upload(multipart).await?;

    if !has_accepted_extension(&upload.filename) {
        warn!(filename = %upload.filename, "Rejected resume upload: unsupported extension");
        return Err(AppError::Validation("Invalid file type".to_string()));
    }

    let job = state.jobs.find(&upload.job_id).ok_or_else(|| {
        warn!(job_id = %upload.job_id, "Rejected resume upload: unknown job");
        AppError::NotFound("Job not found".to_string())
    })?;

    let analysis = state.reviewer.review(job, &upload).await?;
    info!(
        analysis_id = %analysis.analysis_id,
        job_id = %analysis.job_id,
        filename = %analysis.filename,
        "Resume reviewed"
    );

    Ok(Json(analysis))
}

/// GET /review-resume/:analysis_id
///
/// Always the same generic payload; nothing from an earlier review is looked up.
#[utoipa::path(
    get,
    path = "/review-resume/{analysis_id}",
    tag = "review",
    params(("analysis_id" = String, Path, description = "Any analysis id")),
    responses((status = 200, description = "Generic analysis summary", body = AnalysisSummary))
)]
pub async fn get_analysis(Path(analysis_id): Path<String>) -> Json<AnalysisSummary> {
    Json(canned_summary(analysis_id))
}
