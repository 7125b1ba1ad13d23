use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::job::{Job, JobList};
use crate::state::AppState;

/// GET /jobs
#[utoipa::path(
    get,
    path = "/jobs",
    tag = "jobs",
    responses((status = 200, description = "Every job, in seed order", body = JobList))
)]
pub async fn list_jobs(State(state): State<AppState>) -> Json<JobList> {
    let jobs = state.jobs.all().to_vec();
    Json(JobList {
        total: jobs.len(),
        jobs,
    })
}

/// GET /jobs/:job_id
#[utoipa::path(
    get,
    path = "/jobs/{job_id}",
    tag = "jobs",
    params(("job_id" = String, Path, description = "Job id, e.g. job_1")),
    responses(
        (status = 200, description = "The job", body = Job),
        (status = 404, description = "Unknown job id", body = crate::errors::ErrorBody)
    )
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Job>, AppError> {
    state
        .jobs
        .find(&job_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))
}
