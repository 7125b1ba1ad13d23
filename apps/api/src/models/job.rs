use serde::Serialize;
use utoipa::ToSchema;

/// A fictitious job posting served to the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub location: String,
    pub salary_range: String,
}

/// Response of `GET /jobs`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JobList {
    pub jobs: Vec<Job>,
    pub total: usize,
}
