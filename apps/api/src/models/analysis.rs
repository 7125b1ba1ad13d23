use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Fabricated match scores for a resume against a job.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AnalysisScores {
    pub overall_match: u32,
    pub key_skills_match: u32,
    pub experience_match: u32,
    pub education_match: u32,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub recommendation: String,
    pub confidence_score: u32,
}

/// Result of `POST /review-resume`. Built per call and never stored.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResumeAnalysis {
    pub analysis_id: Uuid,
    pub job_id: String,
    pub job_title: String,
    pub filename: String,
    /// Local time, ISO-8601 without offset.
    pub upload_timestamp: String,
    pub analysis: AnalysisScores,
    pub status: String,
}

/// Abbreviated scores carried by the by-id lookup.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AnalysisHeadline {
    pub overall_match: u32,
    pub recommendation: String,
}

/// Result of `GET /review-resume/{analysis_id}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalysisSummary {
    pub analysis_id: String,
    pub status: String,
    pub analysis: AnalysisHeadline,
}
