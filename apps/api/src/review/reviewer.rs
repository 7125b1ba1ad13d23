//! Resume reviewer — trait-based backend that turns an upload into an analysis.
//!
//! Default and only backend: `MockReviewer`, which fabricates fixed scores.
//! `AppState` holds an `Arc<dyn ResumeReviewer>`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::{AnalysisHeadline, AnalysisScores, AnalysisSummary, ResumeAnalysis};
use crate::models::job::Job;
use crate::review::upload::ResumeUpload;
use crate::timestamp::local_iso8601;

pub const OVERALL_MATCH: u32 = 78;
pub const KEY_SKILLS_MATCH: u32 = 82;
pub const EXPERIENCE_MATCH: u32 = 75;
pub const EDUCATION_MATCH: u32 = 80;
pub const CONFIDENCE_SCORE: u32 = 85;
pub const RECOMMENDATION: &str = "Strong candidate - proceed to interview";
pub const STATUS_COMPLETED: &str = "completed";

const STRENGTHS: [&str; 3] = [
    "Strong technical background in required technologies",
    "Relevant work experience in similar roles",
    "Good communication skills",
];

const AREAS_FOR_IMPROVEMENT: [&str; 2] = [
    "Could benefit from more experience with specific frameworks",
    "Consider highlighting leadership experience",
];

/// Implement this to swap the analysis backend without touching the handlers.
#[async_trait]
pub trait ResumeReviewer: Send + Sync {
    async fn review(&self, job: &Job, upload: &ResumeUpload) -> Result<ResumeAnalysis, AppError>;
}

/// Returns constant scores. Only `analysis_id` and `upload_timestamp` vary per call.
pub struct MockReviewer;

#[async_trait]
impl ResumeReviewer for MockReviewer {
    async fn review(&self, job: &Job, upload: &ResumeUpload) -> Result<ResumeAnalysis, AppError> {
        Ok(ResumeAnalysis {
            analysis_id: Uuid::new_v4(),
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            filename: upload.filename.clone(),
            upload_timestamp: local_iso8601(),
            analysis: mock_scores(),
            status: STATUS_COMPLETED.to_string(),
        })
    }
}

fn mock_scores() -> AnalysisScores {
    AnalysisScores {
        overall_match: OVERALL_MATCH,
        key_skills_match: KEY_SKILLS_MATCH,
        experience_match: EXPERIENCE_MATCH,
        education_match: EDUCATION_MATCH,
        strengths: STRENGTHS.iter().map(|s| s.to_string()).collect(),
        areas_for_improvement: AREAS_FOR_IMPROVEMENT.iter().map(|s| s.to_string()).collect(),
        recommendation: RECOMMENDATION.to_string(),
        confidence_score: CONFIDENCE_SCORE,
    }
}

/// Generic payload for a by-id lookup. Analyses are never stored, so this
/// does not reflect what any earlier review produced.
pub fn canned_summary(analysis_id: String) -> AnalysisSummary {
    AnalysisSummary {
        analysis_id,
        status: STATUS_COMPLETED.to_string(),
        analysis: AnalysisHeadline {
            overall_match: OVERALL_MATCH,
            recommendation: RECOMMENDATION.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::JobCatalog;

    fn upload(job_id: &str, filename: &str) -> ResumeUpload {
        ResumeUpload {
            job_id: job_id.to_string(),
            filename: filename.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_review_copies_job_and_upload() {
        let catalog = JobCatalog::seeded();
        let job = catalog.find("job_1").unwrap();

        let analysis = MockReviewer
            .review(job, &upload("job_1", "resume.pdf"))
            .await
            .unwrap();

        assert_eq!(analysis.job_id, "job_1");
        assert_eq!(analysis.job_title, "Senior Software Engineer");
        assert_eq!(analysis.filename, "resume.pdf");
        assert_eq!(analysis.status, "completed");
        assert_eq!(analysis.analysis.overall_match, 78);
        assert_eq!(analysis.analysis.key_skills_match, 82);
        assert_eq!(analysis.analysis.experience_match, 75);
        assert_eq!(analysis.analysis.education_match, 80);
        assert_eq!(analysis.analysis.confidence_score, 85);
        assert_eq!(analysis.analysis.strengths.len(), 3);
        assert_eq!(analysis.analysis.areas_for_improvement.len(), 2);
    }

    #[tokio::test]
    async fn test_repeated_reviews_get_fresh_ids_and_same_scores() {
        let catalog = JobCatalog::seeded();
        let job = catalog.find("job_2").unwrap();
        let input = upload("job_2", "cv.docx");

        let first = MockReviewer.review(job, &input).await.unwrap();
        let second = MockReviewer.review(job, &input).await.unwrap();

        assert_ne!(first.analysis_id, second.analysis_id);
        assert_eq!(first.analysis, second.analysis);
    }

    #[test]
    fn test_canned_summary_echoes_id() {
        let summary = canned_summary("never-issued".to_string());
        assert_eq!(summary.analysis_id, "never-issued");
        assert_eq!(summary.status, "completed");
        assert_eq!(summary.analysis.overall_match, 78);
        assert_eq!(summary.analysis.recommendation, RECOMMENDATION);
    }
}
