use std::sync::Arc;

use crate::jobs::JobCatalog;
use crate::review::reviewer::ResumeReviewer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<JobCatalog>,
    /// Pluggable reviewer. Default: MockReviewer.
    pub reviewer: Arc<dyn ResumeReviewer>,
}
