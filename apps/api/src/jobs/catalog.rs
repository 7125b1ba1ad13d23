//! In-memory job catalog, seeded once at startup and never written afterwards.

use crate::models::job::Job;

/// Immutable, ordered collection of job postings.
///
/// Shared across handlers as `Arc<JobCatalog>`; there is no write path, so
/// readers need no synchronization.
#[derive(Debug, Clone)]
pub struct JobCatalog {
    jobs: Vec<Job>,
}

impl JobCatalog {
    /// The two postings the front-end is developed against.
    pub fn seeded() -> Self {
        JobCatalog {
            jobs: vec![
                posting(
                    "job_1",
                    "Senior Software Engineer",
                    "TechCorp",
                    "Looking for an experienced software engineer...",
                    &["Python", "JavaScript", "React", "Node.js"],
                    "Remote",
                    "$80,000 - $120,000",
                ),
                posting(
                    "job_2",
                    "Data Scientist",
                    "DataInc",
                    "Seeking a data scientist to join our team...",
                    &["Python", "Machine Learning", "SQL", "Statistics"],
                    "New York",
                    "$90,000 - $130,000",
                ),
            ],
        }
    }

    pub fn all(&self) -> &[Job] {
        &self.jobs
    }

    /// Linear search by id.
    pub fn find(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }
}

fn posting(
    id: &str,
    title: &str,
    company: &str,
    description: &str,
    requirements: &[&str],
    location: &str,
    salary_range: &str,
) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        description: description.to_string(),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        location: location.to_string(),
        salary_range: salary_range.to_string(),
    }
}
