//! Multipart intake for `POST /review-resume`.

use axum::extract::Multipart;
use utoipa::ToSchema;

use crate::errors::AppError;

/// Filename suffixes accepted for a resume upload. Matching is case-sensitive.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = [".pdf", ".docx", ".doc", ".txt"];

/// Upper bound on the request body of a resume upload. Larger bodies get a 413.
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// The parts of an upload the mock cares about. The file body is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    pub job_id: String,
    pub filename: String,
}

/// OpenAPI shape of the multipart form.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct ResumeUploadForm {
    pub job_id: String,
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

pub fn has_accepted_extension(filename: &str) -> bool {
    ACCEPTED_EXTENSIONS
        .iter()
        .any(|extension| filename.ends_with(extension))
}

/// Walks the form and collects `job_id` and the file part's filename.
///
/// Fields may come in any order and unknown fields are ignored. A missing
/// field, or a `file` part sent without a filename, is a 422.
pub async fn read_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut job_id = None;
    let mut filename = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("job_id") => job_id = Some(field.text().await?),
            Some("file") => {
                let name = field.file_name().map(str::to_owned).ok_or_else(|| {
                    AppError::UnprocessableEntity("Field 'file' must be a file upload".to_string())
                })?;
                filename = Some(name);
            }
            _ => {}
        }
    }

    match (job_id, filename) {
        (Some(job_id), Some(filename)) => Ok(ResumeUpload { job_id, filename }),
        (None, _) => Err(missing_field("job_id")),
        (_, None) => Err(missing_field("file")),
    }
}

fn missing_field(name: &str) -> AppError {
    AppError::UnprocessableEntity(format!("Field required: {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_extensions() {
        for name in ["resume.pdf", "resume.docx", "resume.doc", "notes.txt", "a.b.pdf"] {
            assert!(has_accepted_extension(name), "{name} should be accepted");
        }
    }

    #[test]
    fn test_rejected_extensions() {
        for name in ["resume.exe", "resume", "resume.PDF", "resume.pdf.zip", "pdf", ""] {
            assert!(!has_accepted_extension(name), "{name} should be rejected");
        }
    }

    #[test]
    fn test_bare_suffix_counts_as_match() {
        // Suffix match only; there is no requirement for a stem.
        assert!(has_accepted_extension(".txt"));
    }
}
