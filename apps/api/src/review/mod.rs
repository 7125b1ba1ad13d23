// Resume review: multipart intake, the reviewer seam, and the review routes.
// Uploaded file contents are never read or stored.

pub mod handlers;
pub mod reviewer;
pub mod upload;
