// Job catalog: the fixed set of postings and the read-only routes over it.

pub mod catalog;
pub mod handlers;

pub use catalog::JobCatalog;
