use super::domain::{JobPosting, JobPostingId};

/// Storage abstraction so the posting service can be exercised in isolation.
///
/// The backing store is expected to be an ACID relational engine; the
/// in-memory adapter shipped with the API service satisfies the same
/// contract for tests and demos.
pub trait PostingRepository: Send + Sync {
    fn insert(&self, posting: JobPosting) -> Result<JobPosting, RepositoryError>;
    fn update(&self, posting: JobPosting) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &JobPostingId) -> Result<Option<JobPosting>, RepositoryError>;
    /// Unconditional delete. Existing candidate records keep their dangling
    /// reference plus the title snapshot.
    fn delete(&self, id: &JobPostingId) -> Result<(), RepositoryError>;
    /// All postings, newest first.
    fn list(&self) -> Result<Vec<JobPosting>, RepositoryError>;
    /// Exact-match title lookup used by intake resolution. When several
    /// postings share a title the first match in listing order wins.
    fn find_by_title(&self, title: &str) -> Result<Option<JobPosting>, RepositoryError>;
    /// Conditional activation: flips the posting to active only while no
    /// other posting is active. Implementations must perform the check and
    /// the write as one atomic step and fail with `Conflict` otherwise.
    fn activate(&self, id: &JobPostingId) -> Result<(), RepositoryError>;
    fn deactivate(&self, id: &JobPostingId) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("conflicting record state")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
