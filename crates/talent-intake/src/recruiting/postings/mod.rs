//! Job posting management: qualification authoring, status lifecycle, and the
//! storage contract consumed by the intake pipeline.

pub mod domain;
pub mod qualification;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    JobPosting, JobPostingId, NewJobPosting, PostingStatus, PostingUpdate, QuestionPair,
    StoredQuestionList,
};
pub use qualification::{QualificationConfig, QualificationError};
pub use repository::{PostingRepository, RepositoryError};
pub use router::posting_router;
pub use service::{JobPostingService, PostingServiceError};
