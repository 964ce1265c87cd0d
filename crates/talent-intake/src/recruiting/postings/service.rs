use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{
    JobPosting, JobPostingId, NewJobPosting, PostingStatus, PostingUpdate, StoredQuestionList,
};
use super::qualification::{QualificationConfig, QualificationError};
use super::repository::{PostingRepository, RepositoryError};

/// Service enforcing the qualification rules and the single-active invariant
/// on top of a posting repository.
pub struct JobPostingService<R> {
    repository: Arc<R>,
}

static POSTING_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_posting_id() -> JobPostingId {
    let id = POSTING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    JobPostingId(format!("job-{id:06}"))
}

impl<R> JobPostingService<R>
where
    R: PostingRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a posting. New postings always start inactive; activation is a
    /// separate explicit action.
    pub fn create(&self, input: NewJobPosting) -> Result<JobPosting, PostingServiceError> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(PostingServiceError::BlankTitle);
        }

        let config =
            QualificationConfig::validate(&input.questions, input.minimum_correct_answers)?;
        let (questions, minimum_correct_answers) = config.into_parts();

        let posting = JobPosting {
            id: next_posting_id(),
            title,
            description: input.description,
            questions: StoredQuestionList::Structured(questions),
            minimum_correct_answers,
            status: PostingStatus::Inactive,
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(posting)?;
        info!(posting = %stored.id.0, title = %stored.title, "job posting created");
        Ok(stored)
    }

    /// Apply a partial update. The merged posting is re-validated before the
    /// write, so a failure leaves the stored record untouched.
    ///
    /// When the question list changes and the caller did not submit a new
    /// threshold, the stored threshold is clamped back into range instead of
    /// failing the edit.
    pub fn update(
        &self,
        id: &JobPostingId,
        update: PostingUpdate,
    ) -> Result<JobPosting, PostingServiceError> {
        let mut posting = self
            .repository
            .fetch(id)?
            .ok_or(PostingServiceError::NotFound)?;

        if let Some(title) = update.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(PostingServiceError::BlankTitle);
            }
            posting.title = title;
        }

        if let Some(description) = update.description {
            posting.description = Some(description);
        }

        if update.questions.is_some() || update.minimum_correct_answers.is_some() {
            let raw = update
                .questions
                .unwrap_or_else(|| posting.question_pairs());
            let threshold = match update.minimum_correct_answers {
                Some(value) => Some(value),
                None => QualificationConfig::clamp_threshold(
                    QualificationConfig::complete_count(&raw),
                    posting.minimum_correct_answers.unwrap_or(0),
                ),
            };

            let config = QualificationConfig::validate(&raw, threshold)?;
            let (questions, minimum_correct_answers) = config.into_parts();
            posting.questions = StoredQuestionList::Structured(questions);
            posting.minimum_correct_answers = minimum_correct_answers;
        }

        self.repository.update(posting.clone())?;
        Ok(posting)
    }

    /// Flip a posting between active and inactive. Activation goes through
    /// the repository's conditional primitive; a conflict means another
    /// posting already holds the active slot and must be deactivated first.
    pub fn toggle_status(&self, id: &JobPostingId) -> Result<JobPosting, PostingServiceError> {
        let posting = self
            .repository
            .fetch(id)?
            .ok_or(PostingServiceError::NotFound)?;

        match posting.status {
            PostingStatus::Active => {
                self.repository.deactivate(id)?;
                info!(posting = %id.0, "job posting deactivated");
            }
            PostingStatus::Inactive => {
                self.repository.activate(id).map_err(|error| match error {
                    RepositoryError::Conflict => PostingServiceError::ActiveConflict,
                    other => PostingServiceError::from(other),
                })?;
                info!(posting = %id.0, "job posting activated");
            }
        }

        self.repository
            .fetch(id)?
            .ok_or(PostingServiceError::NotFound)
    }

    /// Unconditional, irreversible delete. Does not cascade to candidates.
    pub fn delete(&self, id: &JobPostingId) -> Result<(), PostingServiceError> {
        self.repository.delete(id)?;
        info!(posting = %id.0, "job posting deleted");
        Ok(())
    }

    /// All postings, newest first.
    pub fn list(&self) -> Result<Vec<JobPosting>, PostingServiceError> {
        Ok(self.repository.list()?)
    }
}

/// Error raised by the posting service.
#[derive(Debug, thiserror::Error)]
pub enum PostingServiceError {
    #[error("posting title must not be blank")]
    BlankTitle,
    #[error(transparent)]
    Validation(#[from] QualificationError),
    #[error("another posting is already active; deactivate it first")]
    ActiveConflict,
    #[error("posting not found")]
    NotFound,
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for PostingServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => Self::NotFound,
            other => Self::Repository(other),
        }
    }
}

impl PostingServiceError {
    /// Machine-readable reason code for client-correctable failures.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            PostingServiceError::BlankTitle => Some("blank-title"),
            PostingServiceError::Validation(inner) => Some(inner.code()),
            _ => None,
        }
    }
}
