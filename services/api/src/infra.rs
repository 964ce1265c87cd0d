use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use talent_intake::recruiting::intake::{Candidate, CandidateRepository};
use talent_intake::recruiting::postings::{
    JobPosting, JobPostingId, PostingRepository, PostingStatus, RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory posting store backing the service until a relational adapter
/// lands. `activate` performs its check and write under one lock, which is
/// what keeps the single-active invariant closed under concurrent
/// administrators; a SQL adapter would use a partial unique index on the
/// active status instead.
#[derive(Default, Clone)]
pub(crate) struct InMemoryPostingRepository {
    postings: Arc<Mutex<Vec<JobPosting>>>,
}

impl PostingRepository for InMemoryPostingRepository {
    fn insert(&self, posting: JobPosting) -> Result<JobPosting, RepositoryError> {
        let mut guard = self.postings.lock().expect("posting mutex poisoned");
        if guard.iter().any(|stored| stored.id == posting.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(posting.clone());
        Ok(posting)
    }

    fn update(&self, posting: JobPosting) -> Result<(), RepositoryError> {
        let mut guard = self.postings.lock().expect("posting mutex poisoned");
        match guard.iter_mut().find(|stored| stored.id == posting.id) {
            Some(stored) => {
                *stored = posting;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &JobPostingId) -> Result<Option<JobPosting>, RepositoryError> {
        let guard = self.postings.lock().expect("posting mutex poisoned");
        Ok(guard.iter().find(|stored| &stored.id == id).cloned())
    }

    fn delete(&self, id: &JobPostingId) -> Result<(), RepositoryError> {
        let mut guard = self.postings.lock().expect("posting mutex poisoned");
        let before = guard.len();
        guard.retain(|stored| &stored.id != id);
        if guard.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        let guard = self.postings.lock().expect("posting mutex poisoned");
        Ok(guard.iter().rev().cloned().collect())
    }

    fn find_by_title(&self, title: &str) -> Result<Option<JobPosting>, RepositoryError> {
        let guard = self.postings.lock().expect("posting mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .find(|stored| stored.title == title)
            .cloned())
    }

    fn activate(&self, id: &JobPostingId) -> Result<(), RepositoryError> {
        let mut guard = self.postings.lock().expect("posting mutex poisoned");
        if guard
            .iter()
            .any(|stored| stored.is_active() && &stored.id != id)
        {
            return Err(RepositoryError::Conflict);
        }
        match guard.iter_mut().find(|stored| &stored.id == id) {
            Some(stored) => {
                stored.status = PostingStatus::Active;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn deactivate(&self, id: &JobPostingId) -> Result<(), RepositoryError> {
        let mut guard = self.postings.lock().expect("posting mutex poisoned");
        match guard.iter_mut().find(|stored| &stored.id == id) {
            Some(stored) => {
                stored.status = PostingStatus::Inactive;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}

/// Append-only candidate log; intake never updates or deletes.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCandidateRepository {
    records: Arc<Mutex<Vec<Candidate>>>,
}

impl CandidateRepository for InMemoryCandidateRepository {
    fn insert(&self, candidate: Candidate) -> Result<Candidate, RepositoryError> {
        let mut guard = self.records.lock().expect("candidate mutex poisoned");
        guard.push(candidate.clone());
        Ok(candidate)
    }

    fn list(&self) -> Result<Vec<Candidate>, RepositoryError> {
        let guard = self.records.lock().expect("candidate mutex poisoned");
        Ok(guard.iter().rev().cloned().collect())
    }
}
