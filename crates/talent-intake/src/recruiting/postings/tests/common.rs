use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::recruiting::postings::domain::{
    JobPosting, JobPostingId, NewJobPosting, PostingStatus, QuestionPair, StoredQuestionList,
};
use crate::recruiting::postings::repository::{PostingRepository, RepositoryError};
use crate::recruiting::postings::service::JobPostingService;

pub(super) fn sales_questions() -> Vec<QuestionPair> {
    vec![
        QuestionPair::new("Tem 5 anos de experiência em vendas?", ">= 5 anos"),
        QuestionPair::new("Já liderou equipe comercial?", "sim, qualquer tamanho"),
    ]
}

pub(super) fn new_posting(title: &str) -> NewJobPosting {
    NewJobPosting {
        title: title.to_string(),
        description: Some("Atuação híbrida em São Paulo".to_string()),
        questions: sales_questions(),
        minimum_correct_answers: Some(2),
    }
}

pub(super) fn legacy_posting(id: &str, title: &str) -> JobPosting {
    JobPosting {
        id: JobPostingId(id.to_string()),
        title: title.to_string(),
        description: None,
        questions: StoredQuestionList::Legacy(vec!["Pergunta sem critério".to_string()]),
        minimum_correct_answers: None,
        status: PostingStatus::Inactive,
        created_at: Utc::now(),
    }
}

pub(super) fn build_service() -> (Arc<JobPostingService<MemoryPostings>>, Arc<MemoryPostings>) {
    let repository = Arc::new(MemoryPostings::default());
    let service = Arc::new(JobPostingService::new(repository.clone()));
    (service, repository)
}

/// In-memory posting store. `activate` performs the check-and-set under a
/// single lock so the single-active invariant holds under concurrency.
#[derive(Default, Clone)]
pub(super) struct MemoryPostings {
    postings: Arc<Mutex<Vec<JobPosting>>>,
}

impl PostingRepository for MemoryPostings {
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
        Ok(guard.iter().rev().find(|stored| stored.title == title).cloned())
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

pub(super) struct UnavailablePostings;

impl PostingRepository for UnavailablePostings {
    fn insert(&self, _posting: JobPosting) -> Result<JobPosting, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _posting: JobPosting) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &JobPostingId) -> Result<Option<JobPosting>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _id: &JobPostingId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_title(&self, _title: &str) -> Result<Option<JobPosting>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn activate(&self, _id: &JobPostingId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn deactivate(&self, _id: &JobPostingId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
